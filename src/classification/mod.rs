//! Classification algorithms.
//!
//! Provides the k-nearest-neighbor classifier the drop analysis is built
//! around, plus the distance functions it consults.

pub mod distance;

use std::collections::HashMap;

use crate::error::{PlinkoError, Result};
use crate::primitives::Matrix;

/// K-Nearest Neighbors classifier.
///
/// Instance-based learning: `fit` stores the training data, `predict` finds
/// the k closest training points to each query and takes a majority vote
/// among their labels.
///
/// Predictions are deterministic for a fixed training-set order: neighbor
/// sorting is stable (equal distances keep training-set order) and vote
/// ties are broken by an explicit rule: smaller summed neighbor distance
/// first, then the label encountered earliest among the neighbors.
///
/// # Example
///
/// ```
/// use plinko::classification::KNearestNeighbors;
/// use plinko::primitives::Matrix;
///
/// let x = Matrix::from_vec(4, 2, vec![
///     0.0, 0.0,  // bucket 0
///     0.0, 1.0,  // bucket 0
///     5.0, 5.0,  // bucket 1
///     5.0, 6.0,  // bucket 1
/// ]).expect("4x2 matrix with 8 values");
/// let y = vec![0, 0, 1, 1];
///
/// let mut knn = KNearestNeighbors::new(1);
/// knn.fit(&x, &y).expect("valid training data");
///
/// assert_eq!(knn.predict_one(&[0.0, 0.5]).unwrap(), 0);
/// assert_eq!(knn.predict_one(&[5.0, 5.5]).unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct KNearestNeighbors {
    /// Number of neighbors consulted per vote
    k: usize,
    /// Training feature matrix (stored during fit)
    x_train: Option<Matrix<f32>>,
    /// Training labels (stored during fit)
    y_train: Option<Vec<usize>>,
}

impl KNearestNeighbors {
    /// Creates a new K-Nearest Neighbors classifier.
    ///
    /// # Arguments
    ///
    /// * `k` - Number of neighbors to use for voting
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            x_train: None,
            y_train: None,
        }
    }

    /// Returns the configured number of neighbors.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Fits the model by storing the training data.
    ///
    /// kNN is a lazy learner - it simply stores the training data and
    /// defers computation until prediction time.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty training set, mismatched x/y lengths,
    /// `k == 0`, or `k` larger than the training set.
    pub fn fit(&mut self, x: &Matrix<f32>, y: &[usize]) -> Result<()> {
        let (n_samples, _n_features) = x.shape();

        if n_samples == 0 {
            return Err("Cannot fit with zero samples".into());
        }

        if y.len() != n_samples {
            return Err(PlinkoError::dimension_mismatch(
                "n_samples",
                n_samples,
                y.len(),
            ));
        }

        if self.k == 0 {
            return Err(PlinkoError::invalid_hyperparameter("k", self.k, ">= 1"));
        }

        if self.k > n_samples {
            return Err(PlinkoError::invalid_hyperparameter(
                "k",
                self.k,
                "<= number of training samples",
            ));
        }

        self.x_train = Some(x.clone());
        self.y_train = Some(y.to_vec());

        Ok(())
    }

    /// Predicts the bucket label for a single query point.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the query arity
    /// differs from the training features.
    pub fn predict_one(&self, query: &[f32]) -> Result<usize> {
        let not_fitted = || PlinkoError::NotFitted {
            what: "KNearestNeighbors".to_string(),
        };
        let x_train = self.x_train.as_ref().ok_or_else(not_fitted)?;
        let y_train = self.y_train.as_ref().ok_or_else(not_fitted)?;

        let distances = neighbor_distances(x_train, y_train, query)?;
        let neighbors = nearest_k(distances, self.k);
        Ok(majority_label(&neighbors))
    }

    /// Predicts class labels for each row of `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or dimensions mismatch.
    pub fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        let (n_samples, _) = x.shape();
        let mut predictions = Vec::with_capacity(n_samples);
        for i in 0..n_samples {
            predictions.push(self.predict_one(x.row(i))?);
        }
        Ok(predictions)
    }
}

/// Computes the (distance, label) pair for every training point.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the query arity differs from the
/// training features.
fn neighbor_distances(
    x_train: &Matrix<f32>,
    y_train: &[usize],
    query: &[f32],
) -> Result<Vec<(f32, usize)>> {
    let mut distances = Vec::with_capacity(y_train.len());
    for (j, &label) in y_train.iter().enumerate() {
        let dist = distance::euclidean(x_train.row(j), query)?;
        distances.push((dist, label));
    }
    Ok(distances)
}

/// Sorts ascending by distance and keeps the k nearest.
///
/// The sort is stable, so equal distances keep training-set order.
fn nearest_k(mut distances: Vec<(f32, usize)>, k: usize) -> Vec<(f32, usize)> {
    distances.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .expect("distance values are valid f32 (not NaN)")
    });
    distances.truncate(k);
    distances
}

/// Tallies neighbor labels and returns the winner of the majority vote.
///
/// Ties on vote count resolve to the label with the smaller summed
/// neighbor distance, then to the label first encountered in neighbor
/// order. The per-label tally carries `(count, distance sum, first seen)`
/// so the outcome never depends on hash-map iteration order.
///
/// # Panics
///
/// Panics if `neighbors` is empty; callers guarantee `k >= 1`.
fn majority_label(neighbors: &[(f32, usize)]) -> usize {
    let mut tallies: HashMap<usize, (usize, f32, usize)> = HashMap::new();

    for (i, &(dist, label)) in neighbors.iter().enumerate() {
        let tally = tallies.entry(label).or_insert((0, 0.0, i));
        tally.0 += 1;
        tally.1 += dist;
    }

    *tallies
        .iter()
        .max_by(|(_, a), (_, b)| {
            a.0.cmp(&b.0)
                .then_with(|| b.1.total_cmp(&a.1))
                .then_with(|| b.2.cmp(&a.2))
        })
        .map(|(label, _)| label)
        .expect("neighbors slice is non-empty (k >= 1)")
}
