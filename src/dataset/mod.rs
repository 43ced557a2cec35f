//! Observation store for recorded drop experiments.
//!
//! The external simulation reports one observation per ball drop: the
//! recorded feature values plus the bucket the ball landed in. The store is
//! an explicit container owned by the analysis session (not process-global
//! state), append-only during a session, and read by the analysis runner
//! through cloned snapshots so repeated runs observe consistent data.

use crate::error::{PlinkoError, Result};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// Number of features recorded per drop: position, bounciness, ball size.
pub const NUM_FEATURES: usize = 3;

/// Accumulated labeled observations with a fixed feature arity.
///
/// Features are stored row-major with a parallel label vector; every row
/// has the same arity and feature ordering.
///
/// # Examples
///
/// ```
/// use plinko::dataset::Dataset;
///
/// let mut data = Dataset::new(3);
/// data.record(&[0.5, 0.4, 16.0], 2).unwrap();
/// data.record(&[0.7, 0.4, 16.0], 3).unwrap();
/// assert_eq!(data.len(), 2);
/// assert_eq!(data.label(1), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    n_features: usize,
    features: Vec<f32>,
    labels: Vec<usize>,
}

impl Dataset {
    /// Creates an empty dataset for observations of the given arity.
    #[must_use]
    pub fn new(n_features: usize) -> Self {
        Self {
            n_features,
            features: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Appends one labeled observation.
    ///
    /// This is the ingestion hook the external producer calls once per
    /// simulated event.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the feature arity differs from the
    /// dataset's.
    pub fn record(&mut self, features: &[f32], label: usize) -> Result<()> {
        if features.len() != self.n_features {
            return Err(PlinkoError::dimension_mismatch(
                "n_features",
                self.n_features,
                features.len(),
            ));
        }
        self.features.extend_from_slice(features);
        self.labels.push(label);
        Ok(())
    }

    /// Returns the number of recorded observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if no observations have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the feature arity.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Returns the features of observation `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn features(&self, i: usize) -> &[f32] {
        let start = i * self.n_features;
        &self.features[start..start + self.n_features]
    }

    /// Returns the label of observation `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn label(&self, i: usize) -> usize {
        self.labels[i]
    }

    /// Returns a cloned snapshot of all features and labels.
    ///
    /// The analysis pipeline normalizes and shuffles the snapshot, never
    /// the store itself.
    #[must_use]
    pub fn to_matrix(&self) -> (Matrix<f32>, Vec<usize>) {
        let x = Matrix::from_vec(self.len(), self.n_features, self.features.clone())
            .expect("stored features always match len * n_features");
        (x, self.labels.clone())
    }

    /// Returns a snapshot of a single feature column paired with labels.
    ///
    /// This is the per-feature analysis projection: a one-column matrix of
    /// the chosen feature.
    ///
    /// # Errors
    ///
    /// Returns an error if `feature` is not a valid feature index.
    pub fn project(&self, feature: usize) -> Result<(Matrix<f32>, Vec<usize>)> {
        if feature >= self.n_features {
            return Err(PlinkoError::invalid_hyperparameter(
                "feature",
                feature,
                &format!("< {}", self.n_features),
            ));
        }
        let column: Vec<f32> = (0..self.len())
            .map(|i| self.features[i * self.n_features + feature])
            .collect();
        let x = Matrix::from_vec(self.len(), 1, column)
            .expect("projected column always has len rows");
        Ok((x, self.labels.clone()))
    }

    /// Removes all recorded observations.
    pub fn clear(&mut self) {
        self.features.clear();
        self.labels.clear();
    }
}

#[cfg(test)]
mod tests;
