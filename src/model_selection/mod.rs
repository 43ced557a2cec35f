//! Train/test splitting for dataset snapshots.

use crate::error::{PlinkoError, Result};
use crate::primitives::Matrix;

/// Shuffles indices with optional random seed.
fn shuffle_indices(n_samples: usize, random_state: Option<u64>) -> Vec<usize> {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    let mut indices: Vec<usize> = (0..n_samples).collect();

    if let Some(seed) = random_state {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
    } else {
        let mut rng = rand::thread_rng();
        indices.shuffle(&mut rng);
    }

    indices
}

/// Extracts the rows of `x` and entries of `y` selected by `indices`.
fn extract_samples(x: &Matrix<f32>, y: &[usize], indices: &[usize]) -> (Matrix<f32>, Vec<usize>) {
    let n_features = x.shape().1;
    let mut x_data = Vec::with_capacity(indices.len() * n_features);
    let mut y_data = Vec::with_capacity(indices.len());

    for &idx in indices {
        x_data.extend_from_slice(x.row(idx));
        y_data.push(y[idx]);
    }

    let x_subset = Matrix::from_vec(indices.len(), n_features, x_data)
        .expect("selected rows always match indices.len() * n_features");

    (x_subset, y_data)
}

/// Split labeled data into random train and test subsets.
///
/// The split draws a uniform random permutation of the rows, takes
/// `test_count` rows as the held-out test set and the remainder as the
/// training set. Inputs are never mutated; together the two subsets
/// contain every input row exactly once.
///
/// # Arguments
///
/// * `x` - Feature matrix
/// * `y` - Labels, one per row of `x`
/// * `test_count` - Number of rows held out for the test set
/// * `random_state` - Optional random seed for reproducible splits
///
/// # Returns
///
/// Tuple of (`x_train`, `x_test`, `y_train`, `y_test`)
///
/// # Errors
///
/// Returns an error if `x` and `y` disagree on sample count, or if
/// `test_count` exceeds the number of samples (never silently clamped).
///
/// # Example
///
/// ```rust
/// use plinko::model_selection::train_test_split;
/// use plinko::primitives::Matrix;
///
/// let x = Matrix::from_vec(10, 2, (0..20).map(|i| i as f32).collect()).expect("valid");
/// let y: Vec<usize> = (0..10).map(|i| i % 2).collect();
///
/// let (x_train, x_test, y_train, y_test) =
///     train_test_split(&x, &y, 3, Some(42)).expect("valid split");
/// assert_eq!(x_train.n_rows(), 7);
/// assert_eq!(x_test.n_rows(), 3);
/// assert_eq!(y_train.len(), 7);
/// assert_eq!(y_test.len(), 3);
/// ```
#[allow(clippy::type_complexity)]
pub fn train_test_split(
    x: &Matrix<f32>,
    y: &[usize],
    test_count: usize,
    random_state: Option<u64>,
) -> Result<(Matrix<f32>, Matrix<f32>, Vec<usize>, Vec<usize>)> {
    let (n_samples, _) = x.shape();

    if n_samples != y.len() {
        return Err(PlinkoError::dimension_mismatch(
            "n_samples",
            n_samples,
            y.len(),
        ));
    }

    if test_count > n_samples {
        return Err(PlinkoError::invalid_hyperparameter(
            "test_count",
            test_count,
            "<= number of samples",
        ));
    }

    let indices = shuffle_indices(n_samples, random_state);
    let test_indices = &indices[..test_count];
    let train_indices = &indices[test_count..];

    let (x_train, y_train) = extract_samples(x, y, train_indices);
    let (x_test, y_test) = extract_samples(x, y, test_indices);

    Ok((x_train, x_test, y_train, y_test))
}
