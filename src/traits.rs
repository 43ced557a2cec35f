//! Core traits for data transformers.
//!
//! These traits define the API contracts shared across the crate.

use crate::error::Result;
use crate::primitives::Matrix;

/// Trait for data transformers (scalers, encoders, etc.).
///
/// Transformers learn parameters from one dataset snapshot in `fit` and
/// apply them in `transform`. Fitted parameters never outlive the snapshot
/// they were derived from: the analysis pipeline refits per run.
///
/// # Examples
///
/// ```
/// use plinko::preprocessing::MinMaxScaler;
/// use plinko::primitives::Matrix;
/// use plinko::traits::Transformer;
///
/// let x = Matrix::from_vec(3, 1, vec![2.0, 4.0, 6.0]).unwrap();
/// let mut scaler = MinMaxScaler::new();
/// let scaled = scaler.fit_transform(&x).unwrap();
/// assert!((scaled.get(1, 0) - 0.5).abs() < 1e-6);
/// ```
pub trait Transformer {
    /// Fits the transformer to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer is not fitted or dimensions
    /// mismatch.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>>;

    /// Fits to data, then transforms it.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting or transforming fails.
    fn fit_transform(&mut self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        self.fit(x)?;
        self.transform(x)
    }
}
