//! Data transformers for preparing dataset snapshots.
//!
//! The analysis pipeline rescales every feature column to [0,1] before
//! distances are computed, so no single feature dominates by unit alone.

use crate::error::{PlinkoError, Result};
use crate::primitives::Matrix;
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};

/// Scales features to [0, 1] per column (min-max scaling).
///
/// The transformation is: `X_scaled = (X - X_min) / (X_max - X_min)`,
/// with min and max computed independently per column during `fit`.
///
/// Fitted parameters are derived from, and applied within, a single
/// dataset snapshot; the analysis runner refits for every run. A column
/// whose min equals its max has no variance to scale and is rejected at
/// `fit` time rather than silently producing NaN.
///
/// # Example
///
/// ```
/// use plinko::preprocessing::MinMaxScaler;
/// use plinko::primitives::Matrix;
/// use plinko::traits::Transformer;
///
/// let data = Matrix::from_vec(3, 1, vec![2.0, 4.0, 6.0]).expect("valid matrix");
///
/// let mut scaler = MinMaxScaler::new();
/// let scaled = scaler.fit_transform(&data).expect("column has variance");
///
/// assert!((scaled.get(0, 0) - 0.0).abs() < 1e-6);
/// assert!((scaled.get(1, 0) - 0.5).abs() < 1e-6);
/// assert!((scaled.get(2, 0) - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MinMaxScaler {
    /// Minimum value of each feature (computed during fit).
    data_min: Option<Vec<f32>>,
    /// Maximum value of each feature (computed during fit).
    data_max: Option<Vec<f32>>,
}

impl MinMaxScaler {
    /// Creates a new `MinMaxScaler`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data_min: None,
            data_max: None,
        }
    }

    /// Returns the minimum value of each feature.
    ///
    /// # Panics
    ///
    /// Panics if the scaler is not fitted.
    #[must_use]
    pub fn data_min(&self) -> &[f32] {
        self.data_min
            .as_ref()
            .expect("Scaler not fitted. Call fit() first.")
    }

    /// Returns the maximum value of each feature.
    ///
    /// # Panics
    ///
    /// Panics if the scaler is not fitted.
    #[must_use]
    pub fn data_max(&self) -> &[f32] {
        self.data_max
            .as_ref()
            .expect("Scaler not fitted. Call fit() first.")
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.data_min.is_some()
    }
}

impl Transformer for MinMaxScaler {
    /// Computes the min and max of each feature.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty snapshot, or `ZeroVariance` if any
    /// column has `min == max`.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples == 0 {
            return Err("Cannot fit with zero samples".into());
        }

        let mut data_min = vec![f32::INFINITY; n_features];
        let mut data_max = vec![f32::NEG_INFINITY; n_features];

        for i in 0..n_samples {
            for j in 0..n_features {
                let val = x.get(i, j);
                if val < data_min[j] {
                    data_min[j] = val;
                }
                if val > data_max[j] {
                    data_max[j] = val;
                }
            }
        }

        for (j, (&min, &max)) in data_min.iter().zip(&data_max).enumerate() {
            if min == max {
                return Err(PlinkoError::ZeroVariance { column: j });
            }
        }

        self.data_min = Some(data_min);
        self.data_max = Some(data_max);

        Ok(())
    }

    /// Scales the data to [0, 1].
    ///
    /// # Errors
    ///
    /// Returns an error if the scaler is not fitted or the column count
    /// differs from the fitted data.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        let not_fitted = || PlinkoError::NotFitted {
            what: "MinMaxScaler".to_string(),
        };
        let data_min = self.data_min.as_ref().ok_or_else(not_fitted)?;
        let data_max = self.data_max.as_ref().ok_or_else(not_fitted)?;

        let (n_samples, n_features) = x.shape();
        if n_features != data_min.len() {
            return Err(PlinkoError::dimension_mismatch(
                "n_features",
                data_min.len(),
                n_features,
            ));
        }

        let mut result = vec![0.0; n_samples * n_features];

        for i in 0..n_samples {
            for j in 0..n_features {
                let val = x.get(i, j);
                result[i * n_features + j] = (val - data_min[j]) / (data_max[j] - data_min[j]);
            }
        }

        Matrix::from_vec(n_samples, n_features, result).map_err(Into::into)
    }
}
