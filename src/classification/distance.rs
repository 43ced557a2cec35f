//! Distance functions for feature vectors.

use crate::error::{PlinkoError, Result};

/// Euclidean distance between two feature vectors of equal length.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the vectors differ in length. Mismatched
/// arity is never silently truncated.
///
/// # Examples
///
/// ```
/// use plinko::classification::distance::euclidean;
///
/// let d = euclidean(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
/// assert!((d - 5.0).abs() < 1e-6);
/// ```
pub fn euclidean(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(PlinkoError::dimension_mismatch(
            "vector length",
            a.len(),
            b.len(),
        ));
    }
    let sum: f32 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    Ok(sum.sqrt())
}

/// Absolute difference between two scalar features.
///
/// One-dimensional counterpart of [`euclidean`] for quick scalar
/// comparisons.
#[must_use]
pub fn absolute(a: f32, b: f32) -> f32 {
    (a - b).abs()
}
