//! Error types for plinko analysis operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for plinko analysis operations.
///
/// Covers the precondition violations the analysis pipeline can hit:
/// dimension mismatches, invalid hyperparameters, degenerate normalization
/// ranges, and use-before-fit.
///
/// # Examples
///
/// ```
/// use plinko::error::PlinkoError;
///
/// let err = PlinkoError::DimensionMismatch {
///     expected: "3 features".to_string(),
///     actual: "2 features".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum PlinkoError {
    /// Feature/row dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A feature column has identical min and max, so min-max scaling
    /// would divide by zero. The dataset needs variance in every
    /// scaled feature.
    ZeroVariance {
        /// Zero-based index of the degenerate column
        column: usize,
    },

    /// Operation requires a fitted model/transformer.
    NotFitted {
        /// What was used before fitting
        what: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for PlinkoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlinkoError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            PlinkoError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            PlinkoError::ZeroVariance { column } => {
                write!(
                    f,
                    "Zero variance in column {column}: min == max, cannot min-max scale"
                )
            }
            PlinkoError::NotFitted { what } => {
                write!(f, "{what} is not fitted. Call fit() first")
            }
            PlinkoError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PlinkoError {}

impl From<&str> for PlinkoError {
    fn from(msg: &str) -> Self {
        PlinkoError::Other(msg.to_string())
    }
}

impl From<String> for PlinkoError {
    fn from(msg: String) -> Self {
        PlinkoError::Other(msg)
    }
}

impl PlinkoError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an invalid hyperparameter error
    #[must_use]
    pub fn invalid_hyperparameter(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PlinkoError>;
