//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use plinko::prelude::*;
//! ```

pub use crate::analysis::{AnalysisOptions, DropAnalysis, ReportSink, StdoutSink};
pub use crate::classification::KNearestNeighbors;
pub use crate::dataset::{Dataset, NUM_FEATURES};
pub use crate::metrics::accuracy;
pub use crate::model_selection::train_test_split;
pub use crate::preprocessing::MinMaxScaler;
pub use crate::primitives::Matrix;
pub use crate::traits::Transformer;
