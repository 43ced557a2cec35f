//! Plinko: exploratory k-nearest-neighbor analysis of drop experiments.
//!
//! A physics simulation drops balls onto a peg board and records, for each
//! drop, the release position, the ball's bounciness, its size, and the
//! bucket it lands in. This crate answers the exploratory question: how
//! well does a KNN classifier predict the bucket from those features?
//!
//! The pipeline is deliberately small: accumulate observations, min-max
//! scale the features, split off a held-out test set, classify every test
//! point by majority vote among the k nearest training points, and report
//! accuracy: per feature, and across a sweep of k values.
//!
//! # Quick Start
//!
//! ```
//! use plinko::prelude::*;
//!
//! let mut session = DropAnalysis::with_options(
//!     AnalysisOptions::new()
//!         .with_test_set_size(10)
//!         .with_k(3)
//!         .with_k_range(1, 5)
//!         .with_random_state(42),
//! );
//!
//! // The simulation reports one observation per drop.
//! for i in 0..60 {
//!     let position = i as f32 / 60.0;
//!     let bounciness = (i % 7) as f32 / 7.0;
//!     let size = ((i % 3) + 14) as f32;
//!     let bucket = usize::from(position >= 0.5);
//!     session.record(position, bounciness, size, bucket);
//! }
//!
//! // Accuracy of each feature on its own, then of all three per k.
//! let mut results: Vec<(String, f32)> = Vec::new();
//! session.run_feature_analysis(&mut results).unwrap();
//! session.run_k_sweep(&mut results).unwrap();
//! assert_eq!(results.len(), 3 + 5);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Row-major matrix the pipeline computes over
//! - [`dataset`]: Observation store fed by the simulation hook
//! - [`classification`]: KNN classifier and distance functions
//! - [`preprocessing`]: Min-max feature scaling
//! - [`model_selection`]: Random train/test splitting
//! - [`metrics`]: Accuracy scoring
//! - [`analysis`]: The experiment runner and reporting seam
//!
//! Scope notes: the dataset lives in memory for the session, models are
//! never persisted, and there is no cross-validation. A run is a single
//! shuffled split, reported through the caller's sink.

pub mod analysis;
pub mod classification;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod traits;
