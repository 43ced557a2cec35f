//! The drop-experiment analysis runner.
//!
//! Orchestrates the KNN evaluation pipeline over the accumulated
//! observations: snapshot, normalize, split, classify, score. Two modes
//! mirror the two questions the tool answers:
//!
//! - per-feature accuracy: how predictive is each recorded feature alone?
//! - k sweep: over the full feature set, how does accuracy move with k?
//!
//! Results leave the library through a [`ReportSink`] collaborator; the
//! runner computes values and never formats or stores them itself.

use crate::classification::KNearestNeighbors;
use crate::dataset::{Dataset, NUM_FEATURES};
use crate::error::{PlinkoError, Result};
use crate::metrics::accuracy;
use crate::model_selection::train_test_split;
use crate::preprocessing::MinMaxScaler;
use crate::traits::Transformer;

/// Receives (context label, numeric value) result pairs from analysis runs.
///
/// Display, logging, and persistence of results all live behind this seam.
pub trait ReportSink {
    /// Accepts one result, e.g. `("feature 0 accuracy", 0.82)`.
    fn report(&mut self, context: &str, value: f32);
}

/// Sink that prints each result to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn report(&mut self, context: &str, value: f32) {
        println!("{context}: {value:.3}");
    }
}

/// Collects results for later inspection (handy in tests).
impl ReportSink for Vec<(String, f32)> {
    fn report(&mut self, context: &str, value: f32) {
        self.push((context.to_string(), value));
    }
}

/// Tunable parameters for the analysis runs.
///
/// Defaults follow the experiment this tool was built for: 100 held-out
/// test points, k = 10 for the per-feature mode, and a k sweep over
/// 1..=19.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    test_set_size: usize,
    k: usize,
    k_range: (usize, usize),
    random_state: Option<u64>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            test_set_size: 100,
            k: 10,
            k_range: (1, 19),
            random_state: None,
        }
    }
}

impl AnalysisOptions {
    /// Creates options with the default experiment parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of observations held out for the test set.
    #[must_use]
    pub fn with_test_set_size(mut self, test_set_size: usize) -> Self {
        self.test_set_size = test_set_size;
        self
    }

    /// Sets the fixed k used by the per-feature analysis.
    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the inclusive k range swept by the multi-feature analysis.
    #[must_use]
    pub fn with_k_range(mut self, k_min: usize, k_max: usize) -> Self {
        self.k_range = (k_min, k_max);
        self
    }

    /// Sets a random seed for reproducible splits.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.test_set_size == 0 {
            return Err(PlinkoError::invalid_hyperparameter(
                "test_set_size",
                self.test_set_size,
                ">= 1",
            ));
        }
        if self.k == 0 {
            return Err(PlinkoError::invalid_hyperparameter("k", self.k, ">= 1"));
        }
        let (k_min, k_max) = self.k_range;
        if k_min == 0 || k_min > k_max {
            return Err(PlinkoError::invalid_hyperparameter(
                "k_range",
                format!("{k_min}..={k_max}"),
                "1 <= k_min <= k_max",
            ));
        }
        Ok(())
    }
}

/// An analysis session: the observation store plus experiment options.
///
/// The session owns the [`Dataset`]; the external simulation feeds it
/// through [`record`](DropAnalysis::record), and the two analysis modes
/// read cloned snapshots so the accumulated data is never mutated.
///
/// # Example
///
/// ```
/// use plinko::analysis::{AnalysisOptions, DropAnalysis};
///
/// let mut session = DropAnalysis::with_options(
///     AnalysisOptions::new()
///         .with_test_set_size(4)
///         .with_k(1)
///         .with_k_range(1, 3)
///         .with_random_state(42),
/// );
///
/// for i in 0..20 {
///     let position = i as f32 / 20.0;
///     let bounciness = (i % 5) as f32 / 10.0;
///     let size = ((i % 3) + 14) as f32;
///     let bucket = usize::from(position >= 0.5);
///     session.record(position, bounciness, size, bucket);
/// }
///
/// let mut results: Vec<(String, f32)> = Vec::new();
/// session.run_feature_analysis(&mut results).unwrap();
/// assert_eq!(results.len(), 3);
///
/// results.clear();
/// session.run_k_sweep(&mut results).unwrap();
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DropAnalysis {
    dataset: Dataset,
    options: AnalysisOptions,
}

impl Default for DropAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl DropAnalysis {
    /// Creates a session with default options and an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(AnalysisOptions::default())
    }

    /// Creates a session with the given options and an empty dataset.
    #[must_use]
    pub fn with_options(options: AnalysisOptions) -> Self {
        Self {
            dataset: Dataset::new(NUM_FEATURES),
            options,
        }
    }

    /// Records one drop observation.
    ///
    /// This is the ingestion hook the simulation calls once per ball
    /// drop: where the ball was released, how bouncy it was, its size,
    /// and the bucket it landed in.
    pub fn record(&mut self, drop_position: f32, bounciness: f32, size: f32, bucket: usize) {
        self.dataset
            .record(&[drop_position, bounciness, size], bucket)
            .expect("hook arity is fixed at three features");
    }

    /// Returns the accumulated observations.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Discards all accumulated observations.
    pub fn clear(&mut self) {
        self.dataset.clear();
    }

    /// Evaluates each feature in isolation.
    ///
    /// For every feature index: project the dataset to (feature, label)
    /// pairs, min-max scale the single column, split off the held-out
    /// test set, classify every test point with the fixed k, and report
    /// the accuracy as `"feature <i> accuracy"`.
    ///
    /// # Errors
    ///
    /// Fails atomically on the first precondition violation (too few
    /// observations for the split or for k, zero-variance feature, bad
    /// options); results already handed to the sink stay reported.
    pub fn run_feature_analysis(&self, sink: &mut dyn ReportSink) -> Result<()> {
        self.options.validate()?;

        for feature in 0..self.dataset.n_features() {
            let (x, y) = self.dataset.project(feature)?;
            let scaled = MinMaxScaler::new().fit_transform(&x)?;
            let (x_train, x_test, y_train, y_test) = train_test_split(
                &scaled,
                &y,
                self.options.test_set_size,
                self.options.random_state,
            )?;

            let mut knn = KNearestNeighbors::new(self.options.k);
            knn.fit(&x_train, &y_train)?;
            let predictions = knn.predict(&x_test)?;

            sink.report(
                &format!("feature {feature} accuracy"),
                accuracy(&predictions, &y_test),
            );
        }

        Ok(())
    }

    /// Evaluates the full feature set across a range of k values.
    ///
    /// Min-max scales all feature columns jointly, splits once, then for
    /// each k in the configured range classifies the whole test set and
    /// reports the accuracy as `"k=<k> accuracy"`.
    ///
    /// # Errors
    ///
    /// Fails atomically on the first precondition violation, as in
    /// [`run_feature_analysis`](DropAnalysis::run_feature_analysis).
    pub fn run_k_sweep(&self, sink: &mut dyn ReportSink) -> Result<()> {
        self.options.validate()?;

        let (x, y) = self.dataset.to_matrix();
        let scaled = MinMaxScaler::new().fit_transform(&x)?;
        let (x_train, x_test, y_train, y_test) = train_test_split(
            &scaled,
            &y,
            self.options.test_set_size,
            self.options.random_state,
        )?;

        let (k_min, k_max) = self.options.k_range;
        for k in k_min..=k_max {
            let mut knn = KNearestNeighbors::new(k);
            knn.fit(&x_train, &y_train)?;
            let predictions = knn.predict(&x_test)?;

            sink.report(&format!("k={k} accuracy"), accuracy(&predictions, &y_test));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
