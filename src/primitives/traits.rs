//! Capability traits at the seams of the resampling engine.
//!
//! ## Purpose
//!
//! This module defines the three small contracts that external collaborators
//! plug into: [`SplitStrategy`] for plan generation, [`Estimator`] for model
//! fitting and prediction, and [`Metric`] for scoring predictions against
//! held-out truth.
//!
//! ## Design notes
//!
//! * Any type satisfying `Estimator` can be substituted for any learning
//!   algorithm; the engine never inspects models beyond moving them around.
//! * Estimator failures surface as opaque `String` causes; the engine wraps
//!   them into `FitFailure`/`PredictFailure` records without interpreting
//!   them.
//! * `Metric` implementations are pure functions of (predictions, truth);
//!   the engine guarantees both slices have equal length when calling.
//! * `Send + Sync` bounds allow the parallel executor to share estimators
//!   and metrics across worker threads.
//!
//! ## Invariants
//!
//! * `SplitStrategy::generate` is deterministic given the strategy's
//!   configured seed.
//! * `Estimator::predict` returns one prediction per assessment row, in
//!   row order.
//!
//! ## Visibility
//!
//! All three traits are part of the public API; built-in strategies and
//! metrics implement them alongside user-provided types.

use crate::primitives::dataset::Dataset;
use crate::primitives::errors::ResampleError;
use crate::primitives::partition::ResamplingPlan;
use num_traits::Float;

// ============================================================================
// Split Strategy
// ============================================================================

/// A pure mapping from a dataset to an ordered sequence of partitions.
pub trait SplitStrategy<T: Float> {
    /// Generate the resampling plan for `dataset`.
    ///
    /// Deterministic given the same configured seed and parameters; two
    /// invocations produce index-for-index identical plans.
    fn generate(&self, dataset: &Dataset<T>) -> Result<ResamplingPlan, ResampleError>;
}

// ============================================================================
// Estimator
// ============================================================================

/// External model-fit and prediction procedures.
///
/// The engine fits on analysis rows and predicts on assessment rows; it is
/// polymorphic over any learning algorithm satisfying this contract.
pub trait Estimator<T: Float>: Send + Sync {
    /// Fitted model produced by `fit`.
    type Model: Send;

    /// Fit a model on the analysis rows.
    ///
    /// `outcome` names the column the model should predict. Errors are
    /// opaque to the engine and recorded as per-partition fit failures.
    fn fit(&self, analysis: &Dataset<T>, outcome: &str) -> Result<Self::Model, String>;

    /// Predict the outcome for each row of the assessment set.
    ///
    /// Must return exactly one value per assessment row, in row order.
    fn predict(&self, model: &Self::Model, assessment: &Dataset<T>) -> Result<Vec<T>, String>;
}

// ============================================================================
// Metric
// ============================================================================

/// A scoring function over predictions and held-out truth.
pub trait Metric<T: Float>: Send + Sync {
    /// Stable metric identifier used for record grouping and aggregation.
    fn name(&self) -> &'static str;

    /// Score `predictions` against `truth`.
    ///
    /// Both slices have equal length when called by the engine. Returns
    /// `T::nan()` for empty inputs.
    fn compute(&self, predictions: &[T], truth: &[T]) -> T;
}
