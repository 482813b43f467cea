//! Layer 5: API
//!
//! Public entry points.
//!
//! ## Purpose
//!
//! This module provides [`Resample`], the front door of the crate: one
//! constructor per split strategy, each returning the strategy's builder so
//! callers configure and generate plans fluently without importing the
//! strategy types directly.
//!
//! ## Design notes
//!
//! * [`Resample`] holds no state; it only names the strategies. All
//!   configuration lives on the returned builders.
//! * Required parameters go in the constructor, optional ones become
//!   builder methods. That keeps degenerate half-configured strategies
//!   unrepresentable.
//! * The [`Result`] alias pins the crate error type so signatures across
//!   the public surface stay short.
//!
//! ## Visibility
//!
//! Everything here is re-exported at the crate root.

use crate::strategies::bootstrap::Bootstrap;
use crate::strategies::montecarlo::{MonteCarlo, ValidationSplit};
use crate::strategies::rolling::RollingOrigin;
use crate::strategies::vfold::{LeaveOneOut, VFold};
use core::result;

// Publicly re-exported types
pub use crate::engine::executor::Evaluator;
pub use crate::engine::output::{MetricRecord, RecordOutcome, ResampleResult};
pub use crate::evaluation::aggregate::{summarize, MetricSummary, PerformanceSummary};
pub use crate::evaluation::metrics::{Accuracy, Mae, RSquared, Rmse};
pub use crate::primitives::dataset::{Column, Dataset, DatasetBuilder};
pub use crate::primitives::errors::ResampleError;
pub use crate::primitives::partition::{Partition, ResamplingPlan};
pub use crate::primitives::traits::{Estimator, Metric, SplitStrategy};

/// Result type alias for resampling operations.
pub type Result<T> = result::Result<T, ResampleError>;

// ============================================================================
// Entry Points
// ============================================================================

/// Entry points for constructing split strategies.
///
/// # Examples
///
/// ```
/// use resample::prelude::*;
///
/// let data = Dataset::builder()
///     .numeric("y", (0..20).map(f64::from).collect())
///     .build()
///     .unwrap();
/// let plan = Resample::vfold(5).seed(42).generate(&data).unwrap();
/// assert_eq!(plan.len(), 5);
/// ```
pub struct Resample;

impl Resample {
    /// V-fold cross-validation with `v` folds.
    pub fn vfold(v: usize) -> VFold {
        VFold::new(v)
    }

    /// Leave-one-out cross-validation.
    pub fn leave_one_out() -> LeaveOneOut {
        LeaveOneOut::new()
    }

    /// Monte-Carlo resampling: `times` independent splits with `prop` of
    /// the rows in the analysis set.
    pub fn monte_carlo(prop: f64, times: usize) -> MonteCarlo {
        MonteCarlo::new(prop, times)
    }

    /// Bootstrap resampling: `times` with-replacement draws assessed on
    /// their out-of-bag rows.
    pub fn bootstrap(times: usize) -> Bootstrap {
        Bootstrap::new(times)
    }

    /// Rolling-origin splitting for ordered data, starting from `initial`
    /// analysis rows with `assess` assessment rows per slice.
    pub fn rolling_origin(initial: usize, assess: usize) -> RollingOrigin {
        RollingOrigin::new(initial, assess)
    }

    /// A single training/validation split with `prop` of the rows in the
    /// training side.
    pub fn validation_split(prop: f64) -> ValidationSplit {
        ValidationSplit::new(prop)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::dataset::Dataset;
    use crate::primitives::traits::SplitStrategy;

    fn numeric_data(n: usize) -> Dataset<f64> {
        Dataset::builder()
            .numeric("x", (0..n).map(|i| i as f64).collect())
            .build()
            .unwrap()
    }

    #[test]
    fn entry_points_reach_every_strategy() {
        let data = numeric_data(12);

        assert_eq!(
            SplitStrategy::<f64>::generate(&Resample::vfold(3).seed(1), &data)
                .unwrap()
                .strategy(),
            "vfold"
        );
        assert_eq!(
            SplitStrategy::<f64>::generate(&Resample::leave_one_out(), &data)
                .unwrap()
                .strategy(),
            "loo"
        );
        assert_eq!(
            SplitStrategy::<f64>::generate(&Resample::monte_carlo(0.75, 2).seed(1), &data)
                .unwrap()
                .strategy(),
            "monte_carlo"
        );
        assert_eq!(
            SplitStrategy::<f64>::generate(&Resample::bootstrap(2).seed(1), &data)
                .unwrap()
                .strategy(),
            "bootstrap"
        );
        assert_eq!(
            SplitStrategy::<f64>::generate(&Resample::rolling_origin(6, 2), &data)
                .unwrap()
                .strategy(),
            "rolling_origin"
        );
        assert_eq!(
            SplitStrategy::<f64>::generate(&Resample::validation_split(0.75).seed(1), &data)
                .unwrap()
                .strategy(),
            "validation_split"
        );
    }
}
