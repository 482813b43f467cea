//! Rolling-origin splitting for ordered data.
//!
//! ## Purpose
//!
//! This module implements the [`RollingOrigin`] strategy for time-ordered
//! datasets: analysis windows anchored at (or growing from) the origin with
//! assessment windows immediately after them, both advancing through the
//! dataset until the assessment window would cross the end.
//!
//! ## Design notes
//!
//! * Partition `k` slides both windows forward by `k * skip` rows. With
//!   `cumulative` the analysis window instead grows from row 0, modeling
//!   an expanding training history.
//! * The strategy never reorders rows. Callers may declare an ordering
//!   column via `order_by`; a non-monotonic key is a fatal
//!   `UnorderedInput` since it indicates the data was never sorted.
//! * Generation is fully deterministic; no RNG is involved and the plan's
//!   seed is recorded as 0.
//!
//! ## Key concepts
//!
//! ### Window Geometry
//!
//! With `initial = 5`, `assess = 1`, `skip = 1` on 10 ordered rows, the
//! five partitions have analysis windows `[0..5], [1..6], [2..7], [3..8],
//! [4..9]` and assessment windows `[5], [6], [7], [8], [9]`.
//!
//! ## Invariants
//!
//! * Analysis and assessment windows are contiguous, disjoint, and in
//!   ascending row order.
//! * Non-cumulative analysis windows always hold exactly `initial` rows.
//! * Every generated assessment window lies fully inside the dataset.
//!
//! ## Non-goals
//!
//! * This module does not sort the dataset by time.
//! * This module does not support gaps between the analysis and assessment
//!   windows.
//!
//! ## Visibility
//!
//! [`RollingOrigin`] is part of the public API, normally reached through
//! the [`Resample`](crate::api::Resample) entry points.

use crate::engine::validator::Validator;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::ResampleError;
use crate::primitives::partition::{Partition, ResamplingPlan};
use crate::primitives::traits::SplitStrategy;
use crate::strategies::stratify::numbered_label;
use num_traits::Float;

// ============================================================================
// Rolling Origin
// ============================================================================

/// Rolling-origin splitting for ordered (typically time-stamped) data.
#[derive(Debug, Clone)]
pub struct RollingOrigin {
    /// Rows in the first analysis window.
    pub initial: usize,

    /// Rows in each assessment window.
    pub assess: usize,

    /// Rows both windows advance per partition.
    pub skip: usize,

    /// Grow the analysis window from the origin instead of sliding it.
    pub cumulative: bool,

    /// Optional numeric column declared as the ordering key.
    pub order_by: Option<String>,
}

impl RollingOrigin {
    /// Create a rolling-origin strategy with the given window sizes.
    pub fn new(initial: usize, assess: usize) -> Self {
        Self {
            initial,
            assess,
            skip: 1,
            cumulative: false,
            order_by: None,
        }
    }

    /// Set how many rows the windows advance per partition.
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Grow the analysis window from the origin instead of sliding it.
    pub fn cumulative(mut self, cumulative: bool) -> Self {
        self.cumulative = cumulative;
        self
    }

    /// Declare the numeric column rows are expected to be ordered by.
    pub fn order_by(mut self, column: &str) -> Self {
        self.order_by = Some(column.to_string());
        self
    }
}

impl<T: Float> SplitStrategy<T> for RollingOrigin {
    fn generate(&self, dataset: &Dataset<T>) -> Result<ResamplingPlan, ResampleError> {
        let n = dataset.n_rows();
        Validator::validate_rolling(self.initial, self.assess, self.skip, n)?;
        if let Some(column) = &self.order_by {
            Validator::validate_ordering(dataset, column)?;
        }

        // Total partitions before the assessment window crosses the end.
        let room = n - self.initial - self.assess;
        let total = room / self.skip + 1;

        let partitions = (0..total)
            .map(|k| {
                let shift = k * self.skip;
                let analysis_start = if self.cumulative { 0 } else { shift };
                let analysis_end = self.initial + shift;
                let assessment_end = analysis_end + self.assess;

                Partition {
                    index: k,
                    label: numbered_label("Slice", k, total),
                    analysis: (analysis_start..analysis_end).collect(),
                    assessment: (analysis_end..assessment_end).collect(),
                }
            })
            .collect();

        Ok(ResamplingPlan::new("rolling_origin", n, 0, partitions, Vec::new()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ordered_data(n: usize) -> Dataset<f64> {
        Dataset::builder()
            .numeric("t", (0..n).map(|i| i as f64).collect())
            .build()
            .unwrap()
    }

    #[test]
    fn sliding_windows_match_the_documented_geometry() {
        let data = ordered_data(10);
        let plan =
            SplitStrategy::<f64>::generate(&RollingOrigin::new(5, 1), &data).unwrap();
        assert_eq!(plan.len(), 5);
        for (k, partition) in plan.iter().enumerate() {
            assert_eq!(partition.analysis, (k..k + 5).collect::<Vec<_>>());
            assert_eq!(partition.assessment, vec![k + 5]);
        }
    }

    #[test]
    fn cumulative_windows_grow_from_the_origin() {
        let data = ordered_data(10);
        let plan =
            SplitStrategy::<f64>::generate(&RollingOrigin::new(5, 1).cumulative(true), &data)
                .unwrap();
        assert_eq!(plan.len(), 5);
        for (k, partition) in plan.iter().enumerate() {
            assert_eq!(partition.analysis, (0..k + 5).collect::<Vec<_>>());
            assert_eq!(partition.assessment, vec![k + 5]);
        }
    }

    #[test]
    fn skip_thins_the_partition_sequence() {
        let data = ordered_data(12);
        let plan =
            SplitStrategy::<f64>::generate(&RollingOrigin::new(4, 2).skip(3), &data).unwrap();
        // room = 12 - 4 - 2 = 6; partitions at shifts 0, 3, 6.
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.get(2).unwrap().analysis, vec![6, 7, 8, 9]);
        assert_eq!(plan.get(2).unwrap().assessment, vec![10, 11]);
    }

    #[test]
    fn unordered_key_is_fatal() {
        let data = Dataset::<f64>::builder()
            .numeric("t", vec![1.0, 3.0, 2.0, 4.0, 5.0, 6.0])
            .build()
            .unwrap();
        let err = SplitStrategy::<f64>::generate(
            &RollingOrigin::new(3, 1).order_by("t"),
            &data,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ResampleError::UnorderedInput { column: "t".to_string(), row: 2 }
        );
    }

    #[test]
    fn windows_must_fit_in_the_dataset() {
        let data = ordered_data(6);
        assert!(SplitStrategy::<f64>::generate(&RollingOrigin::new(6, 1), &data).is_err());
        assert!(SplitStrategy::<f64>::generate(&RollingOrigin::new(5, 1), &data).is_ok());
    }
}
