//! Output types and result structures for resample evaluation.
//!
//! ## Purpose
//!
//! This module defines the per-partition [`MetricRecord`] produced by the
//! evaluation engine and the [`ResampleResult`] container that collects all
//! records (and optionally retained models) from one run.
//!
//! ## Design notes
//!
//! * Every (partition, metric) pair yields exactly one record. A partition
//!   whose fit or prediction failed yields one failed record per requested
//!   metric, all carrying the same cause.
//! * Failed records embed the [`ResampleError`] that stopped the partition
//!   (`FitFailure`, `PredictFailure`, `PartitionTimeout`,
//!   `DegenerateSample`), so callers can distinguish the stages without
//!   re-running anything.
//! * Retained models are memory-expensive and off by default; when enabled
//!   they are stored aligned with partition index, `None` marking failed
//!   partitions.
//! * Results are generic over `Float` types and over the estimator's model
//!   type.
//!
//! ## Invariants
//!
//! * Records appear in partition order, metrics in request order within a
//!   partition.
//! * `records.len() == n_partitions * n_metrics`.
//! * A retained-model slot is `Some` exactly when that partition's records
//!   are successful.
//!
//! ## Non-goals
//!
//! * This module does not perform aggregation (see
//!   [`evaluation::aggregate`](crate::evaluation::aggregate)); the
//!   [`ResampleResult::summarize`] convenience only delegates.
//!
//! ## Visibility
//!
//! All types here are part of the public API and form the primary output
//! surface of the evaluation engine.

use crate::evaluation::aggregate::{self, PerformanceSummary};
use crate::primitives::errors::ResampleError;
use num_traits::Float;

// ============================================================================
// Metric Record
// ============================================================================

/// Outcome of scoring one metric on one partition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RecordOutcome<T> {
    /// The metric value computed on the assessment set.
    Value(T),

    /// The partition failed before this metric could be computed.
    Failed(ResampleError),
}

impl<T: Copy> RecordOutcome<T> {
    /// The metric value, if the record succeeded.
    pub fn value(&self) -> Option<T> {
        match self {
            RecordOutcome::Value(v) => Some(*v),
            RecordOutcome::Failed(_) => None,
        }
    }

    /// Returns `true` for failed records.
    pub fn is_failed(&self) -> bool {
        matches!(self, RecordOutcome::Failed(_))
    }
}

/// One row of evaluation output: a (partition, metric) pair with its
/// outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetricRecord<T> {
    /// Index of the partition within the plan.
    pub partition: usize,

    /// Label of the partition, e.g. `Fold03`.
    pub label: String,

    /// Name of the metric this record scores.
    pub metric: &'static str,

    /// Value or failure for this pair.
    pub outcome: RecordOutcome<T>,
}

// ============================================================================
// Resample Result
// ============================================================================

/// All records (and optionally retained models) from one evaluation run.
#[derive(Debug)]
pub struct ResampleResult<T, M> {
    records: Vec<MetricRecord<T>>,
    models: Option<Vec<Option<M>>>,
    n_partitions: usize,
}

impl<T: Float, M> ResampleResult<T, M> {
    pub(crate) fn new(
        records: Vec<MetricRecord<T>>,
        models: Option<Vec<Option<M>>>,
        n_partitions: usize,
    ) -> Self {
        Self {
            records,
            models,
            n_partitions,
        }
    }

    /// All metric records in partition order.
    pub fn records(&self) -> &[MetricRecord<T>] {
        &self.records
    }

    /// Retained models aligned with partition index, when
    /// `retain_models(true)` was set.
    pub fn models(&self) -> Option<&[Option<M>]> {
        self.models.as_deref()
    }

    /// Number of partitions evaluated.
    pub fn n_partitions(&self) -> usize {
        self.n_partitions
    }

    /// Number of partitions whose records all failed.
    pub fn n_failed_partitions(&self) -> usize {
        self.failed_partitions().len()
    }

    /// Indices of partitions whose records all failed.
    pub fn failed_partitions(&self) -> Vec<usize> {
        (0..self.n_partitions)
            .filter(|&p| {
                self.records
                    .iter()
                    .filter(|r| r.partition == p)
                    .all(|r| r.outcome.is_failed())
            })
            .collect()
    }

    /// Reduce the records into per-metric performance estimates.
    pub fn summarize(&self) -> Result<PerformanceSummary<T>, ResampleError> {
        aggregate::summarize(&self.records)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(partition: usize, metric: &'static str, outcome: RecordOutcome<f64>) -> MetricRecord<f64> {
        MetricRecord {
            partition,
            label: format!("Fold{:02}", partition + 1),
            metric,
            outcome,
        }
    }

    #[test]
    fn failed_partitions_are_identified() {
        let records = vec![
            record(0, "rmse", RecordOutcome::Value(1.0)),
            record(
                1,
                "rmse",
                RecordOutcome::Failed(ResampleError::FitFailure {
                    partition: 1,
                    cause: "singular".to_string(),
                }),
            ),
        ];
        let result: ResampleResult<f64, ()> = ResampleResult::new(records, None, 2);
        assert_eq!(result.failed_partitions(), vec![1]);
        assert_eq!(result.n_failed_partitions(), 1);
    }

    #[test]
    fn outcome_accessors() {
        let ok = RecordOutcome::Value(2.5);
        assert_eq!(ok.value(), Some(2.5));
        assert!(!ok.is_failed());

        let failed: RecordOutcome<f64> =
            RecordOutcome::Failed(ResampleError::PartitionTimeout { partition: 0 });
        assert_eq!(failed.value(), None);
        assert!(failed.is_failed());
    }
}
