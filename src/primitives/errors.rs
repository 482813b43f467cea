//! Shared error types for resampling operations.
//!
//! ## Purpose
//!
//! This module defines the unified [`ResampleError`] enum used across the
//! entire crate. It covers dataset construction problems, malformed strategy
//! configuration, precondition violations detected at plan-generation time,
//! and the per-partition failures surfaced by the evaluation engine.
//!
//! ## Design notes
//!
//! * One enum for the whole crate; variants carry the offending values.
//! * Configuration errors (`InvalidParameter`, `UnorderedInput`) are fatal
//!   at plan-generation or run-start time: they indicate a caller mistake.
//! * Partition-level failures (`FitFailure`, `PredictFailure`,
//!   `PartitionTimeout`) are captured in metric records by the engine and
//!   never abort a run; the variants exist so callers can match on the
//!   recorded cause.
//! * Error messages include specific values and context for debugging.
//!
//! ## Invariants
//!
//! * Every variant renders a human-readable message via `Display`.
//! * Partition indices in error variants refer to positions in the
//!   generating [`ResamplingPlan`](crate::primitives::partition::ResamplingPlan).
//!
//! ## Visibility
//!
//! [`ResampleError`] is part of the public API and is the error type of the
//! crate-wide [`Result`](crate::api::Result) alias.

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Unified error type for dataset construction, plan generation, and
/// resample evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ResampleError {
    /// Dataset has no rows or no columns.
    EmptyDataset,

    /// Two columns share the same name.
    DuplicateColumn {
        /// Name of the repeated column.
        name: String,
    },

    /// A column's length disagrees with the first column's length.
    MismatchedColumnLengths {
        /// Offending column name.
        column: String,
        /// Length of the offending column.
        got: usize,
        /// Length established by the first column.
        expected: usize,
    },

    /// A named column does not exist in the dataset.
    UnknownColumn {
        /// The requested column name.
        name: String,
    },

    /// A column exists but does not have the required type for the
    /// requested operation.
    ColumnTypeMismatch {
        /// The requested column name.
        name: String,
        /// The type required by the operation.
        expected: &'static str,
    },

    /// A row index points outside the dataset.
    RowOutOfBounds {
        /// The offending row index.
        index: usize,
        /// Number of rows in the dataset.
        n_rows: usize,
    },

    /// A strategy or evaluator parameter is outside its valid range.
    InvalidParameter {
        /// Name of the parameter.
        param: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A generated partition is empty or otherwise unusable.
    DegenerateSample {
        /// Index of the degenerate partition within its plan.
        partition: usize,
        /// Why the partition is unusable.
        reason: String,
    },

    /// The declared ordering column is not monotonically non-decreasing.
    UnorderedInput {
        /// The declared ordering column.
        column: String,
        /// First row at which the ordering breaks.
        row: usize,
    },

    /// An external model-fit procedure failed for one partition.
    FitFailure {
        /// Index of the affected partition.
        partition: usize,
        /// Opaque cause reported by the estimator.
        cause: String,
    },

    /// An external prediction procedure failed for one partition.
    PredictFailure {
        /// Index of the affected partition.
        partition: usize,
        /// Opaque cause reported by the estimator.
        cause: String,
    },

    /// A partition's fit/predict unit exceeded the configured timeout.
    PartitionTimeout {
        /// Index of the affected partition.
        partition: usize,
    },

    /// Every record for a metric failed; there is nothing to average.
    NoValidRecords {
        /// The metric with no successful records.
        metric: String,
    },
}

impl fmt::Display for ResampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResampleError::EmptyDataset => {
                write!(f, "dataset must contain at least one row and one column")
            }
            ResampleError::DuplicateColumn { name } => {
                write!(f, "column '{}' is defined more than once", name)
            }
            ResampleError::MismatchedColumnLengths {
                column,
                got,
                expected,
            } => write!(
                f,
                "column '{}' has {} rows but the dataset has {}",
                column, got, expected
            ),
            ResampleError::UnknownColumn { name } => {
                write!(f, "no column named '{}' in the dataset", name)
            }
            ResampleError::ColumnTypeMismatch { name, expected } => {
                write!(f, "column '{}' is not {}", name, expected)
            }
            ResampleError::RowOutOfBounds { index, n_rows } => {
                write!(f, "row index {} out of bounds for {} rows", index, n_rows)
            }
            ResampleError::InvalidParameter { param, reason } => {
                write!(f, "invalid parameter '{}': {}", param, reason)
            }
            ResampleError::DegenerateSample { partition, reason } => {
                write!(f, "partition {} is degenerate: {}", partition, reason)
            }
            ResampleError::UnorderedInput { column, row } => write!(
                f,
                "ordering column '{}' is not monotonically non-decreasing at row {}",
                column, row
            ),
            ResampleError::FitFailure { partition, cause } => {
                write!(f, "model fit failed on partition {}: {}", partition, cause)
            }
            ResampleError::PredictFailure { partition, cause } => {
                write!(f, "prediction failed on partition {}: {}", partition, cause)
            }
            ResampleError::PartitionTimeout { partition } => {
                write!(f, "partition {} exceeded the configured timeout", partition)
            }
            ResampleError::NoValidRecords { metric } => {
                write!(f, "no valid records to aggregate for metric '{}'", metric)
            }
        }
    }
}

impl std::error::Error for ResampleError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_values() {
        let err = ResampleError::MismatchedColumnLengths {
            column: "age".to_string(),
            got: 9,
            expected: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("age"));
        assert!(msg.contains('9'));
        assert!(msg.contains("10"));
    }

    #[test]
    fn invalid_parameter_names_the_parameter() {
        let err = ResampleError::InvalidParameter {
            param: "v",
            reason: "must be at least 2, got 1".to_string(),
        };
        assert!(err.to_string().contains("'v'"));
    }
}
