//! Input validation for strategy and evaluator configuration.
//!
//! ## Purpose
//!
//! This module provides the validation functions shared by the strategy
//! builders and the evaluation engine. It ensures that all configuration
//! meets the requirements for plan generation or a resampling run before
//! any computation begins, producing clear error messages when a check
//! fails.
//!
//! ## Design notes
//!
//! * All validation is performed upfront, before generation or evaluation.
//! * Validation is fail-fast: returns on the first error encountered.
//! * Error messages include specific values and context for debugging.
//! * Checks are ordered from cheap to expensive.
//! * Configuration errors are fatal by design: they indicate a caller
//!   mistake, not a data idiosyncrasy, so nothing is generated from an
//!   invalid configuration.
//!
//! ## Validated parameters
//!
//! * **Fold count**: At least 2 and at most the row (or stratum) count
//! * **Repeats / times**: At least 1
//! * **Proportions**: Strictly inside (0, 1) and finite
//! * **Rolling windows**: Nonzero sizes that fit within the dataset
//! * **Ordering keys**: Declared column all finite and monotonically
//!   non-decreasing
//! * **Outcome column**: Present and numeric
//! * **Metric set**: Non-empty
//! * **Timeout**: Nonzero duration
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A configuration that passes validation cannot fail plan generation
//!   for configuration reasons (data degeneracies are reported separately).
//!
//! ## Non-goals
//!
//! * This module does not generate partitions or fit models.
//! * This module does not correct invalid configuration.
//!
//! ## Visibility
//!
//! Internal shared machinery; not part of the public API.

use crate::primitives::dataset::Dataset;
use crate::primitives::errors::ResampleError;
use core::time::Duration;
use num_traits::Float;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for strategy and evaluator configuration.
///
/// Provides static methods returning `Result<(), ResampleError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Strategy Parameters
    // ========================================================================

    /// Validate a v-fold fold count against the dataset size.
    pub fn validate_fold_count(v: usize, n_rows: usize) -> Result<(), ResampleError> {
        // Check 1: Lower bound
        if v < 2 {
            return Err(ResampleError::InvalidParameter {
                param: "v",
                reason: format!("must be at least 2, got {}", v),
            });
        }

        // Check 2: Upper bound
        if v > n_rows {
            return Err(ResampleError::InvalidParameter {
                param: "v",
                reason: format!("must not exceed the {} dataset rows, got {}", n_rows, v),
            });
        }

        Ok(())
    }

    /// Validate that every stratum can populate all `v` folds.
    pub fn validate_stratified_folds(
        v: usize,
        strata: &[Vec<usize>],
    ) -> Result<(), ResampleError> {
        if let Some(small) = strata.iter().map(Vec::len).min() {
            if v > small {
                return Err(ResampleError::InvalidParameter {
                    param: "v",
                    reason: format!(
                        "must not exceed the smallest stratum ({} rows), got {}",
                        small, v
                    ),
                });
            }
        }
        Ok(())
    }

    /// Validate a repetition count (`repeats` or `times`).
    pub fn validate_repetitions(param: &'static str, count: usize) -> Result<(), ResampleError> {
        if count == 0 {
            return Err(ResampleError::InvalidParameter {
                param,
                reason: "must be at least 1, got 0".to_string(),
            });
        }
        Ok(())
    }

    /// Validate a sampling proportion.
    pub fn validate_proportion(param: &'static str, prop: f64) -> Result<(), ResampleError> {
        // Check 1: Finite
        if !prop.is_finite() {
            return Err(ResampleError::InvalidParameter {
                param,
                reason: format!("must be finite, got {}", prop),
            });
        }

        // Check 2: Open interval (0, 1)
        if prop <= 0.0 || prop >= 1.0 {
            return Err(ResampleError::InvalidParameter {
                param,
                reason: format!("must be strictly between 0 and 1, got {}", prop),
            });
        }

        Ok(())
    }

    /// Validate that a proportional split leaves both sides non-empty.
    pub fn validate_split_occupancy(
        param: &'static str,
        n_analysis: usize,
        stratum_size: usize,
    ) -> Result<(), ResampleError> {
        if n_analysis == 0 || n_analysis == stratum_size {
            return Err(ResampleError::InvalidParameter {
                param,
                reason: format!(
                    "leaves an empty analysis or assessment side for a stratum of {} rows",
                    stratum_size
                ),
            });
        }
        Ok(())
    }

    /// Validate rolling-origin window parameters against the dataset size.
    pub fn validate_rolling(
        initial: usize,
        assess: usize,
        skip: usize,
        n_rows: usize,
    ) -> Result<(), ResampleError> {
        // Check 1: Nonzero windows
        if initial == 0 {
            return Err(ResampleError::InvalidParameter {
                param: "initial",
                reason: "analysis window must contain at least 1 row".to_string(),
            });
        }
        if assess == 0 {
            return Err(ResampleError::InvalidParameter {
                param: "assess",
                reason: "assessment window must contain at least 1 row".to_string(),
            });
        }
        if skip == 0 {
            return Err(ResampleError::InvalidParameter {
                param: "skip",
                reason: "window shift must be at least 1 row".to_string(),
            });
        }

        // Check 2: At least one partition fits
        if initial + assess > n_rows {
            return Err(ResampleError::InvalidParameter {
                param: "initial",
                reason: format!(
                    "initial ({}) + assess ({}) exceed the {} dataset rows",
                    initial, assess, n_rows
                ),
            });
        }

        Ok(())
    }

    /// Validate that a declared ordering column is monotonically
    /// non-decreasing.
    pub fn validate_ordering<T: Float>(
        dataset: &Dataset<T>,
        column: &str,
    ) -> Result<(), ResampleError> {
        let values = dataset.numeric(column)?;

        // Check 1: All keys finite (a NaN key makes the ordering undefined
        // and would slip through the comparison below)
        if let Some(row) = values.iter().position(|v| !v.is_finite()) {
            return Err(ResampleError::InvalidParameter {
                param: "order_by",
                reason: format!(
                    "ordering column '{}' has a non-finite value at row {}",
                    column, row
                ),
            });
        }

        // Check 2: Monotonically non-decreasing
        for (row, pair) in values.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(ResampleError::UnorderedInput {
                    column: column.to_string(),
                    row: row + 1,
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Evaluator Configuration
    // ========================================================================

    /// Validate the outcome column used for truth values.
    pub fn validate_outcome<T: Float>(
        dataset: &Dataset<T>,
        outcome: &str,
    ) -> Result<(), ResampleError> {
        dataset.numeric(outcome)?;
        Ok(())
    }

    /// Validate that at least one metric was requested.
    pub fn validate_metrics(n_metrics: usize) -> Result<(), ResampleError> {
        if n_metrics == 0 {
            return Err(ResampleError::InvalidParameter {
                param: "metrics",
                reason: "at least one metric is required".to_string(),
            });
        }
        Ok(())
    }

    /// Validate a per-partition timeout.
    pub fn validate_timeout(timeout: Duration) -> Result<(), ResampleError> {
        if timeout.is_zero() {
            return Err(ResampleError::InvalidParameter {
                param: "timeout",
                reason: "must be a nonzero duration".to_string(),
            });
        }
        Ok(())
    }

    /// Validate that a plan refers to the dataset it is evaluated against.
    pub fn validate_plan_rows(plan_rows: usize, n_rows: usize) -> Result<(), ResampleError> {
        if plan_rows != n_rows {
            return Err(ResampleError::InvalidParameter {
                param: "plan",
                reason: format!(
                    "plan was generated for {} rows but the dataset has {}",
                    plan_rows, n_rows
                ),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
