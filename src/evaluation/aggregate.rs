//! Metric aggregation into performance summaries.
//!
//! ## Purpose
//!
//! This module reduces the per-partition [`MetricRecord`]s of one
//! evaluation run into a [`PerformanceSummary`]: one mean and standard
//! error per metric, with failed-record counts reported separately.
//!
//! ## Design notes
//!
//! * Records are grouped by metric name in first-appearance order, so the
//!   summary lists metrics in the order they were requested.
//! * The standard error of the mean is the sample standard deviation
//!   (n − 1 denominator) divided by √n, computed over non-failed records
//!   only.
//! * A single successful record has no defined standard error; the
//!   contract is explicit: `std_error` is `None` when `n == 1`.
//! * Failed records are excluded from the mean's denominator and counted
//!   in `n_failed`. A metric whose records all failed is a
//!   `NoValidRecords` error, because a summary row with no mean would be
//!   meaningless.
//! * The reduction is a deterministic function of the record sequence:
//!   it never depends on the completion order of the partitions that
//!   produced the records.
//!
//! ## Invariants
//!
//! * `n + n_failed` equals the record count for that metric.
//! * `mean` is always computed from at least one value.
//!
//! ## Non-goals
//!
//! * This module does not weight partitions (all records count equally).
//! * This module does not compute quantiles or confidence intervals.
//!
//! ## Visibility
//!
//! [`summarize`], [`PerformanceSummary`], and [`MetricSummary`] are part
//! of the public API.

use crate::engine::output::MetricRecord;
use crate::primitives::errors::ResampleError;
use core::fmt;
use num_traits::Float;

// ============================================================================
// Summary Types
// ============================================================================

/// Aggregated performance estimate for one metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetricSummary<T> {
    /// Metric name.
    pub metric: &'static str,

    /// Arithmetic mean over non-failed records.
    pub mean: T,

    /// Standard error of the mean; `None` for a single record.
    pub std_error: Option<T>,

    /// Number of non-failed records.
    pub n: usize,

    /// Number of failed records excluded from the mean.
    pub n_failed: usize,
}

/// Per-metric performance estimates for one evaluation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PerformanceSummary<T> {
    summaries: Vec<MetricSummary<T>>,
}

impl<T: Float> PerformanceSummary<T> {
    /// Summaries in metric request order.
    pub fn metrics(&self) -> &[MetricSummary<T>] {
        &self.summaries
    }

    /// Summary for a metric by name.
    pub fn get(&self, metric: &str) -> Option<&MetricSummary<T>> {
        self.summaries.iter().find(|s| s.metric == metric)
    }

    /// Number of summarized metrics.
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    /// Returns `true` if no metric was summarized.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl<T: Float> fmt::Display for PerformanceSummary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:>12} {:>12} {:>6} {:>8}",
            "metric", "mean", "std_err", "n", "n_failed"
        )?;
        for s in &self.summaries {
            let mean = num_traits::cast::<T, f64>(s.mean).unwrap_or(f64::NAN);
            let std_err = s
                .std_error
                .and_then(num_traits::cast::<T, f64>)
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<12} {:>12.4} {:>12} {:>6} {:>8}",
                s.metric, mean, std_err, s.n, s.n_failed
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Reduce metric records into per-metric means and standard errors.
pub fn summarize<T: Float>(
    records: &[MetricRecord<T>],
) -> Result<PerformanceSummary<T>, ResampleError> {
    // Group values by metric in first-appearance order.
    let mut groups: Vec<(&'static str, Vec<T>, usize)> = Vec::new();
    for record in records {
        let group = match groups.iter_mut().find(|(name, ..)| *name == record.metric) {
            Some(group) => group,
            None => {
                groups.push((record.metric, Vec::new(), 0));
                groups.last_mut().unwrap()
            }
        };
        match record.outcome.value() {
            Some(value) => group.1.push(value),
            None => group.2 += 1,
        }
    }

    let mut summaries = Vec::with_capacity(groups.len());
    for (metric, values, n_failed) in groups {
        if values.is_empty() {
            return Err(ResampleError::NoValidRecords {
                metric: metric.to_string(),
            });
        }

        let n = values.len();
        let count = T::from(n).unwrap();
        let mean = values.iter().fold(T::zero(), |acc, &v| acc + v) / count;

        let std_error = if n > 1 {
            let ss = values.iter().fold(T::zero(), |acc, &v| {
                let d = v - mean;
                acc + d * d
            });
            let sample_sd = (ss / T::from(n - 1).unwrap()).sqrt();
            Some(sample_sd / count.sqrt())
        } else {
            None
        };

        summaries.push(MetricSummary {
            metric,
            mean,
            std_error,
            n,
            n_failed,
        });
    }

    Ok(PerformanceSummary { summaries })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::output::RecordOutcome;
    use crate::primitives::errors::ResampleError;

    fn value_record(partition: usize, metric: &'static str, value: f64) -> MetricRecord<f64> {
        MetricRecord {
            partition,
            label: format!("Fold{:02}", partition + 1),
            metric,
            outcome: RecordOutcome::Value(value),
        }
    }

    fn failed_record(partition: usize, metric: &'static str) -> MetricRecord<f64> {
        MetricRecord {
            partition,
            label: format!("Fold{:02}", partition + 1),
            metric,
            outcome: RecordOutcome::Failed(ResampleError::FitFailure {
                partition,
                cause: "boom".to_string(),
            }),
        }
    }

    #[test]
    fn mean_and_standard_error_match_hand_computation() {
        let records = vec![
            value_record(0, "rmse", 1.0),
            value_record(1, "rmse", 2.0),
            value_record(2, "rmse", 3.0),
        ];
        let summary = summarize(&records).unwrap();
        let rmse = summary.get("rmse").unwrap();
        assert!((rmse.mean - 2.0).abs() < 1e-12);
        // Sample sd of {1,2,3} is 1; SE = 1/sqrt(3).
        let expected = 1.0 / 3f64.sqrt();
        assert!((rmse.std_error.unwrap() - expected).abs() < 1e-12);
        assert_eq!(rmse.n, 3);
        assert_eq!(rmse.n_failed, 0);
    }

    #[test]
    fn single_record_has_no_standard_error() {
        let summary = summarize(&[value_record(0, "mae", 0.5)]).unwrap();
        let mae = summary.get("mae").unwrap();
        assert_eq!(mae.mean, 0.5);
        assert_eq!(mae.std_error, None);
    }

    #[test]
    fn failed_records_are_excluded_and_counted() {
        let records = vec![
            value_record(0, "rmse", 2.0),
            failed_record(1, "rmse"),
            value_record(2, "rmse", 4.0),
        ];
        let summary = summarize(&records).unwrap();
        let rmse = summary.get("rmse").unwrap();
        assert!((rmse.mean - 3.0).abs() < 1e-12);
        assert_eq!(rmse.n, 2);
        assert_eq!(rmse.n_failed, 1);
    }

    #[test]
    fn all_failed_is_no_valid_records() {
        let err = summarize(&[failed_record(0, "rmse"), failed_record(1, "rmse")]).unwrap_err();
        assert_eq!(err, ResampleError::NoValidRecords { metric: "rmse".to_string() });
    }

    #[test]
    fn metrics_keep_request_order() {
        let records = vec![
            value_record(0, "rmse", 1.0),
            value_record(0, "mae", 0.5),
            value_record(1, "rmse", 2.0),
            value_record(1, "mae", 0.7),
        ];
        let summary = summarize(&records).unwrap();
        let order: Vec<&str> = summary.metrics().iter().map(|s| s.metric).collect();
        assert_eq!(order, ["rmse", "mae"]);
    }

    #[test]
    fn display_renders_one_row_per_metric() {
        let summary = summarize(&[
            value_record(0, "rmse", 1.0),
            value_record(1, "rmse", 2.0),
        ])
        .unwrap();
        let rendered = summary.to_string();
        assert!(rendered.contains("metric"));
        assert!(rendered.contains("rmse"));
        assert!(rendered.contains("1.5000"));
    }
}
