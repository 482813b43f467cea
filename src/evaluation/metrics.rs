//! Built-in performance metrics.
//!
//! ## Purpose
//!
//! This module provides ready-made [`Metric`] implementations for the
//! common regression and classification scores: root-mean-square error,
//! mean absolute error, R², and accuracy. Any user type implementing
//! [`Metric`] participates in evaluation on equal footing.
//!
//! ## Design notes
//!
//! * Metrics are pure functions of (predictions, truth); the engine
//!   guarantees equal-length slices.
//! * Empty inputs score as `T::nan()` rather than panicking; aggregation
//!   treats NaN like any other value, so degenerate inputs surface in the
//!   summary instead of crashing a run.
//! * [`Accuracy`] rounds both sides before comparing, matching the
//!   numeric-coded-label convention for classification outcomes.
//! * R² with zero truth variance is undefined and scores as `T::nan()`.
//!
//! ## Invariants
//!
//! * `name()` values are stable identifiers used for record grouping.
//! * All computations are deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not compute rank-based metrics (area under the ROC
//!   curve); those plug in through the [`Metric`] trait.
//! * This module does not validate slice lengths (engine responsibility).
//!
//! ## Visibility
//!
//! All metric types are part of the public API.

use crate::primitives::traits::Metric;
use num_traits::Float;

// ============================================================================
// Regression Metrics
// ============================================================================

/// Root-mean-square error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rmse;

impl<T: Float> Metric<T> for Rmse {
    fn name(&self) -> &'static str {
        "rmse"
    }

    fn compute(&self, predictions: &[T], truth: &[T]) -> T {
        if predictions.is_empty() {
            return T::nan();
        }
        let n = T::from(predictions.len()).unwrap();
        let sum_sq = predictions
            .iter()
            .zip(truth.iter())
            .fold(T::zero(), |acc, (&p, &t)| {
                let e = p - t;
                acc + e * e
            });
        (sum_sq / n).sqrt()
    }
}

/// Mean absolute error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mae;

impl<T: Float> Metric<T> for Mae {
    fn name(&self) -> &'static str {
        "mae"
    }

    fn compute(&self, predictions: &[T], truth: &[T]) -> T {
        if predictions.is_empty() {
            return T::nan();
        }
        let n = T::from(predictions.len()).unwrap();
        let sum_abs = predictions
            .iter()
            .zip(truth.iter())
            .fold(T::zero(), |acc, (&p, &t)| acc + (p - t).abs());
        sum_abs / n
    }
}

/// Coefficient of determination (R²).
#[derive(Debug, Clone, Copy, Default)]
pub struct RSquared;

impl<T: Float> Metric<T> for RSquared {
    fn name(&self) -> &'static str {
        "rsq"
    }

    fn compute(&self, predictions: &[T], truth: &[T]) -> T {
        if predictions.is_empty() {
            return T::nan();
        }
        let n = T::from(truth.len()).unwrap();
        let mean = truth.iter().fold(T::zero(), |acc, &t| acc + t) / n;

        let ss_res = predictions
            .iter()
            .zip(truth.iter())
            .fold(T::zero(), |acc, (&p, &t)| {
                let e = t - p;
                acc + e * e
            });
        let ss_tot = truth.iter().fold(T::zero(), |acc, &t| {
            let d = t - mean;
            acc + d * d
        });

        if ss_tot == T::zero() {
            return T::nan();
        }
        T::one() - ss_res / ss_tot
    }
}

// ============================================================================
// Classification Metrics
// ============================================================================

/// Fraction of predictions matching the truth after rounding both sides.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accuracy;

impl<T: Float> Metric<T> for Accuracy {
    fn name(&self) -> &'static str {
        "accuracy"
    }

    fn compute(&self, predictions: &[T], truth: &[T]) -> T {
        if predictions.is_empty() {
            return T::nan();
        }
        let correct = predictions
            .iter()
            .zip(truth.iter())
            .filter(|(&p, &t)| p.round() == t.round())
            .count();
        T::from(correct).unwrap() / T::from(predictions.len()).unwrap()
    }
}

// ============================================================================
// Tests
// ============================================================================
