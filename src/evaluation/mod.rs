//! Layer 3: Evaluation
//!
//! Metrics and aggregation.
//!
//! This layer scores predictions against held-out truth and reduces the
//! per-partition scores of a run into per-metric means and standard
//! errors. Everything here is pure and deterministic.
//!
//! # Module Organization
//!
//! - **metrics**: Built-in regression and classification metrics
//! - **aggregate**: Reduction of metric records into summaries
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine (executor, validator, output)
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Strategies
//!   ↓
//! Layer 1: Primitives (dataset, partition, traits, errors)
//! ```

/// Built-in metrics.
///
/// Provides:
/// - `Rmse`, `Mae`, `RSquared` for regression
/// - `Accuracy` for numeric-coded classification
pub mod metrics;

/// Record aggregation.
///
/// Provides:
/// - `summarize` reduction over metric records
/// - `PerformanceSummary` and `MetricSummary`
pub mod aggregate;
