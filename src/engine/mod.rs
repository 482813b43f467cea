//! Layer 4: Engine
//!
//! Execution, validation, and output.
//!
//! This layer runs the fit/assess loop over a resampling plan: it validates
//! inputs fail-fast, dispatches partitions (in parallel by default), keeps
//! failures isolated to their partition, and collects the metric records
//! into a result container.
//!
//! # Module Organization
//!
//! - **executor**: The [`Evaluator`](executor::Evaluator) fit/assess loop
//! - **validator**: Fail-fast parameter and input validation
//! - **output**: Metric records, failure causes, and the run result
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation (metrics, aggregate)
//!   ↓
//! Layer 2: Strategies
//!   ↓
//! Layer 1: Primitives (dataset, partition, traits, errors)
//! ```

/// Fit/assess execution.
///
/// Provides:
/// - `Evaluator` builder and run loop
/// - Parallel and sequential dispatch
/// - Per-partition failure isolation and timeouts
pub mod executor;

/// Input validation.
///
/// Provides:
/// - `Validator` with static fail-fast checks
/// - Strategy parameter and evaluator configuration checks
pub mod validator;

/// Output structures.
///
/// Provides:
/// - `MetricRecord` and `RecordOutcome`
/// - `ResampleResult` container
pub mod output;
