//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the primitive abstractions, data structures, and
//! contracts used throughout the crate. It has zero internal dependencies
//! within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (ResampleError)
//! - **dataset**: Immutable column-oriented tables
//! - **partition**: Analysis/assessment index pairs and plans
//! - **traits**: Capability contracts (SplitStrategy, Estimator, Metric)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine (executor, validator, output)
//!   ↓
//! Layer 3: Evaluation (metrics, aggregate)
//!   ↓
//! Layer 2: Strategies (vfold, montecarlo, bootstrap, rolling)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `ResampleError` enum
/// - Configuration-time and partition-level variants
pub mod errors;

/// Immutable dataset storage.
///
/// Provides:
/// - Column-oriented `Dataset` with numeric and categorical columns
/// - Schema-validating `DatasetBuilder`
/// - Multiset row subsetting
pub mod dataset;

/// Partition and plan types.
///
/// Provides:
/// - `Partition` index pairs
/// - Ordered, immutable `ResamplingPlan`
/// - Generation warnings for degenerate samples
pub mod partition;

/// Capability contracts.
///
/// Provides:
/// - `SplitStrategy` for plan generation
/// - `Estimator` for external fit/predict procedures
/// - `Metric` for scoring functions
pub mod traits;
