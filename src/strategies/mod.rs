//! Layer 2: Strategies
//!
//! Split-strategy variants.
//!
//! This layer maps a dataset and strategy parameters to an ordered sequence
//! of analysis/assessment partitions. Generation is single-threaded and
//! deterministic given a seed; all randomness flows through a seedable
//! `ChaCha8Rng`.
//!
//! # Module Organization
//!
//! - **vfold**: V-fold (plain, repeated, stratified) and leave-one-out
//! - **montecarlo**: Monte-Carlo splits and the single validation split
//! - **bootstrap**: With-replacement sampling with out-of-bag assessment
//! - **rolling**: Rolling-origin windows for ordered data
//! - **stratify**: Shared stratification and randomization helpers
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
//! Layer 2: Strategies ← You are here
//!   ↓
//! Layer 1: Primitives (dataset, partition, traits, errors)
//! ```

/// V-fold and leave-one-out splitting.
///
/// Provides:
/// - `VFold` with repeats and stratification
/// - `LeaveOneOut` exhaustive splitting
pub mod vfold;

/// Monte-Carlo and validation splitting.
///
/// Provides:
/// - `MonteCarlo` repeated random holdouts
/// - `ValidationSplit` single train/validation partitions
pub mod montecarlo;

/// Bootstrap resampling.
///
/// Provides:
/// - `Bootstrap` with-replacement draws
/// - Out-of-bag assessment sets and degeneracy warnings
pub mod bootstrap;

/// Rolling-origin splitting.
///
/// Provides:
/// - Sliding and cumulative analysis windows
/// - Ordering-key verification for time data
pub mod rolling;

/// Stratification helpers.
///
/// Provides:
/// - Stratum construction by level or quartile bin
/// - Seed resolution and deterministic shuffling
/// - Partition labelling
pub(crate) mod stratify;
