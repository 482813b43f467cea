//! Resampling plans and cross-validated model evaluation.
//!
//! This crate builds reproducible resampling plans over immutable
//! column-oriented datasets and runs a fit/assess loop over them: each
//! partition pairs an analysis (training) index set with a disjoint or
//! out-of-bag assessment (testing) index set, an [`Estimator`] is fitted
//! per partition, and the held-out predictions are scored and aggregated
//! into per-metric performance estimates.
//!
//! ## Split strategies
//!
//! * **V-fold** cross-validation, with repeats and stratification
//! * **Leave-one-out** exhaustive splitting
//! * **Monte-Carlo** repeated random holdouts
//! * **Bootstrap** with-replacement draws assessed out-of-bag
//! * **Rolling-origin** sliding or cumulative windows for ordered data
//! * **Validation split** for a single train/validation partition
//!
//! All randomized strategies draw from a seedable `ChaCha8Rng`, so a plan
//! regenerates identically from its seed on any platform.
//!
//! ## Quick start
//!
//! Generate a plan:
//!
//! ```
//! use resample::prelude::*;
//!
//! let data = Dataset::builder()
//!     .numeric("y", (0..20).map(f64::from).collect())
//!     .build()
//!     .unwrap();
//!
//! let plan = Resample::vfold(5).seed(42).generate(&data).unwrap();
//! assert_eq!(plan.len(), 5);
//! ```
//!
//! Evaluate an estimator over it:
//!
//! ```
//! use resample::prelude::*;
//!
//! struct MeanEstimator;
//!
//! impl Estimator<f64> for MeanEstimator {
//!     type Model = f64;
//!
//!     fn fit(&self, analysis: &Dataset<f64>, outcome: &str) -> Result<f64, String> {
//!         let y = analysis.numeric(outcome).map_err(|e| e.to_string())?;
//!         Ok(y.iter().sum::<f64>() / y.len() as f64)
//!     }
//!
//!     fn predict(&self, model: &f64, assessment: &Dataset<f64>) -> Result<Vec<f64>, String> {
//!         Ok(vec![*model; assessment.n_rows()])
//!     }
//! }
//!
//! let data = Dataset::builder()
//!     .numeric("y", (0..30).map(f64::from).collect())
//!     .build()
//!     .unwrap();
//!
//! let plan = Resample::vfold(5).seed(42).generate(&data).unwrap();
//! let result = Evaluator::new(MeanEstimator)
//!     .outcome("y")
//!     .metric(Rmse)
//!     .metric(Mae)
//!     .run(&data, &plan)
//!     .unwrap();
//!
//! let summary = result.summarize().unwrap();
//! assert_eq!(summary.get("rmse").unwrap().n, 5);
//! ```
//!
//! ## Architecture
//!
//! The crate is organized in layers; each layer depends only on the ones
//! below it:
//!
//! ```text
//! Layer 5: API        (entry points, re-exports)
//!   ↓
//! Layer 4: Engine     (executor, validator, output)
//!   ↓
//! Layer 3: Evaluation (metrics, aggregate)
//!   ↓
//! Layer 2: Strategies (vfold, montecarlo, bootstrap, rolling)
//!   ↓
//! Layer 1: Primitives (dataset, partition, traits, errors)
//! ```
//!
//! ## Guarantees
//!
//! * **Determinism**: equal seed and parameters regenerate equal plans;
//!   evaluation output never depends on thread scheduling.
//! * **Isolation**: a failing partition becomes failed records, never a
//!   failed run.
//! * **Immutability**: datasets are never mutated; partitions address rows
//!   by index only.
//!
//! [`Estimator`]: crate::primitives::traits::Estimator

// Layer 1: Primitives
pub mod primitives;

// Layer 2: Strategies
pub mod strategies;

// Layer 3: Evaluation
pub mod evaluation;

// Layer 4: Engine
pub mod engine;

// Layer 5: API
pub mod api;

pub use api::{Resample, ResampleError, Result};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::api::{
        summarize, Accuracy, Column, Dataset, DatasetBuilder, Estimator, Evaluator, Mae,
        Metric, MetricRecord, MetricSummary, Partition, PerformanceSummary, RSquared,
        RecordOutcome, Resample, ResampleError, ResampleResult, ResamplingPlan, Rmse,
        SplitStrategy,
    };
}
