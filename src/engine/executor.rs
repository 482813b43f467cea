//! Execution engine for the fit/assess loop.
//!
//! ## Purpose
//!
//! This module provides the [`Evaluator`]: it consumes a resampling plan,
//! fits the configured estimator on each partition's analysis rows, scores
//! the held-out assessment rows with the requested metrics, and collects
//! one [`MetricRecord`] per (partition, metric) pair.
//!
//! ## Design notes
//!
//! * Partitions are independent and share only read-only access to the
//!   immutable dataset, so the loop is embarrassingly parallel. With the
//!   `parallel` feature (default) partitions are dispatched across a rayon
//!   worker pool; `sequential()` opts out.
//! * Record order never depends on completion order: the reduction keys on
//!   partition identity, so parallel and sequential runs produce identical
//!   record sequences.
//! * Failure isolation: a fit error, prediction error, length mismatch,
//!   empty assessment set, or timeout on one partition becomes a set of
//!   failed records for that partition and never aborts the rest of the
//!   run. A single degenerate fold must not invalidate the whole
//!   resampling estimate.
//! * With a timeout configured, each partition's fit/predict unit runs on
//!   a detached worker thread and is abandoned when `recv_timeout`
//!   expires; the partition is recorded as timed out.
//! * Fitted models are discarded immediately after scoring unless
//!   `retain_models(true)` is set.
//!
//! ## Key concepts
//!
//! ### Per-Partition Unit
//!
//! For each partition: subset analysis rows → `fit` → subset assessment
//! rows → `predict` → check the prediction count → score every metric
//! against the assessment outcome column.
//!
//! ## Invariants
//!
//! * Exactly `plan.len() * n_metrics` records are produced per run.
//! * Records appear in partition order, metrics in request order.
//! * The dataset is never mutated; no partition holds a lock on another
//!   partition's resources.
//!
//! ## Non-goals
//!
//! * This module does not fit models itself (estimator responsibility).
//! * This module does not aggregate records (see
//!   [`evaluation::aggregate`](crate::evaluation::aggregate)).
//! * This module does not cancel sibling partitions mid-run.
//!
//! ## Visibility
//!
//! [`Evaluator`] is part of the public API and the primary entry point for
//! resample evaluation.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::output::{MetricRecord, RecordOutcome, ResampleResult};
use crate::engine::validator::Validator;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::ResampleError;
use crate::primitives::partition::{Partition, ResamplingPlan};
use crate::primitives::traits::{Estimator, Metric};
use core::time::Duration;
use num_traits::Float;
use std::sync::{mpsc, Arc};
use std::thread;

// ============================================================================
// Evaluator
// ============================================================================

/// Fits an estimator against every partition of a plan and scores the
/// held-out rows.
pub struct Evaluator<E, T> {
    estimator: Arc<E>,
    metrics: Vec<Box<dyn Metric<T>>>,
    outcome: Option<String>,
    retain_models: bool,
    timeout: Option<Duration>,
    sequential: bool,
}

type PartitionOutcome<T, M> = Result<(Vec<MetricRecord<T>>, Option<M>), ResampleError>;

impl<E, T> Evaluator<E, T>
where
    E: Estimator<T> + 'static,
    T: Float + Send + Sync + 'static,
{
    /// Create an evaluator for the given estimator.
    pub fn new(estimator: E) -> Self {
        Self {
            estimator: Arc::new(estimator),
            metrics: Vec::new(),
            outcome: None,
            retain_models: false,
            timeout: None,
            sequential: false,
        }
    }

    /// Name the numeric column holding the truth values.
    pub fn outcome(mut self, column: &str) -> Self {
        self.outcome = Some(column.to_string());
        self
    }

    /// Add a metric to compute on every partition.
    pub fn metric<M: Metric<T> + 'static>(mut self, metric: M) -> Self {
        self.metrics.push(Box::new(metric));
        self
    }

    /// Add several metrics at once, in the given order.
    pub fn metrics(mut self, metrics: Vec<Box<dyn Metric<T>>>) -> Self {
        self.metrics.extend(metrics);
        self
    }

    /// Keep each partition's fitted model in the result.
    ///
    /// Off by default; retained models can dominate memory for large
    /// plans.
    pub fn retain_models(mut self, retain: bool) -> Self {
        self.retain_models = retain;
        self
    }

    /// Convert any partition exceeding `timeout` into an isolated failure.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Evaluate partitions one at a time on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.sequential = true;
        self
    }

    // ========================================================================
    // Run
    // ========================================================================

    /// Evaluate the plan against the dataset.
    pub fn run(
        &self,
        dataset: &Dataset<T>,
        plan: &ResamplingPlan,
    ) -> Result<ResampleResult<T, E::Model>, ResampleError> {
        let outcome = self.outcome.as_deref().ok_or(ResampleError::InvalidParameter {
            param: "outcome",
            reason: "the truth column must be named before running".to_string(),
        })?;
        Validator::validate_metrics(self.metrics.len())?;
        Validator::validate_outcome(dataset, outcome)?;
        Validator::validate_plan_rows(plan.n_rows(), dataset.n_rows())?;
        if let Some(timeout) = self.timeout {
            Validator::validate_timeout(timeout)?;
        }

        let outcomes = self.dispatch(dataset, outcome, plan);

        let mut records = Vec::with_capacity(plan.len() * self.metrics.len());
        let mut models = self.retain_models.then(|| Vec::with_capacity(plan.len()));
        for scored in outcomes {
            let (partition_records, model) = scored?;
            records.extend(partition_records);
            if let Some(models) = models.as_mut() {
                models.push(model);
            }
        }

        Ok(ResampleResult::new(records, models, plan.len()))
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    #[cfg(feature = "parallel")]
    fn dispatch(
        &self,
        dataset: &Dataset<T>,
        outcome: &str,
        plan: &ResamplingPlan,
    ) -> Vec<PartitionOutcome<T, E::Model>> {
        if self.sequential {
            self.dispatch_serial(dataset, outcome, plan)
        } else {
            // Indexed collection keys results on partition identity, so
            // the output never depends on completion order.
            plan.partitions()
                .par_iter()
                .map(|partition| self.score_partition(dataset, outcome, partition))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn dispatch(
        &self,
        dataset: &Dataset<T>,
        outcome: &str,
        plan: &ResamplingPlan,
    ) -> Vec<PartitionOutcome<T, E::Model>> {
        self.dispatch_serial(dataset, outcome, plan)
    }

    fn dispatch_serial(
        &self,
        dataset: &Dataset<T>,
        outcome: &str,
        plan: &ResamplingPlan,
    ) -> Vec<PartitionOutcome<T, E::Model>> {
        plan.iter()
            .map(|partition| self.score_partition(dataset, outcome, partition))
            .collect()
    }

    // ========================================================================
    // Per-Partition Unit
    // ========================================================================

    fn score_partition(
        &self,
        dataset: &Dataset<T>,
        outcome: &str,
        partition: &Partition,
    ) -> PartitionOutcome<T, E::Model> {
        if partition.assessment.is_empty() {
            let cause = ResampleError::DegenerateSample {
                partition: partition.index,
                reason: "assessment set is empty".to_string(),
            };
            return Ok((self.failed_records(partition, cause), None));
        }

        let analysis = dataset.subset(&partition.analysis)?;
        let assessment = dataset.subset(&partition.assessment)?;
        let truth = assessment.numeric(outcome)?.to_vec();

        let fitted = self.fit_predict(partition.index, analysis, assessment, outcome);
        let (model, predictions) = match fitted {
            Ok(fitted) => fitted,
            Err(cause) => return Ok((self.failed_records(partition, cause), None)),
        };

        if predictions.len() != truth.len() {
            let cause = ResampleError::PredictFailure {
                partition: partition.index,
                cause: format!(
                    "returned {} predictions for {} assessment rows",
                    predictions.len(),
                    truth.len()
                ),
            };
            return Ok((self.failed_records(partition, cause), None));
        }

        let records = self
            .metrics
            .iter()
            .map(|metric| MetricRecord {
                partition: partition.index,
                label: partition.label.clone(),
                metric: metric.name(),
                outcome: RecordOutcome::Value(metric.compute(&predictions, &truth)),
            })
            .collect();

        Ok((records, self.retain_models.then_some(model)))
    }

    /// Run fit + predict, bounded by the configured timeout.
    fn fit_predict(
        &self,
        index: usize,
        analysis: Dataset<T>,
        assessment: Dataset<T>,
        outcome: &str,
    ) -> Result<(E::Model, Vec<T>), ResampleError> {
        match self.timeout {
            None => fit_predict_direct(&*self.estimator, index, &analysis, &assessment, outcome),
            Some(limit) => {
                let estimator = Arc::clone(&self.estimator);
                let outcome = outcome.to_string();
                let (tx, rx) = mpsc::channel();

                // The worker is detached: on timeout it keeps running but
                // its result is discarded with the closed channel.
                thread::spawn(move || {
                    let _ = tx.send(fit_predict_direct(
                        &*estimator,
                        index,
                        &analysis,
                        &assessment,
                        &outcome,
                    ));
                });

                rx.recv_timeout(limit)
                    .unwrap_or(Err(ResampleError::PartitionTimeout { partition: index }))
            }
        }
    }

    /// One failed record per requested metric.
    fn failed_records(
        &self,
        partition: &Partition,
        cause: ResampleError,
    ) -> Vec<MetricRecord<T>> {
        self.metrics
            .iter()
            .map(|metric| MetricRecord {
                partition: partition.index,
                label: partition.label.clone(),
                metric: metric.name(),
                outcome: RecordOutcome::Failed(cause.clone()),
            })
            .collect()
    }
}

fn fit_predict_direct<E, T>(
    estimator: &E,
    index: usize,
    analysis: &Dataset<T>,
    assessment: &Dataset<T>,
    outcome: &str,
) -> Result<(E::Model, Vec<T>), ResampleError>
where
    E: Estimator<T>,
    T: Float,
{
    let model = estimator
        .fit(analysis, outcome)
        .map_err(|cause| ResampleError::FitFailure {
            partition: index,
            cause,
        })?;
    let predictions = estimator
        .predict(&model, assessment)
        .map_err(|cause| ResampleError::PredictFailure {
            partition: index,
            cause,
        })?;
    Ok((model, predictions))
}

// ============================================================================
// Tests
// ============================================================================
