//! Monte-Carlo and single validation splitting.
//!
//! ## Purpose
//!
//! This module implements [`MonteCarlo`] resampling (repeated random
//! train/holdout splits) and the [`ValidationSplit`] strategy that produces
//! exactly one independent held-out set.
//!
//! ## Design notes
//!
//! * Each repetition independently samples `round(prop * n)` rows without
//!   replacement into the analysis set; the assessment set is the exact
//!   complement within that repetition.
//! * Overlap of analysis sets across repetitions is expected and is not an
//!   error; only within one repetition are the two sides disjoint.
//! * Stratified variants sample `round(prop * m)` rows per stratum of size
//!   `m`, preserving proportions to within one row. Rounding is half away
//!   from zero (`f64::round`).
//! * A proportion that leaves either side of any stratum empty is rejected
//!   at generation time as `InvalidParameter`.
//! * [`ValidationSplit`] is Monte-Carlo with a single repetition and its
//!   own label; it exists separately because it models a one-shot
//!   validation set rather than a cyclical partitioning of the same data.
//!
//! ## Invariants
//!
//! * Within a repetition, analysis and assessment are disjoint and their
//!   union covers every row exactly once.
//! * The unstratified analysis size equals `round(prop * n_rows)`.
//! * Plans regenerate identically for the same seed and parameters.
//!
//! ## Non-goals
//!
//! * This module does not sample with replacement (see
//!   [`Bootstrap`](crate::strategies::bootstrap::Bootstrap)).
//!
//! ## Visibility
//!
//! [`MonteCarlo`] and [`ValidationSplit`] are part of the public API,
//! normally reached through the [`Resample`](crate::api::Resample) entry
//! points.

use crate::engine::validator::Validator;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::ResampleError;
use crate::primitives::partition::{Partition, ResamplingPlan};
use crate::primitives::traits::SplitStrategy;
use crate::strategies::stratify::{numbered_label, resolve_seed, rng_for, shuffled, stratum_indices};
use num_traits::Float;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Shared Sampling
// ============================================================================

/// Draw one proportional analysis/assessment split across all strata.
fn proportional_split(
    strata: &[Vec<usize>],
    prop: f64,
    n_rows: usize,
    rng: &mut ChaCha8Rng,
) -> (Vec<usize>, Vec<usize>) {
    let mut analysis = Vec::new();
    for stratum in strata {
        let take = (prop * stratum.len() as f64).round() as usize;
        analysis.extend_from_slice(&shuffled(stratum, rng)[..take]);
    }
    analysis.sort_unstable();

    let mut drawn = vec![false; n_rows];
    for &row in &analysis {
        drawn[row] = true;
    }
    let assessment = (0..n_rows).filter(|&row| !drawn[row]).collect();

    (analysis, assessment)
}

/// Reject proportions that leave any stratum one-sided.
fn check_occupancy(strata: &[Vec<usize>], prop: f64) -> Result<(), ResampleError> {
    for stratum in strata {
        let take = (prop * stratum.len() as f64).round() as usize;
        Validator::validate_split_occupancy("prop", take, stratum.len())?;
    }
    Ok(())
}

// ============================================================================
// Monte-Carlo
// ============================================================================

/// Repeated random train/holdout splitting.
#[derive(Debug, Clone)]
pub struct MonteCarlo {
    /// Proportion of rows sampled into the analysis set.
    pub prop: f64,

    /// Number of repetitions.
    pub times: usize,

    /// Optional stratification column.
    pub stratify: Option<String>,

    /// Seed for reproducible sampling.
    pub seed: Option<u64>,
}

impl MonteCarlo {
    /// Create a Monte-Carlo strategy with the given analysis proportion and
    /// repetition count.
    pub fn new(prop: f64, times: usize) -> Self {
        Self {
            prop,
            times,
            stratify: None,
            seed: None,
        }
    }

    /// Stratify sampling by the named column.
    pub fn stratify(mut self, column: &str) -> Self {
        self.stratify = Some(column.to_string());
        self
    }

    /// Set the seed for reproducible sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl<T: Float> SplitStrategy<T> for MonteCarlo {
    fn generate(&self, dataset: &Dataset<T>) -> Result<ResamplingPlan, ResampleError> {
        let n = dataset.n_rows();
        Validator::validate_proportion("prop", self.prop)?;
        Validator::validate_repetitions("times", self.times)?;

        let strata = stratum_indices(dataset, self.stratify.as_deref())?;
        check_occupancy(&strata, self.prop)?;

        let seed = resolve_seed(self.seed);
        let mut rng = rng_for(seed);

        let partitions = (0..self.times)
            .map(|rep| {
                let (analysis, assessment) = proportional_split(&strata, self.prop, n, &mut rng);
                Partition {
                    index: rep,
                    label: numbered_label("Resample", rep, self.times),
                    analysis,
                    assessment,
                }
            })
            .collect();

        Ok(ResamplingPlan::new("monte_carlo", n, seed, partitions, Vec::new()))
    }
}

// ============================================================================
// Validation Split
// ============================================================================

/// A single proportional training/validation split.
#[derive(Debug, Clone)]
pub struct ValidationSplit {
    /// Proportion of rows placed in the training (analysis) side.
    pub prop: f64,

    /// Optional stratification column.
    pub stratify: Option<String>,

    /// Seed for reproducible sampling.
    pub seed: Option<u64>,
}

impl ValidationSplit {
    /// Create a validation split with the given training proportion.
    pub fn new(prop: f64) -> Self {
        Self {
            prop,
            stratify: None,
            seed: None,
        }
    }

    /// Stratify the split by the named column.
    pub fn stratify(mut self, column: &str) -> Self {
        self.stratify = Some(column.to_string());
        self
    }

    /// Set the seed for reproducible sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl<T: Float> SplitStrategy<T> for ValidationSplit {
    fn generate(&self, dataset: &Dataset<T>) -> Result<ResamplingPlan, ResampleError> {
        let n = dataset.n_rows();
        Validator::validate_proportion("prop", self.prop)?;

        let strata = stratum_indices(dataset, self.stratify.as_deref())?;
        check_occupancy(&strata, self.prop)?;

        let seed = resolve_seed(self.seed);
        let mut rng = rng_for(seed);
        let (analysis, assessment) = proportional_split(&strata, self.prop, n, &mut rng);

        let partition = Partition {
            index: 0,
            label: "Validation".to_string(),
            analysis,
            assessment,
        };

        Ok(ResamplingPlan::new(
            "validation_split",
            n,
            seed,
            vec![partition],
            Vec::new(),
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
