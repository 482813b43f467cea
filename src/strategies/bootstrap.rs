//! Bootstrap resampling with out-of-bag assessment sets.
//!
//! ## Purpose
//!
//! This module implements the [`Bootstrap`] strategy: each repetition draws
//! an analysis sample equal in size to the dataset with replacement, and the
//! assessment set is the out-of-bag set of rows never drawn.
//!
//! ## Design notes
//!
//! * The analysis side is a multiset: a row drawn twice appears twice, and
//!   the subset handed to the estimator repeats that row.
//! * Stratified bootstrapping draws each stratum's sample from within that
//!   stratum, so every repetition keeps the stratum sizes of the source.
//! * An empty out-of-bag set (vanishingly rare, but possible on tiny data)
//!   is not a generation failure: the partition is kept with an empty
//!   assessment side and a warning is recorded on the plan. The engine
//!   later converts it into a per-partition failed record.
//! * Analysis multisets are sorted ascending so plans compare and display
//!   deterministically.
//!
//! ## Invariants
//!
//! * Every repetition's analysis multiset has exactly `n_rows` draws
//!   (per-stratum: exactly the stratum size).
//! * The assessment set equals the complement of the distinct drawn
//!   indices.
//! * Plans regenerate identically for the same seed and parameters.
//!
//! ## Non-goals
//!
//! * This module does not compute bootstrap confidence intervals; it only
//!   generates partitions.
//!
//! ## Visibility
//!
//! [`Bootstrap`] is part of the public API, normally reached through the
//! [`Resample`](crate::api::Resample) entry points.

use crate::engine::validator::Validator;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::ResampleError;
use crate::primitives::partition::{Partition, ResamplingPlan};
use crate::primitives::traits::SplitStrategy;
use crate::strategies::stratify::{numbered_label, resolve_seed, rng_for, stratum_indices};
use num_traits::Float;
use rand::Rng;

// ============================================================================
// Bootstrap
// ============================================================================

/// Bootstrap resampling: with-replacement analysis samples and out-of-bag
/// assessment sets.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    /// Number of bootstrap repetitions.
    pub times: usize,

    /// Optional stratification column.
    pub stratify: Option<String>,

    /// Seed for reproducible draws.
    pub seed: Option<u64>,
}

impl Bootstrap {
    /// Create a bootstrap strategy with the given repetition count.
    pub fn new(times: usize) -> Self {
        Self {
            times,
            stratify: None,
            seed: None,
        }
    }

    /// Stratify draws by the named column.
    pub fn stratify(mut self, column: &str) -> Self {
        self.stratify = Some(column.to_string());
        self
    }

    /// Set the seed for reproducible draws.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl<T: Float> SplitStrategy<T> for Bootstrap {
    fn generate(&self, dataset: &Dataset<T>) -> Result<ResamplingPlan, ResampleError> {
        let n = dataset.n_rows();
        Validator::validate_repetitions("times", self.times)?;

        let strata = stratum_indices(dataset, self.stratify.as_deref())?;
        let seed = resolve_seed(self.seed);
        let mut rng = rng_for(seed);

        let mut partitions = Vec::with_capacity(self.times);
        let mut warnings = Vec::new();

        for rep in 0..self.times {
            let mut analysis = Vec::with_capacity(n);
            let mut drawn = vec![false; n];

            for stratum in &strata {
                for _ in 0..stratum.len() {
                    let row = stratum[rng.gen_range(0..stratum.len())];
                    drawn[row] = true;
                    analysis.push(row);
                }
            }
            analysis.sort_unstable();

            let assessment: Vec<usize> = (0..n).filter(|&row| !drawn[row]).collect();
            if assessment.is_empty() {
                warnings.push(format!(
                    "partition {}: out-of-bag set is empty; every row was drawn",
                    rep
                ));
            }

            partitions.push(Partition {
                index: rep,
                label: numbered_label("Bootstrap", rep, self.times),
                analysis,
                assessment,
            });
        }

        Ok(ResamplingPlan::new("bootstrap", n, seed, partitions, warnings))
    }
}

// ============================================================================
// Tests
// ============================================================================
