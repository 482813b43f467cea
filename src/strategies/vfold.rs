//! V-fold and leave-one-out splitting.
//!
//! ## Purpose
//!
//! This module implements [`VFold`] cross-validation splitting (including
//! repeated and stratified variants) and its exhaustive special case
//! [`LeaveOneOut`].
//!
//! ## Design notes
//!
//! * Rows are dealt into `v` mutually exclusive groups; each group serves
//!   once as the assessment set while the union of the rest is the analysis
//!   set.
//! * Group sizes differ by at most one row. Stratified splitting deals each
//!   stratum independently, so the ±1 guarantee holds per stratum.
//! * Each stratum's dealing starts at an RNG-chosen fold offset so the
//!   remainder rows do not systematically land in the first folds.
//! * Repeated v-fold derives one sub-seed per repeat from the master RNG,
//!   making every repeat independently shuffled yet fully reproducible.
//! * Leave-one-out is deterministic and needs no RNG: assessment sets are
//!   the singleton rows in order.
//!
//! ## Key concepts
//!
//! ### Fold Assignment
//!
//! Within each stratum the shuffled rows are dealt round-robin across the
//! `v` folds. Dealing (rather than chunking) is what guarantees the ±1 size
//! property without a separate remainder pass.
//!
//! ## Invariants
//!
//! * Assessment sets within one repeat are pairwise disjoint and their
//!   union covers every row exactly once.
//! * Analysis and assessment are disjoint within every partition.
//! * Plans regenerate identically for the same seed and parameters.
//!
//! ## Non-goals
//!
//! * This module does not fit or score models.
//! * This module does not support grouped (cluster-aware) folds.
//!
//! ## Visibility
//!
//! [`VFold`] and [`LeaveOneOut`] are part of the public API, normally
//! reached through the [`Resample`](crate::api::Resample) entry points.

use crate::engine::validator::Validator;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::ResampleError;
use crate::primitives::partition::{Partition, ResamplingPlan};
use crate::primitives::traits::SplitStrategy;
use crate::strategies::stratify::{numbered_label, resolve_seed, rng_for, shuffled, stratum_indices};
use num_traits::Float;
use rand::{Rng, RngCore};

// ============================================================================
// V-Fold
// ============================================================================

/// V-fold cross-validation splitting.
#[derive(Debug, Clone)]
pub struct VFold {
    /// Number of folds.
    pub v: usize,

    /// Number of independent repetitions.
    pub repeats: usize,

    /// Optional stratification column.
    pub stratify: Option<String>,

    /// Seed for reproducible fold assignment.
    pub seed: Option<u64>,
}

impl VFold {
    /// Create a v-fold strategy with `v` folds and a single repeat.
    pub fn new(v: usize) -> Self {
        Self {
            v,
            repeats: 1,
            stratify: None,
            seed: None,
        }
    }

    /// Set the number of independent repetitions.
    pub fn repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Stratify fold assignment by the named column.
    pub fn stratify(mut self, column: &str) -> Self {
        self.stratify = Some(column.to_string());
        self
    }

    /// Set the seed for reproducible fold assignment.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl<T: Float> SplitStrategy<T> for VFold {
    fn generate(&self, dataset: &Dataset<T>) -> Result<ResamplingPlan, ResampleError> {
        let n = dataset.n_rows();
        Validator::validate_fold_count(self.v, n)?;
        Validator::validate_repetitions("repeats", self.repeats)?;

        let strata = stratum_indices(dataset, self.stratify.as_deref())?;
        if self.stratify.is_some() {
            Validator::validate_stratified_folds(self.v, &strata)?;
        }

        let seed = resolve_seed(self.seed);
        let mut master = rng_for(seed);
        let mut partitions = Vec::with_capacity(self.v * self.repeats);

        for repeat in 0..self.repeats {
            let mut rng = rng_for(master.next_u64());

            // Deal every stratum's shuffled rows across the folds.
            let mut folds: Vec<Vec<usize>> = vec![Vec::new(); self.v];
            for stratum in &strata {
                let offset = rng.gen_range(0..self.v);
                for (j, &row) in shuffled(stratum, &mut rng).iter().enumerate() {
                    folds[(offset + j) % self.v].push(row);
                }
            }

            for (f, fold) in folds.into_iter().enumerate() {
                let mut assessment = fold;
                assessment.sort_unstable();

                let mut held = vec![false; n];
                for &row in &assessment {
                    held[row] = true;
                }
                let analysis: Vec<usize> = (0..n).filter(|&row| !held[row]).collect();

                let fold_label = numbered_label("Fold", f, self.v);
                let label = if self.repeats > 1 {
                    format!("Repeat{}.{}", repeat + 1, fold_label)
                } else {
                    fold_label
                };

                partitions.push(Partition {
                    index: partitions.len(),
                    label,
                    analysis,
                    assessment,
                });
            }
        }

        Ok(ResamplingPlan::new("vfold", n, seed, partitions, Vec::new()))
    }
}

// ============================================================================
// Leave-One-Out
// ============================================================================

/// Leave-one-out splitting: one singleton assessment set per row.
///
/// Exhaustive and therefore expensive on large datasets; prefer [`VFold`]
/// unless the dataset is small.
#[derive(Debug, Clone, Default)]
pub struct LeaveOneOut;

impl LeaveOneOut {
    /// Create a leave-one-out strategy.
    pub fn new() -> Self {
        Self
    }
}

impl<T: Float> SplitStrategy<T> for LeaveOneOut {
    fn generate(&self, dataset: &Dataset<T>) -> Result<ResamplingPlan, ResampleError> {
        let n = dataset.n_rows();
        // The caller configures nothing here, so report against the data.
        if n < 2 {
            return Err(ResampleError::InvalidParameter {
                param: "n_rows",
                reason: format!("leave-one-out requires at least 2 rows, got {}", n),
            });
        }

        let partitions = (0..n)
            .map(|row| Partition {
                index: row,
                label: numbered_label("Fold", row, n),
                analysis: (0..n).filter(|&r| r != row).collect(),
                assessment: vec![row],
            })
            .collect();

        Ok(ResamplingPlan::new("loo", n, 0, partitions, Vec::new()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_data(n: usize) -> Dataset<f64> {
        Dataset::builder()
            .numeric("x", (0..n).map(|i| i as f64).collect())
            .build()
            .unwrap()
    }

    #[test]
    fn assessment_sets_partition_the_rows() {
        let data = numeric_data(10);
        let plan = SplitStrategy::<f64>::generate(&VFold::new(3).seed(11), &data).unwrap();
        assert_eq!(plan.len(), 3);

        let mut seen = vec![0usize; 10];
        for partition in &plan {
            for &row in &partition.assessment {
                seen[row] += 1;
            }
            // Analysis and assessment are disjoint.
            assert!(partition.analysis.iter().all(|r| !partition.assessment.contains(r)));
            assert_eq!(partition.n_analysis() + partition.n_assessment(), 10);
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn fold_sizes_differ_by_at_most_one() {
        let data = numeric_data(10);
        let plan = SplitStrategy::<f64>::generate(&VFold::new(4).seed(3), &data).unwrap();
        let mut sizes: Vec<usize> = plan.iter().map(Partition::n_assessment).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![2, 2, 3, 3]);
    }

    #[test]
    fn stratified_folds_preserve_label_proportions() {
        let labels: Vec<&str> = (0..12).map(|i| if i < 8 { "pos" } else { "neg" }).collect();
        let data = Dataset::<f64>::builder()
            .numeric("x", (0..12).map(|i| i as f64).collect())
            .categorical("class", &labels)
            .build()
            .unwrap();

        let plan =
            SplitStrategy::<f64>::generate(&VFold::new(4).stratify("class").seed(5), &data)
                .unwrap();
        let codes = data.codes("class").unwrap();
        for partition in &plan {
            let pos = partition.assessment.iter().filter(|&&r| codes[r] == 0).count();
            let neg = partition.assessment.iter().filter(|&&r| codes[r] == 1).count();
            // 8 pos / 4 folds = 2 each; 4 neg / 4 folds = 1 each.
            assert_eq!(pos, 2);
            assert_eq!(neg, 1);
        }
    }

    #[test]
    fn stratified_fold_count_bounded_by_smallest_stratum() {
        let labels: Vec<&str> = (0..10).map(|i| if i < 8 { "pos" } else { "neg" }).collect();
        let data = Dataset::<f64>::builder()
            .numeric("x", (0..10).map(|i| i as f64).collect())
            .categorical("class", &labels)
            .build()
            .unwrap();
        let err =
            SplitStrategy::<f64>::generate(&VFold::new(4).stratify("class").seed(5), &data)
                .unwrap_err();
        assert!(matches!(err, ResampleError::InvalidParameter { param: "v", .. }));
    }

    #[test]
    fn repeated_vfold_produces_v_times_r_partitions() {
        let data = numeric_data(9);
        let plan =
            SplitStrategy::<f64>::generate(&VFold::new(3).repeats(2).seed(1), &data).unwrap();
        assert_eq!(plan.len(), 6);
        assert_eq!(plan.get(0).unwrap().label, "Repeat1.Fold01");
        assert_eq!(plan.get(5).unwrap().label, "Repeat2.Fold03");

        // Repeats are shuffled independently.
        let first: Vec<_> = plan.get(0).unwrap().assessment.clone();
        let fourth: Vec<_> = plan.get(3).unwrap().assessment.clone();
        assert_ne!(first, fourth);
    }

    #[test]
    fn same_seed_regenerates_identical_plans() {
        let data = numeric_data(20);
        let strategy = VFold::new(5).repeats(3).seed(99);
        let a = SplitStrategy::<f64>::generate(&strategy, &data).unwrap();
        let b = SplitStrategy::<f64>::generate(&strategy, &data).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fold_count_out_of_range_is_rejected() {
        let data = numeric_data(5);
        assert!(SplitStrategy::<f64>::generate(&VFold::new(1), &data).is_err());
        assert!(SplitStrategy::<f64>::generate(&VFold::new(6), &data).is_err());
    }

    #[test]
    fn leave_one_out_on_a_single_row_names_the_row_count() {
        let data = numeric_data(1);
        let err = SplitStrategy::<f64>::generate(&LeaveOneOut::new(), &data).unwrap_err();
        match err {
            ResampleError::InvalidParameter { param, reason } => {
                assert_eq!(param, "n_rows");
                assert!(reason.contains("at least 2 rows"));
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn leave_one_out_holds_each_row_once() {
        let data = numeric_data(6);
        let plan = SplitStrategy::<f64>::generate(&LeaveOneOut::new(), &data).unwrap();
        assert_eq!(plan.len(), 6);
        for (i, partition) in plan.iter().enumerate() {
            assert_eq!(partition.assessment, vec![i]);
            assert_eq!(partition.n_analysis(), 5);
        }
    }
}
