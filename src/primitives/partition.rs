//! Partition and resampling-plan types.
//!
//! ## Purpose
//!
//! This module defines the [`Partition`] pair (analysis indices, assessment
//! indices) and the [`ResamplingPlan`] that collects the ordered sequence of
//! partitions produced by one split-strategy invocation.
//!
//! ## Design notes
//!
//! * Partitions hold row indices only; they never copy dataset content, so
//!   plans are cheap to regenerate and safe to discard independently of the
//!   dataset's lifetime.
//! * Plans are immutable after generation and iterate in creation order.
//! * The analysis side is a multiset: bootstrap sampling draws rows with
//!   replacement, so indices may repeat. Index sets are emitted in ascending
//!   order for reproducible display and comparison.
//! * Non-fatal degeneracies discovered during generation (an empty
//!   out-of-bag set) are recorded as warnings on the plan rather than
//!   aborting generation.
//!
//! ## Invariants
//!
//! * Every index in every partition is below the plan's `n_rows`.
//! * Partition `index` fields equal their position in the plan.
//! * Within one partition, assessment indices are distinct; analysis
//!   indices may repeat only for strategies that sample with replacement.
//!
//! ## Non-goals
//!
//! * This module does not generate partitions (strategy responsibility).
//! * This module does not validate strategy-specific disjointness rules.
//!
//! ## Visibility
//!
//! Both types are part of the public API; the engine consumes plans
//! read-only.

// ============================================================================
// Partition
// ============================================================================

/// One analysis/assessment pair of row-index sets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Partition {
    /// Position of this partition within its plan.
    pub index: usize,

    /// Human-readable identifier, e.g. `Fold01` or `Bootstrap03`.
    pub label: String,

    /// Row indices used to fit a model. May contain repeats for
    /// with-replacement strategies.
    pub analysis: Vec<usize>,

    /// Held-out row indices used to score the fitted model.
    pub assessment: Vec<usize>,
}

impl Partition {
    /// Number of analysis draws (counting repeats).
    pub fn n_analysis(&self) -> usize {
        self.analysis.len()
    }

    /// Number of held-out rows.
    pub fn n_assessment(&self) -> usize {
        self.assessment.len()
    }
}

// ============================================================================
// Resampling Plan
// ============================================================================

/// Ordered sequence of partitions over one dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResamplingPlan {
    partitions: Vec<Partition>,
    n_rows: usize,
    strategy: &'static str,
    seed: u64,
    warnings: Vec<String>,
}

impl ResamplingPlan {
    /// Assemble a plan from generated partitions.
    ///
    /// Used by split strategies; callers normally receive plans rather than
    /// construct them.
    pub(crate) fn new(
        strategy: &'static str,
        n_rows: usize,
        seed: u64,
        partitions: Vec<Partition>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            partitions,
            n_rows,
            strategy,
            seed,
            warnings,
        }
    }

    /// Number of partitions in the plan.
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// Returns `true` if the plan holds no partitions.
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Row count of the source dataset the indices refer to.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Name of the strategy that generated this plan.
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    /// Seed the generating strategy used.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Non-fatal degeneracies recorded during generation.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Partition at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Partition> {
        self.partitions.get(index)
    }

    /// Iterate partitions in creation order.
    pub fn iter(&self) -> core::slice::Iter<'_, Partition> {
        self.partitions.iter()
    }

    /// All partitions as a slice.
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }
}

impl<'a> IntoIterator for &'a ResamplingPlan {
    type Item = &'a Partition;
    type IntoIter = core::slice::Iter<'a, Partition>;

    fn into_iter(self) -> Self::IntoIter {
        self.partitions.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_of_two() -> ResamplingPlan {
        let partitions = vec![
            Partition {
                index: 0,
                label: "Fold01".to_string(),
                analysis: vec![2, 3],
                assessment: vec![0, 1],
            },
            Partition {
                index: 1,
                label: "Fold02".to_string(),
                analysis: vec![0, 1],
                assessment: vec![2, 3],
            },
        ];
        ResamplingPlan::new("vfold", 4, 42, partitions, Vec::new())
    }

    #[test]
    fn iteration_preserves_creation_order() {
        let plan = plan_of_two();
        let labels: Vec<&str> = plan.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Fold01", "Fold02"]);
    }

    #[test]
    fn metadata_is_exposed() {
        let plan = plan_of_two();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.n_rows(), 4);
        assert_eq!(plan.strategy(), "vfold");
        assert_eq!(plan.seed(), 42);
        assert!(plan.warnings().is_empty());
        assert_eq!(plan.get(1).unwrap().n_assessment(), 2);
        assert!(plan.get(2).is_none());
    }
}
