//! Stratification and shared randomization helpers.
//!
//! ## Purpose
//!
//! This module groups dataset rows into strata for stratified splitting and
//! hosts the small helpers every randomized strategy shares: seed
//! resolution, deterministic shuffling, and partition labelling.
//!
//! ## Design notes
//!
//! * Stratified variants split each stratum independently and concatenate
//!   the resulting index sets, guaranteeing each stratum's proportional
//!   representation in every fold or repetition (±1 row from integer
//!   rounding).
//! * Categorical columns stratify by level. Numeric columns are binned into
//!   quartiles first, the convention of the resampling ecosystem this crate
//!   follows.
//! * All randomness flows through `ChaCha8Rng` seeded from a `u64`, so a
//!   plan regenerated with the same seed is index-for-index identical.
//!
//! ## Invariants
//!
//! * Every row index appears in exactly one stratum.
//! * Strata are returned in level order (categorical) or bin order
//!   (numeric); empty strata are dropped.
//! * `shuffled` is a pure function of the RNG state and input order.
//!
//! ## Non-goals
//!
//! * This module does not decide fold membership (strategy responsibility).
//! * This module does not re-bin or re-level columns beyond quartile
//!   binning for numeric stratification keys.
//!
//! ## Visibility
//!
//! Internal to the strategy layer; not part of the public API.

use crate::primitives::dataset::{Column, Dataset};
use crate::primitives::errors::ResampleError;
use num_traits::Float;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of bins used when stratifying on a numeric column.
const NUMERIC_STRATA: usize = 4;

// ============================================================================
// Seeds and Shuffling
// ============================================================================

/// Resolve an optional user seed, drawing one from the thread RNG when unset.
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::thread_rng().gen())
}

/// Deterministic RNG for a resolved seed.
pub(crate) fn rng_for(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Return `indices` in a fresh, RNG-determined order.
pub(crate) fn shuffled(indices: &[usize], rng: &mut ChaCha8Rng) -> Vec<usize> {
    let mut out = indices.to_vec();
    out.shuffle(rng);
    out
}

// ============================================================================
// Stratum Construction
// ============================================================================

/// Group all row indices into strata by the given column.
///
/// When `column` is `None`, a single stratum containing every row is
/// returned, which makes unstratified splitting a degenerate case of the
/// stratified path.
pub(crate) fn stratum_indices<T: Float>(
    dataset: &Dataset<T>,
    column: Option<&str>,
) -> Result<Vec<Vec<usize>>, ResampleError> {
    let Some(name) = column else {
        return Ok(vec![(0..dataset.n_rows()).collect()]);
    };

    match dataset.column(name)? {
        Column::Categorical { levels, codes } => {
            let mut strata = vec![Vec::new(); levels.len()];
            for (row, &code) in codes.iter().enumerate() {
                strata[code as usize].push(row);
            }
            strata.retain(|s| !s.is_empty());
            Ok(strata)
        }
        Column::Numeric(values) => Ok(quartile_strata(values)),
    }
}

/// Bin numeric values into quartile strata.
fn quartile_strata<T: Float>(values: &[T]) -> Vec<Vec<usize>> {
    let mut sorted: Vec<T> = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));

    // Upper edges of the first three quartiles; the last bin is unbounded.
    let n = sorted.len();
    let breaks: Vec<T> = (1..NUMERIC_STRATA)
        .map(|q| sorted[(n * q / NUMERIC_STRATA).min(n - 1)])
        .collect();

    let mut strata = vec![Vec::new(); NUMERIC_STRATA];
    for (row, &v) in values.iter().enumerate() {
        let bin = breaks.iter().take_while(|&&b| v > b).count();
        strata[bin].push(row);
    }
    strata.retain(|s| !s.is_empty());
    strata
}

// ============================================================================
// Labels
// ============================================================================

/// Zero-padded partition label, e.g. `Fold01` or `Bootstrap12`.
pub(crate) fn numbered_label(prefix: &str, index: usize, total: usize) -> String {
    let width = total.to_string().len().max(2);
    format!("{}{:0width$}", prefix, index + 1, width = width)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::dataset::Dataset;

    #[test]
    fn categorical_strata_cover_all_rows_in_level_order() {
        let data = Dataset::<f64>::builder()
            .numeric("x", vec![0.0; 6])
            .categorical("class", &["b", "a", "b", "a", "b", "a"])
            .build()
            .unwrap();
        let strata = stratum_indices(&data, Some("class")).unwrap();
        // Level "b" interned first.
        assert_eq!(strata, vec![vec![0, 2, 4], vec![1, 3, 5]]);
    }

    #[test]
    fn no_column_yields_single_stratum() {
        let data = Dataset::<f64>::builder()
            .numeric("x", vec![1.0, 2.0, 3.0])
            .build()
            .unwrap();
        let strata = stratum_indices(&data, None).unwrap();
        assert_eq!(strata, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn numeric_strata_bin_into_quartiles() {
        let values: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let data = Dataset::builder().numeric("x", values).build().unwrap();
        let strata = stratum_indices(&data, Some("x")).unwrap();
        assert_eq!(strata.len(), 4);
        let mut all: Vec<usize> = strata.into_iter().flatten().collect();
        all.sort_unstable();
        assert_eq!(all, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let indices: Vec<usize> = (0..10).collect();
        let a = shuffled(&indices, &mut rng_for(7));
        let b = shuffled(&indices, &mut rng_for(7));
        assert_eq!(a, b);
        let c = shuffled(&indices, &mut rng_for(8));
        assert_ne!(a, c);
    }

    #[test]
    fn labels_pad_to_total_width() {
        assert_eq!(numbered_label("Fold", 0, 5), "Fold01");
        assert_eq!(numbered_label("Bootstrap", 11, 120), "Bootstrap012");
    }
}
