//! Shannon entropy ranking of candidate guesses
//!
//! Each guess partitions the remaining candidates by the feedback pattern
//! it would receive against them; the entropy of that distribution is the
//! expected information gain in bits. Scanning the whole guess pool is the
//! dominant cost, O(|pool| × |candidates| × L), so the scan runs on rayon.

use super::SolveError;
use crate::core::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// One row of the ranked output table
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    /// The candidate next guess
    pub word: Word,
    /// Expected information gain in bits
    pub entropy: f64,
}

/// Detailed metrics for a single guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest partition (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Bucket the candidates by the pattern `guess` would produce against each
fn pattern_distribution(
    guess: &Word,
    candidates: &[Word],
) -> Result<FxHashMap<Pattern, usize>, SolveError> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate)?;
        *counts.entry(pattern).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Shannon entropy of a pattern→count distribution
///
/// H = -Σ p·log₂(p), in bits. Zero-count buckets contribute nothing;
/// buckets built from actual counts never contain them anyway.
///
/// # Properties
/// - 0 for a single-bucket distribution (the guess teaches nothing)
/// - log₂(k) for k equally-sized buckets
/// - never negative
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected information gain of one guess against the candidate set
///
/// Returns 0.0 for an empty candidate slice.
///
/// # Errors
/// Fails with `InvalidWordLength` when the guess length differs from the
/// candidates' length.
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> Result<f64, SolveError> {
    if candidates.is_empty() {
        return Ok(0.0);
    }

    let counts = pattern_distribution(guess, candidates)?;
    Ok(shannon_entropy(&counts))
}

/// Entropy plus partition statistics for one guess
///
/// The extra numbers drive the display: how many candidates are expected to
/// survive, and the worst case over all feedback outcomes.
///
/// # Errors
/// Fails with `EmptyCandidateSet` on an empty candidate slice, or
/// `InvalidWordLength` on a length mismatch.
pub fn guess_metrics(guess: &Word, candidates: &[Word]) -> Result<GuessMetrics, SolveError> {
    if candidates.is_empty() {
        return Err(SolveError::EmptyCandidateSet);
    }

    let counts = pattern_distribution(guess, candidates)?;
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(&counts);

    let expected_remaining = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = counts.values().copied().max().unwrap_or(0);

    Ok(GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    })
}

/// Score every pool word and return the table sorted by descending entropy
///
/// Ties keep the guess pool's original relative order (stable sort), so a
/// lexicographically sorted pool yields a lexicographic tie order. The scan
/// is parallel but deterministic: scores are collected in pool order before
/// sorting.
///
/// # Errors
/// Fails with `EmptyCandidateSet` when `candidates` is empty — the stated
/// history is inconsistent with every pool word — and `InvalidWordLength`
/// when any pool word's length differs from the candidates' length.
pub fn rank(guess_pool: &[Word], candidates: &[Word]) -> Result<Vec<ScoredGuess>, SolveError> {
    if candidates.is_empty() {
        return Err(SolveError::EmptyCandidateSet);
    }

    let mut table: Vec<ScoredGuess> = guess_pool
        .par_iter()
        .map(|guess| -> Result<ScoredGuess, SolveError> {
            let entropy = calculate_entropy(guess, candidates)?;
            Ok(ScoredGuess {
                word: guess.clone(),
                entropy,
            })
        })
        .collect::<Result<_, SolveError>>()?;

    table.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));

    Ok(table)
}
