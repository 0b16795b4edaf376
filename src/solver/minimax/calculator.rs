//! Minimax worst-case calculation for Mastermind scores
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible score.

use crate::core::{Code, Score};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each score that could result from this guess:
/// - Count how many candidates would produce that score
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::solver::minimax::calculate_max_remaining;
///
/// let guess: Code = "bdgor".parse().unwrap();
/// let candidates: Vec<Code> = ["bdgor", "rogdb", "wwwww"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// // Every candidate scores differently
/// assert_eq!(calculate_max_remaining(guess, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    group_by_score(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the score they produce with the guess
fn group_by_score(guess: Code, candidates: &[Code]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let score = Score::calculate(guess, candidate);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}
