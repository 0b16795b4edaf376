//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the code with the lowest maximum remaining candidates and that
/// value, or `None` if the guess pool is empty. Ties go to the earliest code
/// in `guess_pool`.
#[must_use]
pub fn select_best_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<(Code, usize)> {
    guess_pool
        .par_iter()
        .map(|&guess| (guess, calculate_max_remaining(guess, candidates)))
        .min_by_key(|&(_, max)| max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<Code> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let candidates = codes(&["bbbbb", "ddddd", "ggggg"]);
        // wwwww cannot tell the candidates apart, bbdss can
        let pool = codes(&["wwwww", "bbdss"]);

        let (best, max) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best, pool[1]);
        assert_eq!(max, 1);
    }

    #[test]
    fn ties_go_to_first_in_pool() {
        let candidates = codes(&["ooooo"]);
        let pool = codes(&["bbbbb", "ddddd", "ggggg"]);

        for _ in 0..10 {
            let (best, max) = select_best_guess(&pool, &candidates).unwrap();
            assert_eq!(best, pool[0]);
            assert_eq!(max, 1);
        }
    }

    #[test]
    fn returns_none_on_empty_pool() {
        let candidates = codes(&["bdgor"]);
        assert!(select_best_guess(&[], &candidates).is_none());
    }
}
