//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::candidates::CandidateSet;
use crate::core::Code;

/// A policy for choosing the next guess from the remaining candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// Returns `None` if no candidate remains.
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Highest-numbered remaining candidate (default)
    Highest(HighestStrategy),
    /// Knuth worst-case minimisation over the remaining candidates
    Minimax(MinimaxStrategy),
    /// Random remaining candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Code> {
        match self {
            Self::Highest(s) => s.select_guess(candidates),
            Self::Minimax(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 3] = ["highest", "minimax", "random"];

    /// Create strategy from name string
    ///
    /// Supported names: "highest" (alias "first"), "minimax" (alias "knuth"), "random".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "highest" | "first" => Some(Self::Highest(HighestStrategy)),
            "minimax" | "knuth" => Some(Self::Minimax(MinimaxStrategy::default())),
            "random" => Some(Self::Random(RandomStrategy)),
            _ => None,
        }
    }

    /// Canonical name of this strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Highest(_) => "highest",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Highest(HighestStrategy)
    }
}

/// Scan from the highest index downward and take the first remaining code
///
/// A simplification of Knuth's algorithm: every pick is consistent with all
/// feedback so far, but no look-ahead is done. Round counts depend on this
/// exact order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestStrategy;

impl Strategy for HighestStrategy {
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Code> {
        candidates.highest()
    }
}

/// Knuth's minimax criterion, restricted to remaining candidates
///
/// Scoring every candidate against every other is quadratic, so above
/// `max_candidates` remaining codes this falls back to [`HighestStrategy`].
#[derive(Debug, Clone, Copy)]
pub struct MinimaxStrategy {
    /// Run minimax only when at most this many candidates remain
    pub max_candidates: usize,
}

impl MinimaxStrategy {
    /// Create a minimax strategy
    ///
    /// # Parameters
    /// - `max_candidates`: largest candidate set evaluated with minimax (default: 1296)
    #[must_use]
    pub const fn new(max_candidates: usize) -> Self {
        Self { max_candidates }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(1296)
    }
}

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Code> {
        if candidates.remaining() > self.max_candidates {
            return candidates.highest();
        }

        // Descending order so ties go to the highest index
        let pool: Vec<Code> = candidates.iter().rev().collect();
        super::minimax::select_best_guess(&pool, &pool).map(|(best, _)| best)
    }
}

/// Random strategy
///
/// Uniformly random remaining candidate. Round counts are not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Code> {
        use rand::Rng;

        if candidates.is_empty() {
            return None;
        }
        let pick = rand::rng().random_range(0..candidates.remaining());
        candidates.iter().nth(pick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CODE_SPACE, Score};

    fn narrowed() -> CandidateSet {
        let mut set = CandidateSet::new();
        let guess: Code = "bbddg".parse().unwrap();
        set.retain_consistent(guess, Score::new(1, 2));
        let guess: Code = "orsvw".parse().unwrap();
        set.retain_consistent(guess, Score::new(1, 1));
        set
    }

    #[test]
    fn highest_picks_last_remaining() {
        let mut set = CandidateSet::new();
        assert_eq!(HighestStrategy.select_guess(&set), Some(Code::new(0x7fff)));

        set.eliminate(Code::new(0x7fff));
        assert_eq!(HighestStrategy.select_guess(&set), Some(Code::new(0x7ffe)));
    }

    #[test]
    fn highest_is_deterministic() {
        let set = narrowed();
        assert_eq!(
            HighestStrategy.select_guess(&set),
            HighestStrategy.select_guess(&set)
        );
    }

    #[test]
    fn minimax_falls_back_above_threshold() {
        let set = CandidateSet::new();
        let strategy = MinimaxStrategy::new(100);
        assert_eq!(strategy.select_guess(&set), set.highest());
    }

    #[test]
    fn minimax_returns_remaining_candidate() {
        let set = narrowed();
        let strategy = MinimaxStrategy::new(CODE_SPACE);
        let guess = strategy.select_guess(&set).unwrap();
        assert!(!set.is_eliminated(guess));
    }

    #[test]
    fn random_returns_remaining_candidate() {
        let set = narrowed();
        for _ in 0..20 {
            let guess = RandomStrategy.select_guess(&set).unwrap();
            assert!(!set.is_eliminated(guess));
        }
    }

    #[test]
    fn strategies_return_none_when_empty() {
        let mut set = CandidateSet::new();
        for code in Code::all() {
            set.eliminate(code);
        }
        assert_eq!(HighestStrategy.select_guess(&set), None);
        assert_eq!(MinimaxStrategy::default().select_guess(&set), None);
        assert_eq!(RandomStrategy.select_guess(&set), None);
    }

    #[test]
    fn from_name_known_and_unknown() {
        for name in StrategyType::NAMES {
            let strategy = StrategyType::from_name(name).unwrap();
            assert_eq!(strategy.name(), name);
        }
        assert!(matches!(
            StrategyType::from_name("knuth"),
            Some(StrategyType::Minimax(_))
        ));
        assert!(StrategyType::from_name("entropy").is_none());
    }

    #[test]
    fn minimax_default_threshold() {
        assert_eq!(MinimaxStrategy::default().max_candidates, 1296);
    }
}
