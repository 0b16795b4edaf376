//! Main Mastermind solver interface

use super::candidates::CandidateSet;
use super::strategy::Strategy;
use crate::core::{Code, Color, Score};

/// Main Mastermind solver
///
/// Owns its candidate set, so any number of solvers can run side by side.
/// One round is [`take_guess`](Self::take_guess), then
/// [`eliminate`](Self::eliminate) with the judged score, then
/// [`advance`](Self::advance).
#[derive(Debug, Clone)]
pub struct Solver<S: Strategy> {
    strategy: S,
    candidates: CandidateSet,
    current: Code,
}

impl<S: Strategy> Solver<S> {
    /// Opening guess: green, darkblue, darkblue, beige, beige (slot 0 first)
    pub const DEFAULT_SEED: Code = Code::from_colors([
        Color::Green,
        Color::DarkBlue,
        Color::DarkBlue,
        Color::Beige,
        Color::Beige,
    ]);

    /// Create a solver that opens with [`Self::DEFAULT_SEED`]
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self::with_seed(strategy, Self::DEFAULT_SEED)
    }

    /// Create a solver with a custom opening guess
    #[must_use]
    pub fn with_seed(strategy: S, seed: Code) -> Self {
        Self {
            strategy,
            candidates: CandidateSet::new(),
            current: seed,
        }
    }

    /// The guess that will be (or was just) sent
    #[must_use]
    pub const fn current_guess(&self) -> Code {
        self.current
    }

    /// Codes still consistent with all feedback
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Mark the current guess as tried and return it
    ///
    /// A tried code is never proposed again, whatever its feedback.
    pub fn take_guess(&mut self) -> Code {
        self.candidates.eliminate(self.current);
        self.current
    }

    /// Drop every candidate that would not have scored `observed` against
    /// the current guess
    ///
    /// Returns how many candidates were eliminated.
    pub fn eliminate(&mut self, observed: Score) -> usize {
        self.candidates.retain_consistent(self.current, observed)
    }

    /// Choose the next guess with the strategy
    ///
    /// Returns `None` if no candidate remains, which means the feedback was
    /// inconsistent with every code.
    pub fn advance(&mut self) -> Option<Code> {
        let next = self.strategy.select_guess(&self.candidates)?;
        self.current = next;
        Some(next)
    }
}
