//! Red/white feedback calculation
//!
//! A score counts exact position matches ("red") and colors present at a
//! different position ("white").

use super::code::{Code, SLOTS};
use super::color::COLORS;
use std::fmt;

/// Feedback for one guess against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub red: u8,
    pub white: u8,
}

impl Score {
    /// All slots correct
    pub const PERFECT: Self = Self::new(SLOTS as u8, 0);

    /// Create a score
    ///
    /// # Panics
    /// Panics in debug mode if `red + white` exceeds the slot count
    #[inline]
    #[must_use]
    pub const fn new(red: u8, white: u8) -> Self {
        debug_assert!(red as usize + white as usize <= SLOTS, "score exceeds slot count");
        Self { red, white }
    }

    /// Check if this is an exact match
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.red as usize == SLOTS
    }

    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: count reds; every unmatched guess color goes into a
    ///    per-color leftover tally
    /// 2. Second pass: every unmatched target slot whose color still has a
    ///    leftover guess peg claims it as a white
    ///
    /// The tally is built from the guess side and consumed by the target side.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let guess: Code = "bbddg".parse().unwrap();
    /// let secret: Code = "bdgrw".parse().unwrap();
    ///
    /// // b in slot 0 is red; d and g are present elsewhere
    /// assert_eq!(Score::calculate(guess, secret), Score::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(guess: Code, target: Code) -> Self {
        let guess = guess.colors();
        let target = target.colors();
        let mut leftover = [0u8; COLORS];
        let mut red = 0;
        let mut white = 0;

        // First pass: reds, remember unmatched guess colors
        for (g, t) in guess.iter().zip(&target) {
            if g == t {
                red += 1;
            } else {
                leftover[usize::from(g.value())] += 1;
            }
        }

        // Second pass: unmatched target slots consume leftover guess colors
        for (g, t) in guess.iter().zip(&target) {
            if g != t {
                let tally = &mut leftover[usize::from(t.value())];
                if *tally > 0 {
                    white += 1;
                    *tally -= 1;
                }
            }
        }

        Self { red, white }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}r{}w", self.red, self.white)
    }
}
