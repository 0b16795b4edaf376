//! Candidate set over the whole code space
//!
//! One flag per code, set once the code is eliminated. Flags only ever go
//! from clear to set.

use crate::core::{CODE_SPACE, Code, Score};

const WORD_BITS: usize = u64::BITS as usize;
const WORDS: usize = CODE_SPACE / WORD_BITS;

/// Codes still consistent with every observed judgment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    eliminated: Box<[u64; WORDS]>,
    remaining: usize,
}

impl CandidateSet {
    /// A set where every code is still possible
    #[must_use]
    pub fn new() -> Self {
        Self {
            eliminated: Box::new([0; WORDS]),
            remaining: CODE_SPACE,
        }
    }

    #[inline]
    const fn locate(code: Code) -> (usize, u64) {
        let index = code.index();
        (index / WORD_BITS, 1 << (index % WORD_BITS))
    }

    /// Whether `code` has been ruled out
    #[inline]
    #[must_use]
    pub fn is_eliminated(&self, code: Code) -> bool {
        let (word, bit) = Self::locate(code);
        self.eliminated[word] & bit != 0
    }

    /// Rule out `code`
    ///
    /// Returns `true` if the code was still possible.
    pub fn eliminate(&mut self, code: Code) -> bool {
        let (word, bit) = Self::locate(code);
        let was_possible = self.eliminated[word] & bit == 0;
        if was_possible {
            self.eliminated[word] |= bit;
            self.remaining -= 1;
        }
        was_possible
    }

    /// Number of codes still possible
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Possible codes in ascending order; reverse it for descending order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Code> + '_ {
        Code::all().filter(|&code| !self.is_eliminated(code))
    }

    /// The highest-numbered code still possible
    #[must_use]
    pub fn highest(&self) -> Option<Code> {
        self.iter().next_back()
    }

    /// Rule out every possible code that would not have produced `observed`
    /// for `guess`
    ///
    /// Returns how many codes were eliminated.
    pub fn retain_consistent(&mut self, guess: Code, observed: Score) -> usize {
        let mut eliminated = 0;
        for code in Code::all() {
            if !self.is_eliminated(code) && Score::calculate(guess, code) != observed {
                self.eliminate(code);
                eliminated += 1;
            }
        }
        eliminated
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new()
    }
}
