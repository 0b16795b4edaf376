//! Code representation
//!
//! A Code is a sequence of 5 colors packed into 15 bits, slot 0 in the lowest
//! three bits. The packed integer doubles as the candidate index.

use super::color::Color;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of slots in a code
pub const SLOTS: usize = 5;

/// Bits used per slot
pub const BITS_PER_SLOT: usize = 3;

/// Number of distinct codes (8^5)
pub const CODE_SPACE: usize = 1 << (SLOTS * BITS_PER_SLOT);

/// Mask covering the 15 code bits
pub const CODE_MASK: u16 = (CODE_SPACE - 1) as u16;

/// A 5-slot color combination
///
/// Invariant: the wrapped value is below [`CODE_SPACE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(u16);

/// Error type for secrets that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must be exactly {SLOTS} colors long, got {0}")]
    InvalidLength(usize),
    #[error("bad color '{letter}' at position {position} (use one of b, d, g, o, r, s, v, w)")]
    UnknownColor { letter: char, position: usize },
}

impl Code {
    /// Create a code from its packed value, ignoring bits above the 15th
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value & CODE_MASK)
    }

    /// Create a code from a candidate index
    ///
    /// # Panics
    /// Panics in debug mode if `index >= CODE_SPACE`
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < CODE_SPACE, "code index out of range");
        Self::new(index as u16)
    }

    /// Pack five colors, slot 0 first
    #[must_use]
    pub const fn from_colors(colors: [Color; SLOTS]) -> Self {
        let mut value = 0u16;
        let mut i = 0;
        while i < SLOTS {
            value |= (colors[i] as u16) << (i * BITS_PER_SLOT);
            i += 1;
        }
        Self(value)
    }

    /// The packed 15-bit value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// The candidate index of this code
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Color in `slot` (0-4)
    #[inline]
    #[must_use]
    pub const fn color_at(self, slot: usize) -> Color {
        Color::from_bits(self.0 >> (slot * BITS_PER_SLOT))
    }

    /// Unpack all five colors, slot 0 first
    #[must_use]
    pub const fn colors(self) -> [Color; SLOTS] {
        let mut colors = [Color::Beige; SLOTS];
        let mut i = 0;
        while i < SLOTS {
            colors[i] = self.color_at(i);
            i += 1;
        }
        colors
    }

    /// XOR of all 15 code bits
    #[inline]
    #[must_use]
    pub const fn parity(self) -> bool {
        self.0.count_ones() % 2 == 1
    }

    /// Iterate over every code in ascending index order
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (0..CODE_SPACE).map(Self::from_index)
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse a secret such as `"bdgrw"`; the first letter is slot 0
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    ///
    /// let code: Code = "bdgrw".parse().unwrap();
    /// assert_eq!(code.color_at(0), Color::Beige);
    /// assert_eq!(code.color_at(4), Color::White);
    /// assert!("bdgr".parse::<Code>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.chars().collect();
        if letters.len() != SLOTS {
            return Err(CodeError::InvalidLength(letters.len()));
        }

        let mut colors = [Color::Beige; SLOTS];
        for (position, (&letter, slot)) in letters.iter().zip(colors.iter_mut()).enumerate() {
            *slot = Color::from_letter(letter)
                .ok_or(CodeError::UnknownColor { letter, position })?;
        }

        Ok(Self::from_colors(colors))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.colors() {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_space_constants() {
        assert_eq!(CODE_SPACE, 32768);
        assert_eq!(CODE_MASK, 0x7fff);
    }

    #[test]
    fn index_to_colors_is_bijective() {
        for code in Code::all() {
            assert_eq!(Code::from_colors(code.colors()), code);
        }
    }

    #[test]
    fn slot_zero_is_lowest_bits() {
        let code = Code::from_colors([
            Color::White,
            Color::Beige,
            Color::Beige,
            Color::Beige,
            Color::Beige,
        ]);
        assert_eq!(code.value(), 7);

        let code = Code::from_colors([
            Color::Beige,
            Color::Beige,
            Color::Beige,
            Color::Beige,
            Color::DarkBlue,
        ]);
        assert_eq!(code.value(), 1 << 12);
    }

    #[test]
    fn parse_secret() {
        let code: Code = "bdgrw".parse().unwrap();
        assert_eq!(
            code.colors(),
            [
                Color::Beige,
                Color::DarkBlue,
                Color::Green,
                Color::Red,
                Color::White
            ]
        );
        assert_eq!(code.to_string(), "bdgrw");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!("bdgr".parse::<Code>(), Err(CodeError::InvalidLength(4)));
        assert_eq!("bdgrwv".parse::<Code>(), Err(CodeError::InvalidLength(6)));
        assert_eq!("".parse::<Code>(), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn parse_rejects_unknown_color() {
        assert_eq!(
            "bdxrw".parse::<Code>(),
            Err(CodeError::UnknownColor {
                letter: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn new_masks_high_bit() {
        assert_eq!(Code::new(0x8000 | 42).value(), 42);
    }

    #[test]
    fn parity_is_xor_of_bits() {
        assert!(!Code::new(0).parity());
        assert!(Code::new(1).parity());
        assert!(!Code::new(0b11).parity());
        assert!(Code::new(0x7fff).parity()); // 15 ones
    }
}
