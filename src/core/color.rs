//! Peg colors
//!
//! The eight fixed colors of the game, their 3-bit wire values and the
//! letters used to write secrets on the command line.

use std::fmt;

/// Number of distinct colors
pub const COLORS: usize = 8;

/// A single peg color (wire value 0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Beige = 0,
    DarkBlue = 1,
    Green = 2,
    Orange = 3,
    Red = 4,
    Black = 5,
    Violet = 6,
    White = 7,
}

impl Color {
    /// All colors in wire-value order
    pub const ALL: [Self; COLORS] = [
        Self::Beige,
        Self::DarkBlue,
        Self::Green,
        Self::Orange,
        Self::Red,
        Self::Black,
        Self::Violet,
        Self::White,
    ];

    /// Build a color from the low 3 bits of `bits`
    ///
    /// Total: higher bits are ignored, so every input maps to a color.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self::ALL[(bits & 0x7) as usize]
    }

    /// The 3-bit wire value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Letter used in secret strings
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Beige => 'b',
            Self::DarkBlue => 'd',
            Self::Green => 'g',
            Self::Orange => 'o',
            Self::Red => 'r',
            Self::Black => 's',
            Self::Violet => 'v',
            Self::White => 'w',
        }
    }

    /// Parse a color letter (case-insensitive)
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'b' => Some(Self::Beige),
            'd' => Some(Self::DarkBlue),
            'g' => Some(Self::Green),
            'o' => Some(Self::Orange),
            'r' => Some(Self::Red),
            's' => Some(Self::Black),
            'v' => Some(Self::Violet),
            'w' => Some(Self::White),
            _ => None,
        }
    }

    /// Human readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beige => "beige",
            Self::DarkBlue => "darkblue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Black => "black",
            Self::Violet => "violet",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
