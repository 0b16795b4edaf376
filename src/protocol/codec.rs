//! Wire codec shared by judge and solver
//!
//! Guess (client to server), 2 bytes little-endian:
//! ```text
//!  bit 15   14..12  11..9   8..6    5..3    2..0
//! [parity][slot 4][slot 3][slot 2][slot 1][slot 0]
//! ```
//!
//! Judgment (server to client), 1 byte:
//! ```text
//!  bit 7      6        5..3    2..0
//! [lost][parity err][white ][ red  ]
//! ```

use crate::core::{BITS_PER_SLOT, CODE_MASK, Code, Color, SLOTS, Score};
use crate::session::Outcome;

/// Size of a guess message in bytes
pub const GUESS_BYTES: usize = 2;

/// Size of a judgment message in bytes
pub const JUDGMENT_BYTES: usize = 1;

/// Position of the parity bit in a guess
pub const PARITY_BIT: u32 = 15;

const FIELD_MASK: u8 = 0x7;
const PARITY_ERROR_BIT: u32 = 6;
const GAME_LOST_BIT: u32 = 7;

/// Encode a guess with its parity bit
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::protocol::encode_guess;
///
/// // One bit set in the code, so the parity bit is set too
/// assert_eq!(encode_guess(Code::new(1)), [0x01, 0x80]);
/// assert_eq!(encode_guess(Code::new(3)), [0x03, 0x00]);
/// ```
#[must_use]
pub fn encode_guess(code: Code) -> [u8; GUESS_BYTES] {
    let wire = code.value() | (u16::from(code.parity()) << PARITY_BIT);
    wire.to_le_bytes()
}

/// A decoded guess message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessMessage {
    /// The 15 code bits
    pub code: Code,
    /// Parity bit as received
    pub parity: bool,
}

impl GuessMessage {
    /// The five slot colors, slot 0 first
    #[must_use]
    pub const fn colors(&self) -> [Color; SLOTS] {
        self.code.colors()
    }

    /// Whether the received parity matches the parity recomputed over the code
    #[must_use]
    pub const fn parity_ok(&self) -> bool {
        self.parity == self.code.parity()
    }
}

/// Decode a guess message
#[must_use]
pub fn decode_guess(bytes: [u8; GUESS_BYTES]) -> GuessMessage {
    let wire = u16::from_le_bytes(bytes);
    GuessMessage {
        code: Code::new(wire & CODE_MASK),
        parity: (wire >> PARITY_BIT) & 1 == 1,
    }
}

/// A judgment as carried on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Judgment {
    pub red: u8,
    pub white: u8,
    pub parity_error: bool,
    pub game_lost: bool,
}

impl Judgment {
    /// Build a judgment from a score and the two error flags
    #[must_use]
    pub const fn new(score: Score, parity_error: bool, game_lost: bool) -> Self {
        Self {
            red: score.red,
            white: score.white,
            parity_error,
            game_lost,
        }
    }

    /// The red/white part
    #[must_use]
    pub const fn score(&self) -> Score {
        Score {
            red: self.red,
            white: self.white,
        }
    }

    /// Encode into the single judgment byte
    ///
    /// Red and white must already be valid scores (at most 5 each).
    ///
    /// # Panics
    /// Panics in debug mode if red or white exceeds the slot count
    #[must_use]
    pub fn encode(&self) -> u8 {
        debug_assert!(usize::from(self.red) <= SLOTS, "red out of range");
        debug_assert!(usize::from(self.white) <= SLOTS, "white out of range");

        self.red
            | (self.white << BITS_PER_SLOT)
            | (u8::from(self.parity_error) << PARITY_ERROR_BIT)
            | (u8::from(self.game_lost) << GAME_LOST_BIT)
    }

    /// Decode a judgment byte
    #[must_use]
    pub const fn decode(byte: u8) -> Self {
        Self {
            red: byte & FIELD_MASK,
            white: (byte >> BITS_PER_SLOT) & FIELD_MASK,
            parity_error: (byte >> PARITY_ERROR_BIT) & 1 == 1,
            game_lost: (byte >> GAME_LOST_BIT) & 1 == 1,
        }
    }

    /// Terminal outcome carried by this judgment, if any
    ///
    /// An exact match wins; otherwise the error flags decide. `None` means
    /// play continues.
    #[must_use]
    pub const fn verdict(&self) -> Option<Outcome> {
        if self.red as usize == SLOTS {
            return Some(Outcome::Won);
        }
        match (self.parity_error, self.game_lost) {
            (true, true) => Some(Outcome::ParityAndLost),
            (true, false) => Some(Outcome::ParityError),
            (false, true) => Some(Outcome::GameLost),
            (false, false) => None,
        }
    }
}

/// Encode a judgment from its parts
#[must_use]
pub fn encode_judgment(red: u8, white: u8, parity_error: bool, game_lost: bool) -> u8 {
    Judgment {
        red,
        white,
        parity_error,
        game_lost,
    }
    .encode()
}

/// Decode a judgment byte into its parts
#[must_use]
pub const fn decode_judgment(byte: u8) -> Judgment {
    Judgment::decode(byte)
}
