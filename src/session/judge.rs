//! Server-side judging

use crate::core::{Code, Score};
use crate::protocol::{GUESS_BYTES, Judgment, decode_guess};

/// Rounds a client gets before the game is lost
pub const MAX_ROUNDS: u32 = 35;

/// Holds the secret and judges incoming guesses
#[derive(Debug, Clone)]
pub struct Judge {
    secret: Code,
    max_rounds: u32,
    rounds_played: u32,
}

impl Judge {
    /// Create a judge with the standard round limit
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self::with_max_rounds(secret, MAX_ROUNDS)
    }

    /// Create a judge with a custom round limit
    #[must_use]
    pub const fn with_max_rounds(secret: Code, max_rounds: u32) -> Self {
        Self {
            secret,
            max_rounds,
            rounds_played: 0,
        }
    }

    /// The code being guessed
    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    /// Rounds judged so far
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Judge one guess message
    ///
    /// A parity mismatch sets the parity-error flag and scores the round
    /// 0r0w. In the last allowed round anything short of an exact match also
    /// sets the game-lost flag.
    pub fn judge(&mut self, message: [u8; GUESS_BYTES]) -> Judgment {
        self.rounds_played += 1;

        let guess = decode_guess(message);
        let parity_error = !guess.parity_ok();
        let score = if parity_error {
            Score::default()
        } else {
            Score::calculate(guess.code, self.secret)
        };
        let game_lost = self.rounds_played >= self.max_rounds && !score.is_perfect();

        Judgment::new(score, parity_error, game_lost)
    }
}
