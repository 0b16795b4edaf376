//! How a session ended

use crate::protocol::{Judgment, TransportError};
use crate::core::Code;
use std::fmt;
use thiserror::Error;

/// In-band end of a game, as carried by the final judgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Exact match
    Won,
    /// The judge saw a guess whose parity bit did not match
    ParityError,
    /// Round limit reached without an exact match
    GameLost,
    /// Parity error in the final round
    ParityAndLost,
}

impl Outcome {
    /// Process exit status for this outcome
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Won => 0,
            Self::ParityError => 2,
            Self::GameLost => 3,
            Self::ParityAndLost => 4,
        }
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Won => "won",
            Self::ParityError => "parity error",
            Self::GameLost => "game lost",
            Self::ParityAndLost => "parity error and game lost",
        })
    }
}

/// Summary of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: Outcome,
    /// Rounds played, including the final one
    pub rounds: u32,
}

/// One completed round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    /// Round number, starting at 1
    pub round: u32,
    /// Guess as it travelled on the wire
    pub wire: [u8; 2],
    /// Code bits of the guess
    pub guess: Code,
    pub judgment: Judgment,
    /// Candidates left on the solver side after this round
    pub remaining: Option<usize>,
}

/// Out-of-band end of a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("transport failure: {0}")]
    Transport(#[source] TransportError),

    #[error("session cancelled")]
    Cancelled,

    #[error("no candidate is consistent with the feedback after round {round}")]
    NoCandidates { round: u32 },
}

impl SessionError {
    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Transport(_) | Self::NoCandidates { .. } => 1,
            Self::Cancelled => 130,
        }
    }
}

impl From<TransportError> for SessionError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Cancelled => Self::Cancelled,
            other => Self::Transport(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let mut codes = vec![
            Outcome::Won.exit_code(),
            Outcome::ParityError.exit_code(),
            Outcome::GameLost.exit_code(),
            Outcome::ParityAndLost.exit_code(),
            SessionError::Transport(TransportError::Closed {
                received: 0,
                expected: 2,
            })
            .exit_code(),
            SessionError::Cancelled.exit_code(),
        ];
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 6);
    }

    #[test]
    fn only_won_is_a_win() {
        assert!(Outcome::Won.is_win());
        assert!(!Outcome::ParityError.is_win());
        assert!(!Outcome::GameLost.is_win());
        assert!(!Outcome::ParityAndLost.is_win());
    }

    #[test]
    fn cancelled_transport_maps_to_cancelled_session() {
        assert!(matches!(
            SessionError::from(TransportError::Cancelled),
            SessionError::Cancelled
        ));
        assert!(matches!(
            SessionError::from(TransportError::WriteZero { sent: 0, expected: 1 }),
            SessionError::Transport(_)
        ));
    }
}
