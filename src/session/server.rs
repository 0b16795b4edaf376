//! Server-side session loop

use super::judge::Judge;
use super::outcome::{RoundRecord, SessionError, SessionReport};
use crate::protocol::{CancelToken, GUESS_BYTES, Transport, decode_guess};

/// Judge a remote client until the game ends
///
/// Every round receives one guess, sends back its judgment and stops once
/// the judgment carries a verdict.
///
/// # Errors
/// Returns [`SessionError`] if the transport fails or `cancel` is set.
pub fn run_server<T, F>(
    transport: &mut T,
    judge: &mut Judge,
    cancel: &CancelToken,
    mut on_round: F,
) -> Result<SessionReport, SessionError>
where
    T: Transport,
    F: FnMut(&RoundRecord),
{
    loop {
        let mut request = [0u8; GUESS_BYTES];
        transport.recv_exact(&mut request, cancel)?;

        let judgment = judge.judge(request);
        transport.send_exact(&[judgment.encode()], cancel)?;

        let round = judge.rounds_played();
        on_round(&RoundRecord {
            round,
            wire: request,
            guess: decode_guess(request).code,
            judgment,
            remaining: None,
        });

        if let Some(outcome) = judgment.verdict() {
            return Ok(SessionReport {
                outcome,
                rounds: round,
            });
        }
    }
}
