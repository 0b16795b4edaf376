//! Client-side session loop

use super::outcome::{Outcome, RoundRecord, SessionError, SessionReport};
use crate::core::Code;
use crate::protocol::{
    CancelToken, GUESS_BYTES, JUDGMENT_BYTES, Judgment, Transport, decode_judgment, encode_guess,
};
use crate::solver::{Solver, Strategy};

/// Play against a remote judge until the game ends
///
/// Each round sends the solver's current guess, waits for the judgment and
/// feeds it back into the solver. `on_round` sees every completed round.
///
/// # Errors
/// Returns [`SessionError`] if the transport fails, `cancel` is set, or the
/// judge's feedback rules out every code.
pub fn run_client<T, S, F>(
    transport: &mut T,
    solver: &mut Solver<S>,
    cancel: &CancelToken,
    mut on_round: F,
) -> Result<SessionReport, SessionError>
where
    T: Transport,
    S: Strategy,
    F: FnMut(&RoundRecord),
{
    let mut round = 0;
    loop {
        round += 1;
        let guess = solver.take_guess();
        let wire = encode_guess(guess);
        transport.send_exact(&wire, cancel)?;

        let mut response = [0u8; JUDGMENT_BYTES];
        transport.recv_exact(&mut response, cancel)?;
        let judgment = decode_judgment(response[0]);

        if let Some(outcome) = finish_round(solver, round, wire, guess, judgment, &mut on_round)? {
            return Ok(SessionReport {
                outcome,
                rounds: round,
            });
        }
    }
}

/// Apply a judgment to the solver and pick the next guess
///
/// Returns the outcome if the judgment ends the game.
pub(crate) fn finish_round<S, F>(
    solver: &mut Solver<S>,
    round: u32,
    wire: [u8; GUESS_BYTES],
    guess: Code,
    judgment: Judgment,
    on_round: &mut F,
) -> Result<Option<Outcome>, SessionError>
where
    S: Strategy,
    F: FnMut(&RoundRecord),
{
    let verdict = judgment.verdict();
    if verdict.is_none() {
        solver.eliminate(judgment.score());
    }

    on_round(&RoundRecord {
        round,
        wire,
        guess,
        judgment,
        remaining: Some(solver.candidates().remaining()),
    });

    if verdict.is_some() {
        return Ok(verdict);
    }
    solver
        .advance()
        .map(|_| None)
        .ok_or(SessionError::NoCandidates { round })
}
