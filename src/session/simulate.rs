//! In-process games
//!
//! Runs solver and judge in one thread. Every round still goes through the
//! wire codec, so the bytes exchanged are the ones a networked game would
//! carry.

use super::client::finish_round;
use super::judge::Judge;
use super::outcome::{RoundRecord, SessionError, SessionReport};
use crate::protocol::{decode_judgment, encode_guess};
use crate::solver::{Solver, Strategy};

/// Play one full game between `solver` and `judge`
///
/// # Errors
/// Returns [`SessionError::NoCandidates`] if the solver runs out of
/// candidates, which cannot happen with a consistent judge.
///
/// # Examples
/// ```
/// use mastermind::session::{Judge, Outcome, simulate};
/// use mastermind::solver::{HighestStrategy, Solver};
///
/// let mut judge = Judge::new("bdgrw".parse().unwrap());
/// let mut solver = Solver::new(HighestStrategy);
///
/// let report = simulate(&mut judge, &mut solver, |_| {}).unwrap();
/// assert_eq!(report.outcome, Outcome::Won);
/// assert!(report.rounds <= 35);
/// ```
pub fn simulate<S, F>(
    judge: &mut Judge,
    solver: &mut Solver<S>,
    mut on_round: F,
) -> Result<SessionReport, SessionError>
where
    S: Strategy,
    F: FnMut(&RoundRecord),
{
    let mut round = 0;
    loop {
        round += 1;
        let guess = solver.take_guess();
        let wire = encode_guess(guess);
        let judgment = decode_judgment(judge.judge(wire).encode());

        if let Some(outcome) = finish_round(solver, round, wire, guess, judgment, &mut on_round)? {
            return Ok(SessionReport {
                outcome,
                rounds: round,
            });
        }
    }
}
