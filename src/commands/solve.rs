//! Secret solving command
//!
//! Plays one in-process game against a given secret and keeps the full
//! round-by-round trace.

use crate::core::{CODE_SPACE, Code};
use crate::session::{Judge, MAX_ROUNDS, RoundRecord, SessionError, SessionReport, simulate};
use crate::solver::{Solver, Strategy};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: Code,
    pub max_rounds: u32,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            max_rounds: MAX_ROUNDS,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub secret: Code,
    pub report: SessionReport,
    pub steps: Vec<SolveStep>,
}

/// A single round in the solution
pub struct SolveStep {
    pub record: RoundRecord,
    pub candidates_before: usize,
}

/// Solve a secret with the given strategy
///
/// # Errors
///
/// Returns an error if the solver runs out of candidates.
pub fn solve_secret<S: Strategy>(
    config: &SolveConfig,
    strategy: S,
) -> Result<SolveResult, SessionError> {
    let mut judge = Judge::with_max_rounds(config.secret, config.max_rounds);
    let mut solver = Solver::new(strategy);
    let mut steps: Vec<SolveStep> = Vec::new();

    let report = simulate(&mut judge, &mut solver, |record| {
        let candidates_before = steps
            .last()
            .and_then(|step| step.record.remaining)
            .unwrap_or(CODE_SPACE);
        steps.push(SolveStep {
            record: *record,
            candidates_before,
        });
    })?;

    Ok(SolveResult {
        secret: judge.secret(),
        report,
        steps,
    })
}
