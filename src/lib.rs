//! Mastermind
//!
//! A networked Mastermind judge and solver. Guesses travel as 15-bit codes
//! with a parity bit, judgments as a single byte, and the solver narrows a
//! set of 32768 candidates until it hits the secret.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Score};
//! use mastermind::session::{Judge, Outcome, simulate};
//! use mastermind::solver::{HighestStrategy, Solver};
//!
//! let secret: Code = "bdgrw".parse().unwrap();
//! let guess: Code = "bbddg".parse().unwrap();
//! assert_eq!(Score::calculate(guess, secret), Score::new(1, 2));
//!
//! let mut judge = Judge::new(secret);
//! let mut solver = Solver::new(HighestStrategy);
//! let report = simulate(&mut judge, &mut solver, |_| {}).unwrap();
//! assert_eq!(report.outcome, Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Wire format and byte transport
pub mod protocol;

// Candidate elimination and guess selection
pub mod solver;

// Judge and game loops
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

#[cfg(test)]
mod testing;
