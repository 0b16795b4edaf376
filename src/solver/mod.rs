//! Mastermind solving algorithms
//!
//! Candidate elimination plus pluggable guess selection strategies.

mod candidates;
mod engine;
pub mod minimax;
pub mod strategy;

pub use candidates::CandidateSet;
pub use engine::Solver;
pub use strategy::{HighestStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
