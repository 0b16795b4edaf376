//! Minimax guess evaluation
//!
//! Knuth's worst-case criterion: a guess is as good as the largest group of
//! candidates that would still remain after its feedback.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
