//! Terminal output formatting
//!
//! Display utilities for CLI results and per-round traces.

pub mod display;
pub mod formatters;

pub use display::{
    Side, print_benchmark_result, print_round, print_session_report, print_solve_result,
};
