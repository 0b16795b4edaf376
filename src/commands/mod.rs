//! Command implementations

pub mod benchmark;
pub mod client;
pub mod interrupt;
pub mod server;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use client::{ClientConfig, connect_and_play};
pub use interrupt::cancel_on_interrupt;
pub use server::{ServerConfig, accept, bind, serve};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_secret};
