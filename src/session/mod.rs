//! Game sessions
//!
//! Both sides run the same shape of loop: wait for the peer, evaluate, then
//! either continue or stop with a verdict.
//!
//! ```text
//! AWAITING ──▶ EVALUATING ──▶ CONTINUE ──▶ AWAITING
//!                   │
//!                   └──▶ WON | LOST | PARITY_ERROR | TRANSPORT_ERROR
//! ```

mod client;
mod judge;
mod outcome;
mod server;
mod simulate;

pub use client::run_client;
pub use judge::{Judge, MAX_ROUNDS};
pub use outcome::{Outcome, RoundRecord, SessionError, SessionReport};
pub use server::run_server;
pub use simulate::simulate;
