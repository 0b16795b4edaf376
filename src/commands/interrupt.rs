//! Ctrl-C and termination handling
//!
//! SIGINT and SIGTERM set the shared [`CancelToken`]; the session loops
//! notice it at their next transfer attempt and end with
//! [`SessionError::Cancelled`](crate::session::SessionError::Cancelled).

use crate::protocol::CancelToken;
use anyhow::{Context, Result};

/// Cancel `cancel` when the process is interrupted or asked to terminate
///
/// Can only be installed once per process.
///
/// # Errors
///
/// Returns an error if the handler cannot be registered.
pub fn cancel_on_interrupt(cancel: &CancelToken) -> Result<()> {
    ctrlc::set_handler(interrupt_handler(cancel)).context("failed to install signal handler")
}

fn interrupt_handler(cancel: &CancelToken) -> impl FnMut() + Send + 'static {
    let cancel = cancel.clone();
    move || cancel.cancel()
}
