//! Solver command
//!
//! Connects to a judge and plays until it delivers a verdict.

use crate::protocol::{CancelToken, StreamTransport};
use crate::session::{RoundRecord, SessionReport, run_client};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result};
use std::net::TcpStream;

/// Where to find the judge
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
}

impl ClientConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// Connect to the configured judge and play one game
///
/// # Errors
///
/// Returns an error if the connection cannot be established or the
/// session ends out of band.
pub fn connect_and_play<S, F>(
    config: &ClientConfig,
    strategy: S,
    cancel: &CancelToken,
    on_round: F,
) -> Result<SessionReport>
where
    S: Strategy,
    F: FnMut(&RoundRecord),
{
    let stream = TcpStream::connect((config.host.as_str(), config.port))
        .with_context(|| format!("could not connect to {}:{}", config.host, config.port))?;
    let mut transport = StreamTransport::tcp(stream).context("failed to configure socket")?;

    let mut solver = Solver::new(strategy);
    Ok(run_client(&mut transport, &mut solver, cancel, on_round)?)
}
