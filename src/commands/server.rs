//! Judge command
//!
//! Binds a TCP port, accepts a single client and judges its guesses.

use crate::core::Code;
use crate::protocol::{CANCEL_POLL_INTERVAL, CancelToken, StreamTransport};
use crate::session::{Judge, MAX_ROUNDS, RoundRecord, SessionError, SessionReport, run_server};
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::net::{Ipv4Addr, SocketAddr, TcpListener, TcpStream};
use std::thread;

/// Configuration for the judging side
pub struct ServerConfig {
    pub port: u16,
    pub secret: Code,
    pub max_rounds: u32,
}

impl ServerConfig {
    #[must_use]
    pub const fn new(port: u16, secret: Code) -> Self {
        Self {
            port,
            secret,
            max_rounds: MAX_ROUNDS,
        }
    }
}

/// Bind the configured port on all IPv4 interfaces
///
/// # Errors
///
/// Returns an error if the port cannot be bound.
pub fn bind(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((Ipv4Addr::UNSPECIFIED, config.port))
        .with_context(|| format!("could not bind port {}", config.port))
}

/// Wait for one client, polling `cancel` while none is pending
///
/// # Errors
///
/// Returns [`SessionError::Cancelled`] once `cancel` is set, or the accept
/// failure.
pub fn accept(listener: &TcpListener, cancel: &CancelToken) -> Result<(TcpStream, SocketAddr)> {
    listener
        .set_nonblocking(true)
        .context("failed to configure listener")?;

    loop {
        if cancel.is_cancelled() {
            return Err(SessionError::Cancelled.into());
        }
        match listener.accept() {
            Ok((stream, peer)) => {
                stream
                    .set_nonblocking(false)
                    .context("failed to configure socket")?;
                return Ok((stream, peer));
            }
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::Interrupted) => {
                thread::sleep(CANCEL_POLL_INTERVAL);
            }
            Err(e) => return Err(e).context("failed to accept client"),
        }
    }
}

/// Accept one client on `listener` and judge it until the game ends
///
/// `on_accept` runs once with the peer address before the first round.
///
/// # Errors
///
/// Returns an error if accepting fails or the session ends out of band.
/// Session failures keep their [`SessionError`] type
/// underneath the `anyhow` error.
pub fn serve<A, F>(
    listener: &TcpListener,
    config: &ServerConfig,
    cancel: &CancelToken,
    on_accept: A,
    on_round: F,
) -> Result<SessionReport>
where
    A: FnOnce(SocketAddr),
    F: FnMut(&RoundRecord),
{
    let (stream, peer) = accept(listener, cancel)?;
    on_accept(peer);

    let mut transport = StreamTransport::tcp(stream).context("failed to configure socket")?;
    let mut judge = Judge::with_max_rounds(config.secret, config.max_rounds);
    Ok(run_server(&mut transport, &mut judge, cancel, on_round)?)
}
