//! Exact-count transfers over a byte stream
//!
//! Stream sockets may move fewer bytes than requested per call. The
//! primitives here loop until the whole message is through, the peer goes
//! away, or the session is cancelled.

use std::io::{self, ErrorKind, Read, Write};
use std::net::TcpStream;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;

/// How often a blocked TCP receive wakes up to check for cancellation
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shared cancellation request
///
/// Clones observe the same flag. Blocking transfers check it before every
/// attempt and give up with [`TransportError::Cancelled`] once it is set.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Failure to move a complete message
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection closed after {received} of {expected} bytes")]
    Closed { received: usize, expected: usize },

    #[error("peer stopped accepting data after {sent} of {expected} bytes")]
    WriteZero { sent: usize, expected: usize },

    #[error("transfer cancelled")]
    Cancelled,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// A bidirectional byte channel with exact-count semantics
pub trait Transport {
    /// Send all of `bytes`
    ///
    /// # Errors
    /// Fails if the stream errors, stops accepting data, or `cancel` is set.
    fn send_exact(&mut self, bytes: &[u8], cancel: &CancelToken) -> Result<(), TransportError>;

    /// Fill `buf` completely
    ///
    /// # Errors
    /// Fails if the stream errors, reaches EOF first, or `cancel` is set.
    fn recv_exact(&mut self, buf: &mut [u8], cancel: &CancelToken) -> Result<(), TransportError>;
}

/// [`Transport`] over any `Read + Write` stream
#[derive(Debug)]
pub struct StreamTransport<S> {
    stream: S,
}

impl<S> StreamTransport<S> {
    #[must_use]
    pub const fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Give back the wrapped stream
    #[must_use]
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl StreamTransport<TcpStream> {
    /// Wrap a connected TCP stream
    ///
    /// Sets a short read timeout so a blocked receive can notice cancellation.
    ///
    /// # Errors
    /// Returns the socket error if the options cannot be applied.
    pub fn tcp(stream: TcpStream) -> io::Result<Self> {
        stream.set_read_timeout(Some(CANCEL_POLL_INTERVAL))?;
        stream.set_nodelay(true)?;
        Ok(Self::new(stream))
    }
}

/// Errors after which the same call may simply be repeated
fn is_transient(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::Interrupted | ErrorKind::WouldBlock | ErrorKind::TimedOut
    )
}

impl<S: Read + Write> Transport for StreamTransport<S> {
    fn send_exact(&mut self, bytes: &[u8], cancel: &CancelToken) -> Result<(), TransportError> {
        let mut sent = 0;
        while sent < bytes.len() {
            if cancel.is_cancelled() {
                return Err(TransportError::Cancelled);
            }
            match self.stream.write(&bytes[sent..]) {
                Ok(0) => {
                    return Err(TransportError::WriteZero {
                        sent,
                        expected: bytes.len(),
                    });
                }
                Ok(n) => sent += n,
                Err(e) if is_transient(&e) => {}
                Err(e) => return Err(e.into()),
            }
        }
        self.stream.flush()?;
        Ok(())
    }

    fn recv_exact(&mut self, buf: &mut [u8], cancel: &CancelToken) -> Result<(), TransportError> {
        let mut received = 0;
        while received < buf.len() {
            if cancel.is_cancelled() {
                return Err(TransportError::Cancelled);
            }
            match self.stream.read(&mut buf[received..]) {
                Ok(0) => {
                    return Err(TransportError::Closed {
                        received,
                        expected: buf.len(),
                    });
                }
                Ok(n) => received += n,
                Err(e) if is_transient(&e) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Trickle, duplex};
    use std::io::Cursor;

    #[test]
    fn recv_reassembles_single_byte_reads() {
        let mut transport = StreamTransport::new(Trickle::new(vec![0xab, 0xcd, 0xef], 1));
        let cancel = CancelToken::new();

        let mut buf = [0u8; 2];
        transport.recv_exact(&mut buf, &cancel).unwrap();
        assert_eq!(buf, [0xab, 0xcd]);

        let mut buf = [0u8; 1];
        transport.recv_exact(&mut buf, &cancel).unwrap();
        assert_eq!(buf, [0xef]);

        let stream = transport.into_inner();
        assert_eq!(stream.reads(), 3);
    }

    #[test]
    fn send_loops_over_short_writes() {
        let mut transport = StreamTransport::new(Trickle::new(Vec::new(), 1));
        let cancel = CancelToken::new();

        transport.send_exact(&[1, 2, 3, 4], &cancel).unwrap();

        let stream = transport.into_inner();
        assert_eq!(stream.written(), &[1, 2, 3, 4]);
        assert_eq!(stream.writes(), 4);
    }

    #[test]
    fn eof_mid_message_is_an_error() {
        let mut transport = StreamTransport::new(Cursor::new(vec![0x01]));
        let mut buf = [0u8; 2];

        let err = transport.recv_exact(&mut buf, &CancelToken::new()).unwrap_err();
        assert!(matches!(
            err,
            TransportError::Closed {
                received: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn zero_length_write_is_an_error() {
        let mut buf = [0u8; 0];
        let mut transport = StreamTransport::new(Cursor::new(&mut buf[..]));

        let err = transport.send_exact(&[1], &CancelToken::new()).unwrap_err();
        assert!(matches!(err, TransportError::WriteZero { sent: 0, expected: 1 }));
    }

    #[test]
    fn cancelled_before_transfer() {
        let mut transport = StreamTransport::new(Cursor::new(vec![0x01, 0x02]));
        let cancel = CancelToken::new();
        cancel.cancel();

        let mut buf = [0u8; 2];
        let err = transport.recv_exact(&mut buf, &cancel).unwrap_err();
        assert!(matches!(err, TransportError::Cancelled));
    }

    #[test]
    fn cancel_wakes_blocked_receive() {
        let (mut near, _far) = duplex(1);
        let cancel = CancelToken::new();

        let remote = cancel.clone();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            remote.cancel();
        });

        let mut buf = [0u8; 2];
        let err = near.recv_exact(&mut buf, &cancel).unwrap_err();
        assert!(matches!(err, TransportError::Cancelled));
        handle.join().unwrap();
    }

    #[test]
    fn empty_transfers_succeed_immediately() {
        let mut transport = StreamTransport::new(Cursor::new(Vec::new()));
        let cancel = CancelToken::new();
        transport.send_exact(&[], &cancel).unwrap();
        transport.recv_exact(&mut [], &cancel).unwrap();
    }
}
