//! In-memory streams for exercising transports and sessions in tests

use crate::protocol::{CancelToken, StreamTransport, Transport, TransportError};
use std::collections::VecDeque;
use std::io::{self, ErrorKind, Read, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Stream that moves at most `chunk` bytes per call and counts calls
pub struct Trickle {
    input: VecDeque<u8>,
    output: Vec<u8>,
    chunk: usize,
    reads: usize,
    writes: usize,
}

impl Trickle {
    pub fn new(input: Vec<u8>, chunk: usize) -> Self {
        Self {
            input: input.into(),
            output: Vec::new(),
            chunk,
            reads: 0,
            writes: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn written(&self) -> &[u8] {
        &self.output
    }
}

impl Read for Trickle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        let n = self.chunk.min(buf.len()).min(self.input.len());
        for (slot, byte) in buf.iter_mut().zip(self.input.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        let n = self.chunk.min(buf.len());
        self.output.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// One end of an in-memory duplex link
///
/// Reads time out with `WouldBlock` while nothing is pending, like a socket
/// with a read timeout, and report EOF once the far end is dropped.
pub struct Pipe {
    tx: Sender<Vec<u8>>,
    rx: Receiver<Vec<u8>>,
    pending: VecDeque<u8>,
    chunk: usize,
}

impl Read for Pipe {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pending.is_empty() {
            match self.rx.recv_timeout(Duration::from_millis(10)) {
                Ok(bytes) => self.pending.extend(bytes),
                Err(RecvTimeoutError::Timeout) => return Err(ErrorKind::WouldBlock.into()),
                Err(RecvTimeoutError::Disconnected) => return Ok(0),
            }
        }
        let n = self.chunk.min(buf.len()).min(self.pending.len());
        for (slot, byte) in buf.iter_mut().zip(self.pending.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl Write for Pipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len());
        self.tx
            .send(buf[..n].to_vec())
            .map_err(|_| io::Error::from(ErrorKind::BrokenPipe))?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Connected pair of transports moving at most `chunk` bytes per call
pub fn duplex(chunk: usize) -> (StreamTransport<Pipe>, StreamTransport<Pipe>) {
    let (a_tx, b_rx) = mpsc::channel();
    let (b_tx, a_rx) = mpsc::channel();
    let a = Pipe {
        tx: a_tx,
        rx: a_rx,
        pending: VecDeque::new(),
        chunk,
    };
    let b = Pipe {
        tx: b_tx,
        rx: b_rx,
        pending: VecDeque::new(),
        chunk,
    };
    (StreamTransport::new(a), StreamTransport::new(b))
}

/// Transport that flips the parity bit of the first outgoing guess
pub struct FlipParity<T> {
    inner: T,
    flipped: bool,
}

impl<T> FlipParity<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            flipped: false,
        }
    }
}

impl<T: Transport> Transport for FlipParity<T> {
    fn send_exact(&mut self, bytes: &[u8], cancel: &CancelToken) -> Result<(), TransportError> {
        if !self.flipped && bytes.len() == 2 {
            self.flipped = true;
            let corrupted = [bytes[0], bytes[1] ^ 0x80];
            return self.inner.send_exact(&corrupted, cancel);
        }
        self.inner.send_exact(bytes, cancel)
    }

    fn recv_exact(&mut self, buf: &mut [u8], cancel: &CancelToken) -> Result<(), TransportError> {
        self.inner.recv_exact(buf, cancel)
    }
}
