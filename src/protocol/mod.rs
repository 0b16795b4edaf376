//! Wire protocol
//!
//! One codec used by both sides, plus the exact-count transfer primitives
//! the session loops run on.

mod codec;
mod transport;

pub use codec::{
    GUESS_BYTES, GuessMessage, JUDGMENT_BYTES, Judgment, PARITY_BIT, decode_guess,
    decode_judgment, encode_guess, encode_judgment,
};
pub use transport::{
    CANCEL_POLL_INTERVAL, CancelToken, StreamTransport, Transport, TransportError,
};
