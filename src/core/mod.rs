//! Core domain types for Mastermind
//!
//! Colors, packed codes and red/white scoring. Everything here is pure and
//! depends on nothing but the standard library and `thiserror`.

mod code;
mod color;
mod score;

pub use code::{BITS_PER_SLOT, CODE_MASK, CODE_SPACE, Code, CodeError, SLOTS};
pub use color::{COLORS, Color};
pub use score::Score;
