//! Core domain types
//!
//! Words, clues and the pure clue generator. Nothing here holds state.

mod clue;
mod error;
mod word;

pub use clue::{Clue, Mark, pattern_for};
pub use error::{AbsurdleError, ErrorKind};
pub use word::Word;
