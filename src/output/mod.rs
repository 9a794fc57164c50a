//! Terminal output formatting
//!
//! Clue rendering and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_replay_result};
pub use formatters::{ClueStyle, render_clue};
