//! Absurdle
//!
//! An adversarial word-guessing engine. Instead of fixing a secret word, the
//! engine keeps every word still consistent with the clues it has given and,
//! after each guess, answers with the clue that keeps the most of them alive.
//!
//! # Quick Start
//!
//! ```rust
//! use absurdle::core::Word;
//! use absurdle::tracker::CandidateTracker;
//!
//! let mut tracker = CandidateTracker::new(["crane", "slate", "irate", "grate"], 5).unwrap();
//!
//! let clue = tracker.record(&Word::new("crate").unwrap()).unwrap();
//! println!("{clue}: {} candidates remain", tracker.len());
//! ```

// Core domain types
pub mod core;

// Adversarial candidate selection
pub mod tracker;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
