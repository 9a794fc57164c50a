//! Word lists
//!
//! Provides the embedded dictionary and file loading. The tracker accepts any
//! iterable of strings, so these are conveniences for the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::CandidateTracker;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_lowercase_letters() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_supports_default_length() {
        let tracker = CandidateTracker::new(DICTIONARY, 5).unwrap();
        assert!(tracker.len() > 100);
    }
}
