//! Adversarial candidate tracking
//!
//! The tracker owns the set of words still consistent with every clue issued
//! so far. Each recorded guess narrows that set to the largest group of
//! candidates sharing a clue.

mod partition;

pub use partition::{Partitions, group_by_clue, select_largest};

use crate::core::{AbsurdleError, Clue, Word};
use std::collections::BTreeSet;

/// Session state for one game: a fixed word length and the surviving words
///
/// `record` takes `&mut self`; sharing a tracker across threads needs an
/// external lock.
#[derive(Debug, Clone)]
pub struct CandidateTracker {
    length: usize,
    candidates: BTreeSet<Word>,
}

impl CandidateTracker {
    /// Create a tracker from a word source
    ///
    /// Keeps every entry of exactly `length` characters, deduplicated and
    /// ordered. Entries are lowercased before deduplication, so `"ABC"` and
    /// `"abc"` become a single candidate `abc`. Entries containing non-letters
    /// are skipped. An empty result is not an error here;
    /// [`record`](Self::record) reports it.
    ///
    /// # Errors
    /// Returns [`AbsurdleError::InvalidLength`] if `length` is 0.
    ///
    /// # Examples
    /// ```
    /// use absurdle::tracker::CandidateTracker;
    ///
    /// let tracker = CandidateTracker::new(["abc", "abd", "abc", "wxyz"], 3).unwrap();
    /// assert_eq!(tracker.len(), 2);
    /// ```
    pub fn new<I, S>(words: I, length: usize) -> Result<Self, AbsurdleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if length < 1 {
            return Err(AbsurdleError::InvalidLength(length));
        }

        let mut candidates = BTreeSet::new();
        let mut skipped = 0usize;

        for entry in words {
            let entry = entry.as_ref();
            if entry.chars().count() != length {
                continue;
            }
            match Word::new(entry) {
                Ok(word) => {
                    candidates.insert(word);
                }
                Err(e) => {
                    log::debug!("skipping {entry:?}: {e}");
                    skipped += 1;
                }
            }
        }

        log::debug!(
            "tracker ready: {} candidates of length {length} ({skipped} skipped)",
            candidates.len()
        );

        Ok(Self { length, candidates })
    }

    /// The surviving candidates, in dictionary order
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<Word> {
        &self.candidates
    }

    /// Fixed word length for this session
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of surviving candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Group the current candidates by the clue `guess` would earn
    ///
    /// Does not change the tracker.
    ///
    /// # Errors
    /// Same preconditions as [`record`](Self::record).
    pub fn partitions(&self, guess: &Word) -> Result<Partitions, AbsurdleError> {
        self.check(guess)?;
        group_by_clue(guess, &self.candidates)
    }

    /// Record a guess and return the adversary's clue
    ///
    /// Partitions the candidates by clue, keeps the largest group (smallest
    /// clue on ties) and returns that group's clue. On error the candidate set
    /// is left untouched.
    ///
    /// # Errors
    /// - [`AbsurdleError::NoCandidates`] if no candidates remain
    /// - [`AbsurdleError::WrongGuessLength`] if the guess length differs from
    ///   the session length
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Word;
    /// use absurdle::tracker::CandidateTracker;
    ///
    /// let mut tracker = CandidateTracker::new(["abc", "abd", "xyz"], 3).unwrap();
    /// let clue = tracker.record(&Word::new("abc").unwrap()).unwrap();
    ///
    /// assert_eq!(clue.to_string(), "⬜⬜⬜");
    /// assert!(tracker.words().contains("xyz"));
    /// assert_eq!(tracker.len(), 1);
    /// ```
    pub fn record(&mut self, guess: &Word) -> Result<Clue, AbsurdleError> {
        let groups = self.partitions(guess)?;
        let group_count = groups.len();

        if log::log_enabled!(log::Level::Trace) {
            for (clue, words) in &groups {
                log::trace!("{guess} {} {:>6}", clue.to_plain(), words.len());
            }
        }

        let (clue, kept) = select_largest(groups).ok_or(AbsurdleError::NoCandidates)?;

        log::debug!(
            "{guess}: kept {} of {} across {group_count} clues ({})",
            kept.len(),
            self.candidates.len(),
            clue.to_plain()
        );

        self.candidates = kept;
        Ok(clue)
    }

    fn check(&self, guess: &Word) -> Result<(), AbsurdleError> {
        if self.candidates.is_empty() {
            return Err(AbsurdleError::NoCandidates);
        }
        if guess.len() != self.length {
            return Err(AbsurdleError::WrongGuessLength {
                expected: self.length,
                actual: guess.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn new_filters_and_dedups() {
        let tracker = CandidateTracker::new(["abc", "ab", "abcd", "xyz", "abc"], 3).unwrap();
        let words: Vec<&str> = tracker.words().iter().map(Word::text).collect();
        assert_eq!(words, ["abc", "xyz"]);
        assert_eq!(tracker.length(), 3);
    }

    #[test]
    fn new_skips_non_letters() {
        let tracker = CandidateTracker::new(["ab1", "a-c", "abc"], 3).unwrap();
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn new_normalizes_case() {
        let tracker = CandidateTracker::new(["ABC", "abc"], 3).unwrap();
        assert_eq!(tracker.len(), 1);
        assert!(tracker.words().contains("abc"));
    }

    #[test]
    fn new_merges_case_variants() {
        let tracker = CandidateTracker::new(["XYZ", "Abc", "aBC", "xyz"], 3).unwrap();
        let words: Vec<&str> = tracker.words().iter().map(Word::text).collect();
        assert_eq!(words, ["abc", "xyz"]);
    }

    #[test]
    fn new_rejects_zero_length() {
        let err = CandidateTracker::new(["abc"], 0).unwrap_err();
        assert_eq!(err, AbsurdleError::InvalidLength(0));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn new_allows_empty_result() {
        let tracker = CandidateTracker::new(["abc"], 4).unwrap();
        assert!(tracker.is_empty());
    }

    #[test]
    fn record_end_to_end() {
        let mut tracker = CandidateTracker::new(["abc", "abd", "xyz"], 3).unwrap();
        let clue = tracker.record(&word("abc")).unwrap();

        assert_eq!(clue.to_plain(), "---");
        let words: Vec<&str> = tracker.words().iter().map(Word::text).collect();
        assert_eq!(words, ["xyz"]);
    }

    #[test]
    fn record_keeps_largest_group() {
        let mut tracker =
            CandidateTracker::new(["bbbbb", "ccccc", "ddddd", "crane"], 5).unwrap();
        let clue = tracker.record(&word("crane")).unwrap();

        // Only "ccccc" shares a letter with the guess
        assert_eq!(clue.to_plain(), "-----");
        assert_eq!(tracker.len(), 2);
        assert!(!tracker.words().contains("crane"));
    }

    #[test]
    fn record_wrong_length_leaves_state() {
        let mut tracker = CandidateTracker::new(["abc", "abd"], 3).unwrap();
        let err = tracker.record(&word("abcd")).unwrap_err();

        assert_eq!(
            err,
            AbsurdleError::WrongGuessLength {
                expected: 3,
                actual: 4
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn record_empty_is_invalid_state() {
        let mut tracker = CandidateTracker::new(Vec::<String>::new(), 5).unwrap();
        let err = tracker.record(&word("crane")).unwrap_err();
        assert_eq!(err, AbsurdleError::NoCandidates);
        assert_eq!(err.kind(), ErrorKind::InvalidState);

        // Empty set is reported before the length check
        let err = tracker.record(&word("ab")).unwrap_err();
        assert_eq!(err, AbsurdleError::NoCandidates);
    }

    #[test]
    fn partitions_do_not_mutate() {
        let tracker = CandidateTracker::new(["abc", "abd", "xyz"], 3).unwrap();
        let groups = tracker.partitions(&word("abc")).unwrap();

        assert_eq!(groups.len(), 3);
        assert_eq!(tracker.len(), 3);
        assert!(groups.contains_key(&Clue::solved(3)));
    }

    #[test]
    fn solved_when_single_candidate_guessed() {
        let mut tracker = CandidateTracker::new(["abc", "xyz"], 3).unwrap();
        tracker.record(&word("abc")).unwrap();
        // Only "xyz" survives; guessing it must be all-Hit
        let clue = tracker.record(&word("xyz")).unwrap();
        assert!(clue.is_solved());
        assert_eq!(tracker.len(), 1);
    }
}
