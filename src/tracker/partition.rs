//! Partitioning candidates by clue
//!
//! Given a guess and a candidate set, groups candidates by the clue each would
//! produce and picks the group the adversary keeps.

use crate::core::{AbsurdleError, Clue, Word, pattern_for};
use std::collections::{BTreeMap, BTreeSet};

/// Candidates grouped by the clue they produce, ordered by clue
pub type Partitions = BTreeMap<Clue, BTreeSet<Word>>;

/// Group candidates by the clue they produce with the guess
///
/// Every candidate lands in exactly one group, so the group sizes sum to the
/// number of candidates.
///
/// # Errors
/// Propagates clue generation errors (empty candidate or length mismatch).
pub fn group_by_clue<'a, I>(guess: &Word, candidates: I) -> Result<Partitions, AbsurdleError>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut groups = Partitions::new();

    for candidate in candidates {
        let clue = pattern_for(candidate, guess)?;
        groups.entry(clue).or_default().insert(candidate.clone());
    }

    Ok(groups)
}

/// Pick the largest group
///
/// Groups are scanned in ascending clue order and only a strictly larger group
/// replaces the current best, so among equal-size groups the smallest clue
/// wins. Returns `None` when there are no groups.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::tracker::{group_by_clue, select_largest};
///
/// let guess = Word::new("abc").unwrap();
/// let words: Vec<Word> = ["abc", "abd", "xyz"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let groups = group_by_clue(&guess, &words).unwrap();
/// let (clue, kept) = select_largest(groups).unwrap();
///
/// // Three groups of one; all-Miss sorts first
/// assert_eq!(clue.to_plain(), "---");
/// assert!(kept.contains("xyz"));
/// ```
#[must_use]
pub fn select_largest(groups: Partitions) -> Option<(Clue, BTreeSet<Word>)> {
    let mut best: Option<(Clue, BTreeSet<Word>)> = None;

    for (clue, words) in groups {
        let larger = best
            .as_ref()
            .is_none_or(|(_, kept)| words.len() > kept.len());
        if larger {
            best = Some((clue, words));
        }
    }

    best
}
