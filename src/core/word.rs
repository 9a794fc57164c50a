//! Word representation
//!
//! A Word is an immutable run of lowercase ASCII letters. Its length is not
//! fixed here; the tracker enforces the session length.

use super::AbsurdleError;
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// An immutable lowercase word
///
/// Equality and ordering are lexicographic over the letters, so a
/// `BTreeSet<Word>` iterates in dictionary order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// ASCII uppercase is folded to lowercase. Any character that is not an
    /// ASCII letter is rejected. The empty string is accepted here; callers
    /// that need a non-empty word check for it.
    ///
    /// # Errors
    /// Returns [`AbsurdleError::InvalidCharacter`] for the first non-letter.
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, AbsurdleError> {
        let text = text.as_ref();

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(AbsurdleError::InvalidCharacter(bad));
        }

        Ok(Self {
            text: text.to_ascii_lowercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for clue generation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = AbsurdleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
