//! Clue generation and representation
//!
//! A clue is the per-position feedback for a guess:
//! - Hit: letter in the correct position (🟩)
//! - Present: letter in the word, wrong position (🟨)
//! - Miss: no unmatched occurrence left in the secret (⬜)

use super::{AbsurdleError, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single position
///
/// Ordered `Miss < Present < Hit`. Clues compare lexicographically over their
/// marks, which makes this order the tie-break order used when two candidate
/// groups are the same size. It matches how the glyphs ⬜ 🟨 🟩 sort as
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    Miss,
    Present,
    Hit,
}

impl Mark {
    /// Emoji glyph for this mark
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }

    /// Single ASCII letter for this mark
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hit => 'G',
            Self::Present => 'Y',
            Self::Miss => '-',
        }
    }

    /// Parse from a character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨, and '-'/'_'/⬜.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Feedback pattern for one guess against one secret
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clue(Vec<Mark>);

impl Clue {
    /// Build a clue from marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// A clue of `len` Hits
    #[must_use]
    pub fn solved(len: usize) -> Self {
        Self(vec![Mark::Hit; len])
    }

    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is a Hit
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Hit)
    }

    /// Count marks of the given kind
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Render as ASCII letters, e.g. "GY-G-"
    #[must_use]
    pub fn to_plain(&self) -> String {
        self.0.iter().map(|m| m.letter()).collect()
    }
}

impl fmt::Display for Clue {
    /// Emoji rendering, e.g. "🟩🟨⬜"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.glyph())?;
        }
        Ok(())
    }
}

impl FromStr for Clue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| Mark::from_char(c).ok_or_else(|| format!("Invalid clue string: {s}")))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Calculate the clue `guess` earns when `secret` is the hidden word
///
/// Implements Wordle's exact feedback rules, including repeated letters.
///
/// # Algorithm
/// 1. Count the secret's letters
/// 2. First pass: mark exact matches as Hit and remove them from the pool
/// 3. Second pass: mark remaining positions Present while the pool still holds
///    that letter, otherwise Miss
///
/// Hits are settled before any Present is assigned, so a correctly placed
/// letter is never claimed by a misplaced duplicate earlier in the guess.
///
/// # Errors
/// - [`AbsurdleError::EmptyWord`] if `secret` is empty
/// - [`AbsurdleError::LengthMismatch`] if the lengths differ
///
/// # Examples
/// ```
/// use absurdle::core::{Word, pattern_for};
///
/// let secret = Word::new("ababb").unwrap();
/// let guess = Word::new("aabbb").unwrap();
/// let clue = pattern_for(&secret, &guess).unwrap();
///
/// assert_eq!(clue.to_plain(), "GYYGG");
/// assert_eq!(clue.to_string(), "🟩🟨🟨🟩🟩");
/// ```
pub fn pattern_for(secret: &Word, guess: &Word) -> Result<Clue, AbsurdleError> {
    if secret.is_empty() {
        return Err(AbsurdleError::EmptyWord);
    }
    if secret.len() != guess.len() {
        return Err(AbsurdleError::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let mut marks = vec![Mark::Miss; guess.len()];
    let mut available = secret.char_counts();

    // First pass: Hits
    for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
        if g == s {
            marks[i] = Mark::Hit;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: Presents from what the Hits left over
    for (i, &g) in guess.chars().iter().enumerate() {
        if marks[i] == Mark::Hit {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            marks[i] = Mark::Present;
            *count -= 1;
        }
    }

    Ok(Clue(marks))
}
