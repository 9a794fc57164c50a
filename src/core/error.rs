//! Error types for the engine
//!
//! Every failure is a usage error surfaced synchronously to the caller.
//! Each variant belongs to one of two broad kinds, see [`ErrorKind`].

use std::fmt;

/// Broad classification of an [`AbsurdleError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument violated the operation's contract
    InvalidArgument,
    /// The tracker is in a state where the operation cannot run
    InvalidState,
}

/// Error type for word construction, clue generation and guess recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsurdleError {
    /// Tracker word length must be at least 1
    InvalidLength(usize),
    /// Secret word passed to clue generation was empty
    EmptyWord,
    /// Secret and guess lengths differ
    LengthMismatch { secret: usize, guess: usize },
    /// Guess length differs from the session word length
    WrongGuessLength { expected: usize, actual: usize },
    /// Word contains something other than an ASCII letter
    InvalidCharacter(char),
    /// No candidates remain to choose from
    NoCandidates,
}

impl AbsurdleError {
    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoCandidates => ErrorKind::InvalidState,
            Self::InvalidLength(_)
            | Self::EmptyWord
            | Self::LengthMismatch { .. }
            | Self::WrongGuessLength { .. }
            | Self::InvalidCharacter(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for AbsurdleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word length must be at least 1, got {len}")
            }
            Self::EmptyWord => write!(f, "Secret word must not be empty"),
            Self::LengthMismatch { secret, guess } => write!(
                f,
                "Secret has {secret} letters but guess has {guess}"
            ),
            Self::WrongGuessLength { expected, actual } => {
                write!(f, "Guess must be exactly {expected} letters, got {actual}")
            }
            Self::InvalidCharacter(ch) => write!(f, "Word contains invalid character {ch:?}"),
            Self::NoCandidates => write!(f, "No candidate words remain"),
        }
    }
}

impl std::error::Error for AbsurdleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(AbsurdleError::NoCandidates.kind(), ErrorKind::InvalidState);
        assert_eq!(AbsurdleError::EmptyWord.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            AbsurdleError::InvalidLength(0).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            AbsurdleError::WrongGuessLength {
                expected: 5,
                actual: 4
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn display_messages() {
        let err = AbsurdleError::WrongGuessLength {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Guess must be exactly 5 letters, got 3");
        assert_eq!(
            AbsurdleError::InvalidCharacter('3').to_string(),
            "Word contains invalid character '3'"
        );
    }
}
