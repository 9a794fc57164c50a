//! Replay command
//!
//! Records a fixed sequence of guesses against a tracker and reports each
//! step.

use crate::core::{AbsurdleError, Clue, Word};
use crate::tracker::CandidateTracker;

/// A single recorded guess
pub struct ReplayStep {
    pub guess: String,
    pub clue: Clue,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of replaying a guess sequence
pub struct ReplayResult {
    pub steps: Vec<ReplayStep>,
    pub solved: bool,
    /// Candidates left after the last recorded guess
    pub remaining: Vec<String>,
}

/// Record each guess in order, stopping early once a clue is all Hit
///
/// # Errors
///
/// Returns the first error raised by word construction or
/// [`CandidateTracker::record`]. Steps before the failing guess have already
/// been applied to `tracker`.
pub fn run_replay<S: AsRef<str>>(
    tracker: &mut CandidateTracker,
    guesses: &[S],
) -> Result<ReplayResult, AbsurdleError> {
    let mut steps = Vec::with_capacity(guesses.len());
    let mut solved = false;

    for guess in guesses {
        let word = Word::new(guess)?;
        let candidates_before = tracker.len();
        let clue = tracker.record(&word)?;

        solved = clue.is_solved();
        steps.push(ReplayStep {
            guess: word.text().to_string(),
            clue,
            candidates_before,
            candidates_after: tracker.len(),
        });

        if solved {
            break;
        }
    }

    Ok(ReplayResult {
        steps,
        solved,
        remaining: tracker.words().iter().map(ToString::to_string).collect(),
    })
}
