//! Guess analysis command
//!
//! Shows how a guess splits the current candidates without recording it.

use crate::core::{AbsurdleError, Clue, Mark, Word};
use crate::tracker::{CandidateTracker, select_largest};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    pub total_candidates: usize,
    /// Group sizes in ascending clue order
    pub partitions: Vec<(Clue, usize)>,
    /// The clue the adversary would answer with
    pub chosen: Clue,
    pub kept: usize,
    /// Hits and Presents in the chosen clue
    pub hits: usize,
    pub presents: usize,
    /// Whether the guess is itself still a candidate
    pub is_candidate: bool,
}

/// Analyze how `guess` would partition the tracker's candidates
///
/// # Errors
///
/// Returns an error if the guess is not a valid word, has the wrong length, or
/// the tracker has no candidates.
pub fn analyze_guess(
    tracker: &CandidateTracker,
    guess: &str,
) -> Result<AnalysisResult, AbsurdleError> {
    let word = Word::new(guess)?;
    let groups = tracker.partitions(&word)?;
    let is_candidate = groups.contains_key(&Clue::solved(word.len()));

    let partitions = groups
        .iter()
        .map(|(clue, words)| (clue.clone(), words.len()))
        .collect();

    let (chosen, kept) = select_largest(groups).ok_or(AbsurdleError::NoCandidates)?;

    Ok(AnalysisResult {
        guess: word.text().to_string(),
        total_candidates: tracker.len(),
        partitions,
        hits: chosen.count(Mark::Hit),
        presents: chosen.count(Mark::Present),
        chosen,
        kept: kept.len(),
        is_candidate,
    })
}
