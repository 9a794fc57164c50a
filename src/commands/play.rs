//! Interactive play mode
//!
//! Reads guesses line by line and answers each with the adversary's clue.

use crate::core::{Clue, Word};
use crate::output::formatters::{ClueStyle, render_guess};
use crate::tracker::CandidateTracker;
use std::io::{self, BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The player earned an all-Hit clue after this many valid guesses
    Solved(usize),
    /// The player quit or input ran out
    Quit,
}

/// Run an interactive game on `tracker`
///
/// Each input line is one guess. Commands start with `:`, which no word can
/// contain: `:quit` (or `:q`) and end of input stop the game, and `:words`
/// lists the candidates when there are few enough to show. Invalid guesses are
/// reported and do not count.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    tracker: &mut CandidateTracker,
    mut input: R,
    mut output: W,
    style: ClueStyle,
) -> io::Result<PlayOutcome> {
    writeln!(
        output,
        "Guess a {}-letter word. {} candidates remain.",
        tracker.length(),
        tracker.len()
    )?;
    writeln!(output, "Commands: ':words' to list candidates, ':quit' to exit\n")?;

    let mut history: Vec<(String, Clue)> = Vec::new();
    let mut line = String::new();

    loop {
        write!(output, "Guess {}: ", history.len() + 1)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(PlayOutcome::Quit);
        }

        let entry = line.trim().to_lowercase();
        match entry.as_str() {
            "" => {}
            ":quit" | ":q" | ":exit" => return Ok(PlayOutcome::Quit),
            ":words" => list_candidates(tracker, &mut output)?,
            _ => {
                let result = Word::new(&entry).and_then(|word| tracker.record(&word));
                match result {
                    Ok(clue) => {
                        writeln!(output, "{}", render_guess(&entry, &clue, style))?;
                        let solved = clue.is_solved();
                        history.push((entry.clone(), clue));

                        if solved {
                            writeln!(output, "\nSolved in {} guesses!", history.len())?;
                            for (i, (guess, clue)) in history.iter().enumerate() {
                                writeln!(
                                    output,
                                    "  {}. {}",
                                    i + 1,
                                    render_guess(guess, clue, style)
                                )?;
                            }
                            return Ok(PlayOutcome::Solved(history.len()));
                        }

                        writeln!(output, "{} candidates remain", tracker.len())?;
                    }
                    Err(e) => {
                        log::debug!("rejected guess {entry:?}: {e}");
                        writeln!(output, "Invalid guess: {e}")?;
                    }
                }
            }
        }
    }
}

fn list_candidates<W: Write>(tracker: &CandidateTracker, output: &mut W) -> io::Result<()> {
    const MAX_SHOWN: usize = 20;

    if tracker.len() > MAX_SHOWN {
        return writeln!(output, "{} candidates remain", tracker.len());
    }
    for word in tracker.words() {
        writeln!(output, "  {word}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(words: &[&str], length: usize, input: &str) -> (PlayOutcome, String) {
        let mut tracker = CandidateTracker::new(words, length).unwrap();
        let mut output = Vec::new();
        let outcome = run_play(&mut tracker, input.as_bytes(), &mut output, ClueStyle::Plain)
            .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn play_to_solution() {
        let (outcome, output) = play(&["abc", "abd", "xyz"], 3, "abc\nxyz\n");
        assert_eq!(outcome, PlayOutcome::Solved(2));
        assert!(output.contains("ABC ---"));
        assert!(output.contains("XYZ GGG"));
        assert!(output.contains("Solved in 2 guesses!"));
    }

    #[test]
    fn play_invalid_guesses_do_not_count() {
        let (outcome, output) = play(&["abc", "xyz"], 3, "abcd\na1c\n\nabc\nxyz\n");
        assert_eq!(outcome, PlayOutcome::Solved(2));
        assert!(output.contains("Invalid guess: Guess must be exactly 3 letters, got 4"));
        assert!(output.contains("Invalid guess: Word contains invalid character '1'"));
    }

    #[test]
    fn play_quit_and_eof() {
        let (outcome, _) = play(&["abc"], 3, ":quit\nabc\n");
        assert_eq!(outcome, PlayOutcome::Quit);

        let (outcome, _) = play(&["abc"], 3, "");
        assert_eq!(outcome, PlayOutcome::Quit);
    }

    #[test]
    fn play_accepts_words_spelled_like_commands() {
        let (outcome, output) = play(&["exit"], 4, "exit\n");
        assert_eq!(outcome, PlayOutcome::Solved(1));
        assert!(output.contains("EXIT GGGG"));

        let (outcome, _) = play(&["quit", "word"], 4, "quit\nword\n");
        assert_eq!(outcome, PlayOutcome::Solved(2));
    }

    #[test]
    fn play_lists_candidates() {
        let (_, output) = play(&["abc", "xyz"], 3, ":words\n:q\n");
        assert!(output.contains("  abc\n"));
        assert!(output.contains("  xyz\n"));
    }
}
