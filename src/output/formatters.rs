//! Formatting utilities for terminal output

use crate::core::{Clue, Mark};
use clap::ValueEnum;
use colored::Colorize;

/// How clues are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ClueStyle {
    /// 🟩🟨⬜
    #[default]
    Emoji,
    /// G, Y and - letters
    Plain,
    /// Letters on colored backgrounds
    Colored,
}

/// Render a clue in the given style
#[must_use]
pub fn render_clue(clue: &Clue, style: ClueStyle) -> String {
    match style {
        ClueStyle::Emoji => clue.to_string(),
        ClueStyle::Plain => clue.to_plain(),
        ClueStyle::Colored => clue
            .marks()
            .iter()
            .map(|&mark| {
                let s = format!(" {} ", mark.letter());
                match mark {
                    Mark::Hit => s.black().on_green().to_string(),
                    Mark::Present => s.black().on_yellow().to_string(),
                    Mark::Miss => s.white().on_bright_black().to_string(),
                }
            })
            .collect(),
    }
}

/// Render an uppercase guess followed by its clue
#[must_use]
pub fn render_guess(guess: &str, clue: &Clue, style: ClueStyle) -> String {
    format!("{} {}", guess.to_uppercase(), render_clue(clue, style))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_emoji_and_plain() {
        let clue: Clue = "GY-".parse().unwrap();
        assert_eq!(render_clue(&clue, ClueStyle::Emoji), "🟩🟨⬜");
        assert_eq!(render_clue(&clue, ClueStyle::Plain), "GY-");
    }

    #[test]
    fn render_guess_uppercases() {
        let clue: Clue = "---".parse().unwrap();
        assert_eq!(render_guess("abc", &clue, ClueStyle::Plain), "ABC ---");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
