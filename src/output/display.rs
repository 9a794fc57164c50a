//! Display functions for command results

use super::formatters::{ClueStyle, create_progress_bar, render_clue, render_guess};
use crate::commands::{AnalysisResult, ReplayResult};
use colored::Colorize;

/// Print the result of replaying a guess sequence
pub fn print_replay_result(result: &ReplayResult, style: ClueStyle, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "Turn {}: {}",
            i + 1,
            render_guess(&step.guess, &step.clue, style)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!("{}", "─".repeat(60).cyan());
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved, {} candidates remain", result.remaining.len())
                .red()
                .bold()
        );
        if result.remaining.len() <= 10 {
            for word in &result.remaining {
                println!("  • {}", word.to_uppercase());
            }
        }
    }
}

/// Print the partition breakdown of a guess
pub fn print_analysis_result(result: &AnalysisResult, style: ClueStyle) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} candidates split into {} clues:\n",
        result.total_candidates,
        result.partitions.len()
    );

    for (clue, size) in &result.partitions {
        let bar = create_progress_bar(*size, result.total_candidates, 30);
        let line = format!("   {} [{}] {size:5}", render_clue(clue, style), bar.green());
        if *clue == result.chosen {
            println!("{}  {}", line, "← kept".bright_yellow().bold());
        } else {
            println!("{line}");
        }
    }

    println!(
        "\n   Adversary answers {} and keeps {} candidates",
        render_clue(&result.chosen, style),
        result.kept.to_string().bright_cyan().bold()
    );
    println!(
        "   {} hit, {} present; {} is {}a candidate",
        result.hits,
        result.presents,
        result.guess.to_uppercase(),
        if result.is_candidate { "" } else { "not " }
    );
}
