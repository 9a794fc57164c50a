//! Absurdle - CLI
//!
//! Play against the adversary, replay a guess sequence, or inspect how a guess
//! splits the dictionary.

use absurdle::{
    commands::{PlayOutcome, analyze_guess, run_play, run_replay},
    output::{ClueStyle, print_analysis_result, print_replay_result},
    tracker::CandidateTracker,
    wordlists::{DICTIONARY, loader::load_from_file},
};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;

#[derive(Parser)]
#[command(
    name = "absurdle",
    about = "Adversarial word game that answers every guess with the least helpful clue",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length for the session
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Clue rendering: emoji (default), plain G/Y/- letters, or colored letters
    #[arg(long, global = true, value_enum, default_value_t = ClueStyle::Emoji)]
    style: ClueStyle,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Record a fixed sequence of guesses and show each clue
    Replay {
        /// Guesses in order
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Show candidate counts for each step
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess splits the dictionary without playing it
    Analyze {
        /// Guess to analyze
        guess: String,
    },
}

/// Load the word source based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "embedded" => Ok(DICTIONARY.iter().map(ToString::to_string).collect()),
        path => load_from_file(path).with_context(|| format!("reading wordlist {path}")),
    }
}

fn build_tracker(cli: &Cli) -> Result<CandidateTracker> {
    let words = load_words(&cli.wordlist)?;
    let tracker = CandidateTracker::new(&words, cli.length)?;

    if tracker.is_empty() {
        bail!(
            "wordlist '{}' has no {}-letter words",
            cli.wordlist,
            cli.length
        );
    }

    log::info!(
        "{} candidates of length {} from {}",
        tracker.len(),
        cli.length,
        cli.wordlist
    );
    Ok(tracker)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let style = cli.style;
    let mut tracker = build_tracker(&cli)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let outcome = run_play(&mut tracker, io::stdin().lock(), io::stdout(), style)?;
            if outcome == PlayOutcome::Quit {
                println!("👋 Thanks for playing!");
            }
        }
        Commands::Replay { guesses, verbose } => {
            let result = run_replay(&mut tracker, &guesses)?;
            print_replay_result(&result, style, verbose);
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&tracker, &guess)?;
            print_analysis_result(&result, style);
        }
    }

    Ok(())
}
