//! Word list loading utilities
//!
//! Dictionaries are plain text, one word per line. Lines are trimmed and
//! lowercased; blank lines and `#` comments are skipped. Length filtering is
//! left to the tracker.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use absurdle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse dictionary text into words
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
