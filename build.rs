//! Build script to generate the embedded dictionary
//!
//! Reads the dictionary file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const DICTIONARY_PATH: &str = "data/dictionary.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        DICTIONARY_PATH,
        &Path::new(&out_dir).join("dictionary.rs"),
        "DICTIONARY",
    );

    println!("cargo:rerun-if-changed={DICTIONARY_PATH}");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Embedded dictionary, mixed word lengths ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
