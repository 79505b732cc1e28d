//! Example: Compare two text files character by character
//!
//! Usage: cargo run --example compare <this.txt> <other.txt>

use std::env;

use lcs_textdiff::{Document, TextDocument};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <this.txt> <other.txt>", args[0]);
        std::process::exit(1);
    }

    let this = TextDocument::from_path(&args[1])?;
    let other = TextDocument::from_path(&args[2])?;

    let diff = this.diff(&other);
    println!("words: {} / {}", this.word_count(), other.word_count());
    println!("minus: {:?}", diff.minus);
    println!("plus:  {:?}", diff.plus);

    if diff.is_empty() {
        eprintln!("Documents are identical.");
    }

    Ok(())
}
