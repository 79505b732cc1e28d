//! LCS Text Diff CLI
//!
//! Compares two text documents character by character and reports the
//! minus-diff, plus-diff and word counts.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use lcs_textdiff::{longest_common_substring, CharDiff, Document, LcsTable, TextDocument};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// LCS-based character diff for text documents
#[derive(Parser)]
#[command(name = "ltd")]
#[command(version)]
#[command(about = "LCS-based character diff for text documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Minus-diff and plus-diff of one document against another
    #[command(visible_alias = "d")]
    Diff {
        /// First document ("this")
        this: String,
        /// Second document ("other")
        other: String,
        /// Output file (default: stdout)
        output: Option<String>,

        /// Treat the arguments as text instead of file paths
        #[arg(short, long)]
        literal: bool,
    },

    /// Count the words in a document
    #[command(visible_alias = "w")]
    Words {
        /// Document
        file: String,

        /// Treat the argument as text instead of a file path
        #[arg(short, long)]
        literal: bool,
    },

    /// Longest common subsequence and substring of two documents
    #[command(visible_alias = "l")]
    Lcs {
        /// First document
        this: String,
        /// Second document
        other: String,

        /// Treat the arguments as text instead of file paths
        #[arg(short, long)]
        literal: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct DocumentSummary<'a> {
    text: &'a str,
    words: usize,
}

#[derive(Serialize)]
struct DiffReport<'a> {
    this: DocumentSummary<'a>,
    other: DocumentSummary<'a>,
    #[serde(flatten)]
    diff: CharDiff,
}

#[derive(Serialize)]
struct LcsReport {
    subsequence: String,
    substring: String,
    lcs_len: usize,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Diff {
            this,
            other,
            output,
            literal,
        } => run_diff(&this, &other, output.as_deref(), literal, cli.format),
        Commands::Words { file, literal } => run_words(&file, literal, cli.format),
        Commands::Lcs {
            this,
            other,
            literal,
        } => run_lcs(&this, &other, literal, cli.format),
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Builds a document from a file path, or from the argument itself.
fn load(arg: &str, literal: bool) -> lcs_textdiff::Result<TextDocument> {
    if literal {
        Ok(TextDocument::new(arg))
    } else {
        info!("Loading document: {}", arg);
        TextDocument::from_path(arg)
    }
}

/// Opens the output file, or stdout.
fn open_output(output_path: Option<&str>) -> io::Result<Box<dyn Write>> {
    Ok(match output_path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    })
}

/// Runs the minus/plus diff.
fn run_diff(
    this_arg: &str,
    other_arg: &str,
    output_path: Option<&str>,
    literal: bool,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let this = load(this_arg, literal)?;
    let other = load(other_arg, literal)?;

    info!(
        "Diffing {} chars against {} chars...",
        this.char_count(),
        other.char_count()
    );
    let report = DiffReport {
        this: DocumentSummary {
            text: this.text(),
            words: this.word_count(),
        },
        other: DocumentSummary {
            text: other.text(),
            words: other.word_count(),
        },
        diff: this.diff(&other),
    };

    let mut output = open_output(output_path)?;
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut output, &report)?;
            writeln!(output)?;
        }
        Format::Text => {
            writeln!(output, "this:        {:?}", report.this.text)?;
            writeln!(output, "other:       {:?}", report.other.text)?;
            writeln!(output, "this words:  {}", report.this.words)?;
            writeln!(output, "other words: {}", report.other.words)?;
            writeln!(output, "minus:       {:?}", report.diff.minus)?;
            writeln!(output, "plus:        {:?}", report.diff.plus)?;
        }
    }
    output.flush()?;

    info!("Diff complete.");
    Ok(())
}

/// Prints the word count of one document.
fn run_words(arg: &str, literal: bool, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(arg, literal)?;
    let words = doc.word_count();

    match format {
        Format::Json => println!("{}", serde_json::json!({ "words": words })),
        Format::Text => println!("{}", words),
    }
    Ok(())
}

/// Prints the longest common subsequence and substring.
fn run_lcs(
    this_arg: &str,
    other_arg: &str,
    literal: bool,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let this = load(this_arg, literal)?;
    let other = load(other_arg, literal)?;

    let a: Vec<char> = this.text().chars().collect();
    let b: Vec<char> = other.text().chars().collect();
    let table = LcsTable::new(&a, &b);

    let report = LcsReport {
        subsequence: table.common_subsequence(),
        substring: longest_common_substring(this.text(), other.text()),
        lcs_len: table.lcs_len(),
    };

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => {
            println!("subsequence: {:?}", report.subsequence);
            println!("substring:   {:?}", report.substring);
            println!("length:      {}", report.lcs_len);
        }
    }
    Ok(())
}
