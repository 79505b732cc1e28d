//! LCS Text Diff - character-level document comparison
//!
//! This library compares two text documents through their longest common
//! subsequence (LCS). For a document A and another document B it reports:
//!
//! - the **minus-diff**: characters to delete from A so the remainder is a
//!   subsequence of B
//! - the **plus-diff**: characters of B to insert into that remainder so it
//!   lines up with B along the same alignment
//!
//! It also counts the words in a document.
//!
//! # Example
//!
//! ```
//! use lcs_textdiff::{Document, TextDocument};
//!
//! let a = TextDocument::new("Hello World");
//! let b = TextDocument::new("Helo Word!");
//! assert_eq!(a.minus_diff(&b), "ll");
//! assert_eq!(a.plus_diff(&b), "!");
//! assert_eq!(a.word_count(), 2);
//! ```
//!
//! # Cost
//!
//! Every diff call builds an (m+1)×(n+1) table, so time and memory are
//! quadratic in the document lengths. Nothing is cached between calls.

pub mod diff;
pub mod document;
pub mod error;
pub mod lcs;

pub use diff::CharDiff;
pub use document::{Document, TextDocument};
pub use error::{Error, Result};
pub use lcs::{lcs_length, longest_common_substring, LcsTable};
