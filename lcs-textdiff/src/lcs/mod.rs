//! Longest common subsequence machinery.
//!
//! This module builds the LCS dynamic-programming table for two character
//! sequences and walks it back from the final cell to extract the minus-diff
//! (characters to drop from the first sequence) and the plus-diff (characters
//! to add from the second). Both walks follow the same alignment path, so a
//! minus/plus pair taken from one table is always mutually consistent.

mod backtrack;
mod substring;
mod table;

pub use substring::longest_common_substring;
pub use table::LcsTable;

/// Returns the LCS length of two strings, compared by `char`.
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    LcsTable::new(&a, &b).lcs_len()
}
