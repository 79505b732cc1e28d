//! Minus/plus diff pair computed from a single LCS table.

use serde::Serialize;

use crate::lcs::LcsTable;

/// The character-level relationship between two texts.
///
/// `minus` holds the characters to delete from the first text, `plus` the
/// characters to insert from the second. Both come from the same table and
/// the same alignment path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharDiff {
    /// Characters removed from the first text.
    pub minus: String,
    /// Characters added from the second text.
    pub plus: String,
    /// Length of the longest common subsequence.
    pub lcs_len: usize,
}

impl CharDiff {
    /// Computes the diff of `this` against `other`, building the table once.
    pub fn between(this: &str, other: &str) -> Self {
        let a: Vec<char> = this.chars().collect();
        let b: Vec<char> = other.chars().collect();
        let table = LcsTable::new(&a, &b);

        CharDiff {
            minus: table.minus_diff(),
            plus: table.plus_diff(),
            lcs_len: table.lcs_len(),
        }
    }

    /// Returns true if the two texts were identical.
    pub fn is_empty(&self) -> bool {
        self.minus.is_empty() && self.plus.is_empty()
    }
}
