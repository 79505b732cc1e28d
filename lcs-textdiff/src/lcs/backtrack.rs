//! Backtracking walks over a built [`LcsTable`].
//!
//! Each walk starts at cell `(m, n)` and steps toward the origin. On a
//! character match both indices step back. Otherwise the walk steps toward
//! the neighbour holding the larger value, and on a tie it steps `j` back.
//! The minus walk expresses this as "drop `a[i-1]` only if the upper cell is
//! strictly greater", the plus walk as "take `b[j-1]` if the upper cell is not
//! greater". Both conditions pick the same cell, so every walk traces one
//! alignment path. Keep the comparisons as they are: making them identical
//! would move ties onto a different path.

use tracing::trace;

use super::LcsTable;

impl LcsTable<'_> {
    /// Characters of `a`, in order, that are off the LCS alignment.
    ///
    /// Removing them from `a` leaves a subsequence of `b`.
    pub fn minus_diff(&self) -> String {
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut removed = Vec::new();

        while i > 0 {
            if j > 0 && self.a[i - 1] == self.b[j - 1] {
                i -= 1;
                j -= 1;
                continue;
            }
            if j == 0 || self.get(i - 1, j) > self.get(i, j - 1) {
                removed.push(self.a[i - 1]);
                i -= 1;
            } else {
                j -= 1;
            }
        }

        trace!(len = removed.len(), "minus-diff extracted");
        removed.iter().rev().collect()
    }

    /// Characters of `b`, in order, that are off the LCS alignment.
    ///
    /// Inserting them into the residual of `a` (after [`minus_diff`]) along
    /// the same alignment yields `b`.
    ///
    /// [`minus_diff`]: LcsTable::minus_diff
    pub fn plus_diff(&self) -> String {
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut added = Vec::new();

        while j > 0 {
            if i > 0 && self.a[i - 1] == self.b[j - 1] {
                i -= 1;
                j -= 1;
                continue;
            }
            if i == 0 || self.get(i - 1, j) <= self.get(i, j - 1) {
                added.push(self.b[j - 1]);
                j -= 1;
            } else {
                i -= 1;
            }
        }

        trace!(len = added.len(), "plus-diff extracted");
        added.iter().rev().collect()
    }

    /// The common subsequence chosen by the alignment path.
    ///
    /// Equals `a` with the [`minus_diff`] characters removed at the positions
    /// the walk dropped them from, and has length
    /// [`lcs_len`](LcsTable::lcs_len).
    ///
    /// [`minus_diff`]: LcsTable::minus_diff
    pub fn common_subsequence(&self) -> String {
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut common = Vec::with_capacity(self.lcs_len());

        while i > 0 && j > 0 {
            if self.a[i - 1] == self.b[j - 1] {
                common.push(self.a[i - 1]);
                i -= 1;
                j -= 1;
            } else if self.get(i - 1, j) > self.get(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        common.iter().rev().collect()
    }
}
