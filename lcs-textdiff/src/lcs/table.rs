//! The LCS dynamic-programming table.

use tracing::debug;

/// LCS table for a pair of character sequences.
///
/// Cell `(i, j)` holds the length of the longest common subsequence of the
/// first `i` characters of `a` and the first `j` characters of `b`. Row 0 and
/// column 0 are zero. The cells live in one contiguous row-major buffer of
/// `(a.len() + 1) * (b.len() + 1)` entries.
///
/// The table borrows both sequences so that the backtracking walks can read
/// them without copying.
#[derive(Debug, Clone)]
pub struct LcsTable<'a> {
    pub(super) a: &'a [char],
    pub(super) b: &'a [char],
    cols: usize,
    cells: Vec<usize>,
}

impl<'a> LcsTable<'a> {
    /// Builds the table bottom-up in O(m·n) time and space.
    pub fn new(a: &'a [char], b: &'a [char]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        debug!(rows, cols, "building LCS table");

        let mut cells = vec![0usize; rows * cols];
        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        LcsTable { a, b, cols, cells }
    }

    /// Returns the value of cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i > a.len()` or `j > b.len()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows(), "row {} out of range", i);
        assert!(j < self.cols, "column {} out of range", j);
        self.cells[i * self.cols + j]
    }

    /// Number of rows, `a.len() + 1`.
    pub fn rows(&self) -> usize {
        self.a.len() + 1
    }

    /// Number of columns, `b.len() + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the longest common subsequence of the full sequences.
    pub fn lcs_len(&self) -> usize {
        self.get(self.a.len(), self.b.len())
    }
}
