//! Text documents and their comparison operations.
//!
//! The [`Document`] trait carries the whole contract: text access, word
//! count and the two LCS-based diffs. Only [`Document::text`] must be
//! supplied; everything else derives from it.

mod text;

pub use text::TextDocument;

use tracing::debug;

use crate::diff::CharDiff;
use crate::error::{Error, Result};
use crate::lcs::LcsTable;

/// Operations offered by a text document.
pub trait Document {
    /// Returns the stored text verbatim.
    fn text(&self) -> &str;

    /// Number of whitespace-separated words.
    ///
    /// Leading and trailing whitespace is ignored and any run of whitespace
    /// counts as a single separator, so an all-whitespace text has 0 words.
    /// Whitespace is the Unicode `White_Space` set, so a no-break space
    /// separates words while control characters such as U+0001 do not.
    fn word_count(&self) -> usize {
        self.text().split_whitespace().count()
    }

    /// Number of characters in the text.
    fn char_count(&self) -> usize {
        self.text().chars().count()
    }

    /// Characters to remove from this document so that the remainder is a
    /// subsequence of `other`.
    fn minus_diff(&self, other: &dyn Document) -> String {
        with_table(self.text(), other.text(), |table| table.minus_diff())
    }

    /// Characters of `other` to add to this document once the
    /// [`minus_diff`](Document::minus_diff) characters are removed.
    fn plus_diff(&self, other: &dyn Document) -> String {
        with_table(self.text(), other.text(), |table| table.plus_diff())
    }

    /// Both diffs against `other`, from one table.
    fn diff(&self, other: &dyn Document) -> CharDiff {
        CharDiff::between(self.text(), other.text())
    }

    /// Like [`minus_diff`](Document::minus_diff), for a possibly absent
    /// `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if `other` is `None`.
    fn try_minus_diff(&self, other: Option<&dyn Document>) -> Result<String> {
        let other = other.ok_or(Error::NullArgument("other"))?;
        Ok(self.minus_diff(other))
    }

    /// Like [`plus_diff`](Document::plus_diff), for a possibly absent
    /// `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if `other` is `None`.
    fn try_plus_diff(&self, other: Option<&dyn Document>) -> Result<String> {
        let other = other.ok_or(Error::NullArgument("other"))?;
        Ok(self.plus_diff(other))
    }
}

/// Builds a call-local table for `this` against `other` and hands it to `f`.
fn with_table<T>(this: &str, other: &str, f: impl FnOnce(&LcsTable<'_>) -> T) -> T {
    let a: Vec<char> = this.chars().collect();
    let b: Vec<char> = other.chars().collect();
    debug!(this_len = a.len(), other_len = b.len(), "comparing documents");
    f(&LcsTable::new(&a, &b))
}
