//! Character-level diff results.
//!
//! A [`CharDiff`] pairs the minus-diff and plus-diff of two texts. It is
//! derived data: it is recomputed on every call and carries no positions, so
//! it cannot be applied as a patch.

mod char_diff;

pub use char_diff::CharDiff;
