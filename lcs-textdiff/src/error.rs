//! Error types for lcs-textdiff.

use thiserror::Error;

/// Result type alias for lcs-textdiff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or comparing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was absent. Carries the argument name.
    #[error("Null argument: {0} is absent")]
    NullArgument(&'static str),

    /// I/O error while loading document text.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
