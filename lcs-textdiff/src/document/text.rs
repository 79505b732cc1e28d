//! The string-backed document.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use super::Document;
use crate::error::{Error, Result};

/// An immutable document holding a single text value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    /// Creates a document from text. The empty string is a valid text.
    pub fn new(text: impl Into<String>) -> Self {
        TextDocument { text: text.into() }
    }

    /// Creates a document from a possibly absent text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if `text` is `None`.
    pub fn from_option(text: Option<String>) -> Result<Self> {
        text.map(TextDocument::new).ok_or(Error::NullArgument("text"))
    }

    /// Loads a document from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading document");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads a document from any reader. The input must be valid UTF-8.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(TextDocument { text })
    }

    /// Consumes the document and returns its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Document for TextDocument {
    fn text(&self) -> &str {
        &self.text
    }
}

impl From<String> for TextDocument {
    fn from(text: String) -> Self {
        TextDocument::new(text)
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        TextDocument::new(text)
    }
}
