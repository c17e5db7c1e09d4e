//! Error types for pagediff library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pagediff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while comparing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading inputs or writing outputs.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input exists but could not be decoded into pages of text.
    #[error("Cannot decode '{}': {reason}", path.display())]
    Decode {
        /// Path of the offending input
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// No document adapter handles this input.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// pdfium failed to bind, read or write a PDF.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// An annotation report could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build [`Error::PageOutOfRange`] from a 0-based page index.
    pub fn page_out_of_range(index: usize, page_count: usize) -> Self {
        Error::PageOutOfRange(index as u32 + 1, page_count as u32)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}
