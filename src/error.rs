//! Error types for the uncv library.

use std::io;
use thiserror::Error;

/// Result type alias for uncv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while structuring a resume.
///
/// Only the extraction boundary (Stage 1 and the I/O step before it)
/// produces errors; the downstream stages degrade to empty fields instead
/// of failing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No usable text was extracted from any page.
    #[error("Empty document: no extractable text")]
    EmptyDocument,

    /// Extracted text exists but is too small to be a plausible resume.
    #[error("Extracted text too short: {len} chars (minimum {min})")]
    TooShort {
        /// Number of characters actually extracted.
        len: usize,
        /// Configured minimum.
        min: usize,
    },

    /// The document source failed to produce items for a page.
    #[error("Document source error: {0}")]
    Source(String),

    /// Error serializing output.
    #[error("Serialization error: {0}")]
    Serialize(String),
}
