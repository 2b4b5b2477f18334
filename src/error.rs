//! Error types for the chapterize library.

use std::io;
use thiserror::Error;

/// Result type alias for chapterize operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction and export.
///
/// The classification core itself is total and never fails; errors are
/// confined to the input and output boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a word dump or writing chapter files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding the word dump produced by the extraction service.
    #[error("word dump decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Page index is out of range.
    #[error("page {0} is out of range (source has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// Invalid page range specification.
    #[error("invalid page range: {0}")]
    InvalidPageRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "page 10 is out of range (source has 5 pages)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
