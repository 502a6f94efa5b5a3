//! Error types for the docrank library.

use std::io;
use thiserror::Error;

/// Result type alias for docrank operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document analysis.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The content extractor could not read the source document.
    ///
    /// Inside the pipeline this is always degraded to a fallback result;
    /// it only surfaces to callers that invoke an extractor directly.
    #[error("Content extraction error: {0}")]
    Extraction(String),

    /// The file is not valid UTF-8 text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error serializing an analysis result.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
