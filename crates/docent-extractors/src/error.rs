//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during text extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File extension is not recognized. Always a client-input error,
    /// distinct from extraction failures so callers can answer differently.
    #[error("Unsupported file format: {0}. Please upload a PDF or TXT file.")]
    UnsupportedFormat(String),

    /// Text file bytes are not valid UTF-8.
    #[error("Invalid UTF-8 in text file: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// PDF-specific extraction error.
    #[cfg(feature = "pdf")]
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// IO error during extraction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ExtractError {
    /// Whether this error is the caller's fault (unrecognized format)
    /// rather than a processing failure.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, ExtractError::UnsupportedFormat(_))
    }
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
