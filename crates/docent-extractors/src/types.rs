//! Core types for text extraction.

use serde::{Deserialize, Serialize};

/// Format of the original document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Plain text file.
    Text,
    /// PDF document.
    Pdf,
}

/// Plain text extracted from an uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    /// The extracted UTF-8 text. For PDFs, the page-ordered concatenation
    /// of each page's text with no separator between pages.
    pub content: String,

    /// Original document format.
    pub format: DocumentFormat,

    /// Page count for paged formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
}

impl ExtractedText {
    /// Create new extracted text.
    pub fn new(content: String, format: DocumentFormat) -> Self {
        Self {
            content,
            format,
            page_count: None,
        }
    }

    /// Attach a page count.
    pub fn with_page_count(mut self, page_count: usize) -> Self {
        self.page_count = Some(page_count);
        self
    }

    /// Check if extraction produced meaningful content.
    ///
    /// Empty is a valid outcome (e.g. an image-only PDF), not an error.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }
}
