//! docent-extractors - Document text extraction for docent uploads.
//!
//! Converts an uploaded file's raw bytes plus its declared filename into a
//! single plain-text string, with a unified trait-based interface and
//! extension-based dispatch.
//!
//! # Features
//!
//! - `pdf` (default) - PDF text extraction via pdf-extract
//!
//! # Example
//!
//! ```ignore
//! use docent_extractors::ExtractionPipeline;
//!
//! let pipeline = ExtractionPipeline::with_defaults();
//! let extracted = pipeline.extract("report.pdf", &bytes).await?;
//! println!("{}", extracted.content);
//! ```

mod error;
mod pipeline;
mod text;
mod types;

#[cfg(feature = "pdf")]
mod pdf;

pub use error::{ExtractError, ExtractResult};
pub use pipeline::ExtractionPipeline;
pub use text::TextExtractor;
pub use types::{DocumentFormat, ExtractedText};

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

use async_trait::async_trait;

/// Core Extractor trait - all text extractors implement this.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract plain text from the file's bytes.
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedText>;

    /// File extensions this extractor handles (lower-case, no dot).
    fn supported_extensions(&self) -> &[&str];

    /// Check if this extractor handles the given extension.
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions().contains(&extension)
    }

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
