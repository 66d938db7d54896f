//! PDF text extraction using pdf-extract.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{DocumentFormat, ExtractedText};
use crate::Extractor;
use async_trait::async_trait;

/// PDF text extractor using the pdf-extract library.
///
/// Extracts each page's text in document order and concatenates the pages
/// with no inserted separator. Synchronous pdf-extract calls run inside
/// spawn_blocking to avoid blocking the async runtime.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract per-page text synchronously (called within spawn_blocking).
    fn extract_sync(content: Vec<u8>) -> Result<Vec<String>, ExtractError> {
        pdf_extract::extract_text_from_mem_by_pages(&content)
            .map_err(|e| ExtractError::Pdf(format!("Failed to extract PDF text: {}", e)))
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedText> {
        let content = content.to_vec();

        // A failing page fails the whole extraction; no partial text.
        let pages = tokio::task::spawn_blocking(move || Self::extract_sync(content)).await??;

        let page_count = pages.len();
        let text: String = pages.concat();

        Ok(ExtractedText::new(text, DocumentFormat::Pdf).with_page_count(page_count))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two pages rendering "Alpha" and "Beta" with the base-14 Helvetica font.
    const TWO_PAGE_PDF: &[u8] = include_bytes!("../tests/fixtures/two_page.pdf");

    #[tokio::test]
    async fn test_pages_concatenate_in_document_order() {
        let extractor = PdfExtractor::new();
        let result = extractor.extract(TWO_PAGE_PDF).await.unwrap();

        assert_eq!(result.format, DocumentFormat::Pdf);
        assert_eq!(result.page_count, Some(2));

        let alpha = result.content.find("Alpha").unwrap();
        let beta = result.content.find("Beta").unwrap();
        assert!(alpha < beta);
        // No separator between pages beyond layout whitespace.
        let between = &result.content[alpha + "Alpha".len()..beta];
        assert!(between.chars().all(char::is_whitespace));
    }

    #[tokio::test]
    async fn test_invalid_pdf_bytes_fail() {
        let extractor = PdfExtractor::new();
        let result = extractor.extract(b"this is not a pdf").await;
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }

    #[tokio::test]
    async fn test_empty_bytes_fail() {
        let extractor = PdfExtractor::new();
        let result = extractor.extract(&[]).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_supported_extensions() {
        let extractor = PdfExtractor::new();
        assert!(extractor.supports("pdf"));
        assert!(!extractor.supports("txt"));
        assert_eq!(extractor.name(), "pdf-extract");
    }
}
