//! Plain text extraction.

use crate::error::ExtractResult;
use crate::types::{DocumentFormat, ExtractedText};
use crate::Extractor;
use async_trait::async_trait;

/// Plain text extractor.
///
/// Decodes the uploaded bytes as UTF-8, strictly: invalid byte sequences
/// fail extraction rather than being replaced, so the stored text is the
/// byte-for-byte decode of the upload.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor;

impl TextExtractor {
    /// Create new text extractor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Extractor for TextExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedText> {
        let text = String::from_utf8(content.to_vec())?;
        Ok(ExtractedText::new(text, DocumentFormat::Text))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn name(&self) -> &str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[tokio::test]
    async fn test_valid_utf8_roundtrip() {
        let extractor = TextExtractor::new();
        let original = "Grüße, 世界!\nsecond line\n";

        let result = extractor.extract(original.as_bytes()).await.unwrap();

        assert_eq!(result.content, original);
        assert_eq!(result.content.as_bytes(), original.as_bytes());
        assert_eq!(result.format, DocumentFormat::Text);
        assert!(result.page_count.is_none());
    }

    #[tokio::test]
    async fn test_invalid_utf8_fails() {
        let extractor = TextExtractor::new();
        let result = extractor.extract(&[0x66, 0x6f, 0xff, 0xfe]).await;
        assert!(matches!(result, Err(ExtractError::InvalidEncoding(_))));
    }

    #[tokio::test]
    async fn test_empty_file_is_empty_string() {
        let extractor = TextExtractor::new();
        let result = extractor.extract(&[]).await.unwrap();
        assert_eq!(result.content, "");
        assert!(result.is_empty());
    }

    #[test]
    fn test_supported_extensions() {
        let extractor = TextExtractor::new();
        assert!(extractor.supports("txt"));
        assert!(!extractor.supports("pdf"));
    }
}
