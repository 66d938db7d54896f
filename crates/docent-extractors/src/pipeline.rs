//! Extraction pipeline routing uploads to the appropriate extractor.

use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};
use crate::types::ExtractedText;
use crate::Extractor;

/// Pipeline for extracting text using registered extractors.
///
/// Routes by the filename's extension (lower-cased substring after the
/// last dot). No content sniffing is performed: a PDF uploaded under a
/// `.txt` name is processed as text, matching the declared contract.
pub struct ExtractionPipeline {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractionPipeline {
    /// Create new empty pipeline.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create pipeline with all available extractors.
    pub fn with_defaults() -> Self {
        let mut extractors: Vec<Arc<dyn Extractor>> = Vec::new();

        #[cfg(feature = "pdf")]
        extractors.push(Arc::new(crate::PdfExtractor::new()));

        extractors.push(Arc::new(crate::TextExtractor::new()));

        Self { extractors }
    }

    /// Add an extractor to the pipeline.
    pub fn add_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Extract text from an uploaded file's bytes, dispatching on the
    /// declared filename's extension.
    pub async fn extract(&self, filename: &str, content: &[u8]) -> ExtractResult<ExtractedText> {
        let extension = extension_of(filename)
            .ok_or_else(|| ExtractError::UnsupportedFormat(filename.to_string()))?;

        for extractor in &self.extractors {
            if extractor.supports(&extension) {
                return extractor.extract(content).await;
            }
        }

        Err(ExtractError::UnsupportedFormat(filename.to_string()))
    }

    /// Check if the pipeline can handle a given extension.
    pub fn supports(&self, extension: &str) -> bool {
        let extension = extension.to_ascii_lowercase();
        self.extractors.iter().any(|e| e.supports(&extension))
    }

    /// List all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.extractors
            .iter()
            .flat_map(|e| e.supported_extensions().iter().copied())
            .collect()
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Lower-cased extension of a filename, if it has one.
fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("report.pdf"), Some("pdf".to_string()));
        assert_eq!(extension_of("Report.PDF"), Some("pdf".to_string()));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension_of("no_extension"), None);
        assert_eq!(extension_of("trailing."), None);
    }

    #[test]
    fn test_pipeline_defaults() {
        let pipeline = ExtractionPipeline::with_defaults();
        assert!(pipeline.supports("txt"));

        #[cfg(feature = "pdf")]
        assert!(pipeline.supports("pdf"));

        assert!(!pipeline.supports("docx"));
    }

    #[test]
    fn test_supports_is_case_insensitive() {
        let pipeline = ExtractionPipeline::with_defaults();
        assert!(pipeline.supports("TXT"));
    }

    #[tokio::test]
    async fn test_extract_txt_by_extension() {
        let pipeline = ExtractionPipeline::with_defaults();
        let result = pipeline.extract("notes.txt", b"hello world").await.unwrap();
        assert_eq!(result.content, "hello world");
    }

    #[tokio::test]
    async fn test_extension_match_case_insensitive() {
        let pipeline = ExtractionPipeline::with_defaults();
        let lower = pipeline.extract("notes.txt", b"same path").await.unwrap();
        let upper = pipeline.extract("NOTES.TXT", b"same path").await.unwrap();
        assert_eq!(lower.content, upper.content);
        assert_eq!(lower.format, upper.format);
    }

    #[tokio::test]
    async fn test_unknown_extension_is_unsupported() {
        let pipeline = ExtractionPipeline::with_defaults();
        let result = pipeline.extract("slides.pptx", b"data").await;
        assert!(matches!(result, Err(ExtractError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_missing_extension_is_unsupported_not_extraction_error() {
        let pipeline = ExtractionPipeline::with_defaults();
        let result = pipeline.extract("README", b"data").await;
        match result {
            Err(err) => assert!(err.is_unsupported_format()),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[tokio::test]
    async fn test_empty_pipeline_supports_nothing() {
        let pipeline = ExtractionPipeline::new();
        let result = pipeline.extract("notes.txt", b"data").await;
        assert!(matches!(result, Err(ExtractError::UnsupportedFormat(_))));
    }
}
