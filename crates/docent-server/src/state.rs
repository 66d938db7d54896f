//! Server state management.

use std::sync::Arc;

use docent_core::assistant::DocumentAssistant;
use docent_core::types::SessionStore;
use docent_extractors::ExtractionPipeline;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// LLM-backed document task engine.
    pub assistant: Arc<DocumentAssistant>,
    /// Upload text extraction pipeline.
    pub extractor: Arc<ExtractionPipeline>,
    /// Keyed document session store.
    pub sessions: SessionStore,
}

impl AppState {
    /// Create application state around a configured assistant.
    pub fn new(assistant: DocumentAssistant) -> Self {
        Self {
            assistant: Arc::new(assistant),
            extractor: Arc::new(ExtractionPipeline::with_defaults()),
            sessions: SessionStore::new(),
        }
    }

    /// Override the extraction pipeline.
    pub fn with_extractor(mut self, extractor: ExtractionPipeline) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }
}
