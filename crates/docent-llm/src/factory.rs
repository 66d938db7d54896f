//! Factory for creating LLM providers.

use std::sync::Arc;

use docent_core::config::LlmProvider;
use docent_core::error::DocentResult;
use docent_core::traits::{Llm, LlmConfig};

use crate::demo::DemoLlm;
use crate::gemini::GeminiLlm;

/// Factory for creating LLM providers.
pub struct LlmFactory;

impl LlmFactory {
    /// Create an LLM provider from the given configuration.
    pub fn create(provider: LlmProvider, config: LlmConfig) -> DocentResult<Arc<dyn Llm>> {
        match provider {
            LlmProvider::Gemini => {
                let llm = GeminiLlm::new(config)?;
                Ok(Arc::new(llm))
            }
            LlmProvider::Demo => Ok(Arc::new(DemoLlm::new())),
        }
    }

    /// Create a Gemini LLM provider with default configuration.
    pub fn gemini() -> DocentResult<Arc<dyn Llm>> {
        Self::create(LlmProvider::Gemini, LlmConfig::default())
    }

    /// Create a Gemini LLM provider with a specific model.
    pub fn gemini_with_model(model: impl Into<String>) -> DocentResult<Arc<dyn Llm>> {
        let config = LlmConfig {
            model: model.into(),
            ..Default::default()
        };
        Self::create(LlmProvider::Gemini, config)
    }

    /// Create the offline demo provider.
    pub fn demo() -> Arc<dyn Llm> {
        Arc::new(DemoLlm::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_demo() {
        let llm = LlmFactory::demo();
        assert_eq!(llm.model_name(), "demo");
        assert!(!llm.supports_json_mode());
    }

    #[test]
    fn test_factory_gemini_with_explicit_key() {
        let config = LlmConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        let llm = LlmFactory::create(LlmProvider::Gemini, config).unwrap();
        assert!(llm.model_name().starts_with("gemini"));
    }
}
