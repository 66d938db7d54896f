//! Configuration system for docent.

use serde::{Deserialize, Serialize};

use crate::error::{DocentError, DocentResult};
use crate::traits::LlmConfig;

/// LLM provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Gemini,
    /// Offline canned responses, used when no API key is configured.
    Demo,
}

/// Provider configuration with type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmProviderConfig {
    /// Provider type.
    pub provider: LlmProvider,
    /// Provider-specific configuration.
    #[serde(flatten)]
    pub config: LlmConfig,
}

impl Default for LlmProviderConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::Gemini,
            config: LlmConfig {
                model: "gemini-2.5-flash-lite-preview-06-17".to_string(),
                ..Default::default()
            },
        }
    }
}

/// Bounds for generated question counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionConfig {
    /// Minimum number of questions a caller may request.
    pub min: usize,
    /// Maximum number of questions a caller may request.
    pub max: usize,
    /// Count used when the caller does not specify one.
    pub default: usize,
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            min: 3,
            max: 10,
            default: 3,
        }
    }
}

impl QuestionConfig {
    /// Validate a requested question count against the bounds.
    pub fn validate(&self, count: usize) -> DocentResult<()> {
        if count < self.min || count > self.max {
            return Err(DocentError::Validation(format!(
                "Number of questions must be between {} and {}.",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Main assistant configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// LLM configuration.
    pub llm: LlmProviderConfig,
    /// Question count bounds.
    pub questions: QuestionConfig,
}

impl AssistantConfig {
    /// Load configuration from a file (TOML or JSON, by extension).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> DocentResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| DocentError::Configuration(format!("Invalid TOML config: {}", e))),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| DocentError::Configuration(format!("Invalid JSON config: {}", e))),
            other => Err(DocentError::Configuration(format!(
                "Unsupported config file extension: {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_is_gemini() {
        let config = AssistantConfig::default();
        assert_eq!(config.llm.provider, LlmProvider::Gemini);
        assert!(config.llm.config.model.starts_with("gemini"));
    }

    #[test]
    fn test_question_bounds_validation() {
        let bounds = QuestionConfig::default();
        assert!(bounds.validate(3).is_ok());
        assert!(bounds.validate(10).is_ok());
        assert!(bounds.validate(2).is_err());
        assert!(bounds.validate(11).is_err());
    }

    #[test]
    fn test_config_from_toml_str() {
        let raw = r#"
            [llm]
            provider = "demo"
            model = "test-model"

            [questions]
            max = 5
        "#;
        let config: AssistantConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.llm.provider, LlmProvider::Demo);
        assert_eq!(config.llm.config.model, "test-model");
        assert_eq!(config.questions.max, 5);
        assert_eq!(config.questions.min, 3);
    }
}
