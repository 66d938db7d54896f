//! docent-core - Core library for docent.
//!
//! This crate provides the configuration, error types, LLM trait, prompt
//! templates, response normalization, and the `DocumentAssistant` engine
//! for the docent document study assistant.
//!
//! # Example
//!
//! ```ignore
//! use docent_core::{AssistantConfig, DocumentAssistant};
//!
//! let assistant = DocumentAssistant::new(llm, AssistantConfig::default());
//!
//! let summary = assistant.summarize(&text).await?;
//! let questions = assistant.generate_questions(&text, 3).await?;
//! let verdict = assistant.evaluate(&text, &question, &answer).await?;
//! ```

pub mod assistant;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use assistant::{DocumentAssistant, Evaluation};
pub use config::{AssistantConfig, LlmProvider, LlmProviderConfig, QuestionConfig};
pub use error::{DocentError, DocentResult};
pub use traits::{GenerationOptions, Llm, LlmConfig, LlmResponse, ResponseFormat, TokenUsage};
pub use types::{DocumentSession, Message, MessageRole, SessionStore};
