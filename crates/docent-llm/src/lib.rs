//! docent-llm - LLM provider implementations for docent.
//!
//! # Supported providers
//!
//! - **Gemini** - Google Generative Language API (`GEMINI_API_KEY`)
//! - **Demo** - offline canned responses for development and tests
//!
//! # Example
//!
//! ```ignore
//! use docent_llm::LlmFactory;
//!
//! let llm = LlmFactory::gemini()?;
//! // or a specific model
//! let llm = LlmFactory::gemini_with_model("gemini-2.5-flash")?;
//! ```

mod demo;
mod factory;
mod gemini;

pub use demo::DemoLlm;
pub use factory::LlmFactory;
pub use gemini::GeminiLlm;

// Re-export core types for convenience
pub use docent_core::config::LlmProvider;
pub use docent_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse, ResponseFormat};
