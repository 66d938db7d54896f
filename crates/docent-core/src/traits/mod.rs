//! Core traits for docent.

mod llm;

pub use llm::{GenerationOptions, Llm, LlmConfig, LlmResponse, ResponseFormat, TokenUsage};
