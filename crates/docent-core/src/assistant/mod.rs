//! Document assistant engine.
//!
//! Composes the prompt templates, the LLM boundary, and the response
//! normalizer into the four document tasks: summarize, generate questions,
//! answer, evaluate. The engine holds no per-document state; session
//! storage lives in [`crate::types::SessionStore`].

pub mod normalize;
pub mod prompts;

use std::sync::Arc;

use tracing::debug;

use crate::config::{AssistantConfig, QuestionConfig};
use crate::error::DocentResult;
use crate::traits::{GenerationOptions, Llm, ResponseFormat};
use crate::types::Message;

pub use normalize::Evaluation;

/// Engine for LLM-backed document tasks.
pub struct DocumentAssistant {
    llm: Arc<dyn Llm>,
    config: AssistantConfig,
}

impl DocumentAssistant {
    /// Create a new assistant over the given LLM provider.
    pub fn new(llm: Arc<dyn Llm>, config: AssistantConfig) -> Self {
        Self { llm, config }
    }

    /// Question count bounds for request validation.
    pub fn question_bounds(&self) -> QuestionConfig {
        self.config.questions
    }

    /// Name of the underlying model.
    pub fn model_name(&self) -> &str {
        self.llm.model_name()
    }

    /// Render a prompt, call the LLM, and return the raw text response.
    async fn complete(
        &self,
        prompt: String,
        response_format: Option<ResponseFormat>,
    ) -> DocentResult<String> {
        let messages = [Message::user(prompt)];
        let options = GenerationOptions {
            response_format,
            ..Default::default()
        };
        let response = self.llm.generate(&messages, Some(options)).await?;
        Ok(response.content_or_empty().to_string())
    }

    /// Generate a summary of the document text.
    pub async fn summarize(&self, text: &str) -> DocentResult<String> {
        debug!(chars = text.len(), "generating summary");
        let raw = self.complete(prompts::summary_prompt(text), None).await?;
        Ok(normalize::normalize_summary(&raw))
    }

    /// Generate comprehension questions for the document text.
    ///
    /// The returned list is whatever the model produced; it is not padded
    /// or truncated to `count`.
    pub async fn generate_questions(
        &self,
        text: &str,
        count: usize,
    ) -> DocentResult<Vec<String>> {
        debug!(chars = text.len(), count, "generating questions");
        let raw = self
            .complete(prompts::questions_prompt(text, count), None)
            .await?;
        Ok(normalize::normalize_questions(&raw))
    }

    /// Answer a free-form question about the document text.
    pub async fn answer(&self, text: &str, question: &str) -> DocentResult<String> {
        debug!(chars = text.len(), "answering question");
        let raw = self
            .complete(prompts::answer_prompt(text, question), None)
            .await?;
        Ok(normalize::normalize_answer(&raw))
    }

    /// Evaluate a candidate answer to a question against the document text.
    ///
    /// Transport failures propagate; malformed model output degrades to a
    /// fallback [`Evaluation`] with `is_correct = false`.
    pub async fn evaluate(
        &self,
        text: &str,
        question: &str,
        candidate: &str,
    ) -> DocentResult<Evaluation> {
        debug!(chars = text.len(), "evaluating answer");
        let format = self
            .llm
            .supports_json_mode()
            .then_some(ResponseFormat::Json);
        let raw = self
            .complete(prompts::evaluation_prompt(text, question, candidate), format)
            .await?;
        Ok(normalize::normalize_evaluation(&raw))
    }
}
