//! Offline demo LLM provider.
//!
//! Serves canned responses so the service can run without an API key,
//! for local development and tests. The provider keys off markers in the
//! rendered prompt to pick a task-appropriate reply; each reply is shaped
//! like real model output so the normalizer exercises the same paths.

use async_trait::async_trait;

use docent_core::error::DocentResult;
use docent_core::traits::{GenerationOptions, Llm, LlmResponse};
use docent_core::types::Message;

const DEMO_QUESTIONS: &[&str] = &[
    "What is the main topic of this document?",
    "What are the key points mentioned in the text?",
    "What conclusions can be drawn from the content?",
    "What evidence supports the main arguments?",
    "How does this relate to broader concepts?",
    "What are the implications of the findings?",
    "What methodology was used in this work?",
    "What are the limitations discussed?",
    "What future research is suggested?",
    "What are the practical applications mentioned?",
];

/// Demo LLM provider with canned responses.
#[derive(Debug, Clone, Default)]
pub struct DemoLlm;

impl DemoLlm {
    /// Create a new demo provider.
    pub fn new() -> Self {
        Self
    }

    fn respond(prompt: &str) -> String {
        if prompt.contains(r#""is_correct""#) {
            return r#"{"is_correct": false, "evaluation": "[DEMO MODE] No model is configured, so the answer cannot be judged against the document."}"#
                .to_string();
        }

        if let Some(count) = requested_question_count(prompt) {
            return DEMO_QUESTIONS
                .iter()
                .take(count)
                .enumerate()
                .map(|(i, q)| format!("{}. {}", i + 1, q))
                .collect::<Vec<_>>()
                .join("\n");
        }

        if prompt.contains("concise summary") {
            return format!(
                "[DEMO MODE] This is a canned summary of the uploaded document. The rendered prompt contains {} characters. Configure an API key for a real summary.",
                prompt.len()
            );
        }

        "[DEMO MODE] This is a canned answer. Configure an API key for answers grounded in the document.".to_string()
    }
}

/// Pull the requested count out of a "generate exactly N" instruction.
fn requested_question_count(prompt: &str) -> Option<usize> {
    let rest = prompt.split("generate exactly ").nth(1)?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[async_trait]
impl Llm for DemoLlm {
    async fn generate(
        &self,
        messages: &[Message],
        _options: Option<GenerationOptions>,
    ) -> DocentResult<LlmResponse> {
        let prompt = messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        Ok(LlmResponse {
            content: Some(Self::respond(prompt)),
            usage: None,
        })
    }

    fn model_name(&self) -> &str {
        "demo"
    }

    fn supports_json_mode(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docent_core::assistant::normalize;
    use docent_core::assistant::prompts;

    #[tokio::test]
    async fn test_demo_questions_are_numbered() {
        let llm = DemoLlm::new();
        let prompt = prompts::questions_prompt("some document", 4);
        let response = llm.generate(&[Message::user(prompt)], None).await.unwrap();

        let questions = normalize::normalize_questions(response.content_or_empty());
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[0], "What is the main topic of this document?");
    }

    #[tokio::test]
    async fn test_demo_evaluation_is_parseable() {
        let llm = DemoLlm::new();
        let prompt = prompts::evaluation_prompt("doc", "What is X?", "X is Y");
        let response = llm.generate(&[Message::user(prompt)], None).await.unwrap();

        let evaluation = normalize::normalize_evaluation(response.content_or_empty());
        assert!(!evaluation.is_correct);
        assert!(evaluation.evaluation.contains("DEMO MODE"));
    }

    #[tokio::test]
    async fn test_demo_summary_mentions_demo_mode() {
        let llm = DemoLlm::new();
        let prompt = prompts::summary_prompt("doc body");
        let response = llm.generate(&[Message::user(prompt)], None).await.unwrap();
        assert!(response.content_or_empty().contains("[DEMO MODE]"));
    }

    #[test]
    fn test_requested_question_count() {
        assert_eq!(
            requested_question_count("please generate exactly 7 logic-based questions"),
            Some(7)
        );
        assert_eq!(requested_question_count("no count here"), None);
    }
}
