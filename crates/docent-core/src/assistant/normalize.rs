//! Normalization of raw LLM output into structured results.
//!
//! The model output is treated as an opaque string that may carry markdown
//! fences, numbering noise, or prose around a JSON payload. Every function
//! here is a pure transformation: identical input yields identical output,
//! and nothing in this module performs IO or fails the caller. The only
//! hard invariant is the evaluation wire shape,
//! `{"is_correct": bool, "evaluation": string}`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Matches a numbered-list line, capturing the text after the number.
static NUMBERED_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*\d+\.\s*(.*)").unwrap());

static EVALUATION_PLACEHOLDER: &str = "No evaluation provided";

/// Result of evaluating a user's answer against the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Whether the answer was judged correct.
    pub is_correct: bool,
    /// Feedback text justifying the judgement.
    pub evaluation: String,
}

impl Evaluation {
    /// Fallback returned when the model output cannot be parsed as JSON.
    pub fn parse_fallback(raw: &str) -> Self {
        Self {
            is_correct: false,
            evaluation: format!("Error parsing evaluation response: {}", raw),
        }
    }
}

/// Normalize a summary response: surrounding whitespace only.
///
/// The 150-word limit is a prompt instruction, not enforced here.
pub fn normalize_summary(raw: &str) -> String {
    raw.trim().to_string()
}

/// Normalize a free-form answer response: surrounding whitespace only.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_string()
}

/// Normalize a question-generation response into an ordered list.
///
/// Collects the trailing content of every numbered-list line in order of
/// appearance. If no line is numbered, falls back to trimmed non-empty
/// lines. The result may differ in length from the requested count; any
/// truncation or padding is caller policy.
pub fn normalize_questions(raw: &str) -> Vec<String> {
    let numbered: Vec<String> = NUMBERED_LINE_RE
        .captures_iter(raw)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    if !numbered.is_empty() {
        return numbered;
    }

    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize an evaluation response into an [`Evaluation`].
///
/// The model is instructed to return raw JSON but may wrap it in a fenced
/// code block or surround it with prose. Cleanup steps, in order: trim,
/// strip a leading ```json or ``` fence, strip a trailing ``` fence, trim,
/// then keep only the greedy first-`{`-to-last-`}` span. A JSON parse
/// failure is recoverable and yields a deterministic fallback embedding
/// the raw text; it never propagates.
pub fn normalize_evaluation(raw: &str) -> Evaluation {
    let mut cleaned = raw.trim();

    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    let cleaned = cleaned.trim();

    // Discard prose outside the outermost braces.
    let span = match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if start <= end => &cleaned[start..=end],
        _ => cleaned,
    };

    match serde_json::from_str::<Value>(span) {
        Ok(value) => Evaluation {
            is_correct: value
                .get("is_correct")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            evaluation: value
                .get("evaluation")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| EVALUATION_PLACEHOLDER.to_string()),
        },
        Err(e) => {
            tracing::warn!(error = %e, "evaluation response was not valid JSON");
            Evaluation::parse_fallback(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_summary_trims() {
        assert_eq!(normalize_summary("  Hello World.  "), "Hello World.");
    }

    #[test]
    fn test_normalize_answer_trims() {
        assert_eq!(normalize_answer("\n  answer text \n"), "answer text");
    }

    #[test]
    fn test_normalize_answer_is_otherwise_verbatim() {
        let raw = "Line one.\n\nLine two with  spacing.";
        assert_eq!(normalize_answer(raw), raw);
    }

    #[test]
    fn test_normalize_questions_numbered() {
        let raw = "1. What is X?\n2. Why Y?\n3. How Z?";
        assert_eq!(
            normalize_questions(raw),
            vec!["What is X?", "Why Y?", "How Z?"]
        );
    }

    #[test]
    fn test_normalize_questions_numbered_with_noise() {
        let raw = "Here are your questions:\n  1. What is X?\nsome aside\n2.Why Y?";
        assert_eq!(normalize_questions(raw), vec!["What is X?", "Why Y?"]);
    }

    #[test]
    fn test_normalize_questions_fallback_lines() {
        let raw = "What is X?\nWhy Y?\n\n";
        assert_eq!(normalize_questions(raw), vec!["What is X?", "Why Y?"]);
    }

    #[test]
    fn test_normalize_questions_count_not_enforced() {
        let raw = "1. Only one?";
        assert_eq!(normalize_questions(raw), vec!["Only one?"]);
    }

    #[test]
    fn test_normalize_questions_empty_input() {
        assert!(normalize_questions("").is_empty());
    }

    #[test]
    fn test_normalize_evaluation_plain_json() {
        let raw = r#"{"is_correct": true, "evaluation": "Correct."}"#;
        let result = normalize_evaluation(raw);
        assert!(result.is_correct);
        assert_eq!(result.evaluation, "Correct.");
    }

    #[test]
    fn test_normalize_evaluation_json_fence() {
        let raw = "```json\n{\"is_correct\": true, \"evaluation\": \"Correct.\"}\n```";
        let result = normalize_evaluation(raw);
        assert!(result.is_correct);
        assert_eq!(result.evaluation, "Correct.");
    }

    #[test]
    fn test_normalize_evaluation_plain_fence() {
        let raw = "```\n{\"is_correct\": false, \"evaluation\": \"Nope.\"}\n```";
        let result = normalize_evaluation(raw);
        assert!(!result.is_correct);
        assert_eq!(result.evaluation, "Nope.");
    }

    #[test]
    fn test_normalize_evaluation_surrounding_prose() {
        let raw = "Here is my answer:\n{\"is_correct\": false, \"evaluation\": \"Missing detail.\"}\nThanks.";
        let result = normalize_evaluation(raw);
        assert!(!result.is_correct);
        assert_eq!(result.evaluation, "Missing detail.");
    }

    #[test]
    fn test_normalize_evaluation_invalid_json_falls_back() {
        let raw = "not valid json at all";
        let result = normalize_evaluation(raw);
        assert!(!result.is_correct);
        assert!(result.evaluation.contains("not valid json at all"));
    }

    #[test]
    fn test_normalize_evaluation_missing_fields_default() {
        let raw = r#"{"verdict": "fine"}"#;
        let result = normalize_evaluation(raw);
        assert!(!result.is_correct);
        assert_eq!(result.evaluation, "No evaluation provided");
    }

    #[test]
    fn test_normalize_evaluation_is_deterministic() {
        let raw = "garbage {{{ nonsense";
        assert_eq!(normalize_evaluation(raw), normalize_evaluation(raw));
    }

    #[test]
    fn test_normalize_evaluation_wire_shape() {
        let result = normalize_evaluation(r#"{"is_correct": true, "evaluation": "ok"}"#);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_correct"], true);
        assert_eq!(json["evaluation"], "ok");
    }
}
