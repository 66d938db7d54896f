//! Prompt templates for document tasks.
//!
//! Each task renders one fixed natural-language template embedding the
//! document text and task parameters. Length limits and output formats
//! stated here are instructions to the model, not enforced constraints;
//! the normalizer in [`super::normalize`] handles whatever comes back.

/// Build the summarization prompt.
pub fn summary_prompt(text: &str) -> String {
    format!(
        r#"Based on the following document, provide a concise summary of no more than 150 words.

Document:
---
{}
---
"#,
        text
    )
}

/// Build the question-generation prompt.
pub fn questions_prompt(text: &str, num_questions: usize) -> String {
    format!(
        r#"Based on the following document, generate exactly {} logic-based or comprehension-focused questions.
Present the questions clearly, each on a new line, starting with a number (e.g., 1., 2., 3.).

Document:
---
{}
---
"#,
        num_questions, text
    )
}

/// Build the free-form answer prompt.
pub fn answer_prompt(context: &str, question: &str) -> String {
    format!(
        r#"You are a helpful assistant. Your task is to answer the user's question based *only* on the provided document content.
Do not use any external knowledge or make assumptions.
Your answer must include a brief justification or reference from the document that supports your response (e.g., "As stated in paragraph 3...").

Document Content:
---
{}
---

Question: "{}"
"#,
        context, question
    )
}

/// Build the answer-evaluation prompt.
pub fn evaluation_prompt(context: &str, question: &str, user_answer: &str) -> String {
    format!(
        r#"You are an evaluator. Your task is to determine if the user's answer is correct based *only* on the provided document content.

You must respond with a JSON object in this exact format (no markdown, no code blocks, just raw JSON):
{{
    "is_correct": true,
    "evaluation": "Your detailed evaluation and justification here"
}}

OR

{{
    "is_correct": false,
    "evaluation": "Your detailed evaluation and justification here"
}}

Rules:
- Set "is_correct" to true only if the user's answer is factually correct and complete based on the document
- Set "is_correct" to false if the answer is wrong, incomplete, or not based on the document content
- In "evaluation", provide a brief evaluation and justification for your feedback, citing the document
- Return ONLY the JSON object, no additional text, no markdown formatting, no code blocks
- Do not wrap the JSON in ```json``` or any other formatting

Document Content:
---
{}
---

Question: "{}"
User's Answer: "{}"
"#,
        context, question, user_answer
    )
}
