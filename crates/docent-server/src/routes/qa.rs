//! Question answering and challenge evaluation endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::routes::documents::session_not_found;
use crate::state::AppState;
use docent_core::Evaluation;

/// Request body for asking a free-form question.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Response with the generated answer.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Answer a free-form question about a session's document.
/// POST /documents/:id/ask
pub async fn ask_question(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<AskRequest>,
) -> ApiResult<Json<AskResponse>> {
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or_else(|| session_not_found(&session_id))?;

    let answer = state
        .assistant
        .answer(&session.text, &request.question)
        .await?;

    Ok(Json(AskResponse { answer }))
}

/// Request body for evaluating an answer to a challenge question.
#[derive(Debug, Deserialize)]
pub struct ChallengeRequest {
    pub question: String,
    pub answer: String,
}

/// Evaluate a user's answer to a challenge question.
/// POST /documents/:id/challenge
///
/// Always answers 200 with an evaluation object; malformed model output
/// degrades to `is_correct=false` with an explanatory message.
pub async fn evaluate_challenge(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<ChallengeRequest>,
) -> ApiResult<Json<Evaluation>> {
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or_else(|| session_not_found(&session_id))?;

    let evaluation = state
        .assistant
        .evaluate(&session.text, &request.question, &request.answer)
        .await?;

    Ok(Json(evaluation))
}
