//! Document session endpoints: upload, snapshot, question regeneration.

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use docent_core::types::DocumentSession;

/// Query parameters for endpoints that generate questions.
#[derive(Debug, Deserialize)]
pub struct QuestionCountQuery {
    pub num_questions: Option<usize>,
}

/// Response for a processed upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub session_id: String,
    pub filename: String,
    pub summary: String,
    pub questions: Vec<String>,
}

/// Upload and process a document.
/// POST /documents?num_questions=N
///
/// Extracts text from the uploaded file, generates a summary and
/// comprehension questions, and stores a new session.
pub async fn upload_document(
    State(state): State<AppState>,
    Query(query): Query<QuestionCountQuery>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let bounds = state.assistant.question_bounds();
    let num_questions = query.num_questions.unwrap_or(bounds.default);
    bounds.validate(num_questions).map_err(ApiError::from)?;

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| ApiError::bad_request("The 'file' field must carry a filename"))?;
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;
            upload = Some((filename, bytes.to_vec()));
        }
    }

    let (filename, bytes) =
        upload.ok_or_else(|| ApiError::bad_request("Missing multipart field 'file'"))?;

    let extracted = state.extractor.extract(&filename, &bytes).await?;
    info!(
        filename = %filename,
        bytes = bytes.len(),
        chars = extracted.len(),
        "document extracted"
    );

    let summary = state.assistant.summarize(&extracted.content).await?;
    let questions = state
        .assistant
        .generate_questions(&extracted.content, num_questions)
        .await?;

    let session = DocumentSession::new(
        filename.clone(),
        extracted.content,
        summary.clone(),
        questions.clone(),
    );
    let session_id = state.sessions.insert(session).await;
    info!(session_id = %session_id, "document session created");

    Ok(Json(UploadResponse {
        session_id,
        filename,
        summary,
        questions,
    }))
}

/// Session snapshot (without the full document text).
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub filename: String,
    pub summary: String,
    pub questions: Vec<String>,
}

/// Get a document session snapshot.
/// GET /documents/:id
pub async fn get_document(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<SessionResponse>> {
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or_else(|| session_not_found(&session_id))?;

    Ok(Json(SessionResponse {
        session_id,
        filename: session.filename,
        summary: session.summary,
        questions: session.questions,
    }))
}

/// Response for regenerated questions.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

/// Generate a fresh set of questions for a session, replacing the stored list.
/// POST /documents/:id/questions?num_questions=N
pub async fn regenerate_questions(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(query): Query<QuestionCountQuery>,
) -> ApiResult<Json<QuestionsResponse>> {
    let bounds = state.assistant.question_bounds();
    let num_questions = query.num_questions.unwrap_or(bounds.default);
    bounds.validate(num_questions).map_err(ApiError::from)?;

    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or_else(|| session_not_found(&session_id))?;

    let questions = state
        .assistant
        .generate_questions(&session.text, num_questions)
        .await?;

    if !state
        .sessions
        .set_questions(&session_id, questions.clone())
        .await
    {
        return Err(session_not_found(&session_id));
    }

    Ok(Json(QuestionsResponse { questions }))
}

/// Response for a deleted session.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Drop a document session.
/// DELETE /documents/:id
pub async fn delete_document(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    if state.sessions.remove(&session_id).await.is_none() {
        return Err(session_not_found(&session_id));
    }

    Ok(Json(DeleteResponse { deleted: true }))
}

pub(crate) fn session_not_found(session_id: &str) -> ApiError {
    ApiError::not_found(format!(
        "No document session with id '{}'. Upload a document first via POST /documents.",
        session_id
    ))
}
