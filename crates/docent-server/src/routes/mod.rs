//! Route definitions for the REST API.

mod documents;
mod health;
mod qa;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Maximum accepted upload size (bytes).
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Document sessions
        .route("/documents", post(documents::upload_document))
        .route("/documents/:id", get(documents::get_document))
        .route("/documents/:id", delete(documents::delete_document))
        .route(
            "/documents/:id/questions",
            post(documents::regenerate_questions),
        )
        // Document Q&A
        .route("/documents/:id/ask", post(qa::ask_question))
        .route("/documents/:id/challenge", post(qa::evaluate_challenge))
        // Uploads carry whole documents
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        // Attach state
        .with_state(state)
}

pub use documents::*;
pub use health::*;
pub use qa::*;
