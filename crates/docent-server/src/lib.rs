//! docent-server - REST API server for docent.
//!
//! Upload a document (PDF/TXT), receive a summary and comprehension
//! questions, ask free-form questions, and submit answers for evaluation.
//!
//! # Example
//!
//! ```ignore
//! use docent_server::{create_server, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = AppState::new(assistant);
//!     let app = create_server(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docent_core::{AssistantConfig, DocumentAssistant};
    use docent_llm::LlmFactory;

    #[tokio::test]
    async fn test_create_server_with_demo_provider() {
        let assistant = DocumentAssistant::new(LlmFactory::demo(), AssistantConfig::default());
        let state = AppState::new(assistant);
        let _app = create_server(state);
    }
}
