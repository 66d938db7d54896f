//! Error handling for the REST API server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use docent_core::error::DocentError;
use docent_extractors::ExtractError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert from docent-core errors
impl From<DocentError> for ApiError {
    fn from(err: DocentError) -> Self {
        match err {
            DocentError::Validation(msg) => ApiError::bad_request(msg),
            DocentError::Configuration(msg) => ApiError::bad_request(msg),
            DocentError::SessionNotFound(id) => {
                ApiError::not_found(format!("No document session with id '{}'", id))
            }
            DocentError::Llm { message, .. } => {
                ApiError::internal(format!("LLM error: {}", message))
            }
            DocentError::Network { message, .. } => {
                ApiError::internal(format!("Network error: {}", message))
            }
            DocentError::UnsupportedProvider { provider } => {
                ApiError::bad_request(format!("Unsupported provider: {}", provider))
            }
            DocentError::Parse(message) => {
                ApiError::internal(format!("Parse error: {}", message))
            }
            DocentError::Serialization(e) => {
                ApiError::internal(format!("Serialization error: {}", e))
            }
            DocentError::Io(e) => ApiError::internal(format!("IO error: {}", e)),
            DocentError::Internal(msg) => ApiError::internal(msg),
        }
    }
}

// Convert from extraction errors. Unrecognized formats are the client's
// fault; everything else is a processing failure.
impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        if err.is_unsupported_format() {
            ApiError::bad_request(err.to_string())
        } else {
            ApiError::internal(format!("Failed to process file: {}", err))
        }
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_maps_to_400() {
        let err = ExtractError::UnsupportedFormat("slides.pptx".to_string());
        let api: ApiError = err.into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_encoding_error_maps_to_500() {
        let err = String::from_utf8(vec![0xff])
            .map_err(ExtractError::from)
            .unwrap_err();
        let api: ApiError = err.into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = DocentError::Validation("Number of questions must be between 3 and 10.".into());
        let api: ApiError = err.into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_session_not_found_maps_to_404() {
        let err = DocentError::SessionNotFound("abc".into());
        let api: ApiError = err.into();
        assert_eq!(api.status, StatusCode::NOT_FOUND);
    }
}
