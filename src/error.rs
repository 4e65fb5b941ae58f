use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

/// Custom error type for the application
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    ValidationError(String),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
        };
        warn!("Rejected request ({}): {}", error_type, message);

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Syntactically valid JSON whose fields have the wrong shape
            JsonRejection::JsonDataError(e) => AppError::ValidationError(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;
