/// Error types for Post Service
///
/// Errors are converted to appropriate HTTP responses for API clients.
/// Variants carry only the user-facing message; handlers log the underlying
/// failure before mapping it here, so internal detail never reaches the wire.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for post-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied data failed a precondition
    #[error("{0}")]
    Validation(String),

    /// Referenced identifier does not exist
    #[error("{0}")]
    NotFound(String),

    /// Database operation failed
    #[error("{0}")]
    Database(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}
