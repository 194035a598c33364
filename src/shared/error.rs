//! Application Error Types
//!
//! Two layers of failure meet here:
//!
//! - [`RepositoryError`]: the closed taxonomy every persistence adapter
//!   reports through. Storage-engine errors never cross this boundary.
//! - [`AppError`]: what the HTTP layer renders. Repository outcomes are
//!   converted exactly once, in `From<RepositoryError> for AppError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Persistence outcome kinds shared by all repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("entity not found")]
    NotFound,

    #[error("entity already exists")]
    AlreadyExists,

    #[error("conflict")]
    Conflict,

    #[error("invalid input")]
    InvalidInput,

    #[error("internal error")]
    Internal,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid json")]
    InvalidJson,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::NotFound("not found".into()),
            RepositoryError::AlreadyExists => AppError::Conflict("already exists".into()),
            RepositoryError::Conflict => AppError::Conflict("conflict".into()),
            RepositoryError::InvalidInput => AppError::BadRequest("invalid input".into()),
            RepositoryError::Internal => AppError::Internal(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl AppError {
    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::InvalidJson | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message) = match self {
            AppError::NotFound(msg) => (10001, msg),
            AppError::BadRequest(msg) => (10002, msg),
            AppError::Conflict(msg) => (10005, msg),
            AppError::Validation(msg) => (10007, msg),
            AppError::MethodNotAllowed => (10008, "method not allowed".into()),
            AppError::InvalidJson => (10009, "invalid json".into()),
            AppError::Internal(_) => (10000, "internal server error".into()),
        };

        (status, Json(ErrorResponse { code, message })).into_response()
    }
}
