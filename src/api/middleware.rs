use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types
///
/// Every operation failure is surfaced to the caller as one of these; no
/// error is retried internally or downgraded to an empty result. Messages
/// (including engine diagnostics) pass through verbatim.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match self {
            AppError::UnsupportedFileType(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("UNSUPPORTED_FILE_TYPE", msg),
            ),
            AppError::FileNotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorDetail::new("FILE_NOT_FOUND", msg),
            ),
            AppError::Parse(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail::new("PARSE_ERROR", msg),
            ),
            AppError::SchemaMismatch(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail::new("SCHEMA_MISMATCH", msg),
            ),
            AppError::InvalidArgument(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("INVALID_ARGUMENT", msg),
            ),
            AppError::Query(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("QUERY_ERROR", msg),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorDetail::new("NOT_FOUND", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("INTERNAL_ERROR", msg),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_detail,
        });

        (status, body).into_response()
    }
}

/// Convert anyhow::Error to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
