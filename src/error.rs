//! Unified error types for the screener feeds service
//!
//! Two layers: `ScanError` for filesystem failures in the directory lister,
//! `AppError` for handlers (converted into HTTP responses).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Filesystem layer errors raised while scanning a screener output directory
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Scan(#[from] ScanError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Scan(ScanError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                "Directory not found",
                Some(e.to_string()),
            ),
            AppError::Scan(e) => {
                tracing::error!("Scan error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
