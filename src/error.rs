//! Error types for Genrelay
//!
//! Every failure on the relay path ends up here and is rendered as a single
//! `{ "error": "<message>" }` JSON body.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Malformed request body.")]
    MalformedBody(#[source] serde_json::Error),

    #[error("{0}")]
    BodyRejected(#[from] BytesRejection),

    #[error("Invalid generation type specified.")]
    InvalidType,

    #[error("Server-side API key is not configured.")]
    MissingConfiguration,

    #[error("API call failed: {}", status_text(.status))]
    UpstreamFailure { status: reqwest::StatusCode },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Reason phrase for an upstream status, falling back to the bare code
fn status_text(status: &reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

impl AppError {
    /// HTTP status returned to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MalformedBody(_) | AppError::InvalidType => StatusCode::BAD_REQUEST,
            AppError::BodyRejected(rejection) => rejection.status(),
            AppError::MissingConfiguration
            | AppError::UpstreamFailure { .. }
            | AppError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label used for the upstream error counter, if this error came from the upstream call
    pub fn upstream_kind(&self) -> Option<&'static str> {
        match self {
            AppError::UpstreamFailure { .. } => Some("status"),
            AppError::Transport(_) => Some("transport"),
            _ => None,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
