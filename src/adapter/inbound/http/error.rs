//! # HTTP Errors
//!
//! Maps application failures onto status codes and JSON bodies.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::domain::error::{ErrorCategory, ErrorCode};
use crate::error::Error;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Lookup found nothing; carries the entity-specific message
    #[error("{0}")]
    NotFound(&'static str),

    /// Creation rejected with a taxonomy code
    #[error(transparent)]
    Rejected(ErrorCode),

    /// Body was not a JSON object of the expected shape
    #[error("{0}")]
    MalformedBody(String),

    /// Store or runtime fault; details are logged, not returned
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Rejected(code) => match code.category() {
                ErrorCategory::MissingField => StatusCode::BAD_REQUEST,
                ErrorCategory::UnknownReference => StatusCode::NOT_FOUND,
            },
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `{"message": ...}` body
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// `{"code": ..., "message": ...}` body
#[derive(Debug, Serialize)]
pub struct CodeBody {
    pub code: &'static str,
    pub message: &'static str,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Rejected(code) => ApiError::Rejected(code),
            other => {
                error!(error = %other, "Request failed");
                ApiError::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Rejected(code) => (
                status,
                Json(CodeBody {
                    code: code.code(),
                    message: code.message(),
                }),
            )
                .into_response(),
            other => (
                status,
                Json(MessageBody {
                    message: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
