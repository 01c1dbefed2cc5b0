//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps engine errors to HTTP status codes and JSON error bodies with a
//! machine-readable code. Internal error details are never exposed to
//! clients; a broken object store reports as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use jarvault_core::UnknownPlatform;
use jarvault_engine::CacheError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// The error detail.
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// The artifact could not be found or cached (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing or malformed request parameters (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500). Message is logged but not returned
    /// to clients.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Unsupported platform strings are client errors, caught before any
/// network traffic.
impl From<UnknownPlatform> for AppError {
    fn from(err: UnknownPlatform) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Engine errors split into "artifact unavailable" (404) and "the cache
/// service itself is unhealthy" (500). A store outage must never look
/// like a missing artifact.
impl From<CacheError> for AppError {
    fn from(err: CacheError) -> Self {
        match &err {
            CacheError::Resolution(_) | CacheError::Transfer(_) => {
                Self::NotFound(err.to_string())
            }
            CacheError::Store(_) | CacheError::Init { .. } => Self::Internal(err.to_string()),
        }
    }
}
