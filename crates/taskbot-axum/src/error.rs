//! Axum-specific error types and mappings.
//!
//! This module provides the HTTP error type for the Axum adapter and
//! mappings from `CoreError`/`RepositoryError` to status codes and
//! response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use taskbot_core::{CoreError, RepositoryError, SettingsError};
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => HttpError::NotFound(msg),
            RepositoryError::Storage(msg) => HttpError::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => {
                HttpError::Internal(format!("Serialization: {msg}"))
            }
        }
    }
}

impl From<SettingsError> for HttpError {
    fn from(err: SettingsError) -> Self {
        HttpError::BadRequest(err.to_string())
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Settings(settings_err) => settings_err.into(),
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
            CoreError::Configuration(msg) => HttpError::Internal(format!("Config: {msg}")),
            CoreError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}
