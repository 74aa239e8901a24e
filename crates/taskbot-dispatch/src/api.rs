//! Task API port and error taxonomy.
//!
//! The dispatcher depends on this trait rather than a concrete HTTP
//! client, so command handling is testable against a fake service.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CreateTask, TaskDto, UpdateTask};

/// Result type alias for task API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the task API client.
///
/// The variants mirror the dispatcher's reply taxonomy: `NotFound` gets
/// the task-not-found reply, `Network` gets the try-again-later reply
/// (and a diagnostic log entry), everything else collapses into the
/// per-command generic failure reply.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered 404 for the requested resource.
    #[error("resource not found: {url}")]
    NotFound { url: String },

    /// The service answered with a non-success, non-404 status.
    #[error("request failed with status {status}: {url}")]
    Status { status: u16, url: String },

    /// Network or HTTP client error (unreachable, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL construction failed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The service answered 2xx but the body did not decode.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

/// Client-side port for the task resource API.
///
/// `task_id`, `page`, and `page_size` are raw operator tokens: the
/// service validates them, the client only transports them.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `POST /tasks/`
    async fn create(&self, task: &CreateTask) -> ApiResult<TaskDto>;

    /// `GET /tasks/?page=..&page_size=..` (params omitted when absent)
    async fn list(&self, page: Option<&str>, page_size: Option<&str>) -> ApiResult<Vec<TaskDto>>;

    /// `GET /tasks/{id}`
    async fn retrieve(&self, task_id: &str) -> ApiResult<TaskDto>;

    /// `PUT /tasks/{id}`
    async fn update(&self, task_id: &str, update: &UpdateTask) -> ApiResult<TaskDto>;

    /// `PATCH /tasks/{id}` with `{"is_complete": true}`
    async fn complete(&self, task_id: &str) -> ApiResult<TaskDto>;

    /// `DELETE /tasks/{id}`
    async fn delete(&self, task_id: &str) -> ApiResult<()>;
}
