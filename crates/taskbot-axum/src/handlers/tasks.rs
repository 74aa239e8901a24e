//! Task handlers - CRUD operations for tasks.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;
use taskbot_core::{NewTask, Task, TaskPatch, TaskUpdate};

/// Pagination query parameters for the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// List one page of tasks in the canonical order.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Task>>, HttpError> {
    let page = state.settings.resolve_page(params.page)?;
    let page_size = state.settings.resolve_page_size(params.page_size)?;
    Ok(Json(state.repos.tasks.list_page(page, page_size).await?))
}

/// Create a new task.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), HttpError> {
    req.validate()?;
    let task = state.repos.tasks.insert(&req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Get a single task by ID.
pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, HttpError> {
    Ok(Json(state.repos.tasks.get_by_id(id).await?))
}

/// Replace a task's editable fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TaskUpdate>,
) -> Result<Json<Task>, HttpError> {
    req.validate()?;
    Ok(Json(state.repos.tasks.update(id, &req).await?))
}

/// Apply a partial update.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TaskPatch>,
) -> Result<Json<Task>, HttpError> {
    req.validate()?;
    Ok(Json(state.repos.tasks.patch(id, &req).await?))
}

/// Delete a task.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    state.repos.tasks.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
