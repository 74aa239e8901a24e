//! Task repository trait definition.
//!
//! This port defines the interface for task persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewTask, Task, TaskPatch, TaskUpdate};

/// Repository for task persistence operations.
///
/// Implementations own ordering and pagination: listing is always
/// incomplete-first, then newest due date first within each completion
/// group, applied before the page is cut. Missing ids surface as
/// `RepositoryError::NotFound`, never as a generic failure.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Return one page of tasks in the canonical order.
    ///
    /// `page` is 1-based. A page past the end of the data returns an
    /// empty vec, not an error.
    async fn list_page(&self, page: u32, page_size: u32) -> Result<Vec<Task>, RepositoryError>;

    /// Get a task by its database ID.
    async fn get_by_id(&self, id: i64) -> Result<Task, RepositoryError>;

    /// Insert a new task and return it with its assigned ID.
    async fn insert(&self, task: &NewTask) -> Result<Task, RepositoryError>;

    /// Replace a task's editable fields (`title`, `description`,
    /// `due_date`). Leaves `is_complete` untouched.
    async fn update(&self, id: i64, update: &TaskUpdate) -> Result<Task, RepositoryError>;

    /// Apply a partial update; `None` fields are left as they are.
    async fn patch(&self, id: i64, patch: &TaskPatch) -> Result<Task, RepositoryError>;

    /// Delete a task by its database ID. Hard delete, no tombstone.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
