//! Wire DTOs for the task API.
//!
//! The dispatcher deliberately carries its own types instead of sharing
//! the service's domain crate: the two components compose only through
//! the HTTP contract. `due_date` stays a string on this side — the
//! service is the single place that parses it, and the dispatcher only
//! echoes it back to the operator.

use serde::{Deserialize, Serialize};

/// A task as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub is_complete: bool,
}

/// Create payload. `is_complete` is always sent as `false`; the
/// operator cannot create a pre-completed task.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub is_complete: bool,
}

impl CreateTask {
    #[must_use]
    pub fn new(title: String, description: String, due_date: String) -> Self {
        Self {
            title,
            description,
            due_date,
            is_complete: false,
        }
    }
}

/// Full-update payload. Does not carry `is_complete`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTask {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

/// Partial-update payload used by `/complete`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CompleteTask {
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_forces_is_complete_false() {
        let payload = CreateTask::new("A".into(), "B".into(), "2024-05-01".into());
        assert!(!payload.is_complete);
    }
}
