//! Task domain types.
//!
//! These types represent tasks in the system, independent of any
//! infrastructure concerns (database, HTTP, etc.).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// A task that exists in the system with a database ID.
///
/// This represents a persisted task. Use [`NewTask`] for tasks that
/// haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Database ID of the task (always present for persisted tasks).
    pub id: i64,
    /// Short human-readable title.
    pub title: String,
    /// Free-form description. May be empty, but the field is always present.
    pub description: String,
    /// Calendar date the task is due (`YYYY-MM-DD` on the wire).
    pub due_date: NaiveDate,
    /// Completion flag.
    pub is_complete: bool,
}

/// A task to be inserted into the system (no ID yet).
///
/// After insertion, the repository returns a [`Task`] with the assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    /// Defaults to `false` when omitted from the payload.
    #[serde(default)]
    pub is_complete: bool,
}

/// A full replacement of a task's editable fields.
///
/// Never touches `is_complete`; completion is flipped through [`TaskPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
}

/// A partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub is_complete: Option<bool>,
}

impl TaskPatch {
    /// A patch that marks a task completed and changes nothing else.
    #[must_use]
    pub fn completed() -> Self {
        Self {
            is_complete: Some(true),
            ..Self::default()
        }
    }
}

fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".to_string()));
    }
    Ok(())
}

impl NewTask {
    /// Validate field content before the task reaches storage.
    ///
    /// `due_date` is already type-enforced at the serde boundary;
    /// `description` is required to be present but may be empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_title(&self.title)
    }
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_title(&self.title)
    }
}

impl TaskPatch {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn new_task_is_complete_defaults_to_false() {
        let task: NewTask = serde_json::from_str(
            r#"{"title": "Buy milk", "description": "2L", "due_date": "2024-05-01"}"#,
        )
        .unwrap();
        assert!(!task.is_complete);
        assert_eq!(task.due_date, date("2024-05-01"));
    }

    #[test]
    fn new_task_rejects_unparsable_date() {
        let result: Result<NewTask, _> = serde_json::from_str(
            r#"{"title": "A", "description": "B", "due_date": "not-a-date"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_task_rejects_missing_description() {
        let result: Result<NewTask, _> =
            serde_json::from_str(r#"{"title": "A", "due_date": "2024-05-01"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_description_is_allowed() {
        let task = NewTask {
            title: "A".to_string(),
            description: String::new(),
            due_date: date("2024-05-01"),
            is_complete: false,
        };
        assert!(task.validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let task = NewTask {
            title: "   ".to_string(),
            description: "B".to_string(),
            due_date: date("2024-05-01"),
            is_complete: false,
        };
        assert!(matches!(task.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn patch_validates_title_only_when_present() {
        assert!(TaskPatch::completed().validate().is_ok());

        let patch = TaskPatch {
            title: Some(String::new()),
            ..TaskPatch::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn completed_patch_touches_only_the_flag() {
        let patch = TaskPatch::completed();
        assert_eq!(patch.is_complete, Some(true));
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());
        assert!(patch.due_date.is_none());
    }
}
