//! Operator-facing reply texts.
//!
//! Every string the dispatcher can say lives here, so the command and
//! dispatcher modules stay free of literals and the texts can be tested
//! (and later localized) in one place.

use crate::models::TaskDto;

/// Static usage text returned by `/start`.
pub const WELCOME: &str = "Hi! I manage your task list. Use /create, /list, /view, /update, \
     /complete and /delete to work with tasks. Use '_' instead of spaces \
     when filling the title and description fields.";

pub const USAGE_START: &str = "Use /start without arguments.";
pub const USAGE_CREATE: &str = "Invalid command format. Use /create <title> <description> <due_date>. \
     Make sure to use '_' instead of spaces.";
pub const USAGE_LIST: &str = "Invalid command format. Use /list [page] [page_size].";
pub const USAGE_VIEW: &str = "Invalid command format. Use /view <task_id>.";
pub const USAGE_UPDATE: &str = "Invalid command format. Use /update <task_id> <title> <description> \
     <due_date>. Make sure to use '_' instead of spaces.";
pub const USAGE_COMPLETE: &str = "Invalid command format. Use /complete <task_id>.";
pub const USAGE_DELETE: &str = "Invalid command format. Use /delete <task_id>.";

pub const CREATED: &str = "Task created successfully!";
pub const CREATE_FAILED: &str = "Could not create the task. Make sure the fields are in the right \
     format, e.g. <title> <description> 2023-10-22, and that you used '_' \
     instead of spaces.";
pub const LIST_FAILED: &str = "Could not fetch the task list.";
pub const LIST_EMPTY: &str = "The task list is empty.";
pub const VIEW_FAILED: &str = "Could not fetch the task details.";
pub const UPDATE_FAILED: &str = "Could not update the task.";
pub const COMPLETE_FAILED: &str = "Could not update the task status.";
pub const DELETE_FAILED: &str = "Could not delete the task.";
pub const NOT_FOUND: &str = "Task not found.";
pub const TRY_AGAIN_LATER: &str = "Request failed. Please try again later.";

pub fn task_updated(task_id: &str) -> String {
    format!("Task {task_id} updated successfully!")
}

pub fn task_completed(task_id: &str) -> String {
    format!("Task {task_id} marked as completed!")
}

pub fn task_deleted(task_id: &str) -> String {
    format!("Task {task_id} deleted successfully!")
}

/// One line per task: `{id}. {title}`.
pub fn task_list(tasks: &[TaskDto]) -> String {
    let lines: Vec<String> = tasks
        .iter()
        .map(|task| format!("{}. {}", task.id, task.title))
        .collect();
    format!("Tasks:\n{}", lines.join("\n"))
}

pub fn task_view(task: &TaskDto) -> String {
    format!(
        "Task {}:\nTitle: {}\nDescription: {}\nDue date: {}\nStatus: {}",
        task.id,
        task.title,
        task.description,
        task.due_date,
        if task.is_complete {
            "completed"
        } else {
            "not completed"
        }
    )
}
