//! Row-to-domain mapping for task rows.

use chrono::NaiveDate;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use taskbot_core::{RepositoryError, Task};

/// Column list for task SELECTs, kept in one place so every query and
/// the mapper stay in sync.
pub(crate) const TASK_SELECT_COLUMNS: &str = "id, title, description, due_date, is_complete";

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Map a task row to the domain type.
///
/// `due_date` is stored as ISO-8601 text; a row that fails to parse is a
/// serialization error, not a missing task.
pub(crate) fn row_to_task(row: &SqliteRow) -> Result<Task, RepositoryError> {
    let due_date_text: String = row.try_get("due_date").map_err(storage)?;
    let due_date = NaiveDate::parse_from_str(&due_date_text, "%Y-%m-%d").map_err(|e| {
        RepositoryError::Serialization(format!("due_date '{due_date_text}': {e}"))
    })?;

    Ok(Task {
        id: row.try_get("id").map_err(storage)?,
        title: row.try_get("title").map_err(storage)?,
        description: row.try_get("description").map_err(storage)?,
        due_date,
        is_complete: row.try_get("is_complete").map_err(storage)?,
    })
}
