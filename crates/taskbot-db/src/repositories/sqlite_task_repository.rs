//! SQLite implementation of the `TaskRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use taskbot_core::{NewTask, RepositoryError, Task, TaskPatch, TaskRepository, TaskUpdate};

use super::row_mappers::{TASK_SELECT_COLUMNS, row_to_task};

/// SQLite implementation of the `TaskRepository` trait.
///
/// Holds a connection pool and implements all CRUD operations for tasks.
/// Every write is a single statement, so concurrent operations on the
/// same id interleave at statement granularity: each request observes a
/// consistent pre- or post-state and no fields are half-clobbered.
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Create a new SQLite task repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list_page(&self, page: u32, page_size: u32) -> Result<Vec<Task>, RepositoryError> {
        // Ordering before pagination: incomplete tasks first, newest due
        // date first within each completion group. The trailing id makes
        // equal-date slices deterministic across requests.
        let query = format!(
            "SELECT {TASK_SELECT_COLUMNS} FROM tasks \
             ORDER BY is_complete ASC, due_date DESC, id DESC \
             LIMIT ? OFFSET ?"
        );

        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);
        let rows = sqlx::query(&query)
            .bind(i64::from(page_size))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        rows.iter().map(row_to_task).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Task, RepositoryError> {
        let query = format!("SELECT {TASK_SELECT_COLUMNS} FROM tasks WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Task with ID {id}")))?;

        row_to_task(&row)
    }

    async fn insert(&self, task: &NewTask) -> Result<Task, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO tasks (title, description, due_date, is_complete) VALUES (?, ?, ?, ?)",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date.to_string())
        .bind(task.is_complete)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn update(&self, id: i64, update: &TaskUpdate) -> Result<Task, RepositoryError> {
        let result = sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, due_date = ? WHERE id = ?",
        )
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.due_date.to_string())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Task with ID {id}")));
        }

        self.get_by_id(id).await
    }

    async fn patch(&self, id: i64, patch: &TaskPatch) -> Result<Task, RepositoryError> {
        // COALESCE keeps absent fields untouched within one statement.
        let result = sqlx::query(
            "UPDATE tasks SET \
                title = COALESCE(?, title), \
                description = COALESCE(?, description), \
                due_date = COALESCE(?, due_date), \
                is_complete = COALESCE(?, is_complete) \
             WHERE id = ?",
        )
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(patch.due_date.map(|d| d.to_string()))
        .bind(patch.is_complete)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Task with ID {id}")));
        }

        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Task with ID {id}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn new_task(title: &str, due: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: format!("{title} description"),
            due_date: date(due),
            is_complete: false,
        }
    }

    async fn repo() -> SqliteTaskRepository {
        let pool = setup_test_database().await.unwrap();
        SqliteTaskRepository::new(pool)
    }

    #[tokio::test]
    async fn insert_assigns_positive_increasing_ids() {
        let repo = repo().await;

        let a = repo.insert(&new_task("a", "2024-05-01")).await.unwrap();
        let b = repo.insert(&new_task("b", "2024-05-02")).await.unwrap();

        assert!(a.id > 0);
        assert!(b.id > a.id);
        assert!(!a.is_complete);
    }

    #[tokio::test]
    async fn insert_round_trips_fields_verbatim() {
        let repo = repo().await;

        let input = NewTask {
            title: "Buy_milk".to_string(),
            description: "Get_2L".to_string(),
            due_date: date("2024-05-01"),
            is_complete: false,
        };
        let created = repo.insert(&input).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched.title, "Buy_milk");
        assert_eq!(fetched.description, "Get_2L");
        assert_eq!(fetched.due_date, date("2024-05-01"));
    }

    #[tokio::test]
    async fn list_orders_incomplete_first_then_due_date_desc() {
        let repo = repo().await;

        let old_open = repo.insert(&new_task("old open", "2024-01-01")).await.unwrap();
        let done = repo.insert(&new_task("done", "2024-12-01")).await.unwrap();
        let new_open = repo.insert(&new_task("new open", "2024-06-01")).await.unwrap();
        repo.patch(done.id, &TaskPatch::completed()).await.unwrap();

        let page = repo.list_page(1, 10).await.unwrap();
        let ids: Vec<i64> = page.iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![new_open.id, old_open.id, done.id]);

        // The invariant itself: no complete task precedes an incomplete
        // one, and due dates are non-increasing within each group.
        for pair in page.windows(2) {
            assert!(pair[0].is_complete <= pair[1].is_complete);
            if pair[0].is_complete == pair[1].is_complete {
                assert!(pair[0].due_date >= pair[1].due_date);
            }
        }
    }

    #[tokio::test]
    async fn equal_due_dates_order_deterministically() {
        let repo = repo().await;

        let first = repo.insert(&new_task("first", "2024-05-01")).await.unwrap();
        let second = repo.insert(&new_task("second", "2024-05-01")).await.unwrap();

        let once = repo.list_page(1, 10).await.unwrap();
        let twice = repo.list_page(1, 10).await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(once[0].id, second.id);
        assert_eq!(once[1].id, first.id);
    }

    #[tokio::test]
    async fn pagination_slices_without_overlap() {
        let repo = repo().await;
        for i in 1..=5 {
            repo.insert(&new_task(&format!("t{i}"), &format!("2024-05-0{i}")))
                .await
                .unwrap();
        }

        let page1 = repo.list_page(1, 2).await.unwrap();
        let page2 = repo.list_page(2, 2).await.unwrap();
        let page3 = repo.list_page(3, 2).await.unwrap();

        assert_eq!(page1.len(), 2);
        assert_eq!(page2.len(), 2);
        assert_eq!(page3.len(), 1);

        let ids: std::collections::BTreeSet<i64> = page1
            .iter()
            .chain(&page2)
            .chain(&page3)
            .map(|t| t.id)
            .collect();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_not_an_error() {
        let repo = repo().await;
        repo.insert(&new_task("only", "2024-05-01")).await.unwrap();

        let page = repo.list_page(99, 10).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let repo = repo().await;

        assert!(matches!(
            repo.get_by_id(7).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            repo.update(
                7,
                &TaskUpdate {
                    title: "t".to_string(),
                    description: "d".to_string(),
                    due_date: date("2024-05-01"),
                }
            )
            .await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            repo.patch(7, &TaskPatch::completed()).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete(7).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_is_idempotently_not_found() {
        let repo = repo().await;
        let task = repo.insert(&new_task("gone", "2024-05-01")).await.unwrap();

        repo.delete(task.id).await.unwrap();

        assert!(matches!(
            repo.delete(task.id).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete(task.id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = repo().await;

        let a = repo.insert(&new_task("a", "2024-05-01")).await.unwrap();
        repo.delete(a.id).await.unwrap();
        let b = repo.insert(&new_task("b", "2024-05-02")).await.unwrap();

        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn patch_touches_only_given_fields() {
        let repo = repo().await;
        let task = repo.insert(&new_task("keep me", "2024-05-01")).await.unwrap();

        let patched = repo.patch(task.id, &TaskPatch::completed()).await.unwrap();

        assert!(patched.is_complete);
        assert_eq!(patched.title, "keep me");
        assert_eq!(patched.description, task.description);
        assert_eq!(patched.due_date, task.due_date);
    }

    #[tokio::test]
    async fn full_update_leaves_completion_alone() {
        let repo = repo().await;
        let task = repo.insert(&new_task("before", "2024-05-01")).await.unwrap();
        repo.patch(task.id, &TaskPatch::completed()).await.unwrap();

        let updated = repo
            .update(
                task.id,
                &TaskUpdate {
                    title: "after".to_string(),
                    description: "changed".to_string(),
                    due_date: date("2024-06-01"),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "after");
        assert_eq!(updated.due_date, date("2024-06-01"));
        assert!(updated.is_complete);
    }
}
