//! Factory for building the repository container.
//!
//! Adapters call this from their composition roots so they never touch
//! concrete repository types.

use std::sync::Arc;

use sqlx::SqlitePool;
use taskbot_core::Repos;

use crate::repositories::SqliteTaskRepository;

/// Builds repository containers from a database pool.
pub struct CoreFactory;

impl CoreFactory {
    /// Build the repository container backed by SQLite.
    #[must_use]
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Arc::new(SqliteTaskRepository::new(pool)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    #[tokio::test]
    async fn build_repos_wires_a_working_repository() {
        let pool = setup_test_database().await.unwrap();
        let repos = CoreFactory::build_repos(pool);

        let page = repos.tasks.list_page(1, 10).await.unwrap();
        assert!(page.is_empty());
    }
}
