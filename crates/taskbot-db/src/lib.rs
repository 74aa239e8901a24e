//! SQLite persistence for the taskbot task tracker.
//!
//! Implements the `TaskRepository` port from `taskbot-core` on top of a
//! `sqlx` SQLite pool. Schema setup lives in [`setup`], row mapping and
//! the repository in [`repositories`], and adapter wiring in [`factory`].

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export repository implementation
pub use repositories::SqliteTaskRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
