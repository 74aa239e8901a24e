//! Core domain for the taskbot task tracker.
//!
//! This crate holds the pure domain types, the repository port, and the
//! pagination settings. It has no infrastructure dependencies; adapters
//! (`taskbot-db`, `taskbot-axum`) depend on this crate, never the other
//! way around.

pub mod domain;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{NewTask, Task, TaskPatch, TaskUpdate};
pub use ports::{CoreError, Repos, RepositoryError, TaskRepository};
pub use settings::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Settings, SettingsError, validate_settings,
};
