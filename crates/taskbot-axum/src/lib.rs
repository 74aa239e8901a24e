//! Axum web adapter for the taskbot task tracker.
//!
//! Exposes the task resource API over HTTP: create, list (paginated),
//! retrieve, full update, partial update, and delete. Handlers delegate
//! to the `TaskRepository` port; all wiring happens in [`bootstrap`].

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, ServerConfig, bootstrap, bootstrap_with, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
