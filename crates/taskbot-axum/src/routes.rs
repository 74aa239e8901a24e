//! Route definitions and router construction.
//!
//! The collection routes keep the trailing slash (`/tasks/`) because
//! that is the path the command dispatcher builds its item URLs from.

use axum::Router;
use axum::routing::get;
use std::sync::Arc;

use crate::bootstrap::AxumContext;
use crate::handlers;

/// Build the task resource router with state applied.
pub fn create_router(ctx: AxumContext) -> Router {
    Router::new()
        .route(
            "/tasks/",
            get(handlers::tasks::list).post(handlers::tasks::create),
        )
        .route(
            "/tasks/{id}",
            get(handlers::tasks::retrieve)
                .put(handlers::tasks::update)
                .patch(handlers::tasks::patch)
                .delete(handlers::tasks::remove),
        )
        .with_state(Arc::new(ctx))
}
