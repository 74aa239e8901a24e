//! Command dispatcher for the taskbot task tracker.
//!
//! Translates operator-issued text commands (`/create`, `/list`, `/view`,
//! `/update`, `/complete`, `/delete`, `/start`) into task API calls and
//! maps the outcomes back into human-readable replies. The dispatcher
//! holds no state between invocations: each line of input produces at
//! most one reply, and every server or transport failure is reported
//! to the operator instead of raised.
//!
//! The crate talks to the task service only over its HTTP contract; wire
//! DTOs live in [`models`] and operator tokens pass through verbatim
//! (except the documented underscore-to-space unescape), so field
//! validation happens exactly once, on the service side.

pub mod api;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod http;
pub mod models;
pub mod replies;

// Re-export primary types
pub use api::{ApiError, ApiResult, TaskApi};
pub use command::{Command, Parsed, parse};
pub use config::DispatchConfig;
pub use dispatcher::Dispatcher;
pub use http::HttpTaskClient;
pub use models::{CreateTask, TaskDto, UpdateTask};
