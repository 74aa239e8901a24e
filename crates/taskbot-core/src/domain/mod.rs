//! Domain types for the task tracker.

pub mod task;

pub use task::{NewTask, Task, TaskPatch, TaskUpdate};
