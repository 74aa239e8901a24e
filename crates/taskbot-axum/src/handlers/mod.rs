//! Request handlers for the task resource API.

pub mod tasks;
