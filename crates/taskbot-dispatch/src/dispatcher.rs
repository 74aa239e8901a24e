//! Command dispatch and outcome translation.
//!
//! One invocation is one state machine pass: parse, check arity, build
//! the request, invoke the API, translate the outcome into a reply.
//! Nothing is retried and nothing is persisted between invocations.

use std::sync::Arc;

use crate::api::{ApiError, TaskApi};
use crate::command::{Command, Parsed, parse};
use crate::models::{CreateTask, UpdateTask};
use crate::replies;

/// The command dispatcher.
///
/// Constructed with its API client injected so command handling can be
/// tested against a fake service; there is no ambient global instance.
pub struct Dispatcher {
    api: Arc<dyn TaskApi>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self { api }
    }

    /// Handle one line of operator input.
    ///
    /// Returns `None` when the line deserves no reply: free text, or a
    /// slash command no handler is registered for. Every recognized
    /// command produces exactly one reply, failures included.
    pub async fn dispatch(&self, text: &str) -> Option<String> {
        match parse(text) {
            Parsed::NotCommand => None,
            Parsed::Unknown(name) => {
                tracing::debug!(command = %name, "ignoring unregistered command");
                None
            }
            Parsed::Usage(usage) => Some(usage.to_string()),
            Parsed::Command(command) => Some(self.run(command).await),
        }
    }

    async fn run(&self, command: Command) -> String {
        match command {
            Command::Start => replies::WELCOME.to_string(),

            Command::Create {
                title,
                description,
                due_date,
            } => {
                let payload = CreateTask::new(title, description, due_date);
                match self.api.create(&payload).await {
                    Ok(_) => replies::CREATED.to_string(),
                    Err(err) => translate("create", &err, replies::CREATE_FAILED),
                }
            }

            Command::List { page, page_size } => {
                match self.api.list(page.as_deref(), page_size.as_deref()).await {
                    Ok(tasks) if tasks.is_empty() => replies::LIST_EMPTY.to_string(),
                    Ok(tasks) => replies::task_list(&tasks),
                    Err(err) => translate("list", &err, replies::LIST_FAILED),
                }
            }

            Command::View { task_id } => match self.api.retrieve(&task_id).await {
                Ok(task) => replies::task_view(&task),
                Err(err) => translate("view", &err, replies::VIEW_FAILED),
            },

            Command::Update {
                task_id,
                title,
                description,
                due_date,
            } => {
                let payload = UpdateTask {
                    title,
                    description,
                    due_date,
                };
                match self.api.update(&task_id, &payload).await {
                    Ok(_) => replies::task_updated(&task_id),
                    Err(err) => translate("update", &err, replies::UPDATE_FAILED),
                }
            }

            Command::Complete { task_id } => match self.api.complete(&task_id).await {
                Ok(_) => replies::task_completed(&task_id),
                Err(err) => translate("complete", &err, replies::COMPLETE_FAILED),
            },

            Command::Delete { task_id } => match self.api.delete(&task_id).await {
                Ok(()) => replies::task_deleted(&task_id),
                Err(err) => translate("delete", &err, replies::DELETE_FAILED),
            },
        }
    }
}

/// Map an API failure onto the reply taxonomy.
///
/// Transport failures are the only class that is logged in addition to
/// being shown to the operator; the log entry carries the originating
/// command name and the root cause.
fn translate(command: &'static str, err: &ApiError, failure: &str) -> String {
    match err {
        ApiError::NotFound { .. } => replies::NOT_FOUND.to_string(),
        ApiError::Network(_) => {
            tracing::error!(command, error = %err, "transport failure talking to the task service");
            replies::TRY_AGAIN_LATER.to_string()
        }
        ApiError::Status { .. } | ApiError::InvalidUrl(_) | ApiError::InvalidResponse(_) => {
            failure.to_string()
        }
    }
}
