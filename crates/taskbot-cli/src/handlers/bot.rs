//! Bot command handler - the operator channel.
//!
//! Reads operator lines from an interactive prompt and routes each one
//! through the command dispatcher. One line, at most one reply; lines
//! the dispatcher ignores (free text, unregistered commands) produce no
//! output, matching the chat-channel behavior.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use taskbot_dispatch::{DispatchConfig, Dispatcher, HttpTaskClient};

/// Execute the bot command.
///
/// The dispatcher is constructed here with its API client injected;
/// there is no process-wide bot instance.
pub async fn execute(api_url: String, timeout_secs: u64) -> Result<()> {
    let config = DispatchConfig::new()
        .with_base_url(api_url)
        .with_timeout(Duration::from_secs(timeout_secs));
    let client = Arc::new(HttpTaskClient::new(&config)?);
    let dispatcher = Dispatcher::new(client);

    println!("Operator channel ready. Type /start for usage; Ctrl-D quits.");

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                if let Some(reply) = dispatcher.dispatch(&line).await {
                    println!("{reply}");
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
