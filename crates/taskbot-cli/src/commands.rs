//! Subcommand definitions for the taskbot binary.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands for the taskbot binary.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the task resource service
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long, default_value = "8000")]
        port: u16,
        /// Path to the SQLite database file
        #[arg(long, default_value = "taskbot.db")]
        db_path: PathBuf,
        /// Page size applied when the caller requests none
        #[arg(long, default_value = "10")]
        page_size: u32,
        /// Upper bound on any caller-requested page size
        #[arg(long, default_value = "50")]
        max_page_size: u32,
    },

    /// Run the operator command bot against a task service
    Bot {
        /// Base URL of the task collection endpoint
        #[arg(
            long,
            env = "TASKBOT_API_URL",
            default_value = "http://127.0.0.1:8000/tasks/"
        )]
        api_url: String,
        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout_secs: u64,
    },
}
