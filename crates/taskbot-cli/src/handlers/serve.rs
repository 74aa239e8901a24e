//! Serve command handler.
//!
//! Runs the task resource service until interrupted. Pagination settings
//! are validated inside `start_server`'s bootstrap; an inconsistent
//! default/max pair aborts startup.

use std::path::PathBuf;

use anyhow::Result;
use taskbot_axum::{ServerConfig, start_server};
use taskbot_core::Settings;

/// Execute the serve command.
pub async fn execute(port: u16, db_path: PathBuf, page_size: u32, max_page_size: u32) -> Result<()> {
    let config = ServerConfig {
        port,
        db_path,
        settings: Settings {
            default_page_size: page_size,
            max_page_size,
        },
    };

    start_server(config).await
}
