//! CLI entry point - the composition root.
//!
//! Parses arguments, initializes logging, loads `.env`, and dispatches
//! to the subcommand handlers.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskbot_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads env-backed args
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins; --verbose raises the fallback level
    let fallback = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .init();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            db_path,
            page_size,
            max_page_size,
        } => {
            handlers::serve::execute(port, db_path, page_size, max_page_size).await?;
        }
        Commands::Bot {
            api_url,
            timeout_secs,
        } => {
            handlers::bot::execute(api_url, timeout_secs).await?;
        }
    }

    Ok(())
}
