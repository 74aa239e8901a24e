//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. The database pool and repositories are
//! instantiated here; handlers only ever see the `TaskRepository` port.

use std::path::PathBuf;

use anyhow::{Context, Result};
use taskbot_core::{Repos, Settings, validate_settings};
use taskbot_db::{CoreFactory, setup_database};

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
    /// Pagination settings (validated at startup).
    pub settings: Settings,
}

impl ServerConfig {
    /// Create config with default values.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            port: 8000,
            db_path: PathBuf::from("taskbot.db"),
            settings: Settings::with_defaults(),
        }
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Repository container.
    pub repos: Repos,
    /// Pagination settings.
    pub settings: Settings,
}

/// Bootstrap the web adapter.
///
/// Validates the pagination settings first and refuses to start on a
/// violation (a default page size above the bound would silently
/// truncate every default-sized request), then sets up the database
/// and builds the repositories.
pub async fn bootstrap(config: ServerConfig) -> Result<AxumContext> {
    validate_settings(&config.settings).context("invalid pagination settings")?;

    tracing::info!(
        db_path = %config.db_path.display(),
        default_page_size = config.settings.default_page_size,
        max_page_size = config.settings.max_page_size,
        "bootstrapping task service"
    );

    let pool = setup_database(&config.db_path).await?;
    let repos = CoreFactory::build_repos(pool);

    Ok(AxumContext {
        repos,
        settings: config.settings,
    })
}

/// Build a context from pre-built repositories (for testing).
#[must_use]
pub fn bootstrap_with(repos: Repos, settings: Settings) -> AxumContext {
    AxumContext { repos, settings }
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let port = config.port;
    let ctx = bootstrap(config).await?;
    let app = crate::routes::create_router(ctx);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("task service listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
