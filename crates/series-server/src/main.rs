//! Series API server entry point.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (defaults, `series-api.toml`, environment)
//! 2. Initialize structured logging (tracing)
//! 3. Build the storage backend (`PostgreSQL` pool or in-memory map)
//! 4. Serve the REST API until `Ctrl-C` / `SIGTERM`

mod config;
mod error;

use std::sync::Arc;

use anyhow::Context;
use series_api::{AppState, start_server};
use series_db::{InMemorySerieStore, PgSerieStore, PostgresPool, SerieRepository};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, DatabaseSection, LoggingSection, StorageBackend};

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, storage initialization or the
/// server itself fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration.
    let config = AppConfig::load().context("loading configuration")?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);

    info!("series-server starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        backend = ?config.storage.backend,
        database_url_set = config.database.url.is_some(),
        "Configuration loaded"
    );

    // 3. Build the storage backend.
    let (repository, pool) = build_repository(config.storage.backend, &config.database).await?;

    // 4. Serve.
    let state = Arc::new(AppState::new(repository));
    start_server(&config.server.server_config(), state)
        .await
        .context("running HTTP server")?;

    if let Some(pool) = pool {
        pool.close().await;
    }

    info!("series-server stopped");
    Ok(())
}

/// Initialize the global tracing subscriber. `RUST_LOG` wins over the
/// configured level.
fn init_logging(logging: &LoggingSection) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Create the repository for the selected backend. The pool is returned
/// alongside so it can be closed on shutdown.
async fn build_repository(
    backend: StorageBackend,
    database: &DatabaseSection,
) -> anyhow::Result<(Arc<dyn SerieRepository>, Option<PostgresPool>)> {
    match backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage; data is not persisted");
            let store: Arc<dyn SerieRepository> = Arc::new(InMemorySerieStore::new());
            Ok((store, None))
        }
        StorageBackend::Postgres => {
            let url = database
                .url
                .as_deref()
                .context("database.url is required for the postgres backend")?;

            let pool = PostgresPool::connect(&database.postgres_config(url))
                .await
                .context("connecting to PostgreSQL")?;

            if database.run_migrations {
                pool.run_migrations()
                    .await
                    .context("running database migrations")?;
            }

            let store: Arc<dyn SerieRepository> =
                Arc::new(PgSerieStore::new(pool.pool().clone()));
            Ok((store, Some(pool)))
        }
    }
}
