//! Configuration types for the Series API server.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults (serde `default` attributes below)
//! 2. Optional file `series-api.toml` (or the path in `SERIES_CONFIG`);
//!    any format the `config` crate detects from the extension
//! 3. Environment variables `SERIES_<SECTION>__<KEY>`, e.g.
//!    `SERIES_SERVER__PORT=9000`, `SERIES_STORAGE__BACKEND=memory`
//! 4. `DATABASE_URL`, which overrides `database.url`

use std::time::Duration;

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use series_api::ServerConfig;
use series_db::PostgresConfig;
use series_db::postgres::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_IDLE_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS,
};

use crate::error::ConfigError;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "series-api.toml";

/// Environment variable naming an alternative configuration file.
pub const CONFIG_PATH_ENV: &str = "SERIES_CONFIG";

/// Prefix of per-key environment overrides.
const ENV_PREFIX: &str = "SERIES";

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// HTTP listener.
    #[serde(default)]
    pub server: ServerSection,

    /// Storage backend selection.
    #[serde(default)]
    pub storage: StorageSection,

    /// `PostgreSQL` connection settings.
    #[serde(default)]
    pub database: DatabaseSection,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from the default file, the environment and
    /// `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source is malformed or the result
    /// fails [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_owned());

        let builder = Config::builder()
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the `postgres` backend has no
    /// database URL or the pool size is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.backend == StorageBackend::Postgres {
            if self.database.url.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::Invalid(String::from(
                    "storage.backend = \"postgres\" requires database.url or DATABASE_URL",
                )));
            }
            if self.database.max_connections == 0 {
                return Err(ConfigError::Invalid(String::from(
                    "database.max_connections must be at least 1",
                )));
            }
        }
        Ok(())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    /// Listener configuration for [`series_api::start_server`].
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

/// Which repository implementation backs the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// `PostgreSQL` via `sqlx`.
    #[default]
    Postgres,
    /// Process-local map; data is lost on exit.
    Memory,
}

/// Storage settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StorageSection {
    /// Selected backend.
    #[serde(default)]
    pub backend: StorageBackend,
}

/// `PostgreSQL` settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseSection {
    /// Connection URL; required for the `postgres` backend.
    #[serde(default)]
    pub url: Option<String>,

    /// Maximum pool size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Pool acquire timeout, seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Idle connection timeout, seconds.
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,

    /// Apply the embedded migrations at startup.
    #[serde(default)]
    pub run_migrations: bool,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
            idle_timeout_secs: default_idle_timeout_secs(),
            run_migrations: false,
        }
    }
}

impl DatabaseSection {
    /// Pool configuration for `url`.
    pub fn postgres_config(&self, url: &str) -> PostgresConfig {
        PostgresConfig::new(url)
            .with_max_connections(self.max_connections)
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .with_idle_timeout(Duration::from_secs(self.idle_timeout_secs))
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSection {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

const fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

const fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

const fn default_idle_timeout_secs() -> u64 {
    DEFAULT_IDLE_TIMEOUT_SECS
}

fn default_log_level() -> String {
    String::from("info")
}
