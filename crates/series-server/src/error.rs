//! Error types for the server binary.
//!
//! Uses `thiserror` for typed errors surfaced while loading and checking
//! configuration. Startup wiring wraps these in `anyhow` with context.

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// The configuration loaded but is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
