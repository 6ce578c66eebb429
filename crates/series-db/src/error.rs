//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`] which wraps the underlying
//! [`sqlx`] errors with additional context about which operation failed.

use series_types::{SerieId, UnknownRating};

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An update targeted a row that does not exist.
    #[error("Serie not found: {0}")]
    NotFound(SerieId),

    /// A delete was requested for an entity that was never saved.
    #[error("Serie has no identifier; it was never persisted")]
    MissingId,

    /// A stored row could not be mapped back to a [`series_types::Serie`].
    #[error("Decode error: {0}")]
    Decode(#[from] UnknownRating),

    /// The in-memory store ran out of identifiers.
    #[error("Identifier space exhausted")]
    IdExhausted,
}
