//! The persistence gateway contract for series records.
//!
//! Handlers depend on [`SerieRepository`] only, so the backing store can be
//! `PostgreSQL` ([`crate::PgSerieStore`]) in production or the in-memory
//! map ([`crate::InMemorySerieStore`]) in tests and local runs.

use async_trait::async_trait;
use series_types::{Serie, SerieId};

use crate::error::DbError;

/// Keyed storage for [`Serie`] records.
#[async_trait]
pub trait SerieRepository: Send + Sync + 'static {
    /// Every stored series, ordered by id.
    async fn find_all(&self) -> Result<Vec<Serie>, DbError>;

    /// The series with `id`, or `None` if it does not exist.
    async fn find_by_id(&self, id: SerieId) -> Result<Option<Serie>, DbError>;

    /// Insert when `serie_id` is `None` (a new id is assigned), otherwise
    /// overwrite the row with that id. Returns the stored record.
    ///
    /// Overwriting an id that is not stored fails with
    /// [`DbError::NotFound`].
    async fn save(&self, serie: Serie) -> Result<Serie, DbError>;

    /// Remove the row for `serie`. Deleting an id that is already gone is a
    /// no-op; an unsaved entity fails with [`DbError::MissingId`].
    async fn delete(&self, serie: &Serie) -> Result<(), DbError>;
}
