//! Shared application state for the Series API server.
//!
//! [`AppState`] holds the persistence gateway. Handlers only see the
//! [`SerieRepository`] trait object, so the same router serves
//! `PostgreSQL` in production and the in-memory store in tests.

use std::sync::Arc;

use series_db::{InMemorySerieStore, SerieRepository};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The series persistence gateway.
    pub series: Arc<dyn SerieRepository>,
}

impl AppState {
    /// Create application state over the given repository.
    pub fn new(series: Arc<dyn SerieRepository>) -> Self {
        Self { series }
    }

    /// Create application state backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySerieStore::new()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
