//! In-memory implementation of [`SerieRepository`].
//!
//! Backed by a [`BTreeMap`] behind a [`tokio::sync::RwLock`]. Ids start at
//! 1 and only ever increase, so a deleted id is never handed out again.
//! Used by the API tests and by `storage.backend = "memory"`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use series_types::{Serie, SerieId};
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::repository::SerieRepository;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<SerieId, Serie>,
    next_id: i64,
}

/// A process-local series table.
#[derive(Debug)]
pub struct InMemorySerieStore {
    table: RwLock<Table>,
}

impl InMemorySerieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Whether the store holds no rows.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

impl Default for InMemorySerieStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SerieRepository for InMemorySerieStore {
    async fn find_all(&self) -> Result<Vec<Serie>, DbError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: SerieId) -> Result<Option<Serie>, DbError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut serie: Serie) -> Result<Serie, DbError> {
        let mut table = self.table.write().await;

        let id = match serie.serie_id {
            Some(id) => {
                if !table.rows.contains_key(&id) {
                    return Err(DbError::NotFound(id));
                }
                id
            }
            None => {
                let id = SerieId(table.next_id);
                table.next_id = table.next_id.checked_add(1).ok_or(DbError::IdExhausted)?;
                serie.serie_id = Some(id);
                id
            }
        };

        table.rows.insert(id, serie.clone());
        Ok(serie)
    }

    async fn delete(&self, serie: &Serie) -> Result<(), DbError> {
        let id = serie.serie_id.ok_or(DbError::MissingId)?;
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}
