//! `PostgreSQL` implementation of [`SerieRepository`].
//!
//! Operates on the `serie` table. Every write is a single statement, so
//! each one is its own atomic unit of work; concurrent updates to the same
//! id resolve as last-write-wins.

use async_trait::async_trait;
use series_types::{ContentRating, Serie, SerieId};
use sqlx::PgPool;

use crate::error::DbError;
use crate::repository::SerieRepository;

/// Operations on the `serie` table.
#[derive(Clone)]
pub struct PgSerieStore {
    pool: PgPool,
}

impl PgSerieStore {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, serie: &Serie) -> Result<Serie, DbError> {
        let row = sqlx::query_as::<_, SerieRow>(
            r"INSERT INTO serie (nome, genero, ano_lancamento, quantidade_temporadas, classificacao_enum)
              VALUES ($1, $2, $3, $4, $5)
              RETURNING serie_id, nome, genero, ano_lancamento, quantidade_temporadas, classificacao_enum",
        )
        .bind(&serie.name)
        .bind(&serie.genre)
        .bind(serie.release_year)
        .bind(serie.season_count)
        .bind(serie.rating.as_str())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(serie_id = row.serie_id, "Inserted serie");

        row.try_into()
    }

    async fn update(&self, id: SerieId, serie: &Serie) -> Result<Serie, DbError> {
        let row = sqlx::query_as::<_, SerieRow>(
            r"UPDATE serie
              SET nome = $2, genero = $3, ano_lancamento = $4,
                  quantidade_temporadas = $5, classificacao_enum = $6
              WHERE serie_id = $1
              RETURNING serie_id, nome, genero, ano_lancamento, quantidade_temporadas, classificacao_enum",
        )
        .bind(id.into_inner())
        .bind(&serie.name)
        .bind(&serie.genre)
        .bind(serie.release_year)
        .bind(serie.season_count)
        .bind(serie.rating.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound(id))?;

        tracing::debug!(serie_id = row.serie_id, "Updated serie");

        row.try_into()
    }
}

#[async_trait]
impl SerieRepository for PgSerieStore {
    async fn find_all(&self) -> Result<Vec<Serie>, DbError> {
        let rows = sqlx::query_as::<_, SerieRow>(
            r"SELECT serie_id, nome, genero, ano_lancamento, quantidade_temporadas, classificacao_enum
              FROM serie
              ORDER BY serie_id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Serie::try_from).collect()
    }

    async fn find_by_id(&self, id: SerieId) -> Result<Option<Serie>, DbError> {
        let row = sqlx::query_as::<_, SerieRow>(
            r"SELECT serie_id, nome, genero, ano_lancamento, quantidade_temporadas, classificacao_enum
              FROM serie
              WHERE serie_id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Serie::try_from).transpose()
    }

    async fn save(&self, serie: Serie) -> Result<Serie, DbError> {
        match serie.serie_id {
            None => self.insert(&serie).await,
            Some(id) => self.update(id, &serie).await,
        }
    }

    async fn delete(&self, serie: &Serie) -> Result<(), DbError> {
        let id = serie.serie_id.ok_or(DbError::MissingId)?;

        let result = sqlx::query(r"DELETE FROM serie WHERE serie_id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            serie_id = id.into_inner(),
            rows = result.rows_affected(),
            "Deleted serie"
        );

        Ok(())
    }
}

/// A row from the `serie` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SerieRow {
    /// Primary key (`BIGSERIAL`).
    pub serie_id: i64,
    /// Title.
    pub nome: String,
    /// Genre.
    pub genero: String,
    /// Release year.
    pub ano_lancamento: i32,
    /// Season count.
    pub quantidade_temporadas: i32,
    /// Rating label.
    pub classificacao_enum: String,
}

impl TryFrom<SerieRow> for Serie {
    type Error = DbError;

    fn try_from(row: SerieRow) -> Result<Self, Self::Error> {
        let rating: ContentRating = row.classificacao_enum.parse()?;
        Ok(Self {
            serie_id: Some(SerieId(row.serie_id)),
            name: row.nome,
            genre: row.genero,
            release_year: row.ano_lancamento,
            season_count: row.quantidade_temporadas,
            rating,
        })
    }
}
