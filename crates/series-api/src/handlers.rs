//! REST API endpoint handlers for the `/series` resource.
//!
//! # Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | `GET` | `/series` | 200 list | 500 |
//! | `GET` | `/series/{id}` | 200 serie | 404, 500 |
//! | `POST` | `/series` | 201 serie | 400, 500 |
//! | `PUT` | `/series/{id}` | 200 serie | 400, 404 |
//! | `DELETE` | `/series/{id}` | 204 | 404 |
//! | `GET` | `/health` | 200 | -- |
//!
//! List, get and create answer an unexpected storage failure with 500 and
//! a fixed message. Update and delete answer it with 404 and the raw error
//! text; this asymmetry is the established contract of the API and is kept
//! as is.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use series_db::DbError;
use series_types::{Serie, SerieId, SerieInput};

use crate::error::{ApiError, MessageBody};
use crate::state::AppState;

/// Fixed user-facing response messages.
pub mod messages {
    /// The requested id is not stored.
    pub const SERIE_NOT_FOUND: &str = "A série informada não existe.";
    /// `GET /series` storage failure.
    pub const LIST_FAILED: &str = "Erro ao listar todas as séries";
    /// `GET /series/{id}` storage failure.
    pub const GET_FAILED: &str = "Erro ao buscar série por ID";
    /// `POST /series` storage failure.
    pub const CREATE_FAILED: &str = "Erro ao cadastrar série";
    /// `DELETE /series/{id}` confirmation.
    pub const DELETED: &str = "Sucesso";
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe. Does not touch the store.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// GET /series
// ---------------------------------------------------------------------------

/// List every stored series.
pub async fn list_series(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Serie>>, ApiError> {
    let series = state.series.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list series");
        ApiError::Internal(messages::LIST_FAILED.to_owned())
    })?;

    Ok(Json(series))
}

// ---------------------------------------------------------------------------
// GET /series/{id}
// ---------------------------------------------------------------------------

/// Return a single series by id.
pub async fn get_serie(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Serie>, ApiError> {
    let id = serie_id(path)?;

    let serie = state
        .series
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!(serie_id = %id, error = %e, "Failed to load serie");
            ApiError::Internal(messages::GET_FAILED.to_owned())
        })?
        .ok_or_else(not_found)?;

    Ok(Json(serie))
}

// ---------------------------------------------------------------------------
// POST /series
// ---------------------------------------------------------------------------

/// Validate the payload and insert a new series.
pub async fn create_serie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SerieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Serie>), ApiError> {
    let Json(input) = payload.map_err(bad_body)?;

    let fields = input.validate().inspect_err(|e| {
        tracing::debug!(error = %e, "Rejected create payload");
    })?;

    let created = state.series.save(Serie::new(fields)).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to create serie");
        ApiError::Internal(messages::CREATE_FAILED.to_owned())
    })?;

    tracing::info!(serie_id = ?created.serie_id, name = %created.name, "Serie created");

    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// PUT /series/{id}
// ---------------------------------------------------------------------------

/// Merge-update an existing series: only the fields present in the body
/// are validated and overwritten.
pub async fn update_serie(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<SerieInput>, JsonRejection>,
) -> Result<Json<Serie>, ApiError> {
    let id = serie_id(path)?;
    let Json(input) = payload.map_err(bad_body)?;

    let mut serie = state
        .series
        .find_by_id(id)
        .await
        .map_err(|e| store_failure_as_not_found(id, "update", &e))?
        .ok_or_else(not_found)?;

    let patch = input.validate_partial().inspect_err(|e| {
        tracing::debug!(serie_id = %id, error = %e, "Rejected update payload");
    })?;
    serie.apply(patch);

    let updated = state
        .series
        .save(serie)
        .await
        .map_err(|e| store_failure_as_not_found(id, "update", &e))?;

    tracing::info!(serie_id = %id, "Serie updated");

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /series/{id}
// ---------------------------------------------------------------------------

/// Delete an existing series.
pub async fn delete_serie(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let id = serie_id(path)?;

    let serie = state
        .series
        .find_by_id(id)
        .await
        .map_err(|e| store_failure_as_not_found(id, "delete", &e))?
        .ok_or_else(not_found)?;

    state
        .series
        .delete(&serie)
        .await
        .map_err(|e| store_failure_as_not_found(id, "delete", &e))?;

    tracing::info!(serie_id = %id, "Serie deleted");

    Ok((StatusCode::NO_CONTENT, Json(MessageBody::new(messages::DELETED))))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Extract the series id from the path, answering 400 on a non-integer.
fn serie_id(path: Result<Path<i64>, PathRejection>) -> Result<SerieId, ApiError> {
    path.map(|Path(id)| SerieId(id))
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn bad_body(rejection: JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection, "Rejected request body");
    ApiError::BadRequest(rejection.body_text())
}

fn not_found() -> ApiError {
    ApiError::NotFound(messages::SERIE_NOT_FOUND.to_owned())
}

fn store_failure_as_not_found(id: SerieId, operation: &str, error: &DbError) -> ApiError {
    tracing::warn!(serie_id = %id, operation, error = %error, "Store failure during write");
    ApiError::NotFound(error.to_string())
}
