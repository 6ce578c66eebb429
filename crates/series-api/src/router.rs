//! Axum router construction for the Series API.
//!
//! Assembles all routes into a single [`Router`] with request tracing and
//! CORS middleware enabled.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Series API.
///
/// The router includes:
/// - `GET /health` -- liveness probe
/// - `GET /series` -- list series
/// - `POST /series` -- create a series
/// - `GET /series/{id}` -- single series
/// - `PUT /series/{id}` -- merge-update a series
/// - `DELETE /series/{id}` -- delete a series
///
/// CORS is configured to allow any origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/series",
            get(handlers::list_series).post(handlers::create_serie),
        )
        .route(
            "/series/{id}",
            get(handlers::get_serie)
                .put(handlers::update_serie)
                .delete(handlers::delete_serie),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
