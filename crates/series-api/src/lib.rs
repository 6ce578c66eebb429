//! REST API server for series CRUD.
//!
//! This crate provides an Axum HTTP server that exposes the `/series`
//! resource (list, get, create, merge-update, delete) plus a `/health`
//! probe.
//!
//! # Architecture
//!
//! ```text
//! HTTP request -> handler -> SerieInput validation (writes)
//!              -> SerieRepository -> Serie -> JSON response
//! ```
//!
//! Handlers are stateless; the only shared resource is the repository in
//! [`AppState`]. Each write endpoint issues its store calls without
//! cross-request locking, so concurrent writes to one id are
//! last-write-wins.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::{ApiError, MessageBody, ValidationBody};
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
