//! Persistence gateway for the Series API.
//!
//! # Architecture
//!
//! ```text
//! Request Handler
//!     |
//!     +-- SerieRepository (trait)
//!         |-- PgSerieStore        (PostgreSQL `serie` table)
//!         +-- InMemorySerieStore  (process-local BTreeMap)
//! ```
//!
//! # Modules
//!
//! - [`repository`] -- The `SerieRepository` contract
//! - [`serie_store`] -- `PostgreSQL` implementation and row mapping
//! - [`memory`] -- In-memory implementation
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`error`] -- Shared error types

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;
pub mod serie_store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use memory::InMemorySerieStore;
pub use postgres::{PostgresConfig, PostgresPool};
pub use repository::SerieRepository;
pub use serie_store::{PgSerieStore, SerieRow};
