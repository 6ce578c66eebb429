//! Type-safe identifier wrapper for persisted series.
//!
//! Series rows are keyed by a database-generated `BIGSERIAL`, so the
//! identifier is an `i64` rather than a UUID. The newtype keeps it from
//! being mixed up with the other integers on the entity (release year,
//! season count).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique identifier for a persisted series, assigned by the store on
/// first save and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct SerieId(#[ts(type = "number")] pub i64);

impl SerieId {
    /// Return the inner `i64` value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for SerieId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SerieId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<SerieId> for i64 {
    fn from(id: SerieId) -> Self {
        id.0
    }
}
