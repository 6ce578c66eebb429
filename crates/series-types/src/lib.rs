//! Shared type definitions for the Series API.
//!
//! This crate is the single source of truth for the series record and its
//! request payload. Types flow downstream to `TypeScript` via `ts-rs` for
//! API clients.
//!
//! # Modules
//!
//! - [`ids`] -- `SerieId`, the store-assigned integer key
//! - [`enums`] -- `ContentRating` (`Livre`, `12+`, `16+`, `18+`)
//! - [`structs`] -- `Serie` entity, `SerieInput` payload, validated field sets
//! - [`validation`] -- ordered, non-short-circuiting validation rules

pub mod enums;
pub mod ids;
pub mod structs;
pub mod validation;

// Re-export all public types at crate root for convenience.
pub use enums::{ContentRating, RATING_LABELS, UnknownRating};
pub use ids::SerieId;
pub use structs::{Serie, SerieFields, SerieInput, SeriePatch};
pub use validation::{MIN_RELEASE_YEAR, Mode, ValidationErrors, messages};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for API clients.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::SerieId::export_all();
        let _ = crate::enums::ContentRating::export_all();
        let _ = crate::structs::Serie::export_all();
        let _ = crate::structs::SerieInput::export_all();
    }
}
