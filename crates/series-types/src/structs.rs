//! Core entity and request payload structs.
//!
//! JSON keys follow the public wire format (`serieId`, `nome`, `genero`,
//! `anoLancamento`, `quantidadeTemporadas`, `classificacaoEnum`); the Rust
//! field names are the English equivalents.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::ContentRating;
use crate::ids::SerieId;

// ---------------------------------------------------------------------------
// Serie (persisted entity)
// ---------------------------------------------------------------------------

/// One series record.
///
/// `serie_id` is `None` only for an entity that has not been saved yet;
/// every row returned by a repository carries its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Serie {
    /// Store-assigned identifier.
    #[serde(rename = "serieId")]
    pub serie_id: Option<SerieId>,
    /// Title of the series.
    #[serde(rename = "nome")]
    pub name: String,
    /// Genre label, free text.
    #[serde(rename = "genero")]
    pub genre: String,
    /// Year of the first release (>= 1900).
    #[serde(rename = "anoLancamento")]
    pub release_year: i32,
    /// Number of seasons (> 0).
    #[serde(rename = "quantidadeTemporadas")]
    pub season_count: i32,
    /// Age rating.
    #[serde(rename = "classificacaoEnum")]
    pub rating: ContentRating,
}

impl Serie {
    /// Build an unsaved entity from validated fields.
    pub fn new(fields: SerieFields) -> Self {
        Self {
            serie_id: None,
            name: fields.name,
            genre: fields.genre,
            release_year: fields.release_year,
            season_count: fields.season_count,
            rating: fields.rating,
        }
    }

    /// Merge-update: every field present in `patch` overwrites the stored
    /// value, absent fields are left untouched. The id never changes.
    pub fn apply(&mut self, patch: SeriePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(release_year) = patch.release_year {
            self.release_year = release_year;
        }
        if let Some(season_count) = patch.season_count {
            self.season_count = season_count;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
    }
}

/// A complete, validated set of series fields (output of create validation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerieFields {
    /// Non-blank title.
    pub name: String,
    /// Non-blank genre.
    pub genre: String,
    /// Release year, at least 1900.
    pub release_year: i32,
    /// Season count, strictly positive.
    pub season_count: i32,
    /// Parsed rating.
    pub rating: ContentRating,
}

/// A validated partial update (output of update validation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriePatch {
    /// New title, if supplied.
    pub name: Option<String>,
    /// New genre, if supplied.
    pub genre: Option<String>,
    /// New release year, if supplied.
    pub release_year: Option<i32>,
    /// New season count, if supplied.
    pub season_count: Option<i32>,
    /// New rating, if supplied.
    pub rating: Option<ContentRating>,
}

// ---------------------------------------------------------------------------
// SerieInput (request payload)
// ---------------------------------------------------------------------------

/// Create/update request body as received, before validation.
///
/// Every field is optional so that a missing key and an explicit `null`
/// behave the same and both reach the validation rules instead of being
/// rejected by the JSON decoder. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SerieInput {
    /// Title.
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    /// Genre.
    #[serde(rename = "genero", default)]
    pub genre: Option<String>,
    /// Release year.
    #[serde(rename = "anoLancamento", default)]
    pub release_year: Option<i32>,
    /// Season count.
    #[serde(rename = "quantidadeTemporadas", default)]
    pub season_count: Option<i32>,
    /// Rating label, checked against the accepted set during validation.
    #[serde(rename = "classificacaoEnum", default)]
    pub rating: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark() -> Serie {
        let mut serie = Serie::new(SerieFields {
            name: String::from("Dark"),
            genre: String::from("Sci-Fi"),
            release_year: 2017,
            season_count: 3,
            rating: ContentRating::SixteenPlus,
        });
        serie.serie_id = Some(SerieId(7));
        serie
    }

    #[test]
    fn new_entity_has_no_id() {
        let serie = Serie::new(SerieFields {
            name: String::from("Dark"),
            genre: String::from("Sci-Fi"),
            release_year: 2017,
            season_count: 3,
            rating: ContentRating::SixteenPlus,
        });
        assert!(serie.serie_id.is_none());
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut serie = dark();
        serie.apply(SeriePatch {
            season_count: Some(4),
            ..SeriePatch::default()
        });

        assert_eq!(serie.season_count, 4);
        assert_eq!(serie.name, "Dark");
        assert_eq!(serie.genre, "Sci-Fi");
        assert_eq!(serie.release_year, 2017);
        assert_eq!(serie.rating, ContentRating::SixteenPlus);
        assert_eq!(serie.serie_id, Some(SerieId(7)));
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut serie = dark();
        serie.apply(SeriePatch::default());
        assert_eq!(serie, dark());
    }

    #[test]
    fn wire_format_uses_portuguese_keys() {
        let value = serde_json::to_value(dark()).unwrap_or_default();
        assert_eq!(value["serieId"], 7);
        assert_eq!(value["nome"], "Dark");
        assert_eq!(value["genero"], "Sci-Fi");
        assert_eq!(value["anoLancamento"], 2017);
        assert_eq!(value["quantidadeTemporadas"], 3);
        assert_eq!(value["classificacaoEnum"], "16+");
    }

    #[test]
    fn input_treats_missing_and_null_alike() {
        let missing: SerieInput = serde_json::from_str("{}").unwrap_or_default();
        let null: SerieInput =
            serde_json::from_str(r#"{"nome": null, "anoLancamento": null}"#).unwrap_or_default();
        assert_eq!(missing, SerieInput::default());
        assert_eq!(null, SerieInput::default());
    }
}
