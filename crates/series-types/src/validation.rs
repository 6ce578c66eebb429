//! Validation rules for [`SerieInput`].
//!
//! The rules form an ordered table of pure functions. Every rule is
//! evaluated (no short-circuit) so a single response reports every
//! violation, in table order: name, genre, release year, season count,
//! rating.
//!
//! Presence and value constraints are separate rules. A value rule
//! (minimum year, positive count, rating label) accepts an absent value,
//! so a missing field yields only its "required" message. In partial mode
//! (updates) the presence rules are skipped and only the fields actually
//! supplied are checked.

use crate::enums::ContentRating;
use crate::structs::{SerieFields, SerieInput, SeriePatch};

/// Earliest accepted release year.
pub const MIN_RELEASE_YEAR: i32 = 1900;

/// User-facing validation messages.
pub mod messages {
    /// `nome` missing or blank.
    pub const NAME_BLANK: &str = "O nome da série não pode ser vazio";
    /// `genero` missing or blank.
    pub const GENRE_BLANK: &str = "O gênero não pode ser vazio";
    /// `anoLancamento` missing.
    pub const RELEASE_YEAR_REQUIRED: &str = "O ano de lançamento é obrigatório";
    /// `anoLancamento` below 1900.
    pub const RELEASE_YEAR_MIN: &str = "O ano de lançamento deve ser maior ou igual a 1900";
    /// `quantidadeTemporadas` missing.
    pub const SEASON_COUNT_REQUIRED: &str = "A quantidade de temporadas é obrigatória";
    /// `quantidadeTemporadas` zero or negative.
    pub const SEASON_COUNT_POSITIVE: &str =
        "A quantidade de temporadas deve ser um número positivo";
    /// `classificacaoEnum` missing or blank.
    pub const RATING_BLANK: &str = "A classificação indicativa é obrigatória";
    /// `classificacaoEnum` not one of the accepted labels.
    pub const RATING_INVALID: &str =
        "A classificação deve ser uma das seguintes: Livre, 12+, 16+, 18+";
}

/// Which checks apply to absent fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Create: every field is required.
    Full,
    /// Update: absent fields mean "keep the stored value".
    Partial,
}

/// A single rule: returns the violation message, or `None` when satisfied.
type Rule = fn(&SerieInput, Mode) -> Option<&'static str>;

/// Declaration order is report order.
const RULES: [Rule; 8] = [
    name_not_blank,
    genre_not_blank,
    release_year_required,
    release_year_min,
    season_count_required,
    season_count_positive,
    rating_not_blank,
    rating_in_set,
];

/// A non-empty, ordered list of validation failure messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", .messages.join("; "))]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    /// The messages, in rule order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume into the message list.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

/// Run every rule in order and collect the failures.
pub fn check(input: &SerieInput, mode: Mode) -> Vec<&'static str> {
    RULES.iter().filter_map(|rule| rule(input, mode)).collect()
}

impl SerieInput {
    /// Full validation for create requests.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every violated rule.
    pub fn validate(self) -> Result<SerieFields, ValidationErrors> {
        let patch = self.validate_in(Mode::Full)?;
        match patch {
            SeriePatch {
                name: Some(name),
                genre: Some(genre),
                release_year: Some(release_year),
                season_count: Some(season_count),
                rating: Some(rating),
            } => Ok(SerieFields {
                name,
                genre,
                release_year,
                season_count,
                rating,
            }),
            // Unreachable: full-mode rules reject every absent field.
            _ => Err(ValidationErrors {
                messages: vec![String::from(messages::NAME_BLANK)],
            }),
        }
    }

    /// Partial validation for update requests: only supplied fields are
    /// checked.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every violated rule.
    pub fn validate_partial(self) -> Result<SeriePatch, ValidationErrors> {
        self.validate_in(Mode::Partial)
    }

    fn validate_in(self, mode: Mode) -> Result<SeriePatch, ValidationErrors> {
        let failures = check(&self, mode);
        if !failures.is_empty() {
            return Err(ValidationErrors {
                messages: failures.into_iter().map(String::from).collect(),
            });
        }

        let rating = match self.rating {
            Some(label) => match label.parse::<ContentRating>() {
                Ok(rating) => Some(rating),
                Err(_) => {
                    return Err(ValidationErrors {
                        messages: vec![String::from(messages::RATING_INVALID)],
                    });
                }
            },
            None => None,
        };

        Ok(SeriePatch {
            name: self.name,
            genre: self.genre,
            release_year: self.release_year,
            season_count: self.season_count,
            rating,
        })
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Presence/blank check shared by the text fields.
fn text_not_blank(value: Option<&str>, mode: Mode, message: &'static str) -> Option<&'static str> {
    match value {
        Some(v) if is_blank(v) => Some(message),
        Some(_) => None,
        None if mode == Mode::Full => Some(message),
        None => None,
    }
}

fn required<T>(value: Option<&T>, mode: Mode, message: &'static str) -> Option<&'static str> {
    (value.is_none() && mode == Mode::Full).then_some(message)
}

fn name_not_blank(input: &SerieInput, mode: Mode) -> Option<&'static str> {
    text_not_blank(input.name.as_deref(), mode, messages::NAME_BLANK)
}

fn genre_not_blank(input: &SerieInput, mode: Mode) -> Option<&'static str> {
    text_not_blank(input.genre.as_deref(), mode, messages::GENRE_BLANK)
}

fn release_year_required(input: &SerieInput, mode: Mode) -> Option<&'static str> {
    required(input.release_year.as_ref(), mode, messages::RELEASE_YEAR_REQUIRED)
}

fn release_year_min(input: &SerieInput, _mode: Mode) -> Option<&'static str> {
    input
        .release_year
        .filter(|year| *year < MIN_RELEASE_YEAR)
        .map(|_| messages::RELEASE_YEAR_MIN)
}

fn season_count_required(input: &SerieInput, mode: Mode) -> Option<&'static str> {
    required(input.season_count.as_ref(), mode, messages::SEASON_COUNT_REQUIRED)
}

fn season_count_positive(input: &SerieInput, _mode: Mode) -> Option<&'static str> {
    input
        .season_count
        .filter(|count| *count <= 0)
        .map(|_| messages::SEASON_COUNT_POSITIVE)
}

fn rating_not_blank(input: &SerieInput, mode: Mode) -> Option<&'static str> {
    text_not_blank(input.rating.as_deref(), mode, messages::RATING_BLANK)
}

fn rating_in_set(input: &SerieInput, _mode: Mode) -> Option<&'static str> {
    input
        .rating
        .as_deref()
        .filter(|label| label.parse::<ContentRating>().is_err())
        .map(|_| messages::RATING_INVALID)
}
