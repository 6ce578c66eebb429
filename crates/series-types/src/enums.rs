//! Enumeration types for the Series API.
//!
//! The only enumeration is the content rating (`classificacaoEnum` on the
//! wire). It is stored and transmitted as its exact label.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Every accepted rating label, in display order.
pub const RATING_LABELS: [&str; 4] = ["Livre", "12+", "16+", "18+"];

/// Age rating of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ContentRating {
    /// Suitable for every audience.
    #[serde(rename = "Livre")]
    General,
    /// Not recommended for viewers under 12.
    #[serde(rename = "12+")]
    TwelvePlus,
    /// Not recommended for viewers under 16.
    #[serde(rename = "16+")]
    SixteenPlus,
    /// Not recommended for viewers under 18.
    #[serde(rename = "18+")]
    EighteenPlus,
}

impl ContentRating {
    /// The wire and storage label of this rating.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "Livre",
            Self::TwelvePlus => "12+",
            Self::SixteenPlus => "16+",
            Self::EighteenPlus => "18+",
        }
    }
}

impl core::fmt::Display for ContentRating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not one of [`RATING_LABELS`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content rating: {0:?}")]
pub struct UnknownRating(pub String);

impl FromStr for ContentRating {
    type Err = UnknownRating;

    /// Labels must match exactly: no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Livre" => Ok(Self::General),
            "12+" => Ok(Self::TwelvePlus),
            "16+" => Ok(Self::SixteenPlus),
            "18+" => Ok(Self::EighteenPlus),
            other => Err(UnknownRating(other.to_owned())),
        }
    }
}
