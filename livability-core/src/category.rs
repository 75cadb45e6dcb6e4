//! Ranking dimensions for residential locations.
//!
//! Each [`Category`] names one livability metric carried by a
//! [`LocationRecord`](crate::LocationRecord) and knows whether smaller or
//! larger raw values are preferable.
//!
//! # Examples
//! ```
//! use livability_core::{Category, Direction};
//!
//! assert_eq!(Category::CrimeRate.as_str(), "crime_rate");
//! assert_eq!(Category::Schools.direction(), Direction::HigherIsBetter);
//! assert_eq!("schools".parse::<Category>(), Ok(Category::Schools));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the five livability metrics used for ranking.
///
/// The derived ordering follows [`Category::ALL`], which keeps maps keyed by
/// category in a stable, readable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Average resale price of housing.
    #[cfg_attr(feature = "serde", serde(rename = "price"))]
    Price,
    /// Reported crime rate.
    #[cfg_attr(feature = "serde", serde(rename = "crime_rate", alias = "crime"))]
    CrimeRate,
    /// Number of schools in the area.
    #[cfg_attr(feature = "serde", serde(rename = "num_schools", alias = "schools"))]
    Schools,
    /// Number of shopping malls in the area.
    #[cfg_attr(feature = "serde", serde(rename = "num_malls", alias = "malls"))]
    Malls,
    /// Number of public transport stations in the area.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "num_transport", alias = "transport")
    )]
    Transport,
}

/// Whether smaller or larger raw values describe a better location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smaller values rank higher (price, crime rate).
    LowerIsBetter,
    /// Larger values rank higher (amenity counts).
    HigherIsBetter,
}

impl Category {
    /// Every category in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Price,
        Self::CrimeRate,
        Self::Schools,
        Self::Malls,
        Self::Transport,
    ];

    /// Number of ranking categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Return the canonical identifier for the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::CrimeRate => "crime_rate",
            Self::Schools => "num_schools",
            Self::Malls => "num_malls",
            Self::Transport => "num_transport",
        }
    }

    /// Report which end of the raw value range is preferable.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Price | Self::CrimeRate => Direction::LowerIsBetter,
            Self::Schools | Self::Malls | Self::Transport => Direction::HigherIsBetter,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Self::Price),
            "crime_rate" | "crime" => Ok(Self::CrimeRate),
            "num_schools" | "schools" => Ok(Self::Schools),
            "num_malls" | "malls" => Ok(Self::Malls),
            "num_transport" | "transport" => Ok(Self::Transport),
            _ => Err(ParseCategoryError(s.to_owned())),
        }
    }
}

/// What a ranking request orders locations by.
///
/// `score` selects the personalised ranking; any category identifier selects
/// the single-metric ranking.
///
/// # Examples
/// ```
/// use livability_core::{Category, SortKey};
///
/// assert_eq!("score".parse::<SortKey>(), Ok(SortKey::Preference));
/// assert_eq!("price".parse::<SortKey>(), Ok(SortKey::Category(Category::Price)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Rank by a single metric.
    Category(Category),
    /// Rank by the caller's weighted preferences.
    Preference,
}

impl FromStr for SortKey {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("score") {
            return Ok(Self::Preference);
        }
        s.parse().map(Self::Category)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(category) => category.fmt(f),
            Self::Preference => f.write_str("score"),
        }
    }
}
