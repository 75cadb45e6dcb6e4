//! Error types raised while ranking locations.
#![forbid(unsafe_code)]

use livability_core::PreferenceError;
use thiserror::Error;

/// Errors that abort a ranking request.
///
/// Numeric edge cases (zero values, equal bounds, a zero ideal price) are
/// scored by policy and never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// Personalised ranking was requested over zero locations.
    #[error("cannot rank an empty set of locations")]
    EmptyPopulation,
    /// The importance rank was not a permutation of the categories.
    #[error("invalid preference profile: {0}")]
    InvalidPreference(#[from] PreferenceError),
    /// Ranking by score was requested without a preference profile.
    #[error("ranking by score requires a preference profile")]
    ProfileRequired,
}
