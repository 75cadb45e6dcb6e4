//! Tuning knobs for the matching cascade.
#![forbid(unsafe_code)]

/// Shortest query, in characters, that may fall back to edit distance.
pub const MIN_FUZZY_LEN: usize = 3;

/// Normalised edit distance a fuzzy candidate must stay strictly below.
pub const MAX_NORMALIZED_DISTANCE: f64 = 0.4;

/// Options controlling the edit-distance fallback.
///
/// The exact, prefix, and substring strategies take no options.
///
/// # Examples
/// ```
/// use livability_matcher::MatchOptions;
///
/// let strict = MatchOptions {
///     max_normalized_distance: 0.2,
///     ..MatchOptions::default()
/// };
/// assert_eq!(strict.min_fuzzy_len, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchOptions {
    /// Queries shorter than this many characters never match fuzzily.
    pub min_fuzzy_len: usize,
    /// Upper bound, exclusive, on `distance / max(len(query), len(candidate))`.
    pub max_normalized_distance: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_fuzzy_len: MIN_FUZZY_LEN,
            max_normalized_distance: MAX_NORMALIZED_DISTANCE,
        }
    }
}
