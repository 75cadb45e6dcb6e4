//! The four-strategy matching cascade.
#![forbid(unsafe_code)]

use std::fmt;

use log::debug;

use crate::{MatchOptions, levenshtein};

/// The strategy that produced a [`LocationMatch`].
///
/// Variants are listed in cascade order; the first strategy with a hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchStrategy {
    /// The candidate equals the query, ignoring case.
    Exact,
    /// The candidate starts with the query.
    Prefix,
    /// The candidate contains the query.
    Substring,
    /// The candidate is within the edit-distance threshold.
    EditDistance,
}

impl MatchStrategy {
    /// Stable identifier used in logs and serialised output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Prefix => "prefix",
            Self::Substring => "substring",
            Self::EditDistance => "edit_distance",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate name resolved from a free-text query.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocationMatch<'a> {
    /// The canonical name, borrowed from the candidate set.
    pub name: &'a str,
    /// Strategy that selected `name`.
    pub strategy: MatchStrategy,
    /// Normalised edit distance, present only for
    /// [`MatchStrategy::EditDistance`].
    pub distance: Option<f64>,
}

impl<'a> LocationMatch<'a> {
    const fn direct(name: &'a str, strategy: MatchStrategy) -> Self {
        Self {
            name,
            strategy,
            distance: None,
        }
    }
}

/// A candidate lower-cased once, with its length in characters.
struct Folded<'a> {
    name: &'a str,
    lower: String,
    len: usize,
}

/// Resolve `query` against `candidates` with custom [`MatchOptions`].
///
/// The query is trimmed and compared case-insensitively. Strategies run in
/// the order exact, prefix, substring, then edit distance:
/// - prefix and substring hits prefer the shortest candidate;
/// - the edit-distance fallback needs at least
///   [`MatchOptions::min_fuzzy_len`] characters and keeps the closest
///   candidate strictly below [`MatchOptions::max_normalized_distance`].
///
/// Ties go to the candidate encountered first. An empty query never matches.
///
/// # Examples
/// ```
/// use livability_matcher::{MatchOptions, MatchStrategy, match_location_with};
///
/// let names = ["Bedok", "Bedok North", "Bishan"];
/// let found = match_location_with("bedok n", names, &MatchOptions::default());
/// assert_eq!(found.map(|m| (m.name, m.strategy)), Some(("Bedok North", MatchStrategy::Prefix)));
/// ```
pub fn match_location_with<'a, I>(
    query: &str,
    candidates: I,
    options: &MatchOptions,
) -> Option<LocationMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let folded: Vec<Folded<'a>> = candidates
        .into_iter()
        .map(|name| {
            let lower = name.to_lowercase();
            let len = lower.chars().count();
            Folded { name, lower, len }
        })
        .collect();

    let found = folded
        .iter()
        .find(|candidate| candidate.lower == needle)
        .map(|candidate| LocationMatch::direct(candidate.name, MatchStrategy::Exact))
        .or_else(|| shortest(&folded, MatchStrategy::Prefix, |lower| lower.starts_with(&needle)))
        .or_else(|| shortest(&folded, MatchStrategy::Substring, |lower| lower.contains(&needle)))
        .or_else(|| closest(&folded, &needle, options));

    match &found {
        Some(hit) => debug!("query {query:?} matched {:?} by {}", hit.name, hit.strategy),
        None => debug!("query {query:?} matched none of {} candidates", folded.len()),
    }
    found
}

/// Resolve `query` with the default [`MatchOptions`].
///
/// # Examples
/// ```
/// use livability_matcher::{MatchStrategy, match_location};
///
/// let found = match_location("Yeshun", ["Yishun", "Sembawang"]).unwrap();
/// assert_eq!(found.name, "Yishun");
/// assert_eq!(found.strategy, MatchStrategy::EditDistance);
/// ```
pub fn match_location<'a, I>(query: &str, candidates: I) -> Option<LocationMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    match_location_with(query, candidates, &MatchOptions::default())
}

/// Return the canonical name that best matches `query`, if any.
///
/// `None` is the ordinary "not found" outcome rather than a failure.
///
/// # Examples
/// ```
/// use livability_matcher::resolve_location_name;
///
/// let names = ["Jurong East", "Jurong West"];
/// assert_eq!(resolve_location_name("jurong", names), Some("Jurong East"));
/// assert_eq!(resolve_location_name("Xyz", names), None);
/// ```
pub fn resolve_location_name<'a, I>(query: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    match_location(query, candidates).map(|found| found.name)
}

fn shortest<'a>(
    folded: &[Folded<'a>],
    strategy: MatchStrategy,
    accepts: impl Fn(&str) -> bool,
) -> Option<LocationMatch<'a>> {
    folded
        .iter()
        .filter(|candidate| accepts(&candidate.lower))
        .min_by_key(|candidate| candidate.len)
        .map(|candidate| LocationMatch::direct(candidate.name, strategy))
}

fn closest<'a>(
    folded: &[Folded<'a>],
    needle: &str,
    options: &MatchOptions,
) -> Option<LocationMatch<'a>> {
    let needle_len = needle.chars().count();
    if needle_len < options.min_fuzzy_len {
        return None;
    }
    folded
        .iter()
        .filter_map(|candidate| {
            let distance = levenshtein(needle, &candidate.lower);
            normalized(distance, needle_len.max(candidate.len)).map(|ratio| (candidate, ratio))
        })
        .filter(|&(_, ratio)| ratio < options.max_normalized_distance)
        .min_by(|(_, left), (_, right)| left.total_cmp(right))
        .map(|(candidate, ratio)| LocationMatch {
            name: candidate.name,
            strategy: MatchStrategy::EditDistance,
            distance: Some(ratio),
        })
}

#[expect(
    clippy::float_arithmetic,
    reason = "edit distance is normalised by the longer length"
)]
fn normalized(distance: usize, longest: usize) -> Option<f64> {
    let edits = u32::try_from(distance).ok()?;
    let span = u32::try_from(longest).ok().filter(|&chars| chars > 0)?;
    Some(f64::from(edits) / f64::from(span))
}
