//! Output types produced by the ranking functions.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use livability_core::{Category, LocationRecord};

/// A location paired with its normalised score for one category.
///
/// Scores lie in `0.0..=1.0` and are rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryScore<'a> {
    /// The scored location.
    pub location: &'a LocationRecord,
    /// Normalised score, `1.0` being the best in the population.
    pub score: f64,
}

/// A location scored against a user's preference profile.
///
/// `score` and every entry of `category_scores` lie in `0.0..=10.0` and are
/// rounded to two decimal places.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredLocation {
    /// The scored location.
    pub location: LocationRecord,
    /// Weighted composite score.
    pub score: f64,
    /// Per-category sub-scores that fed the composite.
    pub category_scores: BTreeMap<Category, f64>,
}

impl ScoredLocation {
    /// Return the sub-score recorded for `category`.
    #[must_use]
    pub fn category_score(&self, category: Category) -> Option<f64> {
        self.category_scores.get(&category).copied()
    }
}

/// Where one location sits within a ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Standing {
    /// 1-based position, `1` being the best.
    pub rank: usize,
    /// Score at that position.
    pub score: f64,
    /// Number of locations in the ranking.
    pub population: usize,
}

/// Result of a ranking request, shaped by its [`SortKey`](livability_core::SortKey).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Ranking<'a> {
    /// Every location ordered by a single category.
    ByCategory(Vec<CategoryScore<'a>>),
    /// The best locations under a preference profile.
    ByPreference(Vec<ScoredLocation>),
}

impl Ranking<'_> {
    /// Number of ranked entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::ByCategory(entries) => entries.len(),
            Self::ByPreference(entries) => entries.len(),
        }
    }

    /// Report whether the ranking has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the ranked locations, best first.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::ByCategory(entries) => entries
                .iter()
                .map(|entry| entry.location.name.as_str())
                .collect(),
            Self::ByPreference(entries) => entries
                .iter()
                .map(|entry| entry.location.name.as_str())
                .collect(),
        }
    }
}
