//! Personalised composite scoring.
//!
//! Every category is first mapped onto a `0.0..=10.0` sub-score:
//! - price by proximity to the user's ideal price;
//! - crime rate by inverted min-max over the population;
//! - schools, malls and transport by direct min-max.
//!
//! The composite is the weight-averaged sub-score, using weights derived from
//! the profile's importance rank. This scale differs from the `0.0..=1.0`
//! scale of [`rank_by_category`](crate::rank_by_category).
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use livability_core::{Category, LocationRecord, PreferenceProfile};
use log::{debug, warn};

use crate::{RankingError, ScoredLocation, Standing, Weights, round_to, weigh};

/// Maximum number of locations returned by [`rank_by_preference`].
pub const TOP_K: usize = 5;

const MAX_SUB_SCORE: f64 = 10.0;
const COMPOSITE_PLACES: usize = 2;

/// Smallest and largest raw value of one category across the population.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    fn of(locations: &[LocationRecord], category: Category) -> Option<Self> {
        locations
            .iter()
            .map(|location| location.metric(category))
            .fold(None, |acc: Option<Self>, value| {
                Some(acc.map_or(
                    Self {
                        min: value,
                        max: value,
                    },
                    |bounds| Self {
                        min: bounds.min.min(value),
                        max: bounds.max.max(value),
                    },
                ))
            })
    }

    const fn has_spread(self) -> bool {
        self.max > self.min
    }
}

/// Score every location against `profile`, best first.
///
/// Ties keep their input order.
///
/// # Errors
/// Returns [`RankingError::EmptyPopulation`] for an empty slice and
/// [`RankingError::InvalidPreference`] when the importance rank is not a
/// permutation of the categories.
pub fn score_locations(
    locations: &[LocationRecord],
    profile: &PreferenceProfile,
) -> Result<Vec<ScoredLocation>, RankingError> {
    if locations.is_empty() {
        return Err(RankingError::EmptyPopulation);
    }
    let weights = weigh(&profile.importance_rank)?;
    if profile.ideal_price <= 0.0 || !profile.ideal_price.is_finite() {
        warn!(
            "ideal price {} is not positive; every price sub-score will be 0",
            profile.ideal_price
        );
    }

    let bounds: BTreeMap<Category, Bounds> = Category::ALL
        .into_iter()
        .filter(|&category| category != Category::Price)
        .filter_map(|category| Bounds::of(locations, category).map(|b| (category, b)))
        .collect();

    let mut scored: Vec<ScoredLocation> = locations
        .iter()
        .map(|location| score_location(location, profile.ideal_price, &bounds, &weights))
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!(
        "scored {} locations against a profile led by {:?}",
        scored.len(),
        profile.importance_rank.first()
    );
    Ok(scored)
}

/// Return the best [`TOP_K`] locations for `profile`.
///
/// # Errors
/// Propagates the errors of [`score_locations`].
///
/// # Examples
/// ```
/// use livability_core::{Category, LocationRecord, PreferenceProfile};
/// use livability_scorer::rank_by_preference;
///
/// # fn main() -> Result<(), livability_scorer::RankingError> {
/// let locations = [
///     LocationRecord::new("A").with_price(300_000.0),
///     LocationRecord::new("B").with_price(600_000.0),
/// ];
/// let profile = PreferenceProfile::new(Category::ALL.to_vec(), 300_000.0);
/// let ranked = rank_by_preference(&locations, &profile)?;
/// assert_eq!(ranked[0].location.name, "A");
/// assert_eq!(ranked[0].category_score(Category::Price), Some(10.0));
/// assert_eq!(ranked[1].category_score(Category::Price), Some(0.0));
/// # Ok(())
/// # }
/// ```
pub fn rank_by_preference(
    locations: &[LocationRecord],
    profile: &PreferenceProfile,
) -> Result<Vec<ScoredLocation>, RankingError> {
    let mut scored = score_locations(locations, profile)?;
    scored.truncate(TOP_K);
    Ok(scored)
}

/// Report where `name` sits in the full personalised ranking.
///
/// # Errors
/// Propagates the errors of [`score_locations`].
pub fn preference_standing(
    locations: &[LocationRecord],
    profile: &PreferenceProfile,
    name: &str,
) -> Result<Option<Standing>, RankingError> {
    let scored = score_locations(locations, profile)?;
    let population = scored.len();
    Ok(scored
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.location.name == name)
        .map(|(index, entry)| Standing {
            rank: index + 1,
            score: entry.score,
            population,
        }))
}

#[expect(
    clippy::float_arithmetic,
    reason = "the composite is a weighted mean of sub-scores"
)]
fn score_location(
    location: &LocationRecord,
    ideal_price: f64,
    bounds: &BTreeMap<Category, Bounds>,
    weights: &Weights,
) -> ScoredLocation {
    let sub_scores: BTreeMap<Category, f64> = Category::ALL
        .into_iter()
        .map(|category| {
            let actual = location.metric(category);
            let score = match category {
                Category::Price => price_proximity(actual, ideal_price),
                Category::CrimeRate => bounds
                    .get(&category)
                    .map_or(0.0, |&b| inverted_min_max(actual, b)),
                Category::Schools | Category::Malls | Category::Transport => bounds
                    .get(&category)
                    .map_or(0.0, |&b| direct_min_max(actual, b)),
            };
            (category, score)
        })
        .collect();

    let total_weight = f64::from(weights.total());
    let weighted_sum: f64 = weights
        .iter()
        .map(|(category, weight)| {
            sub_scores.get(&category).copied().unwrap_or(0.0) * f64::from(weight)
        })
        .sum();
    let composite = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    };

    ScoredLocation {
        location: location.clone(),
        score: round_to(composite, COMPOSITE_PLACES),
        category_scores: sub_scores
            .into_iter()
            .map(|(category, score)| (category, round_to(score, COMPOSITE_PLACES)))
            .collect(),
    }
}

/// `10` for the ideal price, falling linearly to `0` at 100% deviation.
#[expect(
    clippy::float_arithmetic,
    reason = "proximity is a relative difference"
)]
fn price_proximity(actual: f64, ideal: f64) -> f64 {
    let difference = if ideal > 0.0 {
        ((actual - ideal).abs() / ideal).min(1.0)
    } else {
        1.0
    };
    MAX_SUB_SCORE * (1.0 - difference)
}

#[expect(clippy::float_arithmetic, reason = "min-max scaling")]
fn inverted_min_max(actual: f64, bounds: Bounds) -> f64 {
    if bounds.has_spread() {
        MAX_SUB_SCORE * (bounds.max - actual) / (bounds.max - bounds.min)
    } else {
        MAX_SUB_SCORE
    }
}

#[expect(clippy::float_arithmetic, reason = "min-max scaling")]
fn direct_min_max(actual: f64, bounds: Bounds) -> f64 {
    if bounds.has_spread() {
        MAX_SUB_SCORE * (actual - bounds.min) / (bounds.max - bounds.min)
    } else if actual > 0.0 {
        MAX_SUB_SCORE
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(300_000.0, 300_000.0, 10.0)]
    #[case(450_000.0, 300_000.0, 5.0)]
    #[case(150_000.0, 300_000.0, 5.0)]
    #[case(600_000.0, 300_000.0, 0.0)]
    #[case(900_000.0, 300_000.0, 0.0)]
    #[case(300_000.0, 0.0, 0.0)]
    fn price_proximity_caps_at_full_deviation(
        #[case] actual: f64,
        #[case] ideal: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(price_proximity(actual, ideal), expected);
    }

    #[rstest]
    fn flat_bounds_score_by_presence() {
        let flat = Bounds { min: 3.0, max: 3.0 };
        assert_eq!(direct_min_max(3.0, flat), 10.0);
        assert_eq!(direct_min_max(0.0, Bounds { min: 0.0, max: 0.0 }), 0.0);
        assert_eq!(inverted_min_max(3.0, flat), 10.0);
    }

    #[rstest]
    fn bounds_cover_population() {
        let locations = [
            LocationRecord::new("A").with_malls(2),
            LocationRecord::new("B").with_malls(7),
            LocationRecord::new("C"),
        ];
        assert_eq!(
            Bounds::of(&locations, Category::Malls),
            Some(Bounds { min: 0.0, max: 7.0 })
        );
        assert_eq!(Bounds::of(&[], Category::Malls), None);
    }
}
