//! Population-relative normalisation of a single metric.
//!
//! Lower-is-better categories divide the smallest strictly positive value by
//! each location's value; higher-is-better categories divide each value by the
//! population maximum. Zero raw values in lower-is-better categories are
//! treated by policy: a zero price means no housing stock and scores `0.0`,
//! while a zero crime rate is a genuine best case and scores `1.0`.
#![forbid(unsafe_code)]

use livability_core::{Category, Direction, LocationRecord};
use log::warn;

use crate::{CategoryScore, round_to};

const NORMALISED_PLACES: usize = 1;

/// Normalise `category` for every location, preserving input order.
///
/// Scores are rounded to one decimal place. Empty input yields an empty
/// vector.
///
/// # Examples
/// ```
/// use livability_core::{Category, LocationRecord};
/// use livability_scorer::normalize;
///
/// let locations = [
///     LocationRecord::new("A").with_price(300_000.0),
///     LocationRecord::new("B").with_price(600_000.0),
///     LocationRecord::new("C"),
/// ];
/// let scores: Vec<f64> = normalize(&locations, Category::Price)
///     .into_iter()
///     .map(|entry| entry.score)
///     .collect();
/// assert_eq!(scores, vec![1.0, 0.5, 0.0]);
/// ```
#[must_use]
pub fn normalize<'a, I>(locations: I, category: Category) -> Vec<CategoryScore<'a>>
where
    I: IntoIterator<Item = &'a LocationRecord>,
{
    let population: Vec<&'a LocationRecord> = locations.into_iter().collect();
    match category.direction() {
        Direction::LowerIsBetter => normalise_lower_is_better(&population, category),
        Direction::HigherIsBetter => normalise_higher_is_better(&population, category),
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "lower-is-better scores divide the population minimum by each value"
)]
fn normalise_lower_is_better<'a>(
    population: &[&'a LocationRecord],
    category: Category,
) -> Vec<CategoryScore<'a>> {
    let positive_minimum = population
        .iter()
        .map(|location| location.metric(category))
        .filter(|value| *value > 0.0)
        .min_by(f64::total_cmp);
    let Some(lowest) = positive_minimum else {
        if !population.is_empty() {
            warn!("no positive {category} values among {} locations", population.len());
        }
        return zero_scores(population);
    };

    population
        .iter()
        .map(|&location| {
            let value = location.metric(category);
            let score = if value > 0.0 {
                round_to(lowest / value, NORMALISED_PLACES)
            } else {
                zero_value_score(category)
            };
            CategoryScore { location, score }
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "higher-is-better scores divide each value by the population maximum"
)]
fn normalise_higher_is_better<'a>(
    population: &[&'a LocationRecord],
    category: Category,
) -> Vec<CategoryScore<'a>> {
    let highest = population
        .iter()
        .map(|location| location.metric(category))
        .fold(0.0_f64, f64::max);
    if highest <= 0.0 {
        if !population.is_empty() {
            warn!("no positive {category} values among {} locations", population.len());
        }
        return zero_scores(population);
    }

    population
        .iter()
        .map(|&location| CategoryScore {
            location,
            score: round_to(location.metric(category) / highest, NORMALISED_PLACES),
        })
        .collect()
}

/// Score given to a zero (or unusable) raw value in a lower-is-better category.
const fn zero_value_score(category: Category) -> f64 {
    match category {
        Category::CrimeRate => 1.0,
        Category::Price | Category::Schools | Category::Malls | Category::Transport => 0.0,
    }
}

fn zero_scores<'a>(population: &[&'a LocationRecord]) -> Vec<CategoryScore<'a>> {
    population
        .iter()
        .map(|&location| CategoryScore {
            location,
            score: 0.0,
        })
        .collect()
}
