//! Single-category ranking.
#![forbid(unsafe_code)]

use livability_core::{Category, Direction, LocationRecord};
use log::debug;

use crate::{CategoryScore, Standing, normalize};

/// Rank every location by one category, best first.
///
/// Locations are first ordered by raw value (descending, stable), normalised,
/// then re-ordered by normalised score, since normalisation inverts the raw
/// order for lower-is-better categories. Scores are only comparable within
/// the supplied population.
///
/// # Examples
/// ```
/// use livability_core::{Category, LocationRecord};
/// use livability_scorer::rank_by_category;
///
/// let locations = [
///     LocationRecord::new("Bedok").with_schools(4),
///     LocationRecord::new("Bishan").with_schools(8),
/// ];
/// let ranked = rank_by_category(&locations, Category::Schools);
/// assert_eq!(ranked[0].location.name, "Bishan");
/// assert_eq!(ranked[0].score, 1.0);
/// assert_eq!(ranked[1].score, 0.5);
/// ```
#[must_use]
pub fn rank_by_category(locations: &[LocationRecord], category: Category) -> Vec<CategoryScore<'_>> {
    let mut by_raw: Vec<&LocationRecord> = locations.iter().collect();
    by_raw.sort_by(|a, b| b.metric(category).total_cmp(&a.metric(category)));
    if category.direction() == Direction::LowerIsBetter {
        by_raw.reverse();
    }

    let mut ranked = normalize(by_raw, category);
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!("ranked {} locations by {category}", ranked.len());
    ranked
}

/// Report where `name` sits when ranking by `category`.
///
/// Returns `None` when no location carries that exact name.
#[must_use]
pub fn category_standing(
    locations: &[LocationRecord],
    category: Category,
    name: &str,
) -> Option<Standing> {
    let ranked = rank_by_category(locations, category);
    let population = ranked.len();
    ranked
        .iter()
        .position(|entry| entry.location.name == name)
        .and_then(|index| {
            ranked.get(index).map(|entry| Standing {
                rank: index + 1,
                score: entry.score,
                population,
            })
        })
}
