//! Category weights derived from an importance rank.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use livability_core::{Category, PreferenceError, validate_rank};

/// Integer weight per category; the most important category weighs most.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weights {
    weights: BTreeMap<Category, u32>,
}

impl Weights {
    /// Return the weight for `category`, if ranked.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<u32> {
        self.weights.get(&category).copied()
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.weights.values().sum()
    }

    /// Iterate over `(category, weight)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.weights
            .iter()
            .map(|(&category, &weight)| (category, weight))
    }
}

/// Derive weights from `importance_rank`.
///
/// With `N` categories the first receives `N`, the next `N - 1`, down to `1`
/// for the last. The caller's slice is only read.
///
/// # Errors
/// Returns [`PreferenceError`] when the rank contains a duplicate or omits a
/// category.
///
/// # Examples
/// ```
/// use livability_core::Category;
/// use livability_scorer::weigh;
///
/// # fn main() -> Result<(), livability_core::PreferenceError> {
/// let weights = weigh(&Category::ALL)?;
/// assert_eq!(weights.get(Category::Price), Some(5));
/// assert_eq!(weights.get(Category::Transport), Some(1));
/// assert_eq!(weights.total(), 15);
/// # Ok(())
/// # }
/// ```
pub fn weigh(importance_rank: &[Category]) -> Result<Weights, PreferenceError> {
    validate_rank(importance_rank)?;
    let mut weights = BTreeMap::new();
    let mut weight = 0_u32;
    for &category in importance_rank.iter().rev() {
        weight += 1;
        weights.insert(category, weight);
    }
    Ok(Weights { weights })
}
