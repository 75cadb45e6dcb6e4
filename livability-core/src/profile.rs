//! Personal ranking preferences.
//!
//! A [`PreferenceProfile`] orders every [`Category`] from most to least
//! important and records the price the user would ideally pay. The scorer
//! reads profiles but never modifies them.

use std::collections::HashSet;

use thiserror::Error;

use crate::Category;

/// A user's ranking preferences.
///
/// # Examples
/// ```
/// use livability_core::{Category, PreferenceProfile};
///
/// # fn main() -> Result<(), livability_core::PreferenceError> {
/// let profile = PreferenceProfile::from_names(
///     ["crime_rate", "price", "transport", "schools", "malls"],
///     450_000.0,
/// )?;
/// assert_eq!(profile.importance_rank.first(), Some(&Category::CrimeRate));
/// profile.validate()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceProfile {
    /// Categories from most to least important.
    pub importance_rank: Vec<Category>,
    /// Price the user would ideally pay; drives proximity scoring.
    #[cfg_attr(feature = "serde", serde(alias = "price"))]
    pub ideal_price: f64,
}

/// Errors raised for malformed preference profiles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreferenceError {
    /// A category appeared more than once in the importance rank.
    #[error("category {0} is ranked more than once")]
    DuplicateCategory(Category),
    /// An identifier in the importance rank is not a known category.
    #[error("unknown category '{0}' in importance rank")]
    UnknownCategory(String),
    /// A category was left out of the importance rank.
    #[error("importance rank is missing category {0}")]
    MissingCategory(Category),
    /// The ideal price was negative, NaN, or infinite.
    #[error("ideal price must be a finite, non-negative number (found {0})")]
    InvalidIdealPrice(f64),
}

impl PreferenceProfile {
    /// Construct a profile without validating it.
    #[must_use]
    pub const fn new(importance_rank: Vec<Category>, ideal_price: f64) -> Self {
        Self {
            importance_rank,
            ideal_price,
        }
    }

    /// Build a profile from category identifiers.
    ///
    /// # Errors
    /// Returns [`PreferenceError::UnknownCategory`] for the first identifier
    /// that does not name a category. Duplicates and omissions are left for
    /// [`PreferenceProfile::validate`].
    pub fn from_names<I, S>(names: I, ideal_price: f64) -> Result<Self, PreferenceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let importance_rank = names
            .into_iter()
            .map(|name| {
                let raw = name.as_ref();
                raw.parse::<Category>()
                    .map_err(|_| PreferenceError::UnknownCategory(raw.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(importance_rank, ideal_price))
    }

    /// Check that the importance rank is a permutation of
    /// [`Category::ALL`] and the ideal price is usable.
    ///
    /// # Errors
    /// Returns the first [`PreferenceError`] encountered: duplicates are
    /// reported before omissions.
    pub fn validate(&self) -> Result<(), PreferenceError> {
        validate_rank(&self.importance_rank)?;
        if !self.ideal_price.is_finite() || self.ideal_price < 0.0 {
            return Err(PreferenceError::InvalidIdealPrice(self.ideal_price));
        }
        Ok(())
    }
}

/// Check that `rank` names every category exactly once.
///
/// # Errors
/// Returns [`PreferenceError::DuplicateCategory`] or
/// [`PreferenceError::MissingCategory`].
pub fn validate_rank(rank: &[Category]) -> Result<(), PreferenceError> {
    let mut seen = HashSet::with_capacity(Category::COUNT);
    for &category in rank {
        if !seen.insert(category) {
            return Err(PreferenceError::DuplicateCategory(category));
        }
    }
    match Category::ALL.into_iter().find(|c| !seen.contains(c)) {
        Some(missing) => Err(PreferenceError::MissingCategory(missing)),
        None => Ok(()),
    }
}
