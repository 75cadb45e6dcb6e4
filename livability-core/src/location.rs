//! Per-location metric records supplied by the data-access layer.

use std::collections::HashSet;

use thiserror::Error;

use crate::Category;

/// Raw livability metrics for one planning area.
///
/// Numeric fields default to zero when the source data was absent. For
/// `price` and `crime_rate` a zero is ambiguous between "no data" and a
/// genuine zero; the scorer applies category-specific policies to it.
///
/// # Examples
/// ```
/// use livability_core::{Category, LocationRecord};
///
/// let bedok = LocationRecord::new("Bedok")
///     .with_price(480_000.0)
///     .with_schools(12);
/// assert_eq!(bedok.metric(Category::Price), 480_000.0);
/// assert_eq!(bedok.metric(Category::Schools), 12.0);
/// assert_eq!(bedok.metric(Category::Malls), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocationRecord {
    /// Canonical planning-area name; unique within a collection.
    #[cfg_attr(feature = "serde", serde(alias = "location_name"))]
    pub name: String,
    /// Average resale price; `0.0` means no housing data.
    pub price: f64,
    /// Crime rate; `0.0` means zero crime or no data.
    pub crime_rate: f64,
    /// Number of schools.
    pub num_schools: u32,
    /// Number of shopping malls.
    pub num_malls: u32,
    /// Number of transport stations.
    pub num_transport: u32,
}

/// Errors raised when a record or collection violates its invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationRecordError {
    /// The record had an empty or whitespace-only name.
    #[error("location name must not be empty")]
    EmptyName,
    /// A metric was negative.
    #[error("{category} for {name} must not be negative (found {value})")]
    NegativeMetric {
        /// Location carrying the bad value.
        name: String,
        /// Affected category.
        category: Category,
        /// Raw value found.
        value: f64,
    },
    /// A metric was NaN or infinite.
    #[error("{category} for {name} must be finite")]
    NonFiniteMetric {
        /// Location carrying the bad value.
        name: String,
        /// Affected category.
        category: Category,
    },
    /// Two records shared a name.
    #[error("location name {0:?} appears more than once")]
    DuplicateName(String),
}

impl LocationRecord {
    /// Create a record with every metric set to zero.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the average resale price.
    #[must_use]
    pub const fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Set the crime rate.
    #[must_use]
    pub const fn with_crime_rate(mut self, crime_rate: f64) -> Self {
        self.crime_rate = crime_rate;
        self
    }

    /// Set the school count.
    #[must_use]
    pub const fn with_schools(mut self, count: u32) -> Self {
        self.num_schools = count;
        self
    }

    /// Set the mall count.
    #[must_use]
    pub const fn with_malls(mut self, count: u32) -> Self {
        self.num_malls = count;
        self
    }

    /// Set the transport station count.
    #[must_use]
    pub const fn with_transport(mut self, count: u32) -> Self {
        self.num_transport = count;
        self
    }

    /// Return the raw value of `category` as a float.
    #[must_use]
    pub fn metric(&self, category: Category) -> f64 {
        match category {
            Category::Price => self.price,
            Category::CrimeRate => self.crime_rate,
            Category::Schools => f64::from(self.num_schools),
            Category::Malls => f64::from(self.num_malls),
            Category::Transport => f64::from(self.num_transport),
        }
    }

    /// Check the record-level invariants.
    ///
    /// # Errors
    /// Returns [`LocationRecordError::EmptyName`] for a blank name and
    /// [`LocationRecordError::NegativeMetric`] or
    /// [`LocationRecordError::NonFiniteMetric`] for unusable price or crime
    /// rate values.
    pub fn validate(&self) -> Result<(), LocationRecordError> {
        if self.name.trim().is_empty() {
            return Err(LocationRecordError::EmptyName);
        }
        for (category, value) in [
            (Category::Price, self.price),
            (Category::CrimeRate, self.crime_rate),
        ] {
            if !value.is_finite() {
                return Err(LocationRecordError::NonFiniteMetric {
                    name: self.name.clone(),
                    category,
                });
            }
            if value < 0.0 {
                return Err(LocationRecordError::NegativeMetric {
                    name: self.name.clone(),
                    category,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Ensure no two records in `locations` share a name.
///
/// # Errors
/// Returns [`LocationRecordError::DuplicateName`] naming the first repeated
/// entry.
pub fn ensure_unique_names(locations: &[LocationRecord]) -> Result<(), LocationRecordError> {
    let mut seen = HashSet::with_capacity(locations.len());
    for location in locations {
        if !seen.insert(location.name.as_str()) {
            return Err(LocationRecordError::DuplicateName(location.name.clone()));
        }
    }
    Ok(())
}
