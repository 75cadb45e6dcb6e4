//! Scoring and ranking for residential locations.
//!
//! The crate offers two complementary rankings over a caller-supplied
//! population of [`LocationRecord`](livability_core::LocationRecord)s:
//! - **Category ranking** normalises one metric into `0.0..=1.0` relative to
//!   the population and orders every location best first
//!   ([`rank_by_category`]).
//! - **Preference ranking** maps every metric onto a `0.0..=10.0` sub-score,
//!   weights the sub-scores by the user's importance rank, and returns the
//!   best [`TOP_K`] locations ([`rank_by_preference`]).
//!
//! All functions are pure: they read their inputs, allocate fresh outputs,
//! and hold no state between calls.
//!
//! # Examples
//!
//! ```
//! use livability_core::{Category, LocationRecord, PreferenceProfile};
//! use livability_scorer::{rank_by_category, rank_by_preference};
//!
//! let locations = vec![
//!     LocationRecord::new("Bedok").with_price(450_000.0).with_crime_rate(1.2),
//!     LocationRecord::new("Bishan").with_price(620_000.0).with_crime_rate(0.6),
//! ];
//! let cheapest = rank_by_category(&locations, Category::Price);
//! assert_eq!(cheapest[0].location.name, "Bedok");
//!
//! let profile = PreferenceProfile::new(
//!     vec![
//!         Category::CrimeRate,
//!         Category::Price,
//!         Category::Transport,
//!         Category::Schools,
//!         Category::Malls,
//!     ],
//!     600_000.0,
//! );
//! let best = rank_by_preference(&locations, &profile).expect("valid profile");
//! assert_eq!(best[0].location.name, "Bishan");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod composite;
mod error;
mod normalize;
mod ranker;
mod sort;
mod types;
mod weights;

pub use composite::{TOP_K, preference_standing, rank_by_preference, score_locations};
pub use error::RankingError;
pub use normalize::normalize;
pub use ranker::{category_standing, rank_by_category};
pub use sort::rank;
pub use types::{CategoryScore, Ranking, ScoredLocation, Standing};
pub use weights::{Weights, weigh};

/// Round `value` to `places` decimals.
///
/// Rounds the exact binary value, so `0.35` (stored just below the midpoint)
/// becomes `0.3`. Only exact binary midpoints such as `0.25` tie to even.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests;
