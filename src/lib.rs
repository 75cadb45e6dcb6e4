//! Facade crate for the livability engine.
//!
//! This crate re-exports the domain types, the scoring and ranking functions,
//! and the location-name matcher so callers can depend on a single crate.
//!
//! # Examples
//!
//! ```
//! use livability_engine::{Category, LocationRecord, rank_by_category, resolve_location_name};
//!
//! let locations = vec![
//!     LocationRecord::new("Bedok").with_schools(12),
//!     LocationRecord::new("Bishan").with_schools(6),
//! ];
//! let ranked = rank_by_category(&locations, Category::Schools);
//! assert_eq!(ranked[1].score, 0.5);
//!
//! let names = locations.iter().map(|location| location.name.as_str());
//! assert_eq!(resolve_location_name("bishn", names), Some("Bishan"));
//! ```

#![forbid(unsafe_code)]

pub use livability_core::{
    Category, Direction, LocationRecord, LocationRecordError, ParseCategoryError, PreferenceError,
    PreferenceProfile, SortKey, ensure_unique_names, validate_rank,
};

pub use livability_scorer::{
    CategoryScore, Ranking, RankingError, ScoredLocation, Standing, TOP_K, Weights,
    category_standing, normalize, preference_standing, rank, rank_by_category,
    rank_by_preference, score_locations, weigh,
};

pub use livability_matcher::{
    LocationMatch, MatchOptions, MatchStrategy, levenshtein, match_location, match_location_with,
    resolve_location_name,
};
