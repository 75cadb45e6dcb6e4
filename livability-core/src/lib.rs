//! Core domain types for the livability engine.
//!
//! These models describe what the scorer and matcher consume: per-location
//! metric records, the ranking categories, and user preference profiles.
//! Validation helpers return `Result` so malformed input surfaces before any
//! ranking work starts.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod location;
pub mod profile;

pub use category::{Category, Direction, ParseCategoryError, SortKey};
pub use location::{LocationRecord, LocationRecordError, ensure_unique_names};
pub use profile::{PreferenceError, PreferenceProfile, validate_rank};
