//! Resolve free-text queries to canonical location names.
//!
//! Matching runs a cascade of four strategies over lower-cased names and
//! stops at the first hit:
//!
//! 1. **Exact**: the whole name equals the query.
//! 2. **Prefix**: the name starts with the query; shortest name wins.
//! 3. **Substring**: the name contains the query; shortest name wins.
//! 4. **Edit distance**: for queries of at least three characters, the name
//!    with the lowest [`levenshtein`] distance relative to the longer string,
//!    provided it stays below `0.4`.
//!
//! Finding nothing is a normal outcome and is reported as `None`.
//!
//! # Examples
//!
//! ```
//! use livability_matcher::resolve_location_name;
//!
//! let names = ["Bedok", "Bedok North", "Bishan"];
//! assert_eq!(resolve_location_name("bedok", names), Some("Bedok"));
//! assert_eq!(resolve_location_name("Bishn", names), Some("Bishan"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cascade;
mod levenshtein;
mod options;

pub use cascade::{
    LocationMatch, MatchStrategy, match_location, match_location_with, resolve_location_name,
};
pub use levenshtein::levenshtein;
pub use options::{MAX_NORMALIZED_DISTANCE, MIN_FUZZY_LEN, MatchOptions};
