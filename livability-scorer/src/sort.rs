//! Dispatch a ranking request by sort key.
#![forbid(unsafe_code)]

use livability_core::{LocationRecord, PreferenceProfile, SortKey};

use crate::{Ranking, RankingError, rank_by_category, rank_by_preference};

/// Rank `locations` by `key`.
///
/// Category keys rank every location and never need a profile. The
/// [`SortKey::Preference`] key returns the top five for `profile`.
///
/// # Errors
/// Returns [`RankingError::ProfileRequired`] when ranking by preference
/// without a profile, and propagates the errors of
/// [`rank_by_preference`].
///
/// # Examples
/// ```
/// use livability_core::{LocationRecord, SortKey};
/// use livability_scorer::{RankingError, rank};
///
/// let locations = [LocationRecord::new("Bedok").with_malls(3)];
/// let ranking = rank(&locations, "num_malls".parse().unwrap(), None).unwrap();
/// assert_eq!(ranking.names(), vec!["Bedok"]);
///
/// let err = rank(&locations, SortKey::Preference, None).unwrap_err();
/// assert_eq!(err, RankingError::ProfileRequired);
/// ```
pub fn rank<'a>(
    locations: &'a [LocationRecord],
    key: SortKey,
    profile: Option<&PreferenceProfile>,
) -> Result<Ranking<'a>, RankingError> {
    match key {
        SortKey::Category(category) => Ok(Ranking::ByCategory(rank_by_category(
            locations, category,
        ))),
        SortKey::Preference => profile
            .ok_or(RankingError::ProfileRequired)
            .and_then(|selected| rank_by_preference(locations, selected))
            .map(Ranking::ByPreference),
    }
}
