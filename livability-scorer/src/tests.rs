//! Unit coverage for normalisation, ranking, and weighting helpers.
#![forbid(unsafe_code)]
#![expect(clippy::float_arithmetic, reason = "fixtures derive synthetic prices")]

use livability_core::{Category, LocationRecord, PreferenceError, PreferenceProfile};
use rstest::{fixture, rstest};

use crate::{
    RankingError, TOP_K, category_standing, normalize, preference_standing, rank_by_category,
    rank_by_preference, round_to, score_locations, weigh,
};

fn scores(locations: &[LocationRecord], category: Category) -> Vec<f64> {
    normalize(locations, category)
        .into_iter()
        .map(|entry| entry.score)
        .collect()
}

fn ranked_names(locations: &[LocationRecord], category: Category) -> Vec<String> {
    rank_by_category(locations, category)
        .into_iter()
        .map(|entry| entry.location.name.clone())
        .collect()
}

#[fixture]
fn neighbourhoods() -> Vec<LocationRecord> {
    vec![
        LocationRecord::new("A")
            .with_price(400_000.0)
            .with_crime_rate(1.0)
            .with_schools(10)
            .with_malls(2)
            .with_transport(4),
        LocationRecord::new("B")
            .with_price(500_000.0)
            .with_crime_rate(3.0)
            .with_schools(5)
            .with_malls(4)
            .with_transport(2),
        LocationRecord::new("C")
            .with_crime_rate(2.0),
    ]
}

#[fixture]
fn price_first() -> PreferenceProfile {
    PreferenceProfile::new(Category::ALL.to_vec(), 500_000.0)
}

#[rstest]
fn zero_price_scores_worst() {
    let locations = [
        LocationRecord::new("A").with_price(300_000.0),
        LocationRecord::new("B").with_price(600_000.0),
        LocationRecord::new("C"),
    ];
    assert_eq!(scores(&locations, Category::Price), vec![1.0, 0.5, 0.0]);
}

#[rstest]
fn zero_crime_scores_best() {
    let locations = [
        LocationRecord::new("A").with_crime_rate(2.0),
        LocationRecord::new("B").with_crime_rate(4.0),
        LocationRecord::new("C"),
    ];
    assert_eq!(scores(&locations, Category::CrimeRate), vec![1.0, 0.5, 1.0]);
}

#[rstest]
#[case(Category::Price)]
#[case(Category::CrimeRate)]
#[case(Category::Schools)]
#[case(Category::Transport)]
fn populations_without_positive_values_score_zero(#[case] category: Category) {
    let locations = [LocationRecord::new("A"), LocationRecord::new("B")];
    assert_eq!(scores(&locations, category), vec![0.0, 0.0]);
}

#[rstest]
fn higher_is_better_divides_by_maximum() {
    let locations = [
        LocationRecord::new("A").with_schools(4),
        LocationRecord::new("B").with_schools(8),
        LocationRecord::new("C"),
    ];
    assert_eq!(scores(&locations, Category::Schools), vec![0.5, 1.0, 0.0]);
}

#[rstest]
fn normalised_scores_round_to_one_decimal() {
    let locations = [
        LocationRecord::new("A").with_crime_rate(3.0),
        LocationRecord::new("B").with_crime_rate(7.0),
    ];
    assert_eq!(scores(&locations, Category::CrimeRate), vec![1.0, 0.4]);
}

#[rstest]
fn empty_population_normalises_to_nothing() {
    let empty: [LocationRecord; 0] = [];
    assert!(normalize(&empty, Category::Malls).is_empty());
    assert!(rank_by_category(&[], Category::Malls).is_empty());
}

#[rstest]
fn zero_crime_ranks_ahead_of_equal_scores() {
    let locations = [
        LocationRecord::new("A").with_crime_rate(2.0),
        LocationRecord::new("B").with_crime_rate(4.0),
        LocationRecord::new("C"),
    ];
    assert_eq!(ranked_names(&locations, Category::CrimeRate), ["C", "A", "B"]);
}

#[rstest]
fn missing_price_ranks_last() {
    let locations = [
        LocationRecord::new("A"),
        LocationRecord::new("B").with_price(500_000.0),
        LocationRecord::new("C").with_price(250_000.0),
    ];
    assert_eq!(ranked_names(&locations, Category::Price), ["C", "B", "A"]);
}

#[rstest]
fn equal_counts_keep_input_order() {
    let locations = [
        LocationRecord::new("A").with_malls(5),
        LocationRecord::new("B").with_malls(5),
        LocationRecord::new("C").with_malls(10),
    ];
    assert_eq!(ranked_names(&locations, Category::Malls), ["C", "A", "B"]);
}

#[rstest]
fn ranking_is_idempotent(neighbourhoods: Vec<LocationRecord>) {
    for category in Category::ALL {
        let first = rank_by_category(&neighbourhoods, category);
        let second = rank_by_category(&neighbourhoods, category);
        assert_eq!(first, second);
    }
}

#[rstest]
fn category_standing_reports_position(neighbourhoods: Vec<LocationRecord>) {
    let standing =
        category_standing(&neighbourhoods, Category::Schools, "B").expect("B is ranked");
    assert_eq!(standing.rank, 2);
    assert_eq!(standing.score, 0.5);
    assert_eq!(standing.population, 3);
    assert!(category_standing(&neighbourhoods, Category::Schools, "Z").is_none());
}

#[rstest]
fn weights_decrease_by_one() {
    let rank = [
        Category::Malls,
        Category::Transport,
        Category::Price,
        Category::CrimeRate,
        Category::Schools,
    ];
    let weights = weigh(&rank).expect("valid rank");
    let ordered: Vec<u32> = rank
        .iter()
        .map(|&category| weights.get(category).expect("weighted"))
        .collect();
    assert_eq!(ordered, vec![5, 4, 3, 2, 1]);
    assert_eq!(weights.total(), 15);
}

#[rstest]
#[case(&[Category::Price, Category::Price, Category::CrimeRate, Category::Schools, Category::Malls],
    PreferenceError::DuplicateCategory(Category::Price))]
#[case(&[Category::Price, Category::CrimeRate, Category::Schools, Category::Malls],
    PreferenceError::MissingCategory(Category::Transport))]
#[case(&[], PreferenceError::MissingCategory(Category::Price))]
fn malformed_ranks_are_rejected(#[case] rank: &[Category], #[case] expected: PreferenceError) {
    assert_eq!(weigh(rank), Err(expected));
}

#[rstest]
fn composite_combines_weighted_sub_scores(
    neighbourhoods: Vec<LocationRecord>,
    price_first: PreferenceProfile,
) {
    let scored = score_locations(&neighbourhoods, &price_first).expect("scored");
    let summary: Vec<(&str, f64)> = scored
        .iter()
        .map(|entry| (entry.location.name.as_str(), entry.score))
        .collect();
    assert_eq!(summary, vec![("A", 8.67), ("B", 6.0), ("C", 1.33)]);

    let best = scored.first().expect("non-empty");
    assert_eq!(best.category_score(Category::Price), Some(8.0));
    assert_eq!(best.category_score(Category::CrimeRate), Some(10.0));
    assert_eq!(best.category_score(Category::Schools), Some(10.0));
    assert_eq!(best.category_score(Category::Malls), Some(5.0));
    assert_eq!(best.category_score(Category::Transport), Some(10.0));
}

#[rstest]
fn ideal_price_boundary_is_exact() {
    let locations = [
        LocationRecord::new("A").with_price(300_000.0),
        LocationRecord::new("B").with_price(600_000.0),
    ];
    let profile = PreferenceProfile::new(Category::ALL.to_vec(), 300_000.0);
    let scored = score_locations(&locations, &profile).expect("scored");
    let price_scores: Vec<Option<f64>> = scored
        .iter()
        .map(|entry| entry.category_score(Category::Price))
        .collect();
    assert_eq!(price_scores, vec![Some(10.0), Some(0.0)]);
}

#[rstest]
fn zero_ideal_price_scores_price_as_zero(neighbourhoods: Vec<LocationRecord>) {
    let profile = PreferenceProfile::new(Category::ALL.to_vec(), 0.0);
    let scored = score_locations(&neighbourhoods, &profile).expect("scored");
    assert!(
        scored
            .iter()
            .all(|entry| entry.category_score(Category::Price) == Some(0.0))
    );
}

#[rstest]
fn preference_ranking_caps_at_top_k(price_first: PreferenceProfile) {
    let locations: Vec<LocationRecord> = (1..=12_u32)
        .map(|index| {
            LocationRecord::new(format!("L{index}"))
                .with_price(f64::from(index) * 50_000.0)
                .with_schools(index)
        })
        .collect();
    let ranked = rank_by_preference(&locations, &price_first).expect("ranked");
    assert_eq!(ranked.len(), TOP_K);
}

#[rstest]
fn identical_locations_keep_input_order(price_first: PreferenceProfile) {
    let locations = [
        LocationRecord::new("First").with_price(500_000.0),
        LocationRecord::new("Second").with_price(500_000.0),
    ];
    let ranked = rank_by_preference(&locations, &price_first).expect("ranked");
    let names: Vec<&str> = ranked
        .iter()
        .map(|entry| entry.location.name.as_str())
        .collect();
    assert_eq!(names, ["First", "Second"]);
}

#[rstest]
fn empty_population_is_an_error(price_first: PreferenceProfile) {
    assert_eq!(
        rank_by_preference(&[], &price_first),
        Err(RankingError::EmptyPopulation)
    );
}

#[rstest]
fn invalid_rank_propagates(neighbourhoods: Vec<LocationRecord>) {
    let profile = PreferenceProfile::new(vec![Category::Price], 1.0);
    assert_eq!(
        rank_by_preference(&neighbourhoods, &profile),
        Err(RankingError::InvalidPreference(
            PreferenceError::MissingCategory(Category::CrimeRate)
        ))
    );
}

#[rstest]
fn preference_standing_covers_full_ranking(
    neighbourhoods: Vec<LocationRecord>,
    price_first: PreferenceProfile,
) {
    let standing = preference_standing(&neighbourhoods, &price_first, "C")
        .expect("scored")
        .expect("C is ranked");
    assert_eq!(standing.rank, 3);
    assert_eq!(standing.score, 1.33);
    assert_eq!(standing.population, 3);
}

#[rstest]
#[case(0.25, 1, 0.2)]
#[case(0.75, 1, 0.8)]
#[case(8.666_666, 2, 8.67)]
#[case(1.0 / 3.0, 2, 0.33)]
#[case(7.0 / 20.0, 1, 0.3)]
#[case(3.0 / 20.0, 1, 0.1)]
#[case(1.0 / 20.0, 1, 0.1)]
#[case(2.675, 2, 2.67)]
#[case(1.005, 2, 1.0)]
fn rounding_uses_exact_binary_value(
    #[case] value: f64,
    #[case] places: usize,
    #[case] expected: f64,
) {
    assert_eq!(round_to(value, places), expected);
}

#[rstest]
fn amenity_shares_round_from_stored_quotient() {
    let locations = [
        LocationRecord::new("Max").with_schools(20),
        LocationRecord::new("Seven").with_schools(7),
        LocationRecord::new("Three").with_schools(3),
        LocationRecord::new("One").with_schools(1),
    ];
    assert_eq!(
        scores(&locations, Category::Schools),
        vec![1.0, 0.3, 0.1, 0.1]
    );
}
