//! Criterion benchmarks for category and preference rankings.
//!
//! Measures ranking time across population sizes (60, 1,000, 10,000
//! locations). Sixty is the realistic planning-area count; the larger sizes
//! track how the sorts and min-max passes scale.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package livability-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use livability_core::{Category, LocationRecord, PreferenceProfile};
use livability_scorer::{rank_by_category, rank_by_preference};

/// Population sizes to benchmark.
const POPULATION_SIZES: &[u32] = &[60, 1_000, 10_000];

/// Build a deterministic population whose metrics vary independently.
#[expect(clippy::float_arithmetic, reason = "synthetic prices and crime rates")]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "modular patterns spread the synthetic metrics"
)]
fn build_population(size: u32) -> Vec<LocationRecord> {
    (0..size)
        .map(|index| {
            LocationRecord::new(format!("Area {index}"))
                .with_price(f64::from(300 + (index * 37) % 500) * 1_000.0)
                .with_crime_rate(f64::from((index * 13) % 90) / 10.0)
                .with_schools((index * 7) % 20)
                .with_malls((index * 3) % 8)
                .with_transport((index * 11) % 12)
        })
        .collect()
}

fn bench_category_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_by_category");
    for &size in POPULATION_SIZES {
        let population = build_population(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        for category in [Category::Price, Category::Schools] {
            group.bench_with_input(
                BenchmarkId::new(category.as_str(), size),
                &population,
                |b, locations| b.iter(|| rank_by_category(black_box(locations), category)),
            );
        }
    }
    group.finish();
}

fn bench_preference_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_by_preference");
    let profile = PreferenceProfile::new(
        vec![
            Category::CrimeRate,
            Category::Price,
            Category::Transport,
            Category::Schools,
            Category::Malls,
        ],
        500_000.0,
    );
    for &size in POPULATION_SIZES {
        let population = build_population(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &population, |b, locations| {
            b.iter(|| rank_by_preference(black_box(locations), black_box(&profile)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_category_ranking, bench_preference_ranking);
criterion_main!(benches);
