//! Criterion benchmarks for communal_core generation
//!
//! Run with: cargo bench -p communal_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use communal_core::config::presets::{la_possession, saint_denis};
use communal_core::config::{GenerationConfig, builtin_profiles};
use communal_core::simulation::{generate_batch, generate_deterministic, generate_seeded};

fn bench_single_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_profile");
    let config = GenerationConfig::default();

    for profile in [la_possession(), saint_denis()] {
        group.bench_with_input(
            BenchmarkId::new("seeded", &profile.slug),
            &profile,
            |b, profile| b.iter(|| generate_seeded(black_box(profile), black_box(&config), 42)),
        );
    }

    let profile = la_possession();
    group.bench_function("deterministic", |b| {
        b.iter(|| generate_deterministic(black_box(&profile), black_box(&config)))
    });

    group.finish();
}

fn bench_year_span(c: &mut Criterion) {
    let mut group = c.benchmark_group("year_span");
    let profile = saint_denis();

    for years in [10i16, 24, 100] {
        let config = GenerationConfig::new(2002, 2002 + years - 1);
        group.bench_with_input(BenchmarkId::from_parameter(years), &config, |b, config| {
            b.iter(|| generate_seeded(black_box(&profile), black_box(config), 42))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let config = GenerationConfig::default();

    for copies in [1usize, 16, 64] {
        let profiles: Vec<_> = builtin_profiles()
            .into_iter()
            .cycle()
            .take(copies * 2)
            .collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(profiles.len()),
            &profiles,
            |b, profiles| b.iter(|| generate_batch(black_box(profiles), black_box(&config), 42)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_profile, bench_year_span, bench_batch);
criterion_main!(benches);
