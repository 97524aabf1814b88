//! Criterion micro-benchmarks for the per-worker generator.

use std::hint::black_box;

use biogrid_core::{RandomUintGenerator, RngAlgorithm, RngConfig, WorkerId};
use criterion::{criterion_group, criterion_main, Criterion};

fn generator() -> RandomUintGenerator {
    RandomUintGenerator::seeded(&RngConfig::deterministic(42), WorkerId(1))
}

/// Benchmark: 10K raw draws per algorithm.
fn bench_raw_draws(c: &mut Criterion) {
    for (name, algo) in [
        ("rng_jenkins_10k", RngAlgorithm::Jenkins),
        ("rng_marsaglia_10k", RngAlgorithm::Marsaglia),
    ] {
        let mut rng = generator();
        c.bench_function(name, |b| {
            b.iter(|| {
                for _ in 0..10_000 {
                    black_box(rng.draw_with(algo));
                }
            });
        });
    }
}

/// Benchmark: 10K ranged draws over a grid-sized span.
fn bench_range(c: &mut Criterion) {
    let mut rng = generator();
    c.bench_function("rng_range_10k", |b| {
        b.iter(|| {
            for _ in 0..10_000 {
                black_box(rng.range(0, 127).ok());
            }
        });
    });
}

/// Benchmark: deterministic initialization of 64 worker generators.
fn bench_initialize(c: &mut Criterion) {
    let config = RngConfig::deterministic(7);
    c.bench_function("rng_initialize_64", |b| {
        b.iter(|| {
            for w in 0..64 {
                black_box(RandomUintGenerator::seeded(&config, WorkerId(w)));
            }
        });
    });
}

criterion_group!(benches, bench_raw_draws, bench_range, bench_initialize);
criterion_main!(benches);
