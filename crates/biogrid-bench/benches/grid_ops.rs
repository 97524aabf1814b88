//! Criterion micro-benchmarks for grid, barrier and signal operations.

use std::hint::black_box;

use biogrid_core::{Coord, RandomUintGenerator, RngConfig, WorkerId};
use biogrid_signal::SignalField;
use biogrid_space::{BarrierType, Grid};
use criterion::{criterion_group, criterion_main, Criterion};

fn generator() -> RandomUintGenerator {
    RandomUintGenerator::seeded(&RngConfig::deterministic(3), WorkerId(0))
}

/// Benchmark: visit the radius-5 neighbourhood of every cell on a 100x100 grid.
fn bench_visit_neighborhood_10k(c: &mut Criterion) {
    let grid = Grid::new(100, 100).unwrap();
    c.bench_function("visit_neighborhood_r5_10k", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for x in 0..100 {
                for y in 0..100 {
                    grid.visit_neighborhood(Coord::new(x, y), 5.0, |_| total += 1);
                }
            }
            black_box(total)
        });
    });
}

/// Benchmark: draw each barrier layout on a fresh 128x128 grid.
fn bench_create_barrier(c: &mut Criterion) {
    for kind in BarrierType::ALL {
        let mut grid = Grid::new(128, 128).unwrap();
        let mut rng = generator();
        c.bench_function(&format!("create_barrier_{}", kind.code()), |b| {
            b.iter(|| {
                grid.zero_fill();
                grid.create_barrier(kind, &mut rng).unwrap();
                black_box(grid.barrier_locations().len())
            });
        });
    }
}

/// Benchmark: find an empty cell on a grid that is 90% occupied.
fn bench_find_empty_crowded(c: &mut Criterion) {
    let mut grid = Grid::new(128, 128).unwrap();
    let mut rng = generator();
    for id in 1..=(128 * 128 * 9 / 10) as u16 {
        let loc = grid.find_empty_location(&mut rng).unwrap();
        grid.set(loc, id);
    }
    c.bench_function("find_empty_location_90pct", |b| {
        b.iter(|| black_box(grid.find_empty_location(&mut rng).unwrap()));
    });
}

/// Benchmark: 1000 emissions followed by one fade on a 128x128 layer.
fn bench_signal_emit_fade(c: &mut Criterion) {
    let mut field = SignalField::new(1, 128, 128).unwrap();
    let locs: Vec<Coord> = (0..1000i32)
        .map(|i| Coord::new(((i * 37) % 128) as i16, ((i * 91) % 128) as i16))
        .collect();
    c.bench_function("signal_emit_1000_fade", |b| {
        b.iter(|| {
            for &loc in &locs {
                field.increment(0, loc);
            }
            field.fade(0);
        });
    });
}

criterion_group!(
    benches,
    bench_visit_neighborhood_10k,
    bench_create_barrier,
    bench_find_empty_crowded,
    bench_signal_emit_fade
);
criterion_main!(benches);
