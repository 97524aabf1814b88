//! Benchmark profiles and utilities for biogrid.
//!
//! - [`reference_profile`]: 128x128 world with spot barriers, 4 workers
//! - [`stress_profile`]: 512x512 world with floating islands, 8 workers
//! - [`populate`]: deterministic agent placement

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use biogrid_core::{Coord, RngConfig};
use biogrid_engine::{World, WorldConfig, WorldError};
use biogrid_space::BarrierType;

/// Reference profile: 128x128, one signal layer, spot barriers.
pub fn reference_profile(seed: u32) -> WorldConfig {
    WorldConfig {
        size_x: 128,
        size_y: 128,
        signal_layers: 1,
        barrier_type: BarrierType::Spots.code(),
        rng: RngConfig::deterministic(seed),
        worker_count: 4,
    }
}

/// Stress profile: 512x512 (~262K cells), two signal layers, islands.
pub fn stress_profile(seed: u32) -> WorldConfig {
    WorldConfig {
        size_x: 512,
        size_y: 512,
        signal_layers: 2,
        barrier_type: BarrierType::FloatingIslands.code(),
        rng: RngConfig::deterministic(seed),
        worker_count: 8,
    }
}

/// Place agents `1..=n` at random empty cells and return their locations.
pub fn populate(world: &mut World, n: u16) -> Result<Vec<Coord>, WorldError> {
    (1..=n).map(|id| world.place_randomly(id)).collect()
}
