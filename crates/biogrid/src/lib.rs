//! Biogrid: the world substrate for evolutionary agent simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! every biogrid sub-crate.
//!
//! # Quick start
//!
//! ```rust
//! use biogrid::prelude::*;
//!
//! let config = WorldConfig {
//!     size_x: 64,
//!     size_y: 64,
//!     barrier_type: BarrierType::Spots.code(),
//!     rng: RngConfig::deterministic(42),
//!     worker_count: 2,
//!     ..WorldConfig::default()
//! };
//! let mut world = World::new(config).unwrap();
//!
//! let agents: Vec<Coord> = (1..=20).map(|id| world.place_randomly(id).unwrap()).collect();
//!
//! // Every agent emits on layer 0, split across the workers.
//! world
//!     .par_step(|ctx| {
//!         for i in ctx.partition(agents.len()) {
//!             ctx.signals.increment(0, agents[i]);
//!         }
//!     })
//!     .unwrap();
//! world.end_step();
//!
//! assert!(world.signals().get_magnitude(0, agents[0]) >= 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `biogrid-core` | Directions, coordinates, polar vectors, PRNG |
//! | [`space`] | `biogrid-space` | Occupancy grid, barriers, neighbourhoods |
//! | [`signal`] | `biogrid-signal` | Layered signal fields |
//! | [`engine`] | `biogrid-engine` | World configuration and step driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry value types and the per-worker PRNG (`biogrid-core`).
pub use biogrid_core as types;

/// Occupancy grid, barrier layouts and neighbourhood enumeration
/// (`biogrid-space`).
pub use biogrid_space as space;

/// Layered signal fields (`biogrid-signal`).
pub use biogrid_signal as signal;

/// World configuration and the parallel step driver (`biogrid-engine`).
pub use biogrid_engine as engine;

/// Common imports for typical biogrid usage.
///
/// ```rust
/// use biogrid::prelude::*;
/// ```
pub mod prelude {
    // Geometry and randomness
    pub use biogrid_core::{
        Compass, Coord, Dir, Polar, RandomUintGenerator, RngAlgorithm, RngConfig, WorkerId,
    };

    // Space
    pub use biogrid_space::{visit_neighborhood, BarrierType, Grid, BARRIER, EMPTY};

    // Signals
    pub use biogrid_signal::{SignalField, SIGNAL_MAX};

    // Errors
    pub use biogrid_core::RngError;
    pub use biogrid_engine::{ConfigError, WorldError};
    pub use biogrid_signal::SignalError;
    pub use biogrid_space::GridError;

    // Engine
    pub use biogrid_engine::{WorkerContext, World, WorldConfig};
}
