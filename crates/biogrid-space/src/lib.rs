//! Occupancy grid for biogrid simulations.
//!
//! A [`Grid`] is a dense array of `u16` cells. Two values are reserved
//! ([`EMPTY`] and [`BARRIER`]); every other value is an occupant id owned by
//! the population layer. Barrier layouts come from a closed set of
//! generators selected by [`BarrierType`], and [`visit_neighborhood`]
//! enumerates the in-bounds disk around a cell for sensors and signals.
//!
//! Grid setup (construction, barriers, placement) runs single-threaded
//! between steps. Per-step reads and writes on disjoint cells need no
//! locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod barrier;
pub mod error;
pub mod grid;
pub mod neighborhood;

pub use barrier::BarrierType;
pub use error::GridError;
pub use grid::{Grid, BARRIER, EMPTY};
pub use neighborhood::{neighborhood, visit_neighborhood};
