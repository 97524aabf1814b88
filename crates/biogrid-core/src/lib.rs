//! Core value types for biogrid simulations.
//!
//! This is the leaf crate of the workspace. It defines the geometry algebra
//! ([`Compass`], [`Dir`], [`Coord`], [`Polar`]) shared by every other crate
//! and the per-worker [`RandomUintGenerator`].
//!
//! Geometry values are `Copy`, allocation-free and stateless, so they can be
//! used from any worker without synchronization. Random generators are
//! owned by exactly one worker and passed around by `&mut`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod dir;
pub mod error;
pub mod id;
pub mod polar;
pub mod rng;

pub use coord::Coord;
pub use dir::{Compass, Dir};
pub use error::RngError;
pub use id::WorkerId;
pub use polar::Polar;
pub use rng::{RandomUintGenerator, RngAlgorithm, RngConfig};
