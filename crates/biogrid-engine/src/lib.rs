//! World setup and step driver for biogrid simulations.
//!
//! [`WorldConfig`] describes a world in plain scalars; [`World`] builds the
//! grid, signal layers and per-worker generators from it and drives the
//! step cycle:
//!
//! 1. [`World::par_step`] runs agent logic on every worker in parallel.
//! 2. [`World::end_step`] decays every signal layer.
//! 3. [`World::reset_generation`] clears the world between generations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod world;

pub use config::{ConfigError, WorldConfig, MAX_WORKERS};
pub use world::{WorkerContext, World, WorldError};
