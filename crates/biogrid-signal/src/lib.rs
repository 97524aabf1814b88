//! Diffusible signal layers for biogrid simulations.
//!
//! A [`SignalField`] overlays one or more `u8` concentration layers on the
//! grid's coordinate space. Agents emit with [`SignalField::increment`],
//! which may be called from many workers at once, and the field decays
//! once per step with [`SignalField::fade`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;

pub use error::SignalError;
pub use field::{SignalField, SIGNAL_MAX, SIGNAL_MIN};
