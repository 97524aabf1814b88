//! Error types for signal field construction.

use std::error::Error;
use std::fmt;

/// Errors from [`SignalField::new`](crate::SignalField::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignalError {
    /// A field needs at least one layer.
    NoLayers,
    /// A dimension is zero or exceeds the grid limit.
    InvalidDimension {
        /// Which axis (`"size_x"` or `"size_y"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLayers => write!(f, "signal field needs at least one layer"),
            Self::InvalidDimension { name, value } => write!(
                f,
                "{name} {value} out of range [1, {}]",
                biogrid_space::Grid::MAX_DIM
            ),
        }
    }
}

impl Error for SignalError {}
