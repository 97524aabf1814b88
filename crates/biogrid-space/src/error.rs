//! Error types for grid construction and setup operations.

use std::error::Error;
use std::fmt;

use biogrid_core::RngError;

/// Errors arising from grid construction, barrier generation or placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A dimension is zero or exceeds [`Grid::MAX_DIM`](crate::Grid::MAX_DIM).
    InvalidDimension {
        /// Which axis (`"size_x"` or `"size_y"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// The barrier type code is not one of the known generators.
    InvalidBarrierType {
        /// The rejected code.
        code: u8,
    },
    /// A random draw needed by a barrier generator had an empty range,
    /// typically because the grid is too small for that barrier type.
    Rng(RngError),
    /// A barrier generator could not find room for its shapes.
    BarrierPlacementFailed {
        /// Description of what could not be placed.
        reason: String,
    },
    /// No EMPTY cell exists anywhere in the grid.
    NoEmptyLocation,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name, value } => {
                write!(f, "{name} {value} out of range [1, {}]", crate::Grid::MAX_DIM)
            }
            Self::InvalidBarrierType { code } => write!(f, "invalid barrier type {code}"),
            Self::Rng(e) => write!(f, "barrier draw: {e}"),
            Self::BarrierPlacementFailed { reason } => {
                write!(f, "barrier placement failed: {reason}")
            }
            Self::NoEmptyLocation => write!(f, "grid has no empty location"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rng(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RngError> for GridError {
    fn from(e: RngError) -> Self {
        Self::Rng(e)
    }
}
