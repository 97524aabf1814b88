//! Error types for PRNG draws.

use std::error::Error;
use std::fmt;

/// Errors from [`RandomUintGenerator`](crate::RandomUintGenerator) draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RngError {
    /// A ranged draw was requested with `max < min`.
    EmptyRange {
        /// Requested lower bound (inclusive).
        min: u32,
        /// Requested upper bound (inclusive).
        max: u32,
    },
}

impl fmt::Display for RngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRange { min, max } => {
                write!(f, "empty draw range: max {max} is below min {min}")
            }
        }
    }
}

impl Error for RngError {}
