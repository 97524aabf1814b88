//! Strongly-typed identifiers.

use std::fmt;

/// Identity of a simulation worker (thread or task).
///
/// Mixed into the PRNG seed so that every worker draws an independent,
/// yet reproducible, stream. Worker 0 is conventionally the setup thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerId(pub u32);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WorkerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
