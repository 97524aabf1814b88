//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] carries the scalar parameters a simulation needs before
//! any state is allocated. [`validate()`](WorldConfig::validate) checks them
//! up front so [`World::new`](crate::World::new) fails early with a
//! descriptive [`ConfigError`].

use std::error::Error;
use std::fmt;

use biogrid_core::RngConfig;
use biogrid_signal::SignalError;
use biogrid_space::{BarrierType, Grid, GridError};

/// Upper bound on [`WorldConfig::worker_count`].
pub const MAX_WORKERS: usize = 64;

/// Smallest grid that fits a randomly placed vertical bar: 20-cell margins
/// on each side of X and in the lower half of Y.
const RANDOM_BAR_MIN_X: u32 = 40;
const RANDOM_BAR_MIN_Y: u32 = 80;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`WorldConfig::validate()`] or while building a
/// [`World`](crate::World).
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid construction or barrier generation failed.
    Grid(GridError),
    /// Signal field construction failed.
    Signal(SignalError),
    /// A world dimension is zero or exceeds [`Grid::MAX_DIM`].
    InvalidDimension {
        /// Which axis (`"size_x"` or `"size_y"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// No signal layers configured.
    NoSignalLayers,
    /// Worker count outside `[1, MAX_WORKERS]`.
    InvalidWorkerCount {
        /// The configured count.
        configured: usize,
    },
    /// The barrier layout cannot be drawn on a world of this size.
    BarrierDoesNotFit {
        /// The layout.
        barrier: BarrierType,
        /// Why it does not fit.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Signal(e) => write!(f, "signals: {e}"),
            Self::InvalidDimension { name, value } => {
                write!(f, "{name} {value} out of range [1, {}]", Grid::MAX_DIM)
            }
            Self::NoSignalLayers => write!(f, "signal_layers must be at least 1"),
            Self::InvalidWorkerCount { configured } => {
                write!(f, "worker_count {configured} out of range [1, {MAX_WORKERS}]")
            }
            Self::BarrierDoesNotFit { barrier, reason } => {
                write!(f, "barrier '{barrier}' does not fit: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Signal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SignalError> for ConfigError {
    fn from(e: SignalError) -> Self {
        Self::Signal(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a [`World`](crate::World).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Grid columns. Default: 128.
    pub size_x: u32,
    /// Grid rows. Default: 128.
    pub size_y: u32,
    /// Number of signal layers. Default: 1.
    pub signal_layers: usize,
    /// Barrier layout code, see [`BarrierType`]. Default: 0.
    pub barrier_type: u8,
    /// Seeding mode shared by every generator in the world.
    pub rng: RngConfig,
    /// Number of parallel step workers. Default: 4.
    pub worker_count: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size_x: 128,
            size_y: 128,
            signal_layers: 1,
            barrier_type: 0,
            rng: RngConfig::default(),
            worker_count: 4,
        }
    }
}

impl WorldConfig {
    /// Validate every structural invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions fit the i16 coordinate space.
        for (name, value) in [("size_x", self.size_x), ("size_y", self.size_y)] {
            if value == 0 || value > Grid::MAX_DIM {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        // 2. At least one signal layer.
        if self.signal_layers == 0 {
            return Err(ConfigError::NoSignalLayers);
        }
        // 3. Worker count in range.
        if self.worker_count == 0 || self.worker_count > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount {
                configured: self.worker_count,
            });
        }
        // 4. Barrier code known and drawable at this size.
        let barrier = self.barrier()?;
        if barrier == BarrierType::VerticalBarRandom
            && (self.size_x < RANDOM_BAR_MIN_X || self.size_y < RANDOM_BAR_MIN_Y)
        {
            return Err(ConfigError::BarrierDoesNotFit {
                barrier,
                reason: format!(
                    "needs at least {RANDOM_BAR_MIN_X}x{RANDOM_BAR_MIN_Y}, got {}x{}",
                    self.size_x, self.size_y
                ),
            });
        }
        Ok(())
    }

    /// The configured barrier layout.
    pub fn barrier(&self) -> Result<BarrierType, ConfigError> {
        Ok(BarrierType::try_from(self.barrier_type)?)
    }
}
