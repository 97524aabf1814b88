//! Simulation world: grid, signals and per-worker generators.
//!
//! [`World`] owns all mutable state. Setup operations (placement, barrier
//! regeneration, signal decay) take `&mut self` and run on the caller's
//! thread. [`World::par_step`] fans a closure out over the configured
//! workers, each with its own generator and shared read access to the grid
//! and signals, and gathers the results in worker order.

use std::error::Error;
use std::fmt;
use std::thread;

use biogrid_core::{Coord, RandomUintGenerator, WorkerId};
use biogrid_signal::SignalField;
use biogrid_space::{BarrierType, Grid, GridError, BARRIER, EMPTY};
use tracing::debug;

use crate::config::{ConfigError, WorldConfig};

// ── WorldError ─────────────────────────────────────────────────────

/// Errors from operations on a running [`World`].
#[derive(Debug, PartialEq)]
pub enum WorldError {
    /// A grid operation failed.
    Grid(GridError),
    /// The occupant id collides with a reserved cell value.
    ReservedOccupant {
        /// The rejected id.
        id: u16,
    },
    /// A step worker thread could not be spawned.
    ThreadSpawnFailed {
        /// The OS error message.
        reason: String,
    },
    /// A step worker panicked.
    WorkerPanicked {
        /// The worker that panicked.
        worker: WorkerId,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ReservedOccupant { id } => {
                write!(f, "occupant id {id:#06x} is a reserved cell value")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "worker thread spawn failed: {reason}")
            }
            Self::WorkerPanicked { worker } => write!(f, "worker {worker} panicked"),
        }
    }
}

impl Error for WorldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for WorldError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── WorkerContext ──────────────────────────────────────────────────

/// What one worker sees during [`World::par_step`].
pub struct WorkerContext<'w> {
    /// This worker's identity (1-based; 0 is the setup thread).
    pub id: WorkerId,
    /// Index of this worker among the step workers (0-based).
    pub index: usize,
    /// Total number of step workers.
    pub worker_count: usize,
    /// This worker's private generator.
    pub rng: &'w mut RandomUintGenerator,
    /// Shared read access to the grid.
    pub grid: &'w Grid,
    /// Shared signal field; emissions are synchronized per layer.
    pub signals: &'w SignalField,
}

impl WorkerContext<'_> {
    /// The slice of `0..len` this worker owns when `len` items are split
    /// evenly across the workers.
    pub fn partition(&self, len: usize) -> std::ops::Range<usize> {
        let per = len / self.worker_count;
        let extra = len % self.worker_count;
        let start = self.index * per + self.index.min(extra);
        let end = start + per + usize::from(self.index < extra);
        start..end
    }
}

// ── World ──────────────────────────────────────────────────────────

/// A grid, its signal layers and one generator per worker.
pub struct World {
    config: WorldConfig,
    barrier: BarrierType,
    grid: Grid,
    signals: SignalField,
    setup_rng: RandomUintGenerator,
    worker_rngs: Vec<RandomUintGenerator>,
    generation: u64,
    step: u64,
}

impl World {
    /// Validate `config`, allocate the grid and signals, seed every
    /// generator, and draw the configured barrier.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let barrier = config.barrier()?;

        let mut grid = Grid::new(config.size_x, config.size_y)?;
        let signals = SignalField::new(config.signal_layers, config.size_x, config.size_y)?;
        let mut setup_rng = RandomUintGenerator::seeded(&config.rng, WorkerId(0));
        let worker_rngs = (1..=config.worker_count as u32)
            .map(|i| RandomUintGenerator::seeded(&config.rng, WorkerId(i)))
            .collect();

        grid.create_barrier(barrier, &mut setup_rng)?;
        debug!(
            size_x = config.size_x,
            size_y = config.size_y,
            layers = config.signal_layers,
            workers = config.worker_count,
            barrier = %barrier,
            "world created"
        );

        Ok(Self {
            config,
            barrier,
            grid,
            signals,
            setup_rng,
            worker_rngs,
            generation: 0,
            step: 0,
        })
    }

    /// The configuration this world was built from.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for setup-phase writes.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The signal field.
    pub fn signals(&self) -> &SignalField {
        &self.signals
    }

    /// Mutable signal access for setup-phase writes.
    pub fn signals_mut(&mut self) -> &mut SignalField {
        &mut self.signals
    }

    /// The setup-thread generator (worker 0).
    pub fn setup_rng(&mut self) -> &mut RandomUintGenerator {
        &mut self.setup_rng
    }

    /// Number of step workers.
    pub fn worker_count(&self) -> usize {
        self.worker_rngs.len()
    }

    /// Generations started since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Steps completed in the current generation.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Start a new generation: clear the grid and every signal layer, then
    /// redraw the barrier. Random layouts move; generators keep their state.
    pub fn reset_generation(&mut self) -> Result<(), WorldError> {
        self.grid.zero_fill();
        self.signals.zero_fill();
        self.grid.create_barrier(self.barrier, &mut self.setup_rng)?;
        self.generation += 1;
        self.step = 0;
        debug!(generation = self.generation, "generation reset");
        Ok(())
    }

    /// Store occupant `id` at a random EMPTY cell and return the cell.
    pub fn place_randomly(&mut self, id: u16) -> Result<Coord, WorldError> {
        if id == EMPTY || id == BARRIER {
            return Err(WorldError::ReservedOccupant { id });
        }
        let loc = self.grid.find_empty_location(&mut self.setup_rng)?;
        self.grid.set(loc, id);
        Ok(loc)
    }

    /// Run `f` once on every worker in parallel.
    ///
    /// Each worker gets its own generator and shared read access to the grid
    /// and signals. Results come back over a channel and are returned in
    /// worker order.
    pub fn par_step<F, R>(&mut self, f: F) -> Result<Vec<R>, WorldError>
    where
        F: Fn(&mut WorkerContext<'_>) -> R + Sync,
        R: Send,
    {
        let worker_count = self.worker_rngs.len();
        let grid = &self.grid;
        let signals = &self.signals;
        let f = &f;
        let (tx, rx) = crossbeam_channel::bounded(worker_count);

        let outcome = thread::scope(|s| {
            let mut handles = Vec::with_capacity(worker_count);
            for (index, rng) in self.worker_rngs.iter_mut().enumerate() {
                let id = WorkerId(index as u32 + 1);
                let tx = tx.clone();
                let spawned = thread::Builder::new()
                    .name(format!("biogrid-worker-{index}"))
                    .spawn_scoped(s, move || {
                        let mut ctx = WorkerContext {
                            id,
                            index,
                            worker_count,
                            rng,
                            grid,
                            signals,
                        };
                        // The receiver outlives the scope.
                        let _ = tx.send((index, f(&mut ctx)));
                    });
                match spawned {
                    Ok(handle) => handles.push((id, handle)),
                    Err(e) => {
                        return Err(WorldError::ThreadSpawnFailed {
                            reason: e.to_string(),
                        })
                    }
                }
            }

            let mut outcome = Ok(());
            for (id, handle) in handles {
                if handle.join().is_err() && outcome.is_ok() {
                    outcome = Err(WorldError::WorkerPanicked { worker: id });
                }
            }
            outcome
        });
        drop(tx);
        outcome?;

        let mut results: Vec<(usize, R)> = rx.try_iter().collect();
        results.sort_unstable_by_key(|(index, _)| *index);
        Ok(results.into_iter().map(|(_, r)| r).collect())
    }

    /// Finish a step: every signal layer fades once.
    pub fn end_step(&mut self) {
        self.signals.fade_all();
        self.step += 1;
    }
}
