//! Per-worker pseudo-random `u32` generator.
//!
//! Every simulation worker owns one [`RandomUintGenerator`] and passes it
//! by `&mut` to whatever needs random draws. Generators are never shared
//! and never locked.
//!
//! Two bit-generation algorithms live behind one interface:
//!
//! - **Jenkins** small fast generator (default): four words, add/rotate/xor.
//! - **Marsaglia** linear congruential + xorshift + multiply-with-carry.
//!
//! In deterministic mode each worker derives its state from the shared seed
//! plus its [`WorkerId`], so runs are reproducible per worker. Otherwise the
//! state comes from an entropy source seeded by wall-clock time and worker
//! identity.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::RngError;
use crate::id::WorkerId;

/// Replacement for any state word that would start at zero.
const ZERO_FALLBACK: u32 = 123_456_789;

/// Offsets decorrelating the four Marsaglia words (x, y, z, c).
const MARSAGLIA_OFFSETS: [u32; 4] = [123_456_789, 362_436_000, 521_288_629, 7_654_321];

/// Multiply-with-carry multiplier.
const MARSAGLIA_MWC: u64 = 698_769_069;

/// Fixed first word of the Jenkins state.
const JENKINS_A: u32 = 0xf1ea_5eed;

/// Which bit-generation algorithm a draw uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RngAlgorithm {
    /// Jenkins small fast generator.
    #[default]
    Jenkins,
    /// Marsaglia LCG + xorshift + multiply-with-carry.
    Marsaglia,
}

/// Seeding policy shared by every worker of a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RngConfig {
    /// Derive state from `seed` and the worker identity instead of entropy.
    pub deterministic: bool,
    /// Base seed. Ignored unless `deterministic`.
    pub seed: u32,
}

impl RngConfig {
    /// Reproducible seeding from `seed`.
    pub const fn deterministic(seed: u32) -> Self {
        Self {
            deterministic: true,
            seed,
        }
    }

    /// Seeding from the system entropy source.
    pub const fn entropy() -> Self {
        Self {
            deterministic: false,
            seed: 0,
        }
    }
}

impl Default for RngConfig {
    fn default() -> Self {
        Self::deterministic(0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct MarsagliaState {
    x: u32,
    y: u32,
    z: u32,
    c: u32,
}

impl MarsagliaState {
    fn next(&mut self) -> u32 {
        self.x = self.x.wrapping_mul(69_069).wrapping_add(12_345);
        self.y ^= self.y << 13;
        self.y ^= self.y >> 17;
        self.y ^= self.y << 5;
        let t = MARSAGLIA_MWC * u64::from(self.z) + u64::from(self.c);
        self.c = (t >> 32) as u32;
        // z is never reassigned; only the `(z == t)` term reads it.
        self.x
            .wrapping_add(self.y)
            .wrapping_add(u32::from(u64::from(self.z) == t))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct JenkinsState {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl JenkinsState {
    fn next(&mut self) -> u32 {
        let e = self.a.wrapping_sub(self.b.rotate_left(27));
        self.a = self.b ^ self.c.rotate_left(17);
        self.b = self.c.wrapping_add(self.d);
        self.c = self.d.wrapping_add(e);
        self.d = e.wrapping_add(self.a);
        self.d
    }
}

fn nonzero(word: u32) -> u32 {
    if word == 0 {
        ZERO_FALLBACK
    } else {
        word
    }
}

/// A worker's private random number generator.
///
/// Construct with [`seeded`](Self::seeded), or with [`new`](Self::new)
/// followed by exactly one [`initialize`](Self::initialize). Drawing from
/// an uninitialized generator is a logic error (its all-zero state is
/// degenerate) and is caught by a debug assertion.
///
/// Also implements [`RngCore`] over the default algorithm, so callers can
/// feed it to `rand` distributions.
#[derive(Clone, Debug, Default)]
pub struct RandomUintGenerator {
    marsaglia: MarsagliaState,
    jenkins: JenkinsState,
    initialized: bool,
}

impl RandomUintGenerator {
    /// An uninitialized generator. Call [`initialize`](Self::initialize)
    /// before drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator already initialized for `worker`.
    pub fn seeded(config: &RngConfig, worker: WorkerId) -> Self {
        let mut rng = Self::new();
        rng.initialize(config, worker);
        rng
    }

    /// Seed the generator. Only the first call has any effect; later calls
    /// return `false` and leave the state untouched.
    pub fn initialize(&mut self, config: &RngConfig, worker: WorkerId) -> bool {
        if self.initialized {
            return false;
        }

        if config.deterministic {
            let base = config.seed.wrapping_add(worker.0);
            let [x, y, z, c] = MARSAGLIA_OFFSETS.map(|off| nonzero(base.wrapping_add(off)));
            self.marsaglia = MarsagliaState { x, y, z, c };
            let bcd = nonzero(base);
            self.jenkins = JenkinsState {
                a: JENKINS_A,
                b: bcd,
                c: bcd,
                d: bcd,
            };
        } else {
            let mut entropy = ChaCha8Rng::seed_from_u64(entropy_seed(worker));
            self.marsaglia = MarsagliaState {
                x: nonzero(entropy.next_u32()),
                y: nonzero(entropy.next_u32()),
                z: nonzero(entropy.next_u32()),
                c: nonzero(entropy.next_u32()),
            };
            let bcd = nonzero(entropy.next_u32());
            self.jenkins = JenkinsState {
                a: JENKINS_A,
                b: bcd,
                c: bcd,
                d: bcd,
            };
        }

        self.initialized = true;
        debug!(
            worker = worker.0,
            deterministic = config.deterministic,
            seed = config.seed,
            "rng initialized"
        );
        true
    }

    /// Whether [`initialize`](Self::initialize) has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Raw 32-bit draw from the default (Jenkins) algorithm.
    pub fn draw(&mut self) -> u32 {
        self.draw_with(RngAlgorithm::Jenkins)
    }

    /// Raw 32-bit draw from the chosen algorithm.
    pub fn draw_with(&mut self, algo: RngAlgorithm) -> u32 {
        debug_assert!(self.initialized, "draw from an uninitialized generator");
        match algo {
            RngAlgorithm::Jenkins => self.jenkins.next(),
            RngAlgorithm::Marsaglia => self.marsaglia.next(),
        }
    }

    /// Draw in `min..=max` with the default algorithm.
    ///
    /// Reduction is `min + raw % (max - min + 1)`, which is slightly biased
    /// when the span does not divide 2^32.
    ///
    /// # Errors
    ///
    /// [`RngError::EmptyRange`] if `max < min`.
    pub fn range(&mut self, min: u32, max: u32) -> Result<u32, RngError> {
        self.range_with(min, max, RngAlgorithm::Jenkins)
    }

    /// Draw in `min..=max` with the chosen algorithm.
    ///
    /// # Errors
    ///
    /// [`RngError::EmptyRange`] if `max < min`.
    pub fn range_with(&mut self, min: u32, max: u32, algo: RngAlgorithm) -> Result<u32, RngError> {
        if max < min {
            return Err(RngError::EmptyRange { min, max });
        }
        let span = u64::from(max - min) + 1;
        let raw = u64::from(self.draw_with(algo));
        Ok(min + (raw % span) as u32)
    }
}

impl RngCore for RandomUintGenerator {
    fn next_u32(&mut self) -> u32 {
        self.draw()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

/// Wall-clock seconds combined with the worker identity so workers starting
/// in the same second still get distinct streams.
fn entropy_seed(worker: WorkerId) -> u64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    secs ^ (u64::from(worker.0) << 32)
}
