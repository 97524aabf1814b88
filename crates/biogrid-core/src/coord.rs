//! Signed 16-bit 2D vectors.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::dir::{Compass, Dir};
use crate::polar::Polar;

/// Numerator of the rational approximation of tan(22.5°).
const TAN_N: i32 = 13860;
/// Denominator of the rational approximation of tan(22.5°).
const TAN_D: i32 = 33461;

/// Sector lookup for [`Coord::as_dir`], indexed by
/// `(yp > 0) * 8 + (xp > 0) * 4 + (yp > xp) * 2 + (yp >= -xp)`.
/// Only 9 of the 16 slots are reachable.
const SECTORS: [Compass; 16] = [
    Compass::S,
    Compass::Center,
    Compass::SW,
    Compass::N,
    Compass::SE,
    Compass::E,
    Compass::N,
    Compass::N,
    Compass::N,
    Compass::N,
    Compass::W,
    Compass::NW,
    Compass::N,
    Compass::NE,
    Compass::N,
    Compass::N,
];

/// A location in the grid, or the difference between two locations.
///
/// Components are `i16` and every arithmetic operator wraps on overflow
/// exactly like fixed-width 16-bit signed integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column (west to east).
    pub x: i16,
    /// Row (south to north).
    pub y: i16,
}

impl Coord {
    /// Build a coordinate.
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// `true` if both components are in `{-1, 0, 1}`.
    pub const fn is_normalized(self) -> bool {
        self.x >= -1 && self.x <= 1 && self.y >= -1 && self.y <= 1
    }

    /// The unit offset toward the 8-neighbour sector this vector points into.
    pub fn normalize(self) -> Self {
        self.as_dir().as_normalized_coord()
    }

    /// Euclidean length, truncated toward zero.
    pub fn length(self) -> i32 {
        // Fits: 2 * 32768^2 == 2^31.
        self.squared_length().isqrt() as i32
    }

    fn squared_length(self) -> u64 {
        let x = i64::from(self.x);
        let y = i64::from(self.y);
        (x * x + y * y) as u64
    }

    /// Classify this vector into one of the nine compass sectors.
    ///
    /// Rotates by 22.5° with integer arithmetic so the sector boundaries
    /// line up with the axes and diagonals, then reads the sector off the
    /// sign and ordering of the rotated components. The zero vector maps
    /// to CENTER.
    pub fn as_dir(self) -> Dir {
        let x = i32::from(self.x);
        let y = i32::from(self.y);
        let xp = x * TAN_D + y * TAN_N;
        let yp = y * TAN_D - x * TAN_N;

        let slot = (usize::from(yp > 0) << 3)
            | (usize::from(xp > 0) << 2)
            | (usize::from(yp > xp) << 1)
            | usize::from(yp >= -xp);
        Dir::new(SECTORS[slot])
    }

    /// Truncated length plus sector direction.
    pub fn as_polar(self) -> Polar {
        Polar::new(self.length(), self.as_dir())
    }

    /// Cosine similarity with `other`: -1.0 for opposite rays, +1.0 for the
    /// same ray. Returns +1.0 if either vector is zero.
    pub fn ray_sameness(self, other: Coord) -> f64 {
        let mag = self.squared_length() as f64 * other.squared_length() as f64;
        if mag == 0.0 {
            return 1.0;
        }
        let dot = i64::from(self.x) * i64::from(other.x) + i64::from(self.y) * i64::from(other.y);
        dot as f64 / mag.sqrt()
    }

    /// [`ray_sameness`](Self::ray_sameness) against the unit offset of `dir`.
    /// CENTER counts as the zero vector.
    pub fn ray_sameness_dir(self, dir: Dir) -> f64 {
        self.ray_sameness(dir.as_normalized_coord())
    }

    /// Truncated Euclidean distance to `other`.
    pub fn distance_to(self, other: Coord) -> i32 {
        (self - other).length()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl Add<Dir> for Coord {
    type Output = Coord;

    fn add(self, rhs: Dir) -> Coord {
        self + rhs.as_normalized_coord()
    }
}

impl Sub<Dir> for Coord {
    type Output = Coord;

    fn sub(self, rhs: Dir) -> Coord {
        self - rhs.as_normalized_coord()
    }
}

impl Mul<i16> for Coord {
    type Output = Coord;

    fn mul(self, rhs: i16) -> Coord {
        Coord::new(self.x.wrapping_mul(rhs), self.y.wrapping_mul(rhs))
    }
}
