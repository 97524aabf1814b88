//! Signed magnitude plus direction.

use crate::coord::Coord;
use crate::dir::Dir;

/// One in 32.32 fixed point.
const AXIS_SCALE: i64 = 1 << 32;
/// 1/sqrt(2) in 32.32 fixed point.
const DIAGONAL_SCALE: i64 = 3_037_000_500;

/// Fixed-point length of a unit step, indexed by compass code.
const COORD_MAGS: [i64; 9] = [
    DIAGONAL_SCALE, // SW
    AXIS_SCALE,     // S
    DIAGONAL_SCALE, // SE
    AXIS_SCALE,     // W
    0,              // CENTER
    AXIS_SCALE,     // E
    DIAGONAL_SCALE, // NW
    AXIS_SCALE,     // N
    DIAGONAL_SCALE, // NE
];

/// A vector as signed magnitude and direction.
///
/// Magnitudes are signed so a polar value can span any area a [`Coord`]
/// can; a negative magnitude points the opposite way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polar {
    /// Signed magnitude.
    pub mag: i32,
    /// Direction.
    pub dir: Dir,
}

impl Polar {
    /// Build a polar value.
    pub const fn new(mag: i32, dir: Dir) -> Self {
        Self { mag, dir }
    }

    /// The direction component.
    pub const fn as_dir(self) -> Dir {
        self.dir
    }

    /// Convert to a grid displacement.
    ///
    /// Diagonal magnitudes are divided by sqrt(2) so a diagonal vector and
    /// an axis vector of the same magnitude cover similar distances. The
    /// fixed-point product is rounded to nearest, half away from zero.
    ///
    /// Defined for every `mag`. Lengths beyond the `i16` range wrap, the same
    /// as [`Coord`] arithmetic.
    pub fn as_coord(self) -> Coord {
        let code = self.dir.as_int() as usize;
        let mag = i128::from(self.mag);
        // |scaled| reaches 2^63 at i32::MIN, so the rounding add needs i128.
        let scaled = i128::from(COORD_MAGS[code]) * mag;

        // (mag >> 32) is 0 for mag >= 0 and -1 for mag < 0; XOR copies that
        // sign onto one half in 32.32, and `/` truncates toward zero.
        let half = (mag >> 32) ^ ((1 << 31) - 1);
        let len = (scaled + half) / i128::from(AXIS_SCALE);

        self.dir.as_normalized_coord() * (len as i16)
    }
}

impl From<Coord> for Polar {
    fn from(coord: Coord) -> Self {
        coord.as_polar()
    }
}
