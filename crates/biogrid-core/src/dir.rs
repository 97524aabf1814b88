//! Eight-way grid directions plus "no direction".
//!
//! Compass codes are laid out row-major on a 3×3 keypad:
//!
//! ```text
//!     6  7  8        NW  N  NE
//!     3  4  5   =>    W  C  E
//!     0  1  2        SW  S  SE
//! ```

use std::fmt;

use crate::coord::Coord;
use crate::polar::Polar;
use crate::rng::RandomUintGenerator;

/// One of the eight compass directions or [`Compass::Center`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Compass {
    /// South-west (code 0).
    SW = 0,
    /// South (code 1).
    S = 1,
    /// South-east (code 2).
    SE = 2,
    /// West (code 3).
    W = 3,
    /// No direction (code 4).
    Center = 4,
    /// East (code 5).
    E = 5,
    /// North-west (code 6).
    NW = 6,
    /// North (code 7).
    N = 7,
    /// North-east (code 8).
    NE = 8,
}

impl Compass {
    /// All nine values in code order.
    pub const ALL: [Compass; 9] = [
        Compass::SW,
        Compass::S,
        Compass::SE,
        Compass::W,
        Compass::Center,
        Compass::E,
        Compass::NW,
        Compass::N,
        Compass::NE,
    ];

    /// Look up a compass value by its keypad code. Returns `None` above 8.
    pub const fn from_code(code: u8) -> Option<Self> {
        if code < 9 {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// The keypad code, 0..=8.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SW => "SW",
            Self::S => "S",
            Self::SE => "SE",
            Self::W => "W",
            Self::Center => "CENTER",
            Self::E => "E",
            Self::NW => "NW",
            Self::N => "N",
            Self::NE => "NE",
        };
        f.write_str(name)
    }
}

impl Default for Compass {
    fn default() -> Self {
        Compass::Center
    }
}

use Compass::{Center as C, E, N, NE, NW, S, SE, SW, W};

/// `ROTATIONS[code * 8 + (n & 7)]` is the direction `n` eighth-turns
/// clockwise from `code`. The CENTER row is constant.
const ROTATIONS: [Compass; 72] = [
    SW, W, NW, N, NE, E, SE, S, //
    S, SW, W, NW, N, NE, E, SE, //
    SE, S, SW, W, NW, N, NE, E, //
    W, NW, N, NE, E, SE, S, SW, //
    C, C, C, C, C, C, C, C, //
    E, SE, S, SW, W, NW, N, NE, //
    NW, N, NE, E, SE, S, SW, W, //
    N, NE, E, SE, S, SW, W, NW, //
    NE, E, SE, S, SW, W, NW, N, //
];

/// Unit offsets indexed by compass code: `((code % 3) - 1, (code / 3) - 1)`.
pub(crate) const NORMALIZED_COORDS: [Coord; 9] = [
    Coord::new(-1, -1),
    Coord::new(0, -1),
    Coord::new(1, -1),
    Coord::new(-1, 0),
    Coord::new(0, 0),
    Coord::new(1, 0),
    Coord::new(-1, 1),
    Coord::new(0, 1),
    Coord::new(1, 1),
];

/// A grid direction: one of the eight neighbours or CENTER.
///
/// `Dir` is a plain value; rotations and conversions return new values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Dir {
    dir9: Compass,
}

impl Dir {
    /// Wrap a compass value.
    pub const fn new(dir: Compass) -> Self {
        Self { dir9: dir }
    }

    /// Build a direction from its keypad code. Returns `None` above 8.
    pub const fn from_code(code: u8) -> Option<Self> {
        match Compass::from_code(code) {
            Some(dir9) => Some(Self { dir9 }),
            None => None,
        }
    }

    /// A uniformly random direction among the eight non-center ones.
    ///
    /// Consumes one draw, reduced the same way as `rng.range(0, 7)`.
    pub fn random8(rng: &mut RandomUintGenerator) -> Self {
        let steps = rng.draw() % 8;
        Self::new(Compass::N).rotate(steps as i32)
    }

    /// Replace the wrapped compass value.
    pub fn assign(&mut self, dir: Compass) -> &mut Self {
        self.dir9 = dir;
        self
    }

    /// The wrapped compass value.
    pub const fn compass(self) -> Compass {
        self.dir9
    }

    /// The keypad code, 0..=8.
    pub const fn as_int(self) -> u8 {
        self.dir9 as u8
    }

    /// Unit displacement toward this direction; CENTER is `(0, 0)`.
    pub const fn as_normalized_coord(self) -> Coord {
        NORMALIZED_COORDS[self.dir9 as usize]
    }

    /// Magnitude 1 in this direction.
    pub const fn as_normalized_polar(self) -> Polar {
        Polar::new(1, self)
    }

    /// Rotate by `n` eighth-turns; positive is clockwise.
    pub const fn rotate(self, n: i32) -> Self {
        Self::new(ROTATIONS[self.dir9 as usize * 8 + (n & 7) as usize])
    }

    /// Quarter turn clockwise.
    pub const fn rotate_90_cw(self) -> Self {
        self.rotate(2)
    }

    /// Quarter turn counter-clockwise.
    pub const fn rotate_90_ccw(self) -> Self {
        self.rotate(-2)
    }

    /// Half turn.
    pub const fn rotate_180(self) -> Self {
        self.rotate(4)
    }
}

impl From<Compass> for Dir {
    fn from(dir: Compass) -> Self {
        Self::new(dir)
    }
}

impl PartialEq<Compass> for Dir {
    fn eq(&self, other: &Compass) -> bool {
        self.dir9 == *other
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dir9, f)
    }
}
