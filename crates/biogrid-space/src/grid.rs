//! The 2D occupancy grid.

use biogrid_core::{Coord, RandomUintGenerator};
use smallvec::SmallVec;
use tracing::warn;

use crate::error::GridError;
use crate::neighborhood;

/// Cell value of an unoccupied location. Occupant id 0 is reserved.
pub const EMPTY: u16 = 0;
/// Cell value of an impassable location.
pub const BARRIER: u16 = 0xffff;

/// A dense `size_x × size_y` array of `u16` cell values.
///
/// A cell is [`EMPTY`], [`BARRIER`], or an opaque occupant id owned by the
/// population manager; the grid never interprets ids further. Storage is
/// column-major (`x` outer, `y` inner).
///
/// Direct accessors ([`at`](Self::at), [`set`](Self::set) and their `_xy`
/// variants) do not check bounds in release builds. An out-of-range
/// location is undefined: a row past `size_y` aliases a cell in the next
/// column, and only an index past the end of storage panics. Debug builds
/// catch both with an assertion. Use [`is_in_bounds`](Self::is_in_bounds)
/// when bounds are not already guaranteed.
#[derive(Clone, Debug)]
pub struct Grid {
    pub(crate) size_x: u32,
    pub(crate) size_y: u32,
    pub(crate) data: Vec<u16>,
    pub(crate) barrier_locations: Vec<Coord>,
    pub(crate) barrier_centers: SmallVec<[Coord; 8]>,
}

impl Grid {
    /// Largest supported dimension: coordinates are `i16`.
    pub const MAX_DIM: u32 = i16::MAX as u32 + 1;

    /// Allocate an all-EMPTY grid with empty barrier tables.
    ///
    /// Returns `Err(GridError::InvalidDimension)` if either dimension is 0
    /// or exceeds [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(size_x: u32, size_y: u32) -> Result<Self, GridError> {
        check_dim("size_x", size_x)?;
        check_dim("size_y", size_y)?;
        Ok(Self {
            size_x,
            size_y,
            data: vec![EMPTY; size_x as usize * size_y as usize],
            barrier_locations: Vec::new(),
            barrier_centers: SmallVec::new(),
        })
    }

    /// Number of columns.
    pub fn size_x(&self) -> u32 {
        self.size_x
    }

    /// Number of rows.
    pub fn size_y(&self) -> u32 {
        self.size_y
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// Reset every cell to EMPTY. Dimensions and barrier tables are kept.
    pub fn zero_fill(&mut self) {
        self.data.fill(EMPTY);
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.size_x as usize && y < self.size_y as usize,
            "({x}, {y}) outside {}x{}",
            self.size_x,
            self.size_y
        );
        x * self.size_y as usize + y
    }

    fn coord_of(&self, index: usize) -> Coord {
        let sy = self.size_y as usize;
        Coord::new((index / sy) as i16, (index % sy) as i16)
    }

    /// Cell value at `loc`.
    pub fn at(&self, loc: Coord) -> u16 {
        self.data[self.index(loc.x as usize, loc.y as usize)]
    }

    /// Cell value at `(x, y)`.
    pub fn at_xy(&self, x: u16, y: u16) -> u16 {
        self.data[self.index(usize::from(x), usize::from(y))]
    }

    /// Store `val` at `loc`.
    pub fn set(&mut self, loc: Coord, val: u16) {
        let i = self.index(loc.x as usize, loc.y as usize);
        self.data[i] = val;
    }

    /// Store `val` at `(x, y)`.
    pub fn set_xy(&mut self, x: u16, y: u16, val: u16) {
        let i = self.index(usize::from(x), usize::from(y));
        self.data[i] = val;
    }

    /// `true` if `loc` addresses a cell of this grid.
    pub fn is_in_bounds(&self, loc: Coord) -> bool {
        loc.x >= 0
            && (loc.x as u32) < self.size_x
            && loc.y >= 0
            && (loc.y as u32) < self.size_y
    }

    /// `true` if the cell holds [`EMPTY`].
    pub fn is_empty_at(&self, loc: Coord) -> bool {
        self.at(loc) == EMPTY
    }

    /// `true` if the cell holds [`BARRIER`].
    pub fn is_barrier_at(&self, loc: Coord) -> bool {
        self.at(loc) == BARRIER
    }

    /// `true` if the cell holds an occupant id (neither sentinel).
    pub fn is_occupied_at(&self, loc: Coord) -> bool {
        let v = self.at(loc);
        v != EMPTY && v != BARRIER
    }

    /// `true` if `loc` lies on the outermost ring of the grid.
    pub fn is_border(&self, loc: Coord) -> bool {
        let x = i32::from(loc.x);
        let y = i32::from(loc.y);
        x == 0 || x == self.size_x as i32 - 1 || y == 0 || y == self.size_y as i32 - 1
    }

    /// Barrier cells recorded by the last [`create_barrier`](Self::create_barrier).
    pub fn barrier_locations(&self) -> &[Coord] {
        &self.barrier_locations
    }

    /// Barrier shape centers recorded by the last
    /// [`create_barrier`](Self::create_barrier). Empty for shapes without
    /// centers.
    pub fn barrier_centers(&self) -> &[Coord] {
        &self.barrier_centers
    }

    /// Call `f` for every in-bounds cell within `radius` of `center`.
    ///
    /// See [`neighborhood::visit_neighborhood`].
    pub fn visit_neighborhood(&self, center: Coord, radius: f32, f: impl FnMut(Coord)) {
        neighborhood::visit_neighborhood(self.size_x, self.size_y, center, radius, f);
    }

    /// Draw a uniformly random in-bounds coordinate.
    pub fn random_location(&self, rng: &mut RandomUintGenerator) -> Result<Coord, GridError> {
        let x = rng.range(0, self.size_x - 1)?;
        let y = rng.range(0, self.size_y - 1)?;
        Ok(Coord::new(x as i16, y as i16))
    }

    /// Find a random EMPTY cell.
    ///
    /// Rejection-samples up to `4 × cell_count` random locations. If all of
    /// those hit occupied cells, scans linearly from a random start so a
    /// nearly full grid still terminates.
    ///
    /// # Errors
    ///
    /// [`GridError::NoEmptyLocation`] if no cell is EMPTY.
    pub fn find_empty_location(&self, rng: &mut RandomUintGenerator) -> Result<Coord, GridError> {
        let attempts = self.data.len().saturating_mul(4);
        for _ in 0..attempts {
            let loc = self.random_location(rng)?;
            if self.is_empty_at(loc) {
                return Ok(loc);
            }
        }

        warn!(
            attempts,
            size_x = self.size_x,
            size_y = self.size_y,
            "rejection sampling exhausted, scanning for an empty cell"
        );
        let len = self.data.len();
        let start = rng.range(0, (len - 1) as u32)? as usize;
        (0..len)
            .map(|i| (start + i) % len)
            .find(|&i| self.data[i] == EMPTY)
            .map(|i| self.coord_of(i))
            .ok_or(GridError::NoEmptyLocation)
    }
}

fn check_dim(name: &'static str, value: u32) -> Result<(), GridError> {
    if value == 0 || value > Grid::MAX_DIM {
        return Err(GridError::InvalidDimension { name, value });
    }
    Ok(())
}
