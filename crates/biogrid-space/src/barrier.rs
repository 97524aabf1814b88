//! Barrier generators.
//!
//! Each call to [`Grid::create_barrier`] clears the barrier side tables and
//! rebuilds them from one generator. Rectangular shapes overwrite whatever
//! their cells hold; circular shapes only convert EMPTY cells but still
//! record every cell they visit.

use std::fmt;

use biogrid_core::{Coord, RandomUintGenerator};
use tracing::debug;

use crate::error::GridError;
use crate::grid::{Grid, BARRIER};
use crate::neighborhood::neighborhood;

/// Radius of each floating island.
const ISLAND_RADIUS: f32 = 3.0;
/// Number of floating islands.
const ISLAND_COUNT: usize = 3;
/// Center draws allowed per island before giving up.
const ISLAND_ATTEMPTS: u32 = 10_000;
/// Number of spots on the vertical midline.
const SPOT_COUNT: u32 = 5;
/// Radius of each spot.
const SPOT_RADIUS: f32 = 5.0;
/// Margin kept between a randomly placed bar and the grid edge.
const RANDOM_BAR_MARGIN: u32 = 20;

/// The closed set of barrier layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BarrierType {
    /// Empty world.
    #[default]
    NoBarrier = 0,
    /// Two-cell-wide vertical bar at the horizontal center, spanning the
    /// middle half of Y.
    VerticalBarConstant = 1,
    /// Same bar as [`VerticalBarConstant`](Self::VerticalBarConstant) at a
    /// random position, redrawn on every call.
    VerticalBarRandom = 2,
    /// Five two-cell-wide blocks: one per quadrant plus one centered.
    FiveBlocksStaggered = 3,
    /// Wide horizontal bar across the middle half of X, in the upper part
    /// of the grid.
    HorizontalBarConstant = 4,
    /// Three randomly placed disks kept apart from each other.
    FloatingIslands = 5,
    /// Evenly spaced disks along the vertical midline.
    Spots = 6,
}

impl BarrierType {
    /// Every layout, in code order.
    pub const ALL: [BarrierType; 7] = [
        Self::NoBarrier,
        Self::VerticalBarConstant,
        Self::VerticalBarRandom,
        Self::FiveBlocksStaggered,
        Self::HorizontalBarConstant,
        Self::FloatingIslands,
        Self::Spots,
    ];

    /// Numeric code of this layout.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// `true` for layouts that draw from the PRNG.
    pub const fn is_random(self) -> bool {
        matches!(self, Self::VerticalBarRandom | Self::FloatingIslands)
    }
}

impl TryFrom<u8> for BarrierType {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(GridError::InvalidBarrierType { code })
    }
}

impl fmt::Display for BarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoBarrier => "none",
            Self::VerticalBarConstant => "vertical bar",
            Self::VerticalBarRandom => "random vertical bar",
            Self::FiveBlocksStaggered => "five staggered blocks",
            Self::HorizontalBarConstant => "horizontal bar",
            Self::FloatingIslands => "floating islands",
            Self::Spots => "spots",
        };
        f.write_str(name)
    }
}

impl Grid {
    /// Rebuild the barrier layout from a numeric code.
    ///
    /// The side tables are cleared before the code is checked, so an invalid
    /// code leaves them empty.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidBarrierType`] for codes above 6, plus anything
    /// [`create_barrier`](Self::create_barrier) returns.
    pub fn create_barrier_from_code(
        &mut self,
        code: u8,
        rng: &mut RandomUintGenerator,
    ) -> Result<(), GridError> {
        self.clear_barrier_tables();
        let kind = BarrierType::try_from(code)?;
        self.create_barrier(kind, rng)
    }

    /// Clear the barrier side tables and draw `kind` into the grid.
    ///
    /// Assumes the grid holds no barriers from an earlier call; cells are
    /// not reset here. Call [`zero_fill`](Self::zero_fill) first when
    /// regenerating.
    ///
    /// # Errors
    ///
    /// [`GridError::Rng`] when the grid is too small for a randomly placed
    /// bar, and [`GridError::BarrierPlacementFailed`] when islands cannot
    /// be spaced apart.
    pub fn create_barrier(
        &mut self,
        kind: BarrierType,
        rng: &mut RandomUintGenerator,
    ) -> Result<(), GridError> {
        self.clear_barrier_tables();
        let sx = self.size_x;
        let sy = self.size_y;

        match kind {
            BarrierType::NoBarrier => {}
            BarrierType::VerticalBarConstant => {
                let min_x = sx / 2;
                let min_y = sy / 4;
                self.draw_box(min_x, min_y, min_x + 1, min_y + sy / 2);
            }
            BarrierType::VerticalBarRandom => {
                let min_x = rng.range(RANDOM_BAR_MARGIN, sx.saturating_sub(RANDOM_BAR_MARGIN))?;
                let min_y =
                    rng.range(RANDOM_BAR_MARGIN, (sy / 2).saturating_sub(RANDOM_BAR_MARGIN))?;
                self.draw_box(min_x, min_y, min_x + 1, min_y + sy / 2);
            }
            BarrierType::FiveBlocksStaggered => self.five_blocks(),
            BarrierType::HorizontalBarConstant => {
                let min_x = sx / 4;
                let min_y = sy / 2 + sy / 4;
                self.draw_box(min_x, min_y, min_x + sx / 2, min_y + 2);
            }
            BarrierType::FloatingIslands => self.floating_islands(rng)?,
            BarrierType::Spots => {
                let slice = sy / (SPOT_COUNT + 1);
                for n in 1..=SPOT_COUNT {
                    let center = Coord::new((sx / 2) as i16, (n * slice).min(sy - 1) as i16);
                    self.fill_disk(center, SPOT_RADIUS);
                    self.barrier_centers.push(center);
                }
            }
        }

        debug!(
            barrier = %kind,
            cells = self.barrier_locations.len(),
            centers = self.barrier_centers.len(),
            "barrier created"
        );
        Ok(())
    }

    fn clear_barrier_tables(&mut self) {
        self.barrier_locations.clear();
        self.barrier_centers.clear();
    }

    /// Set the inclusive box to BARRIER, clipped to the grid.
    fn draw_box(&mut self, min_x: u32, min_y: u32, max_x: u32, max_y: u32) {
        let max_x = max_x.min(self.size_x - 1);
        let max_y = max_y.min(self.size_y - 1);
        for x in min_x..=max_x {
            for y in min_y..=max_y {
                let loc = Coord::new(x as i16, y as i16);
                self.set(loc, BARRIER);
                self.barrier_locations.push(loc);
            }
        }
    }

    fn five_blocks(&mut self) {
        const BLOCK_W: u32 = 2;
        let sx = self.size_x;
        let sy = self.size_y;
        let block_h = sx / 3;
        if block_h == 0 {
            return;
        }

        let block = |grid: &mut Self, x0: u32, y0: u32| {
            grid.draw_box(x0, y0, x0 + BLOCK_W - 1, y0 + block_h - 1);
        };

        let x0 = (sx / 4).saturating_sub(BLOCK_W / 2);
        let y0 = (sy / 4).saturating_sub(block_h / 2);
        block(self, x0, y0);
        block(self, x0 + sx / 2, y0);
        block(self, x0 + sx / 2, y0 + sy / 2);
        block(self, x0, y0 + sy / 2);
        block(
            self,
            (sx / 2).saturating_sub(BLOCK_W / 2),
            (sy / 2).saturating_sub(block_h / 2),
        );
    }

    fn floating_islands(&mut self, rng: &mut RandomUintGenerator) -> Result<(), GridError> {
        let margin = 2 * ISLAND_RADIUS as i32;
        let mut centers: [Coord; ISLAND_COUNT] = [Coord::default(); ISLAND_COUNT];

        for i in 0..ISLAND_COUNT {
            let mut placed = false;
            for _ in 0..ISLAND_ATTEMPTS {
                let candidate = self.random_location(rng)?;
                if centers[..i]
                    .iter()
                    .all(|c| (*c - candidate).length() >= margin)
                {
                    centers[i] = candidate;
                    placed = true;
                    break;
                }
            }
            if !placed {
                return Err(GridError::BarrierPlacementFailed {
                    reason: format!(
                        "no room for island {} of {ISLAND_COUNT} on {}x{}",
                        i + 1,
                        self.size_x,
                        self.size_y
                    ),
                });
            }
        }

        self.barrier_centers.extend_from_slice(&centers);
        for center in centers {
            self.fill_disk(center, ISLAND_RADIUS);
        }
        Ok(())
    }

    /// Convert EMPTY cells within `radius` of `center` to BARRIER, recording
    /// every visited cell.
    fn fill_disk(&mut self, center: Coord, radius: f32) {
        for loc in neighborhood(self.size_x, self.size_y, center, radius) {
            if self.is_empty_at(loc) {
                self.set(loc, BARRIER);
            }
            self.barrier_locations.push(loc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biogrid_core::{RngConfig, WorkerId};

    fn rng(seed: u32) -> RandomUintGenerator {
        RandomUintGenerator::seeded(&RngConfig::deterministic(seed), WorkerId(0))
    }

    fn grid_with(kind: BarrierType) -> Grid {
        let mut g = Grid::new(128, 128).unwrap();
        g.create_barrier(kind, &mut rng(1)).unwrap();
        g
    }

    fn barrier_cell_count(g: &Grid) -> usize {
        let mut n = 0;
        for x in 0..g.size_x() as u16 {
            for y in 0..g.size_y() as u16 {
                if g.at_xy(x, y) == BARRIER {
                    n += 1;
                }
            }
        }
        n
    }

    // ── BarrierType ─────────────────────────────────────────────

    #[test]
    fn codes_round_trip() {
        for kind in BarrierType::ALL {
            assert_eq!(BarrierType::try_from(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_code_rejected() {
        assert_eq!(
            BarrierType::try_from(7),
            Err(GridError::InvalidBarrierType { code: 7 })
        );
    }

    #[test]
    fn invalid_code_clears_tables() {
        let mut g = grid_with(BarrierType::Spots);
        assert!(!g.barrier_centers().is_empty());
        let err = g.create_barrier_from_code(200, &mut rng(1)).unwrap_err();
        assert_eq!(err, GridError::InvalidBarrierType { code: 200 });
        assert!(g.barrier_locations().is_empty());
        assert!(g.barrier_centers().is_empty());
    }

    // ── Shapes ──────────────────────────────────────────────────

    #[test]
    fn no_barrier_is_noop() {
        let g = grid_with(BarrierType::NoBarrier);
        assert!(g.barrier_locations().is_empty());
        assert_eq!(barrier_cell_count(&g), 0);
    }

    #[test]
    fn vertical_bar_constant() {
        let g = grid_with(BarrierType::VerticalBarConstant);
        let locs = g.barrier_locations();
        assert_eq!(locs.len(), 2 * 65);
        assert!(locs.iter().all(|c| c.x == 64 || c.x == 65));
        assert!(locs.iter().all(|c| (32..=96).contains(&c.y)));
        assert!(locs.iter().all(|c| g.is_barrier_at(*c)));
        assert!(g.barrier_centers().is_empty());
    }

    #[test]
    fn vertical_bar_random_stays_in_margin() {
        for seed in 0..20 {
            let mut g = Grid::new(128, 128).unwrap();
            g.create_barrier(BarrierType::VerticalBarRandom, &mut rng(seed))
                .unwrap();
            let locs = g.barrier_locations();
            assert_eq!(locs.len(), 2 * 65);
            let min_x = locs.iter().map(|c| c.x).min().unwrap();
            let min_y = locs.iter().map(|c| c.y).min().unwrap();
            assert!((20..=108).contains(&min_x));
            assert!((20..=44).contains(&min_y));
        }
    }

    #[test]
    fn vertical_bar_random_too_small() {
        let mut g = Grid::new(30, 30).unwrap();
        let err = g
            .create_barrier(BarrierType::VerticalBarRandom, &mut rng(0))
            .unwrap_err();
        assert!(matches!(err, GridError::Rng(_)));
    }

    #[test]
    fn five_blocks_layout() {
        let g = grid_with(BarrierType::FiveBlocksStaggered);
        let locs = g.barrier_locations();
        assert_eq!(locs.len(), 5 * 2 * 42);
        for corner in [(31, 11), (95, 11), (95, 75), (31, 75), (63, 43)] {
            let c = Coord::new(corner.0, corner.1);
            assert!(g.is_barrier_at(c), "missing block at {c}");
            assert!(g.is_barrier_at(c + Coord::new(1, 41)));
            assert!(!g.is_barrier_at(c + Coord::new(2, 0)));
        }
        assert_eq!(barrier_cell_count(&g), locs.len());
    }

    #[test]
    fn horizontal_bar_constant() {
        let g = grid_with(BarrierType::HorizontalBarConstant);
        let locs = g.barrier_locations();
        assert_eq!(locs.len(), 65 * 3);
        assert!(locs.iter().all(|c| (32..=96).contains(&c.x)));
        assert!(locs.iter().all(|c| (96..=98).contains(&c.y)));
    }

    #[test]
    fn floating_islands_are_spaced() {
        for seed in 0..20 {
            let mut g = Grid::new(128, 128).unwrap();
            g.create_barrier(BarrierType::FloatingIslands, &mut rng(seed))
                .unwrap();
            let centers = g.barrier_centers();
            assert_eq!(centers.len(), 3);
            for i in 0..3 {
                assert!(g.is_in_bounds(centers[i]));
                for j in 0..i {
                    assert!((centers[i] - centers[j]).length() >= 6);
                }
            }
            assert!(!g.barrier_locations().is_empty());
            assert!(g.barrier_locations().iter().all(|c| g.is_barrier_at(*c)));
        }
    }

    #[test]
    fn floating_islands_fail_without_room() {
        let mut g = Grid::new(4, 4).unwrap();
        let err = g
            .create_barrier(BarrierType::FloatingIslands, &mut rng(3))
            .unwrap_err();
        assert!(matches!(err, GridError::BarrierPlacementFailed { .. }));
        assert_eq!(barrier_cell_count(&g), 0);
    }

    #[test]
    fn floating_islands_keep_occupants() {
        let first = grid_with(BarrierType::FloatingIslands);
        let occupant = first.barrier_centers()[0];

        let mut g = Grid::new(128, 128).unwrap();
        g.set(occupant, 7);
        g.create_barrier(BarrierType::FloatingIslands, &mut rng(1))
            .unwrap();
        assert_eq!(g.barrier_centers(), first.barrier_centers());
        assert_eq!(g.at(occupant), 7);
        assert!(g.barrier_locations().contains(&occupant));
    }

    #[test]
    fn spots_layout() {
        let g = grid_with(BarrierType::Spots);
        let centers = g.barrier_centers();
        let expected: Vec<Coord> = (1..=5).map(|n| Coord::new(64, n * 21)).collect();
        assert_eq!(centers, expected.as_slice());
        assert_eq!(g.barrier_locations().len(), 5 * 81);
        assert_eq!(barrier_cell_count(&g), 5 * 81);
    }

    #[test]
    fn disks_record_clipped_neighborhoods_in_order() {
        let mut g = Grid::new(12, 6).unwrap();
        g.create_barrier(BarrierType::Spots, &mut rng(0)).unwrap();
        let expected: Vec<Coord> = g
            .barrier_centers()
            .iter()
            .flat_map(|&c| neighborhood(12, 6, c, SPOT_RADIUS))
            .collect();
        assert_eq!(g.barrier_locations(), expected.as_slice());
    }

    #[test]
    fn spots_skip_occupied_cells_but_record_them() {
        let mut g = Grid::new(128, 128).unwrap();
        let occupant = Coord::new(64, 21);
        g.set(occupant, 99);
        g.create_barrier(BarrierType::Spots, &mut rng(0)).unwrap();
        assert_eq!(g.at(occupant), 99);
        assert!(g.barrier_locations().contains(&occupant));
    }

    #[test]
    fn tables_rebuilt_each_call() {
        let mut g = Grid::new(128, 128).unwrap();
        let mut r = rng(5);
        g.create_barrier(BarrierType::Spots, &mut r).unwrap();
        g.zero_fill();
        g.create_barrier(BarrierType::VerticalBarConstant, &mut r)
            .unwrap();
        assert_eq!(g.barrier_locations().len(), 130);
        assert!(g.barrier_centers().is_empty());
    }

    #[test]
    fn small_grids_do_not_panic() {
        for kind in [
            BarrierType::VerticalBarConstant,
            BarrierType::FiveBlocksStaggered,
            BarrierType::HorizontalBarConstant,
            BarrierType::Spots,
        ] {
            for (sx, sy) in [(1, 1), (2, 3), (5, 2), (7, 7)] {
                let mut g = Grid::new(sx, sy).unwrap();
                g.create_barrier(kind, &mut rng(0)).unwrap();
                assert!(g.barrier_locations().iter().all(|c| g.is_in_bounds(*c)));
            }
        }
    }
}
