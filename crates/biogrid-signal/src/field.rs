//! The layered signal field.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};

use biogrid_core::Coord;
use biogrid_space::{visit_neighborhood, Grid};
use tracing::trace;

use crate::error::SignalError;

/// Lowest stored magnitude.
pub const SIGNAL_MIN: u8 = 0;
/// Highest stored magnitude; additions saturate here.
pub const SIGNAL_MAX: u8 = u8::MAX;

const EMIT_RADIUS: f32 = 1.5;
const EMIT_NEIGHBOR_AMOUNT: u8 = 1;
const EMIT_CENTER_AMOUNT: u8 = 2;
const FADE_AMOUNT: u8 = 1;

/// `layers × size_x × size_y` magnitudes in `[SIGNAL_MIN, SIGNAL_MAX]`.
///
/// Cells are atomics so [`get_magnitude`](Self::get_magnitude) may run
/// alongside [`increment`](Self::increment) from other workers. Such a read
/// can see a neighbourhood that is only partly updated. Each layer has its
/// own emission lock; [`fade`](Self::fade) and [`zero_fill`](Self::zero_fill)
/// take `&mut self` and therefore never overlap an emission.
#[derive(Debug)]
pub struct SignalField {
    layers: usize,
    size_x: u32,
    size_y: u32,
    cells: Vec<AtomicU8>,
    emit_locks: Vec<Mutex<()>>,
}

// Workers share `&SignalField` across threads.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<SignalField>();
};

impl SignalField {
    /// Allocate a zeroed field.
    pub fn new(layers: usize, size_x: u32, size_y: u32) -> Result<Self, SignalError> {
        if layers == 0 {
            return Err(SignalError::NoLayers);
        }
        for (name, value) in [("size_x", size_x), ("size_y", size_y)] {
            if value == 0 || value > Grid::MAX_DIM {
                return Err(SignalError::InvalidDimension { name, value });
            }
        }
        let len = layers * size_x as usize * size_y as usize;
        Ok(Self {
            layers,
            size_x,
            size_y,
            cells: (0..len).map(|_| AtomicU8::new(SIGNAL_MIN)).collect(),
            emit_locks: (0..layers).map(|_| Mutex::new(())).collect(),
        })
    }

    /// Number of layers.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Number of columns.
    pub fn size_x(&self) -> u32 {
        self.size_x
    }

    /// Number of rows.
    pub fn size_y(&self) -> u32 {
        self.size_y
    }

    fn plane_len(&self) -> usize {
        self.size_x as usize * self.size_y as usize
    }

    fn index(&self, layer: usize, loc: Coord) -> usize {
        debug_assert!(layer < self.layers, "layer {layer} of {}", self.layers);
        debug_assert!(
            loc.x >= 0
                && (loc.x as u32) < self.size_x
                && loc.y >= 0
                && (loc.y as u32) < self.size_y,
            "{loc} outside {}x{}",
            self.size_x,
            self.size_y
        );
        layer * self.plane_len() + loc.x as usize * self.size_y as usize + loc.y as usize
    }

    fn layer_cells_mut(&mut self, layer: usize) -> &mut [AtomicU8] {
        let plane = self.plane_len();
        &mut self.cells[layer * plane..(layer + 1) * plane]
    }

    /// Magnitude at `loc` in `layer`.
    ///
    /// Panics if `layer` or `loc` is out of range.
    pub fn get_magnitude(&self, layer: usize, loc: Coord) -> u8 {
        self.cells[self.index(layer, loc)].load(Ordering::Relaxed)
    }

    /// Emit a signal at `loc`.
    ///
    /// Every cell within radius 1.5 of `loc`, `loc` included, gains 1 and
    /// then `loc` gains 2 more, all saturating at [`SIGNAL_MAX`]. Concurrent
    /// emissions on the same layer are serialized.
    pub fn increment(&self, layer: usize, loc: Coord) {
        let _guard = self.emit_locks[layer]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        visit_neighborhood(self.size_x, self.size_y, loc, EMIT_RADIUS, |cell| {
            self.increase(layer, cell, EMIT_NEIGHBOR_AMOUNT);
        });
        self.increase(layer, loc, EMIT_CENTER_AMOUNT);
    }

    /// Add `amount` to one cell, saturating at [`SIGNAL_MAX`].
    pub fn increase(&self, layer: usize, loc: Coord, amount: u8) {
        let cell = &self.cells[self.index(layer, loc)];
        // The closure never returns None, so the update always succeeds.
        let _ = cell.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| {
            Some(v.saturating_add(amount))
        });
    }

    /// Reset every layer to [`SIGNAL_MIN`].
    pub fn zero_fill(&mut self) {
        for cell in &mut self.cells {
            *cell.get_mut() = SIGNAL_MIN;
        }
    }

    /// Decay one layer: every cell loses 1, floored at [`SIGNAL_MIN`].
    pub fn fade(&mut self, layer: usize) {
        for cell in self.layer_cells_mut(layer) {
            let v = cell.get_mut();
            *v = v.saturating_sub(FADE_AMOUNT);
        }
        trace!(layer, "signal layer faded");
    }

    /// Decay every layer once.
    pub fn fade_all(&mut self) {
        for layer in 0..self.layers {
            self.fade(layer);
        }
    }
}
