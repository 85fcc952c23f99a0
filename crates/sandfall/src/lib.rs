//! Falling sand grid engine.
//!
//! A width×height grid of material cells advances once per [`Grid::tick`]
//! under local rules: density-driven falling, phase-dependent spreading and
//! pairwise transformations. Each tick reads the current buffer, writes a
//! separate next buffer (one writer per slot, first writer wins) and commits
//! it with a single swap, so a particle can never be duplicated, erased or
//! resolved twice no matter how the per-cell rules interleave.

mod api;
pub mod cell;
pub mod direction;
mod elements;
pub mod material;

use cell::Cell;
use material::MaterialKind;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Caller-facing failures. `tick` itself has no recoverable errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("coordinates ({x}, {y}) outside a {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// One-in-N chance that a lower-half cell starts as Sand.
const SEED_FILL_ONE_IN: u32 = 30;

/// 2D grid of cells, row-major, plus the reused next buffer the tick scan
/// writes into. Paint requests are queued and flushed at the head of the
/// following tick, never applied mid-scan.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
    rng: Xoshiro256PlusPlus,
    pending: Vec<(i32, i32, MaterialKind)>,
    /// Shadow counter of next-buffer writes, for the no-duplication tests.
    #[cfg(test)]
    next_writes: Vec<u16>,
}

impl Grid {
    /// Create a grid with the default sparse fill: Sand in the lower half at
    /// roughly 1/30 occupancy.
    ///
    /// # Errors
    /// [`GridError::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let mut grid = Self::build(width, height, Xoshiro256PlusPlus::from_os_rng())?;
        grid.seed_lower_half();
        Ok(grid)
    }

    /// Create an all-Empty grid (for an external painter to fill).
    ///
    /// # Errors
    /// [`GridError::InvalidDimensions`] if either dimension is zero.
    pub fn empty(width: usize, height: usize) -> Result<Self, GridError> {
        Self::build(width, height, Xoshiro256PlusPlus::from_os_rng())
    }

    /// Create an all-Empty grid with a deterministic RNG, so runs are
    /// reproducible.
    ///
    /// # Errors
    /// [`GridError::InvalidDimensions`] if either dimension is zero.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, GridError> {
        Self::build(width, height, Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn build(width: usize, height: usize, rng: Xoshiro256PlusPlus) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
            next: vec![Cell::EMPTY; width * height],
            rng,
            pending: Vec::new(),
            #[cfg(test)]
            next_writes: vec![0; width * height],
        })
    }

    fn seed_lower_half(&mut self) {
        let start = self.width * self.height / 2;
        for i in start..self.cells.len() {
            if self.rng.random_range(0..SEED_FILL_ONE_IN) == 0 {
                self.cells[i] = Cell::new(MaterialKind::Sand);
            }
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Material at a coordinate.
    ///
    /// # Panics
    /// If the coordinate is out of bounds. Addressing outside the grid is a
    /// caller defect, never wrapped or clamped.
    #[must_use]
    pub fn kind_at(&self, x: i32, y: i32) -> MaterialKind {
        self.cells[self.idx(x, y)].kind
    }

    /// Count cells holding `kind`.
    #[must_use]
    pub fn count(&self, kind: MaterialKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }

    /// Queue an external write of `kind` at (`x`, `y`), visible from the next
    /// tick onward.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn paint(&mut self, x: i32, y: i32, kind: MaterialKind) -> Result<(), GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.pending.push((x, y, kind));
        Ok(())
    }

    /// Advance the simulation by one tick.
    ///
    /// Flushes queued paints, scans the current buffer row-major top-to-bottom
    /// and left-to-right with the top row excluded (material there is never
    /// rescanned and so vanishes at the boundary), resolves every unsettled
    /// occupied cell through its family rule chain, then commits the next
    /// buffer with a single swap. The scan order is observable: it decides
    /// which of two competing claims on a shared destination lands.
    pub fn tick(&mut self) {
        for (x, y, kind) in std::mem::take(&mut self.pending) {
            let i = self.idx(x, y);
            self.cells[i] = Cell::new(kind);
        }

        self.next.fill(Cell::EMPTY);
        #[cfg(test)]
        self.next_writes.fill(0);

        let w = self.width as i32;
        let h = self.height as i32;
        for y in 1..h {
            for x in 0..w {
                let cell = self.cell(x, y);
                if cell.is_empty() || cell.settled {
                    continue;
                }
                let mut api = api::TickApi::new(self, x, y);
                elements::update_cell(cell.kind, &mut api);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.log_census();
    }

    /// Dense RGBA snapshot: width×height×4 bytes, row-major, each cell's
    /// material color verbatim.
    #[must_use]
    pub fn export_rgba(&self) -> Vec<u8> {
        let mut pixels = vec![0u8; self.width * self.height * 4];
        self.write_rgba(&mut pixels);
        pixels
    }

    /// Write the RGBA snapshot into a caller-owned buffer.
    ///
    /// # Panics
    /// If `pixels` is not exactly width×height×4 bytes.
    pub fn write_rgba(&self, pixels: &mut [u8]) {
        assert_eq!(
            pixels.len(),
            self.width * self.height * 4,
            "pixel buffer size mismatch"
        );
        for (cell, px) in self.cells.iter().zip(pixels.chunks_exact_mut(4)) {
            px.copy_from_slice(&cell.kind.color());
        }
    }

    fn log_census(&self) {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "census: water={} sand={} rock={} lava={} steam={} empty={}",
                self.count(MaterialKind::Water),
                self.count(MaterialKind::Sand),
                self.count(MaterialKind::Rock),
                self.count(MaterialKind::Lava),
                self.count(MaterialKind::Steam),
                self.count(MaterialKind::Empty),
            );
        }
    }

    fn idx(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "({x}, {y}) outside a {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width + x as usize
    }

    pub(crate) fn cell(&self, x: i32, y: i32) -> Cell {
        self.cells[self.idx(x, y)]
    }

    pub(crate) fn next_cell(&self, x: i32, y: i32) -> Cell {
        self.next[self.idx(x, y)]
    }

    pub(crate) fn write_next(&mut self, x: i32, y: i32, kind: MaterialKind) {
        let i = self.idx(x, y);
        self.next[i] = Cell::new(kind);
        #[cfg(test)]
        {
            self.next_writes[i] += 1;
        }
    }

    pub(crate) fn settle(&mut self, x: i32, y: i32) {
        let i = self.idx(x, y);
        self.cells[i].settled = true;
    }

    /// Write straight into the current buffer, bypassing the paint queue.
    #[cfg(test)]
    pub(crate) fn place(&mut self, x: i32, y: i32, kind: MaterialKind) {
        let i = self.idx(x, y);
        self.cells[i] = Cell::new(kind);
    }

    /// Largest number of writes any one next slot received during the most
    /// recent tick. After the commit swap the counters still describe the
    /// buffer that became current.
    #[cfg(test)]
    pub(crate) fn max_writes_last_tick(&self) -> u16 {
        self.next_writes.iter().copied().max().unwrap_or(0)
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Xoshiro256PlusPlus {
        &mut self.rng
    }
}

/// Wasm-facing handle: a grid plus a retained pixel buffer the JS renderer
/// reads through [`Universe::pixels`].
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    /// # Errors
    /// If either dimension is zero.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<Universe, JsError> {
        let grid = Grid::new(width, height)?;
        let pixels = vec![0u8; width * height * 4];
        Ok(Self { grid, pixels })
    }

    pub fn tick(&mut self) {
        self.grid.tick();
    }

    /// # Errors
    /// If the coordinate is outside the grid.
    pub fn paint(&mut self, x: i32, y: i32, material: u8) -> Result<(), JsError> {
        self.grid
            .paint(x, y, MaterialKind::from_u8(material))
            .map_err(JsError::from)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Render into the retained buffer and return a pointer to it for
    /// zero-copy reads from the JS side.
    pub fn pixels(&mut self) -> *const u8 {
        self.grid.write_rgba(&mut self.pixels);
        self.pixels.as_ptr()
    }
}
