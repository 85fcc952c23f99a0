//! Cursor over one scanned cell, exposing the shared movement primitives the
//! family rule chains are composed from.
//!
//! During a tick the current buffer is read-only apart from settled-flag
//! bookkeeping, and the next buffer is write-only. Every resolution marks its
//! source settled; a reaction settles both participants. First-writer-wins on
//! next slots: the scan order decides which of two competing claims lands.

use crate::direction::{self, Direction};
use crate::material::{reaction_for, MaterialKind};
use crate::Grid;
use rand_xoshiro::Xoshiro256PlusPlus;

pub(crate) struct TickApi<'a> {
    grid: &'a mut Grid,
    x: i32,
    y: i32,
}

impl<'a> TickApi<'a> {
    pub fn new(grid: &'a mut Grid, x: i32, y: i32) -> Self {
        Self { grid, x, y }
    }

    /// Material being resolved, read from the current buffer.
    pub fn kind(&self) -> MaterialKind {
        self.grid.cell(self.x, self.y).kind
    }

    pub fn rng(&mut self) -> &mut Xoshiro256PlusPlus {
        self.grid.rng_mut()
    }

    /// Whether the cell sits on the bottom edge of its fall axis.
    pub fn at_bottom(&self) -> bool {
        self.y + 1 >= self.grid.height() as i32
    }

    /// Directional move check. In order:
    /// bounds, next-slot occupancy, reaction lookup, density comparison.
    ///
    /// A found reaction resolves both cells atomically: the result pair is
    /// written to the two next slots and both participants are settled. It
    /// requires the target unsettled and the mover's own next slot still
    /// free, so the pair write can never collide with an earlier claim.
    pub fn try_move(&mut self, dir: Direction) -> bool {
        let (dx, dy) = dir.delta();
        let (tx, ty) = (self.x + dx, self.y + dy);
        if !self.grid.in_bounds(tx, ty) {
            return false;
        }
        if !self.grid.next_cell(tx, ty).is_empty() {
            return false;
        }

        let me = self.kind();
        let target = self.grid.cell(tx, ty);
        if let Some((mover_out, target_out)) = reaction_for(me, target.kind) {
            if !target.settled && self.grid.next_cell(self.x, self.y).is_empty() {
                self.grid.write_next(self.x, self.y, mover_out);
                self.grid.write_next(tx, ty, target_out);
                self.grid.settle(self.x, self.y);
                self.grid.settle(tx, ty);
                return true;
            }
        }

        if me.density() > target.kind.density() {
            self.grid.write_next(tx, ty, me);
            self.grid.settle(self.x, self.y);
            return true;
        }
        false
    }

    /// Attempt a symmetric pair in the order drawn.
    pub fn try_pair(&mut self, pair: (Direction, Direction)) -> bool {
        self.try_move(pair.0) || self.try_move(pair.1)
    }

    /// Probability-gated jitter: draw a random direction and attempt it.
    pub fn try_jitter(&mut self, percent: u8) -> bool {
        match direction::random_direction(self.grid.rng_mut(), percent) {
            Some(dir) => self.try_move(dir),
            None => false,
        }
    }

    /// Stay in place unconditionally (rigid default — nothing in the roster
    /// is strictly denser than a rigid solid, so its own slot is never
    /// claimed by an earlier mover).
    pub fn hold(&mut self) -> bool {
        let kind = self.kind();
        self.grid.write_next(self.x, self.y, kind);
        self.grid.settle(self.x, self.y);
        true
    }

    /// Stay in place if the own next slot is still free; otherwise search
    /// upward for the nearest free next slot and relocate there. Upward is
    /// the only escape axis a displaced occupant has — claims on its slot
    /// arrive from above or alongside, never from below. If the search runs
    /// off the grid edge the particle is dropped rather than overwriting
    /// another occupant.
    pub fn hold_or_displace(&mut self) -> bool {
        let kind = self.kind();
        let step = -1;
        let mut ty = self.y;
        loop {
            if self.grid.next_cell(self.x, ty).is_empty() {
                self.grid.write_next(self.x, ty, kind);
                break;
            }
            ty += step;
            if !self.grid.in_bounds(self.x, ty) {
                log::trace!("dropping {kind} at ({}, {}): no free slot toward the edge", self.x, self.y);
                break;
            }
        }
        self.grid.settle(self.x, self.y);
        true
    }
}
