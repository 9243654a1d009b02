//! Sparse occupancy map over lattice positions.
//!
//! The search never undoes a placement. Instead each branch works on its own
//! clone of the map, so a failed branch leaves no trace in its siblings. The
//! map holds one entry per visited cell, which keeps clones small for the
//! lattice sizes a chain can realistically fill.

use rustc_hash::FxHashMap;

use crate::geometry::{offset, Coord, ORIGIN};

/// Marks which lattice cells are filled by the chain.
///
/// `Clone` produces a fully independent copy: mutating either map afterwards
/// never affects the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyMap {
    cells: FxHashMap<Coord, bool>,
}

impl OccupancyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map where only the origin is filled.
    pub fn with_origin() -> Self {
        let mut map = Self::new();
        map.set(ORIGIN, true);
        map
    }

    /// Returns true if `position` is present and marked occupied.
    #[inline]
    pub fn has(&self, position: Coord) -> bool {
        self.cells.get(&position).copied().unwrap_or(false)
    }

    /// Records the occupancy of `position`, replacing any previous value.
    #[inline]
    pub fn set(&mut self, position: Coord, occupied: bool) {
        self.cells.insert(position, occupied);
    }

    /// Returns an independent copy of this map.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Iterates over every recorded position and its flag, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        self.cells.iter().map(|(&position, &occupied)| (position, occupied))
    }

    /// Counts the positions marked occupied.
    pub fn occupied_count(&self) -> usize {
        self.cells.values().filter(|&&occupied| occupied).count()
    }

    /// Returns true if none of the `length` cells after `start` along
    /// `direction` is occupied. `start` itself is not checked.
    pub fn segment_is_free(&self, start: Coord, direction: Coord, length: i32) -> bool {
        (1..=length).all(|step| !self.has(offset(start, direction, step)))
    }

    /// Marks the `length` cells after `start` along `direction` as occupied.
    pub fn fill_segment(&mut self, start: Coord, direction: Coord, length: i32) {
        for step in 1..=length {
            self.set(offset(start, direction, step), true);
        }
    }
}
