//! Depth-first snake cube solver.
//!
//! The chain starts in the origin corner travelling along +X. Each segment is
//! placed straight along the current direction, then every hinge turn is tried
//! in `DIRECTIONS` order until one leads to a full placement.
//!
//! Key points:
//! - Bounds are checked on the segment end before any cell is touched
//! - Collisions are checked for the whole segment before committing it
//! - Every branch gets its own clone of the occupancy map, so nothing is undone
//! - The first solution found is returned; the order makes it deterministic

use std::ops::ControlFlow;

use tracing::{debug, info, trace};

use crate::geometry::{in_bounds, offset, turns, Coord, INITIAL_DIRECTION, ORIGIN};
use crate::occupancy::OccupancyMap;
use crate::shape::Shape;

/// Receives intermediate search states, e.g. for progressive rendering.
///
/// Both hooks only borrow the search state, so an observer can copy what it
/// needs but never alter the occupancy map the search continues with.
pub trait SearchObserver {
    /// Called after a segment is committed and before its hinge turns are
    /// explored. `path` ends with the endpoint of the committed segment.
    ///
    /// Returning `ControlFlow::Break` aborts the whole search.
    fn on_commit(&mut self, occupancy: &OccupancyMap, path: &[Coord]) -> ControlFlow<()>;

    /// Called once with the final state when a solution is found.
    fn on_solved(&mut self, _occupancy: &OccupancyMap, _path: &[Coord]) {}
}

/// Observer that ignores every state and never aborts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    #[inline(always)]
    fn on_commit(&mut self, _occupancy: &OccupancyMap, _path: &[Coord]) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Segment placements attempted (one per visited search node).
    pub placements_tried: u64,
    /// Placements that passed the bounds and collision checks.
    pub placements_committed: u64,
}

/// A complete embedding of the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Segment endpoints, starting with the origin. One longer than the shape.
    pub path: Vec<Coord>,
    /// Occupancy after the last segment was placed.
    pub occupancy: OccupancyMap,
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A full placement was found.
    Solved(Solution),
    /// Every branch was exhausted without a full placement.
    NoSolution,
    /// The observer stopped the search.
    Aborted,
}

impl SearchOutcome {
    /// Returns the solution, if the search found one.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

/// Result of a search together with its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Backtracking engine for one lattice size.
pub struct PathSearch<'o, O: SearchObserver> {
    size: i32,
    observer: &'o mut O,
    stats: SearchStats,
}

impl<'o, O: SearchObserver> PathSearch<'o, O> {
    /// Creates an engine for an `size x size x size` lattice.
    pub fn new(size: u32, observer: &'o mut O) -> Self {
        Self {
            // shapes that fit in memory are far below i32::MAX per edge
            size: i32::try_from(size).unwrap_or(i32::MAX),
            observer,
            stats: SearchStats::default(),
        }
    }

    /// Counters accumulated by this engine so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Places `remaining[0]` from `end` along `direction`, then recurses into
    /// every hinge turn for the rest of the shape.
    ///
    /// `occupancy` is owned by this call. `path` holds the endpoints placed so
    /// far and is restored to its input length unless a solution is found.
    pub fn solve(
        &mut self,
        mut occupancy: OccupancyMap,
        path: &mut Vec<Coord>,
        remaining: &[u32],
        end: Coord,
        direction: Coord,
    ) -> SearchOutcome {
        let Some((&length, rest)) = remaining.split_first() else {
            return SearchOutcome::NoSolution;
        };
        self.stats.placements_tried += 1;

        // a segment at least as long as the lattice edge can never fit
        let Ok(length) = i32::try_from(length) else {
            return SearchOutcome::NoSolution;
        };
        if length >= self.size {
            return SearchOutcome::NoSolution;
        }

        let segment_end = offset(end, direction, length);
        if !in_bounds(segment_end, self.size) {
            return SearchOutcome::NoSolution;
        }
        if !occupancy.segment_is_free(end, direction, length) {
            return SearchOutcome::NoSolution;
        }

        occupancy.fill_segment(end, direction, length);
        self.stats.placements_committed += 1;
        path.push(segment_end);
        trace!(depth = path.len() - 1, ?segment_end, "committed segment");

        if rest.is_empty() {
            self.observer.on_solved(&occupancy, path);
            return SearchOutcome::Solved(Solution {
                path: path.clone(),
                occupancy,
            });
        }

        if self.observer.on_commit(&occupancy, path).is_break() {
            return SearchOutcome::Aborted;
        }

        for next_direction in turns(direction) {
            match self.solve(occupancy.copy(), path, rest, segment_end, next_direction) {
                SearchOutcome::NoSolution => continue,
                found_or_aborted => return found_or_aborted,
            }
        }

        path.pop();
        SearchOutcome::NoSolution
    }
}

/// Solves a shape from the origin corner without observing progress.
pub fn solve(shape: &Shape) -> SearchReport {
    solve_with(shape, &mut NoopObserver)
}

/// Solves a shape from the origin corner, reporting progress to `observer`.
pub fn solve_with<O: SearchObserver>(shape: &Shape, observer: &mut O) -> SearchReport {
    info!(
        segments = shape.segment_count(),
        size = shape.size(),
        "searching for a snake cube embedding"
    );

    let mut search = PathSearch::new(shape.size(), observer);
    let mut path = vec![ORIGIN];
    let outcome = search.solve(
        OccupancyMap::with_origin(),
        &mut path,
        shape.lengths(),
        ORIGIN,
        INITIAL_DIRECTION,
    );
    let stats = search.stats();

    match &outcome {
        SearchOutcome::Solved(_) => info!(
            tried = stats.placements_tried,
            committed = stats.placements_committed,
            "found a solution"
        ),
        SearchOutcome::NoSolution => info!(
            tried = stats.placements_tried,
            committed = stats.placements_committed,
            "search exhausted without a solution"
        ),
        SearchOutcome::Aborted => debug!(
            tried = stats.placements_tried,
            committed = stats.placements_committed,
            "search aborted by observer"
        ),
    }

    SearchReport { outcome, stats }
}
