//! Error types for shape validation and solution checking.

use thiserror::Error;

use crate::geometry::Coord;

/// Reasons a shape cannot describe a snake cube.
///
/// These are rejected before any search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The shape has no segments.
    #[error("shape has no segments")]
    Empty,

    /// A segment has length zero.
    #[error("segment {index} has length 0 (segment lengths must be positive)")]
    ZeroLength {
        /// Position of the offending segment.
        index: usize,
    },

    /// One plus the sum of the segment lengths is not a perfect cube.
    #[error("the chain has {cells} cubes, which is not a perfect cube")]
    NotACube {
        /// Total number of unit cubes in the chain.
        cells: u64,
    },

    /// The lattice would be smaller than 2x2x2.
    #[error("cube size {size} is too small (must be at least 2)")]
    TooSmall {
        /// Derived edge length of the lattice.
        size: u32,
    },
}

/// Result type for shape validation.
pub type ShapeResult<T> = std::result::Result<T, ShapeError>;

/// The first property a candidate solution path violates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path does not have one endpoint per segment plus the start.
    #[error("path has {actual} points, expected {expected}")]
    WrongLength {
        /// Number of segments plus one.
        expected: usize,
        /// Number of points in the path.
        actual: usize,
    },

    /// A segment does not run along a single axis.
    #[error("segment {segment} is not axis-aligned")]
    NotAxisAligned {
        /// Index of the segment.
        segment: usize,
    },

    /// A segment spans the wrong number of steps.
    #[error("segment {segment} spans {actual} steps, expected {expected}")]
    WrongSegmentLength {
        /// Index of the segment.
        segment: usize,
        /// Length given by the shape.
        expected: u32,
        /// Length found in the path.
        actual: u32,
    },

    /// Two consecutive segments are collinear (no turn at the hinge).
    #[error("segments {segment} and {} do not turn at their hinge", .segment + 1)]
    NoTurn {
        /// Index of the first segment of the pair.
        segment: usize,
    },

    /// A cell lies outside the lattice.
    #[error("cell {position:?} lies outside the lattice")]
    OutOfBounds {
        /// The offending cell.
        position: Coord,
    },

    /// A cell is visited more than once.
    #[error("cell {position:?} is visited twice")]
    Overlap {
        /// The offending cell.
        position: Coord,
    },

    /// The chain does not fill the whole lattice.
    #[error("chain covers {covered} cells, expected {expected}")]
    IncompleteCoverage {
        /// Distinct cells visited.
        covered: usize,
        /// Cells in the lattice.
        expected: usize,
    },
}

/// Result type for solution checking.
pub type PathResult<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShapeError::NotACube { cells: 9 };
        assert_eq!(
            format!("{err}"),
            "the chain has 9 cubes, which is not a perfect cube"
        );

        let err = PathError::NoTurn { segment: 3 };
        assert_eq!(format!("{err}"), "segments 3 and 4 do not turn at their hinge");

        let err = PathError::Overlap { position: (1, 2, 0) };
        assert!(format!("{err}").contains("(1, 2, 0)"));
    }
}
