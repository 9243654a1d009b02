//! Independent checks on a solution path.
//!
//! The solver trusts the cube-count arithmetic and never confirms coverage
//! itself. `check_solution` re-derives every property of a valid embedding
//! from the path alone.

use rustc_hash::FxHashSet;

use crate::error::{PathError, PathResult};
use crate::geometry::{axis_step, in_bounds, negate, offset, Coord};
use crate::shape::Shape;

/// Checks that `path` embeds `shape` into its cube.
///
/// Returns the first violated property:
/// one endpoint per segment plus the start, axis-aligned segments of the
/// expected lengths, a real turn at every hinge, every cell inside the lattice,
/// no cell visited twice, and all `N^3` cells covered.
pub fn check_solution(shape: &Shape, path: &[Coord]) -> PathResult<()> {
    let expected_points = shape.segment_count() + 1;
    if path.len() != expected_points {
        return Err(PathError::WrongLength {
            expected: expected_points,
            actual: path.len(),
        });
    }

    let size = shape.size() as i32;
    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let start = path[0];
    if !in_bounds(start, size) {
        return Err(PathError::OutOfBounds { position: start });
    }
    visited.insert(start);

    let mut previous_direction = None;
    for (segment, (pair, &expected)) in path.windows(2).zip(shape.lengths()).enumerate() {
        let (direction, steps) =
            axis_step(pair[0], pair[1]).ok_or(PathError::NotAxisAligned { segment })?;
        if steps != expected {
            return Err(PathError::WrongSegmentLength {
                segment,
                expected,
                actual: steps,
            });
        }
        if let Some(previous) = previous_direction {
            if direction == previous || direction == negate(previous) {
                return Err(PathError::NoTurn {
                    segment: segment - 1,
                });
            }
        }
        previous_direction = Some(direction);

        for step in 1..=steps as i32 {
            let position = offset(pair[0], direction, step);
            if !in_bounds(position, size) {
                return Err(PathError::OutOfBounds { position });
            }
            if !visited.insert(position) {
                return Err(PathError::Overlap { position });
            }
        }
    }

    if visited.len() != shape.cell_count() {
        return Err(PathError::IncompleteCoverage {
            covered: visited.len(),
            expected: shape.cell_count(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cube() -> Shape {
        Shape::new(vec![1; 7]).unwrap()
    }

    const TWO_CUBE_PATH: [Coord; 8] = [
        (0, 0, 0),
        (1, 0, 0),
        (1, 0, 1),
        (0, 0, 1),
        (0, 1, 1),
        (0, 1, 0),
        (1, 1, 0),
        (1, 1, 1),
    ];

    #[test]
    fn test_valid_path() {
        assert_eq!(check_solution(&two_cube(), &TWO_CUBE_PATH), Ok(()));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            check_solution(&two_cube(), &TWO_CUBE_PATH[..7]),
            Err(PathError::WrongLength {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn test_diagonal_step() {
        let mut path = TWO_CUBE_PATH;
        path[1] = (1, 1, 0);
        assert_eq!(
            check_solution(&two_cube(), &path),
            Err(PathError::NotAxisAligned { segment: 0 })
        );
    }

    #[test]
    fn test_wrong_segment_length() {
        let shape = Shape::new(vec![2, 1, 1, 2, 1, 2, 1, 1, 2, 2, 1, 1, 1, 2, 2, 2, 2]).unwrap();
        let mut path = vec![(0, 0, 0); 18];
        path[1] = (1, 0, 0);
        assert_eq!(
            check_solution(&shape, &path),
            Err(PathError::WrongSegmentLength {
                segment: 0,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_collinear_hinge() {
        let mut path = TWO_CUBE_PATH;
        // doubles back along x at the first hinge
        path[2] = (0, 0, 0);
        assert_eq!(
            check_solution(&two_cube(), &path),
            Err(PathError::NoTurn { segment: 0 })
        );

        let mut path = TWO_CUBE_PATH;
        path[3] = (1, 0, 2);
        assert_eq!(
            check_solution(&two_cube(), &path),
            Err(PathError::NoTurn { segment: 1 })
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let mut path = TWO_CUBE_PATH;
        path[0] = (-1, 0, 0);
        path[1] = (0, 0, 0);
        assert_eq!(
            check_solution(&two_cube(), &path),
            Err(PathError::OutOfBounds {
                position: (-1, 0, 0)
            })
        );
    }

    #[test]
    fn test_overlap() {
        let path = [
            (0, 0, 0),
            (1, 0, 0),
            (1, 1, 0),
            (0, 1, 0),
            (0, 0, 0),
            (0, 0, 1),
            (1, 0, 1),
            (1, 1, 1),
        ];
        assert_eq!(
            check_solution(&two_cube(), &path),
            Err(PathError::Overlap {
                position: (0, 0, 0)
            })
        );
    }
}
