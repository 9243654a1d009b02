//! Snake shapes: the ordered segment lengths of a hinged chain of unit cubes.
//!
//! A chain of segments with lengths `l_1..l_k` has `1 + sum(l_i)` cubes, and
//! fills an `N x N x N` cube only if that count equals `N^3`.

use crate::error::{ShapeError, ShapeResult};

/// The classic 3x3x3 wooden snake cube.
pub const DEFAULT_SHAPE: &[u32] = &[2, 1, 1, 2, 1, 2, 1, 1, 2, 2, 1, 1, 1, 2, 2, 2, 2];

/// A validated shape together with the edge length of the cube it fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    lengths: Vec<u32>,
    size: u32,
}

impl Shape {
    /// Validates segment lengths and derives the cube size.
    ///
    /// Fails if the shape is empty, contains a zero-length segment, or if the
    /// chain's cube count is not a perfect cube of edge length 2 or more.
    pub fn new(lengths: Vec<u32>) -> ShapeResult<Self> {
        if lengths.is_empty() {
            return Err(ShapeError::Empty);
        }
        if let Some(index) = lengths.iter().position(|&length| length == 0) {
            return Err(ShapeError::ZeroLength { index });
        }

        let cells = 1 + lengths.iter().map(|&length| u64::from(length)).sum::<u64>();
        let size = exact_cube_root(cells).ok_or(ShapeError::NotACube { cells })?;
        if size < 2 {
            return Err(ShapeError::TooSmall { size });
        }

        Ok(Self { lengths, size })
    }

    /// Segment lengths in chain order.
    pub fn lengths(&self) -> &[u32] {
        &self.lengths
    }

    /// Edge length `N` of the cube.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of lattice cells, `N^3`.
    pub fn cell_count(&self) -> usize {
        let size = self.size as usize;
        size * size * size
    }

    /// Number of segments in the chain.
    pub fn segment_count(&self) -> usize {
        self.lengths.len()
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            lengths: DEFAULT_SHAPE.to_vec(),
            size: 3,
        }
    }
}

/// Returns `n` such that `n^3 == value`, if one exists.
fn exact_cube_root(value: u64) -> Option<u32> {
    // the float estimate is within one of the true root for all u64 inputs
    let estimate = (value as f64).cbrt().round() as u64;
    let low = estimate.saturating_sub(1);
    (low..=estimate + 1)
        .find(|&root| root.checked_pow(3) == Some(value))
        .and_then(|root| u32::try_from(root).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_shape_is_three_cube() {
        let shape = Shape::new(DEFAULT_SHAPE.to_vec()).unwrap();
        assert_eq!(shape.size(), 3);
        assert_eq!(shape.cell_count(), 27);
        assert_eq!(shape.segment_count(), 17);
        assert_eq!(shape, Shape::default());
    }

    #[test]
    fn test_single_unit_segment_is_not_a_cube() {
        assert_eq!(Shape::new(vec![1]), Err(ShapeError::NotACube { cells: 2 }));
    }

    #[test]
    fn test_eight_unit_segments_is_not_a_cube() {
        assert_eq!(
            Shape::new(vec![1; 8]),
            Err(ShapeError::NotACube { cells: 9 })
        );
    }

    #[test]
    fn test_empty_and_zero_length_rejected() {
        assert_eq!(Shape::new(vec![]), Err(ShapeError::Empty));
        assert_eq!(
            Shape::new(vec![2, 0, 5]),
            Err(ShapeError::ZeroLength { index: 1 })
        );
    }

    #[test]
    fn test_two_cube() {
        let shape = Shape::new(vec![1; 7]).unwrap();
        assert_eq!(shape.size(), 2);
        assert_eq!(shape.cell_count(), 8);
    }

    #[test]
    fn test_exact_cube_root() {
        assert_eq!(exact_cube_root(1), Some(1));
        assert_eq!(exact_cube_root(8), Some(2));
        assert_eq!(exact_cube_root(27), Some(3));
        assert_eq!(exact_cube_root(64), Some(4));
        assert_eq!(exact_cube_root(63), None);
        assert_eq!(exact_cube_root(65), None);
        assert_eq!(exact_cube_root(1_000_000_000_000), Some(10_000));
    }

    proptest! {
        /// A shape is accepted exactly when its cube count is a cube of size >= 2.
        #[test]
        fn shape_accepted_iff_cube(lengths in prop::collection::vec(1u32..20, 1..40)) {
            let cells: u64 = 1 + lengths.iter().map(|&l| u64::from(l)).sum::<u64>();
            let is_cube = (2u64..=20).any(|n| n * n * n == cells);
            match Shape::new(lengths) {
                Ok(shape) => {
                    prop_assert!(is_cube);
                    prop_assert_eq!(shape.cell_count() as u64, cells);
                }
                Err(err) => {
                    prop_assert!(!is_cube);
                    prop_assert_eq!(err, ShapeError::NotACube { cells });
                }
            }
        }
    }
}
