//! Lattice coordinates and the six axis-aligned chain directions.
//!
//! Positions and directions share the same integer triple representation.
//! A direction is a triple with exactly one nonzero component equal to +1 or -1.

/// A 3D lattice position or a unit direction vector.
pub type Coord = (i32, i32, i32);

/// The corner the chain always starts from.
pub const ORIGIN: Coord = (0, 0, 0);

/// Direction of the first segment.
pub const INITIAL_DIRECTION: Coord = (1, 0, 0);

/// Number of axis-aligned unit directions.
const NUM_DIRECTIONS: usize = 6;

/// Builds the direction table at compile time.
///
/// Walks `{-1, 0, 1}^3` with x as the outermost loop and keeps the triples of
/// unit length, which yields:
/// `(-1,0,0), (0,-1,0), (0,0,-1), (0,0,1), (0,1,0), (1,0,0)`.
const fn build_direction_table() -> [Coord; NUM_DIRECTIONS] {
    let mut table = [(0, 0, 0); NUM_DIRECTIONS];
    let mut count = 0;

    let mut x = -1;
    while x <= 1 {
        let mut y = -1;
        while y <= 1 {
            let mut z = -1;
            while z <= 1 {
                if x * x + y * y + z * z == 1 {
                    table[count] = (x, y, z);
                    count += 1;
                }
                z += 1;
            }
            y += 1;
        }
        x += 1;
    }

    assert!(count == NUM_DIRECTIONS, "expected six unit directions");
    table
}

/// All six unit directions, in the order the search tries them.
///
/// The first solution found depends on this order, so it must never change.
pub const DIRECTIONS: [Coord; NUM_DIRECTIONS] = build_direction_table();

/// Returns the opposite direction.
#[inline(always)]
pub const fn negate((x, y, z): Coord) -> Coord {
    (-x, -y, -z)
}

/// Moves `steps` unit steps from `start` along `direction`.
#[inline(always)]
pub const fn offset(start: Coord, direction: Coord, steps: i32) -> Coord {
    (
        start.0 + direction.0 * steps,
        start.1 + direction.1 * steps,
        start.2 + direction.2 * steps,
    )
}

/// Returns true if every component of `position` lies in `0..size`.
#[inline(always)]
pub fn in_bounds((x, y, z): Coord, size: i32) -> bool {
    (0..size).contains(&x) && (0..size).contains(&y) && (0..size).contains(&z)
}

/// The four directions a hinge may turn into after travelling along `direction`.
///
/// Excludes the direction itself and its negation, and keeps table order.
pub fn turns(direction: Coord) -> impl Iterator<Item = Coord> {
    let reverse = negate(direction);
    DIRECTIONS
        .into_iter()
        .filter(move |&candidate| candidate != direction && candidate != reverse)
}

/// Splits the move from `from` to `to` into a unit direction and a step count.
///
/// Returns `None` unless the two points differ on exactly one axis.
pub fn axis_step(from: Coord, to: Coord) -> Option<(Coord, u32)> {
    let delta = (to.0 - from.0, to.1 - from.1, to.2 - from.2);
    match delta {
        (0, 0, 0) => None,
        (dx, 0, 0) => Some(((dx.signum(), 0, 0), dx.unsigned_abs())),
        (0, dy, 0) => Some(((0, dy.signum(), 0), dy.unsigned_abs())),
        (0, 0, dz) => Some(((0, 0, dz.signum()), dz.unsigned_abs())),
        _ => None,
    }
}

/// Expands a path of segment endpoints into every cell it passes through.
///
/// The result starts with the first endpoint and lists cells in chain order.
/// Consecutive endpoints that are not axis-aligned contribute only their end.
pub fn trace(path: &[Coord]) -> Vec<Coord> {
    let mut cells = Vec::new();
    let Some(&start) = path.first() else {
        return cells;
    };
    cells.push(start);

    for pair in path.windows(2) {
        match axis_step(pair[0], pair[1]) {
            Some((direction, steps)) => {
                // steps is bounded by the i32 distance between the endpoints
                cells.extend((1..=steps as i32).map(|step| offset(pair[0], direction, step)));
            }
            None => cells.push(pair[1]),
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_table_order() {
        assert_eq!(
            DIRECTIONS,
            [
                (-1, 0, 0),
                (0, -1, 0),
                (0, 0, -1),
                (0, 0, 1),
                (0, 1, 0),
                (1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_turns_exclude_collinear_directions() {
        let after_x: Vec<Coord> = turns((1, 0, 0)).collect();
        assert_eq!(after_x, vec![(0, -1, 0), (0, 0, -1), (0, 0, 1), (0, 1, 0)]);

        let after_neg_z: Vec<Coord> = turns((0, 0, -1)).collect();
        assert_eq!(
            after_neg_z,
            vec![(-1, 0, 0), (0, -1, 0), (0, 1, 0), (1, 0, 0)]
        );
    }

    #[test]
    fn test_every_direction_has_four_turns() {
        for direction in DIRECTIONS {
            let candidates: Vec<Coord> = turns(direction).collect();
            assert_eq!(candidates.len(), 4, "direction {direction:?}");
            assert!(!candidates.contains(&direction));
            assert!(!candidates.contains(&negate(direction)));
        }
    }

    #[test]
    fn test_bounds() {
        assert!(in_bounds((0, 0, 0), 3));
        assert!(in_bounds((2, 2, 2), 3));
        assert!(!in_bounds((3, 0, 0), 3));
        assert!(!in_bounds((0, -1, 0), 3));
    }

    #[test]
    fn test_axis_step() {
        assert_eq!(axis_step((0, 0, 0), (2, 0, 0)), Some(((1, 0, 0), 2)));
        assert_eq!(axis_step((1, 2, 1), (1, 0, 1)), Some(((0, -1, 0), 2)));
        assert_eq!(axis_step((0, 0, 0), (1, 1, 0)), None);
        assert_eq!(axis_step((1, 1, 1), (1, 1, 1)), None);
    }

    #[test]
    fn test_trace_lists_every_cell_in_order() {
        let cells = trace(&[(0, 0, 0), (2, 0, 0), (2, 0, 1)]);
        assert_eq!(cells, vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 0, 1)]);
        assert!(trace(&[]).is_empty());
    }
}
