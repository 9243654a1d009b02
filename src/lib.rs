//! Snake Cube Solver Library
//!
//! Finds an embedding of a hinged chain of unit cubes (a "snake") into an
//! `N x N x N` cube: every cell is visited exactly once, each segment runs
//! straight along one axis, and every hinge forces a turn.
//!
//! ```no_run
//! use snake_cube::{solver, Shape};
//!
//! let shape = Shape::new(vec![2, 1, 1, 2, 1, 2, 1, 1, 2, 2, 1, 1, 1, 2, 2, 2, 2])?;
//! let report = solver::solve(&shape);
//! if let Some(solution) = report.outcome.solution() {
//!     print!("{}", snake_cube::render::format_solution(shape.size(), &solution.path));
//! }
//! # Ok::<(), snake_cube::ShapeError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod occupancy;
pub mod render;
pub mod shape;
pub mod solver;
pub mod verify;

pub use error::{PathError, ShapeError};
pub use occupancy::OccupancyMap;
pub use shape::Shape;
pub use solver::{SearchObserver, SearchOutcome, SearchReport, Solution};
