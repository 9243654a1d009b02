//! Text rendering of solved snake cubes.

use std::fmt::Write;

use crate::geometry::{in_bounds, trace, Coord};

/// Converts (x, y, z) coordinates to a linear cell index.
///
/// Index order is x-major: `idx = x * size * size + y * size + z`.
#[inline(always)]
fn coord_to_idx(size: usize, (x, y, z): Coord) -> usize {
    (x as usize) * size * size + (y as usize) * size + (z as usize)
}

/// Formats a solution as a human-readable string.
///
/// Displays the z-slices side by side. Each cell shows its position along the
/// chain (0 for the starting corner); cells the path never reaches show as `.`.
/// Path points outside the lattice are skipped.
pub fn format_solution(size: u32, path: &[Coord]) -> String {
    let dim = size as usize;
    let cell_count = dim * dim * dim;

    let mut visit_order: Vec<Option<usize>> = vec![None; cell_count];
    for (order, cell) in trace(path).into_iter().enumerate() {
        if in_bounds(cell, size as i32) {
            visit_order[coord_to_idx(dim, cell)] = Some(order);
        }
    }

    let cell_width = cell_count.saturating_sub(1).to_string().len();
    let slice_width = dim * (cell_width + 1) - 1;

    // header: z=0, z=1, ..., z=size-1
    let mut output = String::new();
    for z in 0..dim {
        if z > 0 {
            output.push_str("  ");
        }
        let label = format!("z={z}");
        if z + 1 < dim {
            output.push_str(&format!("{label:<slice_width$}"));
        } else {
            output.push_str(&label);
        }
    }
    output.push('\n');

    // rows from top (y=size-1) to bottom (y=0)
    for y in (0..dim).rev() {
        for z in 0..dim {
            if z > 0 {
                output.push_str("  ");
            }
            for x in 0..dim {
                if x > 0 {
                    output.push(' ');
                }
                let cell = (x as i32, y as i32, z as i32);
                match visit_order[coord_to_idx(dim, cell)] {
                    Some(order) => output.push_str(&format!("{order:>cell_width$}")),
                    None => output.push_str(&format!("{:>cell_width$}", '.')),
                }
            }
        }
        output.push('\n');
    }

    output
}

/// Lists the segment endpoints, one per line.
pub fn format_path(path: &[Coord]) -> String {
    let mut output = String::new();
    for (index, &(x, y, z)) in path.iter().enumerate() {
        // writing to a String cannot fail
        let _ = writeln!(output, "{index:>3}: ({x}, {y}, {z})");
    }
    output
}
