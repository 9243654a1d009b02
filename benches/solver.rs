//! Benchmarks for the snake cube solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use snake_cube::render::format_solution;
use snake_cube::shape::DEFAULT_SHAPE;
use snake_cube::{solver, OccupancyMap, Shape};

/// Benchmark solving the classic 3x3x3 snake.
fn bench_solve(c: &mut Criterion) {
    let shape = Shape::new(DEFAULT_SHAPE.to_vec()).unwrap();

    c.bench_function("solve_default", |b| {
        b.iter(|| solver::solve(black_box(&shape)))
    });
}

/// Benchmark exhausting a 3x3x3 shape that has no solution.
fn bench_exhaust(c: &mut Criterion) {
    let shape = Shape::new(vec![2, 2, 1, 2, 2, 1, 2, 1, 2, 2, 2, 1, 2, 1, 2, 1]).unwrap();

    c.bench_function("exhaust_unsolvable", |b| {
        b.iter(|| solver::solve(black_box(&shape)))
    });
}

/// Benchmark copying a full 3x3x3 occupancy map, the per-branch cost.
fn bench_occupancy_copy(c: &mut Criterion) {
    let mut occupancy = OccupancyMap::new();
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                occupancy.set((x, y, z), true);
            }
        }
    }

    c.bench_function("occupancy_copy", |b| b.iter(|| black_box(&occupancy).copy()));
}

/// Benchmark formatting a solution for display.
fn bench_format_solution(c: &mut Criterion) {
    let shape = Shape::default();
    let report = solver::solve(&shape);
    let solution = report.outcome.solution().unwrap();

    c.bench_function("format_solution", |b| {
        b.iter(|| format_solution(shape.size(), black_box(&solution.path)))
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_exhaust,
    bench_occupancy_copy,
    bench_format_solution
);
criterion_main!(benches);
