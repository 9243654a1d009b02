//! Snake Cube Solver
//!
//! Folds a hinged chain of unit cubes into a solid cube. The chain is given as
//! its segment lengths; the solver searches depth-first for a placement where
//! every segment runs straight, every hinge turns, and every cell is filled.
//! The search can be watched progressively in an interactive 3D viewer.

mod visualization;

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use snake_cube::shape::DEFAULT_SHAPE;
use snake_cube::{render, solver, verify, SearchOutcome, Shape, Solution};

/// Exit code for a well-formed shape that cannot be folded.
const EXIT_NO_SOLUTION: u8 = 2;

/// Solves snake cube puzzles and visualizes the search.
#[derive(Parser)]
#[command(name = "snake")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Segment lengths of the snake, comma separated (default: the classic 3x3x3 snake).
    #[arg(long, global = true, value_delimiter = ',')]
    shape: Option<Vec<u32>>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle and print the solution.
    Solve,
    /// Watch the search in an interactive 3D viewer.
    Display {
        /// Delay between displayed search steps, in milliseconds.
        #[arg(long, default_value_t = 30)]
        frame_delay_ms: u64,
    },
    /// Validate the shape and print the cube size without searching.
    Check,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let shape = match Shape::new(cli.shape.unwrap_or_else(|| DEFAULT_SHAPE.to_vec())) {
        Ok(shape) => shape,
        Err(e) => {
            eprintln!("Invalid shape: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Some(Command::Solve) => match run_solver(&shape) {
            Some(_) => ExitCode::SUCCESS,
            None => ExitCode::from(EXIT_NO_SOLUTION),
        },
        Some(Command::Display { frame_delay_ms }) => {
            println!("Controls: Space pause/resume");
            visualization::display_search(shape, Duration::from_millis(frame_delay_ms));
            ExitCode::SUCCESS
        }
        Some(Command::Check) => {
            println!(
                "{} segments, {} cubes, fills a {n}x{n}x{n} cube",
                shape.segment_count(),
                shape.cell_count(),
                n = shape.size()
            );
            ExitCode::SUCCESS
        }
        None => {
            // default: solve and display
            match run_solver(&shape) {
                Some(solution) => {
                    visualization::display_solution(shape.size(), &solution);
                    ExitCode::SUCCESS
                }
                None => ExitCode::from(EXIT_NO_SOLUTION),
            }
        }
    }
}

/// Solves the puzzle, prints the result, and returns the solution if any.
fn run_solver(shape: &Shape) -> Option<Solution> {
    let report = solver::solve(shape);

    match report.outcome {
        SearchOutcome::Solved(solution) => {
            if let Err(e) = verify::check_solution(shape, &solution.path) {
                warn!(error = %e, "solution failed verification");
            }
            println!("Solution for a {n}x{n}x{n} cube:", n = shape.size());
            print!("{}", render::format_path(&solution.path));
            println!();
            print!("{}", render::format_solution(shape.size(), &solution.path));
            Some(solution)
        }
        SearchOutcome::NoSolution | SearchOutcome::Aborted => {
            println!("No solution found");
            None
        }
    }
}
