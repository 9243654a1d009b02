//! 3D visualization of the snake cube search using kiss3d.
//!
//! The search runs on a worker thread and publishes its states through a
//! bounded channel. The viewer replays them at a fixed pace. When the viewer
//! falls behind, the observer drops states instead of waiting, so the search
//! never blocks on rendering.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use kiss3d::prelude::*;
use tracing::{debug, info, warn};

use snake_cube::geometry::Coord;
use snake_cube::{solver, OccupancyMap, SearchObserver, SearchOutcome, Shape, Solution};

/// Number of search states buffered between the worker and the viewer.
const FRAME_BUFFER: usize = 4096;

/// A search state copied out of the solver.
struct Frame {
    /// Occupied cells, in no particular order.
    cells: Vec<Coord>,
    /// Segment endpoints placed so far.
    path: Vec<Coord>,
}

impl Frame {
    fn capture(occupancy: &OccupancyMap, path: &[Coord]) -> Self {
        Self {
            cells: occupancy
                .entries()
                .filter_map(|(position, occupied)| occupied.then_some(position))
                .collect(),
            path: path.to_vec(),
        }
    }
}

/// Message from the search worker to the viewer.
enum Update {
    /// An intermediate state.
    Progress(Frame),
    /// The final state of a successful search.
    Solved(Frame),
    /// The search ended without a solution.
    NoSolution,
}

/// Forwards search states to the viewer without ever blocking.
struct ChannelObserver {
    sender: SyncSender<Update>,
    cancelled: Arc<AtomicBool>,
    dropped_frames: u64,
}

impl SearchObserver for ChannelObserver {
    fn on_commit(&mut self, occupancy: &OccupancyMap, path: &[Coord]) -> ControlFlow<()> {
        if self.cancelled.load(Ordering::Relaxed) {
            return ControlFlow::Break(());
        }

        match self
            .sender
            .try_send(Update::Progress(Frame::capture(occupancy, path)))
        {
            Ok(()) => ControlFlow::Continue(()),
            Err(TrySendError::Full(_)) => {
                self.dropped_frames += 1;
                ControlFlow::Continue(())
            }
            // viewer closed
            Err(TrySendError::Disconnected(_)) => ControlFlow::Break(()),
        }
    }
}

/// Runs the search and publishes its states, finishing with the outcome.
fn run_search(shape: &Shape, sender: SyncSender<Update>, cancelled: Arc<AtomicBool>) {
    let mut observer = ChannelObserver {
        sender: sender.clone(),
        cancelled,
        dropped_frames: 0,
    };
    let report = solver::solve_with(shape, &mut observer);
    debug!(dropped = observer.dropped_frames, "search worker finished");

    let last = match report.outcome {
        SearchOutcome::Solved(solution) => {
            Update::Solved(Frame::capture(&solution.occupancy, &solution.path))
        }
        SearchOutcome::NoSolution => Update::NoSolution,
        SearchOutcome::Aborted => return,
    };
    // the search is over, so waiting for room in the buffer is fine here
    if sender.send(last).is_err() {
        debug!("viewer closed before the search finished");
    }
}

/// Returns the display color for a cell.
///
/// Alternating light and dark cubes make the individual cells readable.
fn cell_color((x, y, z): Coord) -> Color {
    if (x + y + z) % 2 == 0 {
        Color::new(0.55, 0.35, 0.2, 1.0) // dark wood
    } else {
        Color::new(0.87, 0.72, 0.53, 1.0) // light wood
    }
}

/// Color of the path markers.
fn marker_color() -> Color {
    Color::new(0.1, 0.8, 0.2, 1.0)
}

/// Builds the 3D scene for one search state.
///
/// Coordinate conventions:
/// - Solver coordinates use integer x, y, z in `0..size`.
/// - Rendered cubes map x->X, y->Y, z->Z in world units.
/// - The lattice is centered at the origin.
///
/// Returns every node added, so the caller can remove them on the next frame.
fn build_scene(scene: &mut SceneNode3d, size: u32, frame: &Frame) -> Vec<SceneNode3d> {
    /// Size of each rendered cube (slightly smaller than 1.0 for visible gaps).
    const CUBE_SIZE: f32 = 0.9;
    /// Size of the markers at segment endpoints.
    const JOINT_SIZE: f32 = 0.2;
    /// Size of the marker at the chain's current end.
    const HEAD_SIZE: f32 = 0.35;

    let center_offset = -(size as f32 - 1.0) / 2.0;
    let world = |(x, y, z): Coord| {
        Vec3::new(
            x as f32 + center_offset,
            y as f32 + center_offset,
            z as f32 + center_offset,
        )
    };

    let mut nodes = Vec::with_capacity(frame.cells.len() + frame.path.len() + 1);

    for &cell in &frame.cells {
        let node = scene
            .add_cube(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)
            .set_color(cell_color(cell))
            .set_position(world(cell));
        nodes.push(node);
    }

    for &joint in &frame.path {
        let node = scene
            .add_cube(JOINT_SIZE, JOINT_SIZE, JOINT_SIZE)
            .set_color(marker_color())
            .set_position(world(joint));
        nodes.push(node);
    }

    if let Some(&head) = frame.path.last() {
        let node = scene
            .add_cube(HEAD_SIZE, HEAD_SIZE, HEAD_SIZE)
            .set_color(marker_color())
            .set_position(world(head));
        nodes.push(node);
    }

    nodes
}

/// Animates the search for `shape`, showing a new state every `frame_delay`.
pub fn display_search(shape: Shape, frame_delay: Duration) {
    let size = shape.size();
    let (sender, receiver) = mpsc::sync_channel(FRAME_BUFFER);
    let cancelled = Arc::new(AtomicBool::new(false));

    let worker = {
        let cancelled = Arc::clone(&cancelled);
        thread::spawn(move || run_search(&shape, sender, cancelled))
    };

    pollster::block_on(display_async(size, receiver, frame_delay));

    cancelled.store(true, Ordering::Relaxed);
    if worker.join().is_err() {
        warn!("search worker panicked");
    }
}

/// Displays a finished solution.
pub fn display_solution(size: u32, solution: &Solution) {
    let (sender, receiver) = mpsc::sync_channel(1);
    let frame = Frame::capture(&solution.occupancy, &solution.path);
    if sender.send(Update::Solved(frame)).is_err() {
        return;
    }
    drop(sender);

    pollster::block_on(display_async(size, receiver, Duration::ZERO));
}

async fn display_async(size: u32, updates: Receiver<Update>, frame_delay: Duration) {
    let mut window = Window::new(&format!(
        "Snake cube {size}x{size}x{size} - searching... [Space] pause"
    ))
    .await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(size as f32 * 2.5 + 2.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(10.0, 10.0, 10.0));

    let mut nodes: Vec<SceneNode3d> = Vec::new();
    let mut shown_frames: u64 = 0;
    let mut paused = false;
    let mut finished = false;
    let mut last_frame = Instant::now();

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press && key == Key::Space {
                    paused = !paused;
                }
            }
        }

        if !paused && !finished && last_frame.elapsed() >= frame_delay {
            match updates.try_recv() {
                Ok(update) => {
                    let (frame, title) = match update {
                        Update::Progress(frame) => {
                            shown_frames += 1;
                            let title = format!(
                                "Snake cube {size}x{size}x{size} - step {shown_frames}, {} cells filled",
                                frame.cells.len()
                            );
                            (Some(frame), title)
                        }
                        Update::Solved(frame) => {
                            finished = true;
                            info!(steps = shown_frames, "showing solution");
                            (Some(frame), format!("Snake cube {size}x{size}x{size} - solved"))
                        }
                        Update::NoSolution => {
                            finished = true;
                            (None, format!("Snake cube {size}x{size}x{size} - no solution"))
                        }
                    };

                    if let Some(frame) = frame {
                        for mut node in nodes.drain(..) {
                            node.remove();
                        }
                        nodes = build_scene(&mut scene, size, &frame);
                    }
                    window.set_title(&title);
                    last_frame = Instant::now();
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => finished = true,
            }
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
