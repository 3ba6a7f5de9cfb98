use grid_search::grid::{at, Grid};
use grid_search::solver::astar::{AstarSolver, Heuristic};
use grid_search::solver::dijkstra::DijkstraSolver;
use grid_search::solver::GridSolver;
use grid_search::SearchOutcome;
use grid_util::grid::ValueGrid;
use std::ops::ControlFlow;

// Prints every frame of a search on a 50x50 grid with a small block of barriers between start and
// end, then the number of frames each solver needed. Pass `dijkstra` or `vertical` as the first
// argument to pick another solver than A* with the Manhattan heuristic, and `quiet` as the second
// to only print the final frame. Set RUST_LOG=debug to see the search log.

const ROWS: usize = 50;

fn main() {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let solver = args.next().unwrap_or_default();
    let quiet = args.next().as_deref() == Some("quiet");

    let mut grid = Grid::new(ROWS, ROWS, false);
    grid.set_start(at(10, 10)).unwrap();
    grid.set_end(at(40, 40)).unwrap();
    for (row, col) in [(20, 20), (20, 21), (21, 20), (21, 21)] {
        grid.set_barrier(at(row, col), true).unwrap();
    }

    let mut frames = 0usize;
    let mut draw = |g: &Grid| {
        frames += 1;
        if !quiet {
            println!("\x1b[H{g}");
        }
        ControlFlow::Continue(())
    };
    let outcome = match solver.as_str() {
        "dijkstra" => DijkstraSolver.run(&mut grid, &mut draw),
        "vertical" => AstarSolver::with_heuristic(Heuristic::Vertical).run(&mut grid, &mut draw),
        _ => AstarSolver::new().run(&mut grid, &mut draw),
    };
    println!("{grid}");
    match outcome {
        Ok(SearchOutcome::Success(path)) => {
            println!("Path of length {} after {} frames", path.len() - 1, frames)
        }
        Ok(SearchOutcome::Failure(reason)) => println!("{reason} after {frames} frames"),
        Err(err) => eprintln!("Invalid grid: {err}"),
    }
}
