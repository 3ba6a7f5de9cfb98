//! # grid_search
//!
//! Shortest paths on a 4-connected grid of unit-cost cells, found by a best-first search that
//! reports every cell state change to a [StepObserver] so that a caller can animate, throttle or
//! cancel it. [AstarSolver](solver::astar::AstarSolver) guides the search with an admissible
//! heuristic, [DijkstraSolver](solver::dijkstra::DijkstraSolver) runs it unguided; both find the
//! same shortest path length. Connected components are tracked alongside the grid as a cheap
//! reachability check.
//!
//! The [graph] module holds a standalone Dijkstra over arbitrary nonnegatively weighted graphs.
//!
//! ```
//! use grid_search::grid::{at, Grid};
//! use grid_search::solver::{astar::AstarSolver, GridSolver};
//! use grid_search::Silent;
//!
//! let mut grid: Grid = "S..\n.#.\n..E".parse().unwrap();
//! let outcome = AstarSolver::new().run(&mut grid, &mut Silent).unwrap();
//! assert_eq!(outcome.path_length(), Some(4));
//! assert_eq!(outcome.path().unwrap().last(), Some(&at(2, 2)));
//! ```
pub mod cell;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod grid;
pub mod observer;
pub mod solver;

use grid_util::point::Point;
use itertools::Itertools;

pub use cell::{Cell, CellKind, CellState, Stage};
pub use engine::{FailureReason, SearchOutcome};
pub use error::{ConfigError, GridParseError};
pub use grid::Grid;
pub use observer::{Silent, StepLimit, StepObserver};

/// Cost of one orthogonal move.
pub const STEP_COST: u32 = 1;

/// Number of moves along `path`.
pub fn path_length(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Total cost of following `path`, [None] if it does not fit in a [u32].
pub fn path_cost(path: &[Point]) -> Option<u32> {
    steps_cost(path_length(path))
}

fn steps_cost(steps: usize) -> Option<u32> {
    u32::try_from(steps).ok()?.checked_mul(STEP_COST)
}

/// Checks that every consecutive pair of points on `path` is one orthogonal move apart.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.x.abs_diff(b.x) + a.y.abs_diff(b.y) == 1)
}
