//! The best-first loop shared by every grid solver. With a zero heuristic it is Dijkstra's
//! algorithm, with an admissible one it is A*.
use crate::cell::{Cell, Stage, UNREACHED};
use crate::error::ConfigError;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::observer::StepObserver;
use crate::STEP_COST;
use grid_util::point::Point;
use log::{debug, info, warn};
use std::ops::ControlFlow;

/// Why a search ended without a path.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// The frontier ran dry before the end was reached.
    #[error("no path exists")]
    NoPathExists,
    /// The step observer asked the search to stop.
    #[error("search cancelled")]
    Cancelled,
}

/// Terminal result of a search on a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Cells from start to end, both included.
    Success(Vec<Point>),
    Failure(FailureReason),
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success(_))
    }
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchOutcome::Success(path) => Some(path),
            SearchOutcome::Failure(_) => None,
        }
    }
    /// Number of steps on the path, so `0` when start and end coincide.
    pub fn path_length(&self) -> Option<usize> {
        self.path().map(crate::path_length)
    }
    pub fn failure(&self) -> Option<FailureReason> {
        match self {
            SearchOutcome::Success(_) => None,
            SearchOutcome::Failure(reason) => Some(*reason),
        }
    }
}

fn check_endpoint(grid: &Grid, p: Point) -> Result<(), ConfigError> {
    match grid.cell(p) {
        None => Err(ConfigError::OutOfBounds(p)),
        Some(cell) if cell.is_barrier() => Err(ConfigError::BlockedEndpoint(p)),
        Some(_) => Ok(()),
    }
}

/// Searches `grid` from `start` to `end`, recording progress in the cells and notifying `observer`
/// after every state change. `heuristic` estimates the remaining cost from a point to `end`.
///
/// The grid must not carry results of an earlier search, see [Grid::reset_search].
pub fn search<FH, O>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    heuristic: FH,
    observer: &mut O,
) -> Result<SearchOutcome, ConfigError>
where
    FH: FnMut(&Point, &Point) -> u32,
    O: StepObserver + ?Sized,
{
    if grid.is_empty() {
        return Err(ConfigError::EmptyGrid);
    }
    check_endpoint(grid, start)?;
    check_endpoint(grid, end)?;
    if start == end {
        return Ok(SearchOutcome::Success(vec![start]));
    }
    if grid.cell(start).and_then(Cell::g_cost).is_some() {
        warn!("Grid holds results of an earlier search, call reset_search first");
    }
    debug!("Searching from {} to {}", start, end);
    let outcome = match best_first(grid, start, end, heuristic, observer) {
        ControlFlow::Continue(Some(path)) => {
            info!("Found path of length {} from {} to {}", path.len() - 1, start, end);
            SearchOutcome::Success(path)
        }
        ControlFlow::Continue(None) => {
            info!("{} is not reachable from {}", end, start);
            SearchOutcome::Failure(FailureReason::NoPathExists)
        }
        ControlFlow::Break(()) => {
            debug!("Search from {} to {} cancelled", start, end);
            SearchOutcome::Failure(FailureReason::Cancelled)
        }
    };
    Ok(outcome)
}

/// Breaks when the observer cancels, otherwise continues with the path if the end was reached.
fn best_first<FH, O>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    mut heuristic: FH,
    observer: &mut O,
) -> ControlFlow<(), Option<Vec<Point>>>
where
    FH: FnMut(&Point, &Point) -> u32,
    O: StepObserver + ?Sized,
{
    let mut frontier = Frontier::new();
    grid.cell_mut(start).relax(0, None);
    frontier.push(start, heuristic(&start, &end));
    let mut expanded = 0usize;

    while let Some((current, _)) = frontier.pop() {
        if current == end {
            debug!("Reached {} after expanding {} cells", end, expanded);
            let path = reconstruct_path(grid, start, end, observer)?;
            return ControlFlow::Continue(Some(path));
        }
        let current_cost = grid.cell(current).map_or(UNREACHED, |c| c.g_cost);
        debug_assert!(current_cost != UNREACHED);
        for neighbour in grid.neighbours_of(current) {
            let cost = current_cost + STEP_COST;
            if !grid.cell_mut(neighbour).relax(cost, Some(current)) {
                continue;
            }
            let discovered = !frontier.contains(&neighbour);
            frontier.push(neighbour, cost + heuristic(&neighbour, &end));
            if discovered {
                grid.cell_mut(neighbour).stage = Stage::Frontier;
                observer.on_step(grid)?;
            }
        }
        expanded += 1;
        observer.on_step(grid)?;
        if current != start {
            grid.cell_mut(current).stage = Stage::Visited;
        }
    }
    ControlFlow::Continue(None)
}

/// Follows the predecessors from `end` back to `start`, marking every cell on the way.
fn reconstruct_path<O>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    observer: &mut O,
) -> ControlFlow<(), Vec<Point>>
where
    O: StepObserver + ?Sized,
{
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        let Some(previous) = grid.cell(current).and_then(Cell::came_from) else {
            warn!(
                "Predecessors from {} break off at {} before reaching {}",
                end, current, start
            );
            break;
        };
        grid.cell_mut(previous).stage = Stage::Path;
        observer.on_step(grid)?;
        path.push(previous);
        current = previous;
    }
    debug_assert_eq!(current, start, "path does not lead back to the start");
    grid.cell_mut(end).stage = Stage::Path;
    observer.on_step(grid)?;
    path.reverse();
    ControlFlow::Continue(path)
}
