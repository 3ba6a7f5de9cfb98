use crate::engine::{search, SearchOutcome};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::observer::{Silent, StepObserver};
use grid_util::point::Point;

pub mod astar;
pub mod dijkstra;

/// A grid solver is the shared best-first search plus a heuristic. Every method runs on a grid
/// whose search bookkeeping is clean, see [Grid::reset_search].
pub trait GridSolver {
    /// Estimated remaining cost from `p1` to `p2`. Must not overestimate for the path to be shortest.
    fn heuristic(&self, p1: &Point, p2: &Point) -> u32;

    /// Searches from `start` to `goal`, notifying `observer` after each cell state change.
    fn get_path<O>(
        &self,
        grid: &mut Grid,
        start: Point,
        goal: Point,
        observer: &mut O,
    ) -> Result<SearchOutcome, ConfigError>
    where
        O: StepObserver + ?Sized,
    {
        search(grid, start, goal, |p, end| self.heuristic(p, end), observer)
    }

    /// [get_path](Self::get_path) without anyone watching.
    fn get_path_single_goal(
        &self,
        grid: &mut Grid,
        start: Point,
        goal: Point,
    ) -> Result<SearchOutcome, ConfigError> {
        self.get_path(grid, start, goal, &mut Silent)
    }

    /// Searches between the start and end designated on the grid itself.
    fn run<O>(&self, grid: &mut Grid, observer: &mut O) -> Result<SearchOutcome, ConfigError>
    where
        O: StepObserver + ?Sized,
    {
        if grid.is_empty() {
            return Err(ConfigError::EmptyGrid);
        }
        let start = grid.start().ok_or(ConfigError::MissingStart)?;
        let end = grid.end().ok_or(ConfigError::MissingEnd)?;
        self.get_path(grid, start, end, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::astar::AstarSolver;
    use super::dijkstra::DijkstraSolver;
    use super::*;
    use crate::grid::at;
    use crate::observer::Silent;
    use grid_util::grid::ValueGrid;

    #[test]
    fn run_needs_designated_endpoints() {
        let mut grid = Grid::new(3, 3, false);
        let solver = DijkstraSolver;
        assert_eq!(
            solver.run(&mut grid, &mut Silent),
            Err(ConfigError::MissingStart)
        );
        grid.set_start(at(0, 0)).unwrap();
        assert_eq!(solver.run(&mut grid, &mut Silent), Err(ConfigError::MissingEnd));
        grid.set_end(at(2, 1)).unwrap();
        let outcome = solver.run(&mut grid, &mut Silent).unwrap();
        assert_eq!(outcome.path_length(), Some(3));
    }

    #[test]
    fn run_rejects_empty_grid() {
        let mut grid = Grid::default();
        assert_eq!(
            AstarSolver::new().run(&mut grid, &mut Silent),
            Err(ConfigError::EmptyGrid)
        );
    }
}
