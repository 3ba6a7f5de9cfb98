use grid_util::point::Point;

use crate::solver::GridSolver;

/// Uniform-cost search: the shared search with no heuristic guidance.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Point, _: &Point) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FailureReason;
    use crate::grid::{at, Grid};
    use grid_util::grid::ValueGrid;

    #[test]
    fn routes_around_a_wall() {
        // |S..#....|
        // |.#.#.##.|
        // |.#...#.E|
        let mut grid: Grid = "S..#....\n.#.#.##.\n.#...#.E".parse().unwrap();
        let outcome = DijkstraSolver.run(&mut grid, &mut crate::Silent).unwrap();
        assert_eq!(outcome.path_length(), Some(13));
    }

    #[test]
    fn enclosed_goal_exhausts_frontier() {
        let mut grid = Grid::new(6, 6, false);
        for p in [at(3, 4), at(3, 5), at(4, 3), at(5, 3)] {
            grid.set_barrier(p, true).unwrap();
        }
        let outcome = DijkstraSolver
            .get_path_single_goal(&mut grid, at(0, 0), at(5, 5))
            .unwrap();
        assert_eq!(outcome.failure(), Some(FailureReason::NoPathExists));
        // Every cell outside the enclosure was reached.
        assert!(grid
            .cells()
            .filter(|c| c.row < 3 || c.col < 3)
            .all(|c| c.g_cost().is_some()));
    }
}
