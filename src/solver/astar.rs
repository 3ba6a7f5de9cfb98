use grid_util::point::Point;

use crate::{solver::GridSolver, STEP_COST};

/// Distance estimates available to [AstarSolver]. Both are admissible on a 4-connected unit-cost grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Rows plus columns between the two points.
    #[default]
    Manhattan,
    /// Rows between the two points only. Weaker guidance, same optimal paths.
    Vertical,
}

impl Heuristic {
    pub fn estimate(&self, p1: &Point, p2: &Point) -> u32 {
        let steps = match self {
            Heuristic::Manhattan => p1.x.abs_diff(p2.x) + p1.y.abs_diff(p2.y),
            Heuristic::Vertical => p1.y.abs_diff(p2.y),
        };
        steps * STEP_COST
    }
}

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic: Heuristic,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic: Heuristic::Manhattan,
        }
    }
    pub fn with_heuristic(heuristic: Heuristic) -> AstarSolver {
        AstarSolver { heuristic }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Point, p2: &Point) -> u32 {
        self.heuristic.estimate(p1, p2)
    }
}

#[cfg(test)]
mod tests {
    use grid_util::grid::ValueGrid;

    use super::*;
    use crate::cell::Stage;
    use crate::grid::{at, Grid};
    use crate::solver::dijkstra::DijkstraSolver;

    const HEURISTICS: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::Vertical];

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        for heuristic in HEURISTICS {
            let mut grid = Grid::new(1, 1, false);
            let solver = AstarSolver::with_heuristic(heuristic);
            let start = at(0, 0);
            let outcome = solver.get_path_single_goal(&mut grid, start, start).unwrap();
            assert_eq!(outcome.path().unwrap(), &[start]);
            assert_eq!(outcome.path_length(), Some(0));
        }
    }

    /// Asserts that the optimal 4 step solution is found.
    #[test]
    fn solve_simple_problem() {
        for heuristic in HEURISTICS {
            let mut grid = Grid::new(3, 3, false);
            grid.set(1, 1, true);
            let solver = AstarSolver::with_heuristic(heuristic);
            let outcome = solver
                .get_path_single_goal(&mut grid, at(0, 0), at(2, 2))
                .unwrap();
            assert_eq!(outcome.path().unwrap().len(), 5);
        }
    }

    #[test]
    fn test_complex() {
        for heuristic in HEURISTICS {
            let mut grid = Grid::new(10, 10, false);
            for (x, y) in [(1, 1), (5, 0), (0, 5), (8, 8)] {
                grid.set(x, y, true);
            }
            let solver = AstarSolver::with_heuristic(heuristic);
            let outcome = solver
                .get_path_single_goal(&mut grid, Point::new(0, 0), Point::new(7, 7))
                .unwrap();
            assert_eq!(outcome.path().unwrap().len(), 15);
        }
    }

    #[test]
    fn estimates() {
        let p1 = at(1, 7);
        let p2 = at(4, 2);
        assert_eq!(Heuristic::Manhattan.estimate(&p1, &p2), 8);
        assert_eq!(Heuristic::Vertical.estimate(&p1, &p2), 3);
        assert_eq!(DijkstraSolver.heuristic(&p1, &p2), 0);
    }

    /// Guidance along a straight corridor keeps the search from flooding the grid.
    #[test]
    fn manhattan_expands_fewer_cells_than_dijkstra() {
        let expanded = |solver: &dyn Fn(&mut Grid)| {
            let mut grid = Grid::new(9, 9, false);
            solver(&mut grid);
            grid.cells()
                .filter(|c| matches!(c.stage(), Stage::Visited | Stage::Path))
                .count()
        };
        let astar = expanded(&|grid| {
            AstarSolver::new()
                .get_path_single_goal(grid, at(4, 0), at(4, 8))
                .unwrap();
        });
        let dijkstra = expanded(&|grid| {
            DijkstraSolver
                .get_path_single_goal(grid, at(4, 0), at(4, 8))
                .unwrap();
        });
        assert_eq!(astar, 9);
        assert!(astar < dijkstra);
    }
}
