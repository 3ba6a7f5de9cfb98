use grid_search::grid::{at, Grid};
use grid_search::solver::{astar::AstarSolver, GridSolver};
use grid_search::Silent;
use grid_util::grid::ValueGrid;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = Grid::new(3, 3, false);
    grid.set(1, 1, true);
    grid.set_start(at(0, 0)).unwrap();
    grid.set_end(at(2, 2)).unwrap();
    println!("{}", grid);
    let outcome = AstarSolver::new().run(&mut grid, &mut Silent).unwrap();
    println!("{}", grid);
    println!("Path:");
    for p in outcome.path().unwrap_or_default() {
        println!("{:?}", p);
    }
}
