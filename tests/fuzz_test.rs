/// Fuzzes the search by checking on many random grids that a path is found exactly when start and
/// end share a connected component, and that its length matches a brute-force breadth-first search.
/// Every solver (Dijkstra, A* with either heuristic) is tested.
use grid_search::grid::{at, Grid};
use grid_search::solver::astar::{AstarSolver, Heuristic};
use grid_search::solver::dijkstra::DijkstraSolver;
use grid_search::solver::GridSolver;
use grid_search::{is_contiguous, ConfigError, FailureReason, SearchOutcome};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use rand::prelude::*;
use std::collections::{HashMap, VecDeque};

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(w, h, false);
    for x in 0..grid.width() as i32 {
        for y in 0..grid.height() as i32 {
            grid.set(x, y, rng.gen_bool(0.35))
        }
    }
    grid
}

fn bfs_distance(grid: &Grid, start: Point, end: Point) -> Option<usize> {
    if grid.get(start.x, start.y) || grid.get(end.x, end.y) {
        return None;
    }
    let mut distances = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        let d = distances[&p];
        if p == end {
            return Some(d);
        }
        for n in grid.neighbours_of(p) {
            distances.entry(n).or_insert_with(|| {
                queue.push_back(n);
                d + 1
            });
        }
    }
    None
}

fn visualize_grid(grid: &Grid) {
    println!("{grid}");
}

#[test]
fn fuzz() {
    const N: usize = 8;
    const N_GRIDS: usize = 3000;
    let mut rng = StdRng::seed_from_u64(0);
    type Solve<'a> = &'a dyn Fn(&mut Grid, Point, Point) -> Result<SearchOutcome, ConfigError>;
    let solvers: [(&str, Solve<'_>); 3] = [
        ("dijkstra", &|g: &mut Grid, s: Point, e: Point| {
            DijkstraSolver.get_path_single_goal(g, s, e)
        }),
        ("astar manhattan", &|g: &mut Grid, s: Point, e: Point| {
            AstarSolver::with_heuristic(Heuristic::Manhattan).get_path_single_goal(g, s, e)
        }),
        ("astar vertical", &|g: &mut Grid, s: Point, e: Point| {
            AstarSolver::with_heuristic(Heuristic::Vertical).get_path_single_goal(g, s, e)
        }),
    ];
    let start = at(0, 0);
    let end = at(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        grid.set_start(start).unwrap();
        grid.set_end(end).unwrap();
        grid.generate_components();
        let reachable = grid.reachable(&start, &end);
        let expected = bfs_distance(&grid, start, end);
        assert_eq!(reachable, expected.is_some());
        for (name, solve) in &solvers {
            grid.reset_search();
            let outcome = solve(&mut grid, start, end).unwrap();
            if outcome.path_length() != expected {
                println!("{name} found {:?}, expected {:?}", outcome.path_length(), expected);
                visualize_grid(&grid);
            }
            assert_eq!(outcome.path_length(), expected);
            match outcome.path() {
                Some(path) => {
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&end));
                    assert!(is_contiguous(path));
                    assert!(path.iter().all(|p| !grid.cell(*p).unwrap().is_barrier()));
                }
                None => assert_eq!(outcome.failure(), Some(FailureReason::NoPathExists)),
            }
        }
    }
}

/// Random barrier edits must leave the components consistent with a fresh regeneration.
#[test]
fn fuzz_incremental_components() {
    const N: usize = 6;
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = Grid::new(N, N, false);
    grid.generate_components();
    for _ in 0..500 {
        let p = at(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        grid.set_barrier(p, rng.gen_bool(0.4)).unwrap();
        grid.update();
        let a = at(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let b = at(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let mut fresh = grid.clone();
        fresh.generate_components();
        assert_eq!(grid.reachable(&a, &b), fresh.reachable(&a, &b));
        assert_eq!(grid.reachable(&a, &b), bfs_distance(&grid, a, b).is_some());
    }
}
