use crate::cell::{Cell, CellKind, CellState};
use crate::error::{ConfigError, GridParseError};
use core::fmt;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// Offsets in neighbour order: down, up, right, left. `dir ^ 1` is the opposite direction.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Builds the [Point] of the cell at `row`, `col`. Points use `x` for the column and `y` for the row.
pub fn at(row: i32, col: i32) -> Point {
    Point::new(col, row)
}

fn step(p: Point, dir: usize) -> Point {
    let (dx, dy) = DIRECTIONS[dir];
    Point::new(p.x + dx, p.y + dy)
}

/// [Grid] owns a fixed `rows` x `cols` block of [Cell]s. Besides the cells it records the passable
/// 4-neighbourhood of every cell as a [u8] bitmask for fast lookups during search, and connected
/// components in a [UnionFind] structure for reachability queries.
/// Implements [ValueGrid] where a [true] value marks a barrier.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    neighbours: Vec<u8>,
    start: Option<Point>,
    end: Option<Point>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            neighbours: Vec::new(),
            start: None,
            end: None,
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.cols && (p.y as usize) < self.rows
    }
    fn ix(&self, p: Point) -> usize {
        debug_assert!(self.in_bounds(p));
        p.y as usize * self.cols + p.x as usize
    }
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        if self.in_bounds(p) {
            Some(&self.cells[self.ix(p)])
        } else {
            None
        }
    }
    /// Callers must check bounds first.
    pub(crate) fn cell_mut(&mut self, p: Point) -> &mut Cell {
        let ix = self.ix(p);
        &mut self.cells[ix]
    }
    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
    /// Display state of the cell at `p`, [None] outside the grid.
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.cell(p).map(Cell::state)
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// The passable orthogonal neighbours of `p` in the order down, up, right, left.
    pub fn neighbours_of(&self, p: Point) -> SmallVec<[Point; 4]> {
        if !self.in_bounds(p) {
            return SmallVec::new();
        }
        let mask = self.neighbours[self.ix(p)];
        (0..DIRECTIONS.len())
            .filter(|dir| mask & (1 << dir) != 0)
            .map(|dir| step(p, dir))
            .collect()
    }
    fn can_move_to(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| !c.is_barrier())
    }
    fn neighbour_mask(&self, p: Point) -> u8 {
        (0..DIRECTIONS.len())
            .filter(|&dir| self.can_move_to(step(p, dir)))
            .fold(0, |mask, dir| mask | 1 << dir)
    }
    /// Refreshes the cached masks of `p` and of the cells around it after `p` changed barrier state.
    fn update_neighbours(&mut self, p: Point, blocked: bool) {
        for dir in 0..DIRECTIONS.len() {
            let n = step(p, dir);
            if self.in_bounds(n) {
                let bit = 1 << (dir ^ 1);
                let n_ix = self.ix(n);
                if blocked {
                    self.neighbours[n_ix] &= !bit;
                } else {
                    self.neighbours[n_ix] |= bit;
                }
            }
        }
        let ix = self.ix(p);
        self.neighbours[ix] = self.neighbour_mask(p);
    }
    /// Joins newly connected components and flags the components as dirty if components are
    /// (potentially) broken apart into multiple.
    fn update_components(&mut self, p: Point, blocked: bool) {
        if blocked {
            self.components_dirty = true;
        } else {
            let p_ix = self.ix(p);
            for n in self.neighbours_of(p) {
                let n_ix = self.ix(n);
                self.components.union(p_ix, n_ix);
            }
        }
    }

    fn set_kind(&mut self, p: Point, kind: CellKind) -> Result<(), ConfigError> {
        if !self.in_bounds(p) {
            return Err(ConfigError::OutOfBounds(p));
        }
        self.assign_kind(p, kind);
        Ok(())
    }
    /// Changes the kind of the in-bounds cell `p`, keeping start and end unique and the caches current.
    fn assign_kind(&mut self, p: Point, kind: CellKind) {
        let ix = self.ix(p);
        let previous = self.cells[ix].kind;
        if previous == kind {
            return;
        }
        match previous {
            CellKind::Start => self.start = None,
            CellKind::End => self.end = None,
            _ => {}
        }
        let displaced = match kind {
            CellKind::Start => self.start.replace(p),
            CellKind::End => self.end.replace(p),
            _ => None,
        };
        if let Some(old) = displaced {
            let old_ix = self.ix(old);
            self.cells[old_ix].kind = CellKind::Open;
        }
        self.cells[ix].kind = kind;
        let blocked = kind == CellKind::Barrier;
        if blocked != (previous == CellKind::Barrier) {
            self.update_neighbours(p, blocked);
            self.update_components(p, blocked);
        }
    }
    /// Designates `p` as the start. A previous start cell becomes open.
    pub fn set_start(&mut self, p: Point) -> Result<(), ConfigError> {
        self.set_kind(p, CellKind::Start)
    }
    /// Designates `p` as the end. A previous end cell becomes open.
    pub fn set_end(&mut self, p: Point) -> Result<(), ConfigError> {
        self.set_kind(p, CellKind::End)
    }
    /// Places or removes a barrier. Placing one on the start or end drops that designation.
    pub fn set_barrier(&mut self, p: Point, blocked: bool) -> Result<(), ConfigError> {
        if blocked {
            self.set_kind(p, CellKind::Barrier)
        } else if self.cell(p).is_some_and(Cell::is_barrier) {
            self.set_kind(p, CellKind::Open)
        } else if self.in_bounds(p) {
            Ok(())
        } else {
            Err(ConfigError::OutOfBounds(p))
        }
    }
    /// Returns `p` to an open, unvisited cell.
    pub fn clear_cell(&mut self, p: Point) -> Result<(), ConfigError> {
        self.set_kind(p, CellKind::Open)?;
        self.cell_mut(p).reset();
        Ok(())
    }
    /// Resets the search bookkeeping of every cell while keeping barriers, start and end.
    pub fn reset_search(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }
    /// Opens every cell and drops the start and end.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.kind = CellKind::Open;
            cell.reset();
        }
        self.start = None;
        self.end = None;
        for ix in 0..self.cells.len() {
            self.neighbours[ix] = self.neighbour_mask(self.cells[ix].pos());
        }
        self.components_dirty = true;
    }

    /// Retrieves the component id a given [Point] belongs to, [None] outside the grid.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.in_bounds(*point)
            .then(|| self.components.find(self.ix(*point)))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.components_dirty {
            warn!("Components are dirty, reachability may be stale");
        }
        self.can_move_to(*start)
            && self.can_move_to(*goal)
            && self.components.equiv(self.ix(*start), self.ix(*goal))
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for ix in 0..self.cells.len() {
            if self.cells[ix].is_barrier() {
                continue;
            }
            let point = self.cells[ix].pos();
            // Down and right suffice, the other two directions are covered from the other side.
            for dir in [0, 2] {
                let n = step(point, dir);
                if self.can_move_to(n) {
                    let n_ix = self.ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line = row
                .iter()
                .map(|cell| match cell.state() {
                    CellState::Unvisited => '.',
                    CellState::Frontier => 'o',
                    CellState::Visited => 'x',
                    CellState::Barrier => '#',
                    CellState::Start => 'S',
                    CellState::End => 'E',
                    CellState::Path => '*',
                })
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Reads a map with one line per row: `.` open, `#` barrier, `S` start, `E` end.
/// Components are generated for the result.
impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let cols = lines.first().ok_or(GridParseError::Empty)?.chars().count();
        let mut grid = Grid::new(cols, lines.len(), false);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridParseError::Ragged {
                    line: row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let p = at(row as i32, col as i32);
                let kind = match ch {
                    '.' => continue,
                    '#' => CellKind::Barrier,
                    'S' if grid.start.is_some() => return Err(GridParseError::DuplicateStart),
                    'S' => CellKind::Start,
                    'E' if grid.end.is_some() => return Err(GridParseError::DuplicateEnd),
                    'E' => CellKind::End,
                    _ => return Err(GridParseError::UnknownTile { ch, row, col }),
                };
                grid.assign_kind(p, kind);
            }
        }
        grid.generate_components();
        Ok(grid)
    }
}

impl ValueGrid<bool> for Grid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let kind = if default_value {
            CellKind::Barrier
        } else {
            CellKind::Open
        };
        let cells = (0..height as i32)
            .flat_map(|row| (0..width as i32).map(move |col| Cell::new(row, col)))
            .map(|mut cell| {
                cell.kind = kind;
                cell
            })
            .collect::<Vec<_>>();
        let mut grid = Grid {
            rows: height,
            cols: width,
            neighbours: vec![0; cells.len()],
            cells,
            start: None,
            end: None,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        for ix in 0..grid.cells.len() {
            grid.neighbours[ix] = grid.neighbour_mask(grid.cells[ix].pos());
        }
        grid.generate_components();
        grid
    }
    /// Positions outside the grid read as blocked.
    fn get(&self, x: i32, y: i32) -> bool {
        self.cell(Point::new(x, y)).map_or(true, Cell::is_barrier)
    }
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        if let Err(err) = self.set_barrier(Point::new(x, y), blocked) {
            warn!("Ignoring barrier update: {err}");
        }
    }
    fn width(&self) -> usize {
        self.cols
    }
    fn height(&self) -> usize {
        self.rows
    }
}
