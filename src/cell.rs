use grid_util::point::Point;

/// Cost value of a cell that has not been reached yet.
pub const UNREACHED: u32 = u32::MAX;

/// What a cell is, as configured by whoever builds the grid. Independent of search progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Open,
    Barrier,
    Start,
    End,
}

/// How far the search has progressed on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    #[default]
    Unvisited,
    Frontier,
    Visited,
    Path,
}

/// The state a renderer shows for a cell: the [CellKind] layered over the [Stage].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Unvisited,
    Frontier,
    Visited,
    Barrier,
    Start,
    End,
    Path,
}

/// A single grid position together with the bookkeeping the search keeps on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
    pub(crate) kind: CellKind,
    pub(crate) stage: Stage,
    pub(crate) g_cost: u32,
    pub(crate) came_from: Option<Point>,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Cell {
        Cell {
            row,
            col,
            kind: CellKind::Open,
            stage: Stage::Unvisited,
            g_cost: UNREACHED,
            came_from: None,
        }
    }
    pub fn pos(&self) -> Point {
        Point::new(self.col, self.row)
    }
    pub fn kind(&self) -> CellKind {
        self.kind
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn is_barrier(&self) -> bool {
        self.kind == CellKind::Barrier
    }
    /// Best known cost from the start, [None] while the cell is unreached.
    pub fn g_cost(&self) -> Option<u32> {
        (self.g_cost != UNREACHED).then_some(self.g_cost)
    }
    /// The predecessor on the best known route from the start.
    pub fn came_from(&self) -> Option<Point> {
        self.came_from
    }
    pub fn state(&self) -> CellState {
        match self.kind {
            CellKind::Barrier => CellState::Barrier,
            CellKind::Start => CellState::Start,
            CellKind::End => CellState::End,
            CellKind::Open => match self.stage {
                Stage::Unvisited => CellState::Unvisited,
                Stage::Frontier => CellState::Frontier,
                Stage::Visited => CellState::Visited,
                Stage::Path => CellState::Path,
            },
        }
    }
    /// Clears search progress. The [CellKind] is configuration and is kept.
    pub fn reset(&mut self) {
        self.stage = Stage::Unvisited;
        self.g_cost = UNREACHED;
        self.came_from = None;
    }
    /// Records a cheaper route through `from`. Returns [false] and leaves the cell untouched
    /// if `cost` is not an improvement, so the cost never increases once set.
    pub(crate) fn relax(&mut self, cost: u32, from: Option<Point>) -> bool {
        if cost < self.g_cost {
            self.g_cost = cost;
            self.came_from = from;
            true
        } else {
            false
        }
    }
}
