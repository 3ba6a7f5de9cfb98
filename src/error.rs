use grid_util::point::Point;

/// A grid or start/end designation the search cannot run on. Reported before any cell is touched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid has zero rows or columns")]
    EmptyGrid,
    #[error("no start cell designated")]
    MissingStart,
    #[error("no end cell designated")]
    MissingEnd,
    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),
    #[error("{0} is a barrier")]
    BlockedEndpoint(Point),
}

/// Failure to read a grid from its ASCII form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    #[error("map contains no rows")]
    Empty,
    #[error("line {line} has {found} tiles, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile { ch: char, row: usize, col: usize },
    #[error("map marks more than one start")]
    DuplicateStart,
    #[error("map marks more than one end")]
    DuplicateEnd,
}
