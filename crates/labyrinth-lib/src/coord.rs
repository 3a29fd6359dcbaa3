use std::fmt;

use serde::Serialize;

/// Cell position within a grid, addressed as `(row, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one cell in `direction`, or `None` when that would leave the
    /// non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Coordinate> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row.checked_add(1)?, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col.checked_add(1)?),
        };
        Some(Coordinate { row, col })
    }

    /// `true` when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Orthogonal unit moves on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which the wave-front expands each cell.
    pub const EXPANSION: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Order in which predecessors are tried while backtracking from the
    /// goal. This is `EXPANSION` reversed; when several neighbours share the
    /// same distance the first one listed here wins, which fixes the exact
    /// path emitted on grids with more than one shortest route.
    pub const RECONSTRUCTION: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];
}
