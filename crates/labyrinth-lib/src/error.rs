use std::fmt;

use thiserror::Error;

use crate::coord::Coordinate;

/// Convenient result alias for the labyrinth library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two markers a lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Start,
    Goal,
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            MarkerRole::Start => "start",
            MarkerRole::Goal => "goal",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A row is wider than the configured column limit.
    #[error("labyrinth row {row} is {width} cells wide; maximum allowed is {max}")]
    GridTooWide { row: usize, width: usize, max: usize },

    /// More rows than the configured row limit were supplied in memory.
    #[error("labyrinth has {rows} rows; maximum allowed is {max}")]
    GridTooTall { rows: usize, max: usize },

    /// The start or goal marker does not appear anywhere in the grid.
    #[error("{role} position '{marker}' not found")]
    MarkerMissing { role: MarkerRole, marker: char },

    /// The start coordinate handed to the wave-front lies outside the grid.
    #[error("start position {start} lies outside the labyrinth")]
    StartOutOfBounds { start: Coordinate },

    /// The start coordinate handed to the wave-front is a wall cell.
    #[error("start position {start} is a wall")]
    StartBlocked { start: Coordinate },

    /// The goal was never reached by the wave-front.
    #[error("no path exists between {start} and {goal}")]
    NoPathExists { start: Coordinate, goal: Coordinate },

    /// Backtracking found no predecessor one step closer to the start.
    ///
    /// This means the distance map disagrees with the grid it was computed
    /// from and is never caused by user input.
    #[error("path restoration failed at {at} (distance {distance})")]
    PathReconstructionFailed { at: Coordinate, distance: u32 },

    /// The configured characters conflict with each other.
    #[error("invalid character set: {message}")]
    InvalidCharset { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
