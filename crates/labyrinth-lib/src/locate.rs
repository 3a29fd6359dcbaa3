use tracing::debug;

use crate::config::Charset;
use crate::coord::Coordinate;
use crate::error::{Error, MarkerRole, Result};
use crate::grid::Grid;

/// Start and goal positions found in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub start: Coordinate,
    pub goal: Coordinate,
}

/// First cell holding `marker`, scanning rows top to bottom and columns left
/// to right.
pub fn locate(grid: &Grid, marker: char) -> Option<Coordinate> {
    grid.cells()
        .find(|&(_, cell)| cell == marker)
        .map(|(at, _)| at)
}

/// Locate both markers, failing with [`Error::MarkerMissing`] for whichever
/// is absent (start is checked first).
pub fn locate_markers(grid: &Grid, charset: &Charset) -> Result<Markers> {
    let start = locate(grid, charset.start).ok_or(Error::MarkerMissing {
        role: MarkerRole::Start,
        marker: charset.start,
    })?;
    let goal = locate(grid, charset.goal).ok_or(Error::MarkerMissing {
        role: MarkerRole::Goal,
        marker: charset.goal,
    })?;

    debug!(%start, %goal, "located markers");
    Ok(Markers { start, goal })
}
