use std::io::BufRead;

use tracing::info;

use crate::annotate::annotate;
use crate::config::SolverConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::locate::{locate_markers, Markers};
use crate::path::{reconstruct, Path};
use crate::wavefront::DistanceMap;

/// Result of running the full pipeline over a grid.
///
/// An unreachable goal is reported as [`SolveOutcome::NoPath`] rather than
/// an error; the grid is left untouched in that case.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Solved {
        markers: Markers,
        path: Path,
        distances: DistanceMap,
        /// Floor cells overwritten with the mark character.
        marked: usize,
    },
    NoPath {
        markers: Markers,
        distances: DistanceMap,
    },
}

impl SolveOutcome {
    pub fn markers(&self) -> Markers {
        match self {
            SolveOutcome::Solved { markers, .. } | SolveOutcome::NoPath { markers, .. } => {
                *markers
            }
        }
    }

    pub fn distances(&self) -> &DistanceMap {
        match self {
            SolveOutcome::Solved { distances, .. } | SolveOutcome::NoPath { distances, .. } => {
                distances
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SolveOutcome::Solved { path, .. } => Some(path),
            SolveOutcome::NoPath { .. } => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved { .. })
    }
}

/// Find the shortest path between the markers and mark it on `grid`.
///
/// Size checks have already happened when `grid` was built; this validates
/// the character set, locates both markers, runs the wave-front,
/// reconstructs the path and finally annotates the grid.
pub fn solve(grid: &mut Grid, config: &SolverConfig) -> Result<SolveOutcome> {
    config.charset.validate()?;
    let markers = locate_markers(grid, &config.charset)?;
    let distances = DistanceMap::compute(grid, &markers, config)?;

    if !distances.get(markers.goal).is_reached() {
        info!(start = %markers.start, goal = %markers.goal, "no path between markers");
        return Ok(SolveOutcome::NoPath { markers, distances });
    }

    let path = reconstruct(&distances, markers.start, markers.goal)?;
    let marked = annotate(grid, &path, config.charset.floor, config.charset.mark);

    info!(hops = path.hop_count(), marked, "labyrinth solved");
    Ok(SolveOutcome::Solved {
        markers,
        path,
        distances,
        marked,
    })
}

/// Load a grid from `reader` using `config.limits`, then [`solve`] it.
pub fn solve_reader<R: BufRead>(reader: R, config: &SolverConfig) -> Result<(Grid, SolveOutcome)> {
    let mut grid = Grid::load(reader, config.limits)?;
    let outcome = solve(&mut grid, config)?;
    Ok((grid, outcome))
}
