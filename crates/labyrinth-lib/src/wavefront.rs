//! Breadth-first wave-front distance computation.

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::config::SolverConfig;
use crate::coord::{Coordinate, Direction};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::locate::Markers;

/// Hop distance of a cell from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distance {
    /// The wave-front never got here.
    #[default]
    Unreached,
    /// Minimum number of orthogonal steps from the start.
    Reached(u32),
}

impl Distance {
    pub fn hops(self) -> Option<u32> {
        match self {
            Distance::Reached(hops) => Some(hops),
            Distance::Unreached => None,
        }
    }

    pub fn is_reached(self) -> bool {
        matches!(self, Distance::Reached(_))
    }
}

/// Per-cell distances, shaped exactly like the grid they were computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    cells: Vec<Vec<Distance>>,
}

impl DistanceMap {
    /// Map with the same jagged shape as `grid`, every cell unreached.
    pub fn unreached_like(grid: &Grid) -> Self {
        let cells = grid
            .rows()
            .iter()
            .map(|row| vec![Distance::Unreached; row.len()])
            .collect();
        Self { cells }
    }

    /// Build a map directly from per-row distances.
    pub fn from_rows(cells: Vec<Vec<Distance>>) -> Self {
        Self { cells }
    }

    /// Distance at `at`; coordinates outside the map read as unreached.
    pub fn get(&self, at: Coordinate) -> Distance {
        self.cells
            .get(at.row)
            .and_then(|row| row.get(at.col))
            .copied()
            .unwrap_or_default()
    }

    fn set(&mut self, at: Coordinate, distance: Distance) {
        if let Some(cell) = self.cells.get_mut(at.row).and_then(|row| row.get_mut(at.col)) {
            *cell = distance;
        }
    }

    pub fn rows(&self) -> &[Vec<Distance>] {
        &self.cells
    }

    pub fn reached_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|distance| distance.is_reached())
            .count()
    }

    /// Run the wave-front from `markers.start`.
    ///
    /// Cells are expanded in [`Direction::EXPANSION`] order and the search
    /// stops as soon as the goal is dequeued. An unreachable goal is not an
    /// error: it simply stays [`Distance::Unreached`].
    pub fn compute(grid: &Grid, markers: &Markers, config: &SolverConfig) -> Result<Self> {
        let start = markers.start;
        let Some(start_cell) = grid.get(start) else {
            return Err(Error::StartOutOfBounds { start });
        };
        if start_cell == config.charset.wall {
            return Err(Error::StartBlocked { start });
        }

        let mut distances = Self::unreached_like(grid);
        distances.set(start, Distance::Reached(0));

        let mut frontier = VecDeque::from([start]);
        let mut expanded = 0usize;

        while let Some(current) = frontier.pop_front() {
            if current == markers.goal {
                debug!(expanded, goal = %current, "wave-front reached goal");
                break;
            }
            expanded += 1;

            let Distance::Reached(current_distance) = distances.get(current) else {
                continue;
            };

            for direction in Direction::EXPANSION {
                let Some(next) = current.step(direction) else {
                    continue;
                };
                let Some(cell) = grid.get(next) else {
                    continue;
                };
                if !config.is_passable(cell) || distances.get(next).is_reached() {
                    continue;
                }
                distances.set(next, Distance::Reached(current_distance + 1));
                frontier.push_back(next);
            }
        }

        debug!(
            expanded,
            reached = distances.reached_count(),
            "wave-front complete"
        );
        Ok(distances)
    }
}

impl fmt::Display for DistanceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widest = self
            .cells
            .iter()
            .flatten()
            .filter_map(|distance| distance.hops())
            .max()
            .map_or(1, |max| max.to_string().len());

        for row in &self.cells {
            let rendered = row
                .iter()
                .map(|distance| match distance {
                    Distance::Reached(hops) => format!("{hops:>widest$}"),
                    Distance::Unreached => format!("{:>widest$}", "-"),
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{rendered}")?;
        }
        Ok(())
    }
}
