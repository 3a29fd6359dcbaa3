use std::fmt::Write;

use serde::Serialize;

use crate::coord::Coordinate;
use crate::grid::Grid;
use crate::solver::SolveOutcome;

/// Terminal state of a solve, as reported to users.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Solved,
    NoPath,
}

/// Serialisable description of a solve that higher-level consumers can
/// render or emit as JSON.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SolveSummary {
    pub status: SolveStatus,
    pub start: Coordinate,
    pub goal: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<usize>,
    pub path: Vec<Coordinate>,
    pub marked: usize,
    pub grid: Vec<String>,
}

impl SolveSummary {
    /// Summarise `outcome` together with the (possibly annotated) grid.
    pub fn new(grid: &Grid, outcome: &SolveOutcome) -> Self {
        let markers = outcome.markers();
        let (status, hops, path, marked) = match outcome {
            SolveOutcome::Solved { path, marked, .. } => (
                SolveStatus::Solved,
                Some(path.hop_count()),
                path.steps().to_vec(),
                *marked,
            ),
            SolveOutcome::NoPath { .. } => (SolveStatus::NoPath, None, Vec::new(), 0),
        };

        Self {
            status,
            start: markers.start,
            goal: markers.goal,
            hops,
            path,
            marked,
            grid: grid.to_lines(),
        }
    }

    /// One-line headline, e.g. `Path: (0, 0) -> (2, 2) (4 hops)`.
    pub fn headline(&self) -> String {
        match self.hops {
            Some(hops) => format!(
                "Path: {} -> {} ({} {})",
                self.start,
                self.goal,
                hops,
                if hops == 1 { "hop" } else { "hops" }
            ),
            None => format!("No path: {} -> {}", self.start, self.goal),
        }
    }

    /// Headline followed by the grid rows.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.headline());
        for line in &self.grid {
            let _ = writeln!(buffer, "{line}");
        }
        buffer
    }
}
