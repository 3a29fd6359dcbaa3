//! Labyrinth library entry points.
//!
//! This crate loads character grids, runs a breadth-first wave-front from the
//! start marker, reconstructs the shortest path back from the goal and marks
//! it on the grid. Higher-level consumers (the CLI) should only depend on the
//! items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod annotate;
pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod locate;
pub mod output;
pub mod path;
pub mod solver;
pub mod wavefront;

pub use annotate::annotate;
pub use config::{Charset, GridLimits, SolverConfig, Traversal, MAX_SIZE};
pub use coord::{Coordinate, Direction};
pub use error::{Error, MarkerRole, Result};
pub use grid::Grid;
pub use locate::{locate, locate_markers, Markers};
pub use output::{SolveStatus, SolveSummary};
pub use path::{reconstruct, Path};
pub use solver::{solve, solve_reader, SolveOutcome};
pub use wavefront::{Distance, DistanceMap};
