//! Character conventions and size limits used by the solver.

use crate::error::{Error, Result};

/// Maximum number of rows and columns accepted by default.
pub const MAX_SIZE: usize = 100;

/// Characters that give grid cells their meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    /// Start marker.
    pub start: char,
    /// Goal marker.
    pub goal: char,
    /// Impassable cell.
    pub wall: char,
    /// Open, unmarked cell; the only kind that annotation overwrites.
    pub floor: char,
    /// Replacement written onto floor cells along the path.
    pub mark: char,
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            start: 'A',
            goal: 'B',
            wall: '#',
            floor: ' ',
            mark: '.',
        }
    }
}

impl Charset {
    /// Reject combinations that would make walls enterable or make
    /// annotation overwrite markers or forge cells. Start and goal may share
    /// a character.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("start", self.start),
            ("goal", self.goal),
            ("floor", self.floor),
        ] {
            if value == self.wall {
                return Err(Error::InvalidCharset {
                    message: format!("{name} character {value:?} is also the wall character"),
                });
            }
        }
        for (name, value) in [("start", self.start), ("goal", self.goal)] {
            if self.floor == value {
                return Err(Error::InvalidCharset {
                    message: format!("floor character {:?} is also the {name} character", self.floor),
                });
            }
        }
        for (name, value) in [
            ("floor", self.floor),
            ("start", self.start),
            ("goal", self.goal),
            ("wall", self.wall),
        ] {
            if self.mark == value {
                return Err(Error::InvalidCharset {
                    message: format!("mark character {:?} is also the {name} character", self.mark),
                });
            }
        }
        Ok(())
    }
}

/// Upper bounds on grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLimits {
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            max_rows: MAX_SIZE,
            max_cols: MAX_SIZE,
        }
    }
}

/// How cells that are neither wall, floor nor a marker are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Everything except the wall character can be walked over.
    #[default]
    Permissive,
    /// Only floor cells and the two markers can be walked over.
    Strict,
}

/// Full solver configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverConfig {
    pub charset: Charset,
    pub limits: GridLimits,
    pub traversal: Traversal,
}

impl SolverConfig {
    /// `true` when the wave-front may enter a cell holding `cell`.
    pub fn is_passable(&self, cell: char) -> bool {
        let charset = &self.charset;
        if cell == charset.wall {
            return false;
        }
        match self.traversal {
            Traversal::Permissive => true,
            Traversal::Strict => {
                cell == charset.floor || cell == charset.start || cell == charset.goal
            }
        }
    }
}
