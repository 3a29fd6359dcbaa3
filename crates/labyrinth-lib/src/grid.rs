//! Jagged character grid and the line-oriented loader that builds it.
//!
//! Rows keep the length they were read with; nothing is padded. Every bounds
//! check therefore has to consult the length of the specific row involved
//! rather than a global column count.

use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::config::GridLimits;
use crate::coord::Coordinate;
use crate::error::{Error, Result};

/// Rectangular-or-ragged grid of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Read a grid from a line source.
    ///
    /// At most `limits.max_rows` lines are consumed; anything after that is
    /// ignored. A line wider than `limits.max_cols` aborts the load with
    /// [`Error::GridTooWide`].
    pub fn load<R: BufRead>(reader: R, limits: GridLimits) -> Result<Self> {
        let mut lines = reader.lines();
        let mut rows = Vec::new();

        while rows.len() < limits.max_rows {
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            rows.push(checked_row(rows.len(), &line, limits.max_cols)?);
        }

        if rows.len() == limits.max_rows && lines.next().is_some() {
            warn!(
                max_rows = limits.max_rows,
                "input continues past the row limit; remaining lines ignored"
            );
        }

        debug!(rows = rows.len(), "loaded labyrinth");
        Ok(Self { rows })
    }

    /// Build a grid from rows already held in memory.
    ///
    /// Unlike [`Grid::load`] nothing is truncated, so an oversized row count
    /// is reported as [`Error::GridTooTall`].
    pub fn from_rows(rows: Vec<Vec<char>>, limits: GridLimits) -> Result<Self> {
        if rows.len() > limits.max_rows {
            return Err(Error::GridTooTall {
                rows: rows.len(),
                max: limits.max_rows,
            });
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() > limits.max_cols)
        {
            return Err(Error::GridTooWide {
                row,
                width: cells.len(),
                max: limits.max_cols,
            });
        }
        Ok(Self { rows })
    }

    /// Build a grid from string rows using the default limits.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();
        Self::from_rows(rows, GridLimits::default())
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of `row`, or zero when the row does not exist.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        at.col < self.row_len(at.row)
    }

    pub fn get(&self, at: Coordinate) -> Option<char> {
        self.rows.get(at.row)?.get(at.col).copied()
    }

    pub(crate) fn get_mut(&mut self, at: Coordinate) -> Option<&mut char> {
        self.rows.get_mut(at.row)?.get_mut(at.col)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (Coordinate::new(row, col), cell))
        })
    }

    /// Rows rendered as strings, without line terminators.
    pub fn to_lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }

    /// Write one line per row, each terminated by `\n`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in self.to_lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn checked_row(index: usize, line: &str, max_cols: usize) -> Result<Vec<char>> {
    let cells: Vec<char> = line.chars().collect();
    if cells.len() > max_cols {
        return Err(Error::GridTooWide {
            row: index,
            width: cells.len(),
            max: max_cols,
        });
    }
    Ok(cells)
}
