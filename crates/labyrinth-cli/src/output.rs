//! Output formatting for solved labyrinths.

use std::collections::HashSet;

use clap::ValueEnum;

use labyrinth_lib::{Charset, Coordinate, Grid, SolveOutcome, SolveSummary};

use crate::terminal::ColorPalette;

/// Shape of the text written to the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Annotated grid only, one row per line.
    #[default]
    Grid,
    /// Headline with start, goal and hop count, then the grid.
    Summary,
    /// Structured summary as pretty-printed JSON.
    Json,
}

/// When to highlight the grid with ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color only when writing to an interactive terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve the palette; output files never receive escape codes.
    pub fn palette(self, to_stdout: bool) -> ColorPalette {
        match self {
            _ if !to_stdout => ColorPalette::plain(),
            ColorChoice::Always => ColorPalette::colored(),
            ColorChoice::Never => ColorPalette::plain(),
            ColorChoice::Auto => ColorPalette::detect(),
        }
    }
}

/// Render the grid and outcome in the requested format.
///
/// JSON output is never colored.
pub fn render(
    grid: &Grid,
    outcome: &SolveOutcome,
    charset: &Charset,
    format: OutputFormat,
    palette: ColorPalette,
) -> serde_json::Result<String> {
    let summary = SolveSummary::new(grid, outcome);
    let rendered = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&summary)?;
            json.push('\n');
            json
        }
        OutputFormat::Grid => render_grid(&summary, charset, palette),
        OutputFormat::Summary if palette.is_plain() => summary.render_text(),
        OutputFormat::Summary => format!(
            "{}\n{}",
            summary.headline(),
            render_grid(&summary, charset, palette)
        ),
    };
    Ok(rendered)
}

fn render_grid(summary: &SolveSummary, charset: &Charset, palette: ColorPalette) -> String {
    let on_path: HashSet<Coordinate> = summary.path.iter().copied().collect();
    let mut buffer = String::new();
    for (row, line) in summary.grid.iter().enumerate() {
        if palette.is_plain() {
            buffer.push_str(line);
        } else {
            buffer.push_str(&colorize_line(row, line, &on_path, charset, palette));
        }
        buffer.push('\n');
    }
    buffer
}

/// Wrap markers, walls and the path cells of grid row `row` in ANSI codes.
///
/// Path styling follows `on_path`, so mark characters that were already in
/// the input stay unstyled.
pub fn colorize_line(
    row: usize,
    line: &str,
    on_path: &HashSet<Coordinate>,
    charset: &Charset,
    palette: ColorPalette,
) -> String {
    let mut buffer = String::with_capacity(line.len());
    for (col, cell) in line.chars().enumerate() {
        let style = if cell == charset.start || cell == charset.goal {
            palette.marker
        } else if on_path.contains(&Coordinate::new(row, col)) {
            palette.mark
        } else if cell == charset.wall {
            palette.wall
        } else {
            ""
        };

        if style.is_empty() {
            buffer.push(cell);
        } else {
            buffer.push_str(style);
            buffer.push(cell);
            buffer.push_str(palette.reset);
        }
    }
    buffer
}
