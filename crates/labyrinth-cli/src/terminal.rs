//! Terminal styling and color utilities.
//!
//! This module provides the ANSI escape codes used to highlight solved
//! labyrinths and the detection logic deciding whether to emit them.

use std::io::IsTerminal;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold green for cells on the marked path.
    pub const GREEN_BOLD: &str = "\x1b[1;32m";
    /// Bold reverse magenta for the start and goal markers.
    pub const TAG_MARKER: &str = "\x1b[1;7;35m";
    /// Gray for walls.
    pub const GRAY: &str = "\x1b[90m";
}

/// Resolved color codes, either actual ANSI sequences or empty strings when
/// color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub mark: &'static str,
    pub marker: &'static str,
    pub wall: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            mark: colors::GREEN_BOLD,
            marker: colors::TAG_MARKER,
            wall: colors::GRAY,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            mark: "",
            marker: "",
            wall: "",
        }
    }

    /// Create a palette for standard output.
    ///
    /// Returns `colored()` only when stdout is a terminal and
    /// [`supports_color`] allows it.
    #[must_use]
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() && supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn is_plain(&self) -> bool {
        self.reset.is_empty()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}
