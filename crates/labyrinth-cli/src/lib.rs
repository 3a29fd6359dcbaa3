//! Labyrinth CLI library.
//!
//! This crate provides the command-line front end for the labyrinth solver,
//! including output formatting and terminal styling.

pub mod output;
pub mod terminal;
