mod common;

use labyrinth_lib::{solve_reader, Error, Grid, GridLimits, SolverConfig, MAX_SIZE};

use common::fixture_path;

fn path_for(input: &str) -> Vec<labyrinth_lib::Coordinate> {
    let (_, outcome) = solve_reader(input.as_bytes(), &SolverConfig::default()).expect("solves");
    outcome.path().expect("path exists").steps().to_vec()
}

#[test]
fn trailing_blank_lines_do_not_change_the_path() {
    let input = std::fs::read_to_string(fixture_path("detour")).expect("fixture");
    let padded = format!("{input}\n\n\n");

    assert_eq!(path_for(&input), path_for(&padded));
}

#[test]
fn loader_stops_at_max_rows() {
    let mut input = String::from("A\n");
    for _ in 1..MAX_SIZE - 1 {
        input.push_str(" \n");
    }
    input.push_str("B\n");
    // Row 101 is both over-wide and unreadable as part of the grid.
    input.push_str(&"#".repeat(MAX_SIZE + 50));
    input.push('\n');

    let grid = Grid::load(input.as_bytes(), GridLimits::default()).expect("loads");
    assert_eq!(grid.row_count(), MAX_SIZE);

    let path = path_for(&input);
    assert_eq!(path.len(), MAX_SIZE);
}

#[test]
fn over_wide_row_inside_limit_fails() {
    let input = format!("A\n{}\nB\n", " ".repeat(MAX_SIZE + 1));
    let error = solve_reader(input.as_bytes(), &SolverConfig::default()).expect_err("too wide");

    assert!(matches!(
        error,
        Error::GridTooWide { row: 1, width, max } if width == MAX_SIZE + 1 && max == MAX_SIZE
    ));
}

#[test]
fn row_of_exactly_max_width_is_accepted() {
    let mut row = String::from("A");
    row.push_str(&" ".repeat(MAX_SIZE - 2));
    row.push('B');

    let path = path_for(&row);
    assert_eq!(path.len(), MAX_SIZE);
}

#[test]
fn missing_marker_aborts() {
    let error = solve_reader("A   \n####\n".as_bytes(), &SolverConfig::default())
        .expect_err("no goal");
    assert_eq!(format!("{error}"), "goal position 'B' not found");
}

#[test]
fn crlf_line_endings_are_stripped() {
    let path = path_for("A \r\n B\r\n");
    assert_eq!(path.len(), 3);
}
