//! Common test utilities and fixture helpers.
//!
//! Fixtures live in `docs/fixtures` as `<name>.txt` with the expected
//! annotated grid, when one exists, in `<name>.solved.txt`.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use labyrinth_lib::{Grid, GridLimits};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to a named fixture grid.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(format!("{name}.txt"))
}

/// Load a fixture grid through the streaming loader.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> Grid {
    let file = File::open(fixture_path(name)).expect("fixture present");
    Grid::load(BufReader::new(file), GridLimits::default()).expect("fixture loads")
}

/// Expected annotated rows for a fixture.
#[allow(dead_code)]
pub fn expected_lines(name: &str) -> Vec<String> {
    let path = fixtures_dir().join(format!("{name}.solved.txt"));
    fs::read_to_string(&path)
        .expect("solved fixture present")
        .lines()
        .map(str::to_string)
        .collect()
}
