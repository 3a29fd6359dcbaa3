use crate::grid::Grid;
use crate::path::Path;

/// Overwrite every `floor` cell on `path` with `mark`.
///
/// Markers and any other non-floor character are left alone. Returns the
/// number of cells changed; a second pass over the same path changes none.
pub fn annotate(grid: &mut Grid, path: &Path, floor: char, mark: char) -> usize {
    let mut marked = 0;
    for at in path {
        if let Some(cell) = grid.get_mut(*at) {
            if *cell == floor {
                *cell = mark;
                marked += 1;
            }
        }
    }
    marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::locate::locate_markers;
    use crate::path::reconstruct;
    use crate::wavefront::DistanceMap;

    fn solved_path(grid: &Grid) -> Path {
        let config = SolverConfig::default();
        let markers = locate_markers(grid, &config.charset).expect("markers");
        let distances = DistanceMap::compute(grid, &markers, &config).expect("wave-front");
        reconstruct(&distances, markers.start, markers.goal).expect("path")
    }

    #[test]
    fn only_floor_cells_are_marked() {
        let mut grid = Grid::from_lines(["A~ B"]).expect("grid");
        let path = solved_path(&grid);

        let marked = annotate(&mut grid, &path, ' ', '.');
        assert_eq!(marked, 1);
        assert_eq!(grid.to_lines(), vec!["A~.B"]);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let mut grid = Grid::from_lines(["A  ", "## ", "B  "]).expect("grid");
        let path = solved_path(&grid);

        annotate(&mut grid, &path, ' ', '.');
        let once = grid.clone();
        assert_eq!(annotate(&mut grid, &path, ' ', '.'), 0);
        assert_eq!(grid, once);
        assert_eq!(grid.to_lines(), vec!["A..", "##.", "B.."]);
    }
}
