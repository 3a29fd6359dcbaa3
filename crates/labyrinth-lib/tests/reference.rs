//! Exhaustive checks against a brute-force shortest-path reference.
//!
//! Every 3×3 layout with `A` in the top-left corner, `B` in the bottom-right
//! corner and each of the other seven cells either wall or floor is solved
//! and compared against repeated edge relaxation.

use labyrinth_lib::{
    annotate, locate_markers, reconstruct, Coordinate, Distance, DistanceMap, Grid, SolverConfig,
};

const SIZE: usize = 3;

fn layouts() -> impl Iterator<Item = Grid> {
    (0u32..1 << 7).map(|mask| {
        let mut bit = 0;
        let rows = (0..SIZE)
            .map(|row| {
                (0..SIZE)
                    .map(|col| match (row, col) {
                        (0, 0) => 'A',
                        (2, 2) => 'B',
                        _ => {
                            let cell = if mask & (1 << bit) != 0 { '#' } else { ' ' };
                            bit += 1;
                            cell
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        Grid::from_lines(rows).expect("3x3 grid")
    })
}

/// Bellman-Ford style relaxation; independent of queue order.
fn reference_distance(grid: &Grid, start: Coordinate, goal: Coordinate) -> Option<u32> {
    let mut best = [[None::<u32>; SIZE]; SIZE];
    best[start.row][start.col] = Some(0);

    for _ in 0..SIZE * SIZE {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let Some(here) = best[row][col] else {
                    continue;
                };
                let neighbours = [
                    (row.wrapping_sub(1), col),
                    (row + 1, col),
                    (row, col.wrapping_sub(1)),
                    (row, col + 1),
                ];
                for (nr, nc) in neighbours {
                    if nr >= SIZE || nc >= SIZE {
                        continue;
                    }
                    if grid.get(Coordinate::new(nr, nc)) == Some('#') {
                        continue;
                    }
                    let candidate = here + 1;
                    if best[nr][nc].map_or(true, |current| candidate < current) {
                        best[nr][nc] = Some(candidate);
                    }
                }
            }
        }
    }

    best[goal.row][goal.col]
}

#[test]
fn wave_front_matches_reference_on_all_layouts() {
    let config = SolverConfig::default();
    for grid in layouts() {
        let markers = locate_markers(&grid, &config.charset).expect("markers");
        let distances = DistanceMap::compute(&grid, &markers, &config).expect("wave-front");

        assert_eq!(
            distances.get(markers.goal).hops(),
            reference_distance(&grid, markers.start, markers.goal),
            "distance mismatch for\n{grid}"
        );
    }
}

#[test]
fn reconstructed_paths_descend_one_hop_at_a_time() {
    let config = SolverConfig::default();
    for grid in layouts() {
        let markers = locate_markers(&grid, &config.charset).expect("markers");
        let distances = DistanceMap::compute(&grid, &markers, &config).expect("wave-front");
        if !distances.get(markers.goal).is_reached() {
            continue;
        }

        let path = reconstruct(&distances, markers.start, markers.goal).expect("path");
        assert_eq!(path.start(), markers.start);
        assert_eq!(path.goal(), markers.goal);

        for (index, at) in path.iter().enumerate() {
            assert_eq!(distances.get(at), Distance::Reached(index as u32));
            assert_ne!(grid.get(at), Some('#'), "path crosses a wall in\n{grid}");
        }
        for pair in path.steps().windows(2) {
            assert!(pair[0].is_adjacent(pair[1]), "non-adjacent step in\n{grid}");
        }
    }
}

#[test]
fn annotation_is_idempotent_on_all_layouts() {
    let config = SolverConfig::default();
    for original in layouts() {
        let markers = locate_markers(&original, &config.charset).expect("markers");
        let distances = DistanceMap::compute(&original, &markers, &config).expect("wave-front");
        let Ok(path) = reconstruct(&distances, markers.start, markers.goal) else {
            continue;
        };

        let mut once = original.clone();
        annotate(&mut once, &path, ' ', '.');
        let mut twice = once.clone();
        annotate(&mut twice, &path, ' ', '.');

        assert_eq!(once, twice);
        assert_eq!(once.get(markers.start), Some('A'));
        assert_eq!(once.get(markers.goal), Some('B'));
    }
}
