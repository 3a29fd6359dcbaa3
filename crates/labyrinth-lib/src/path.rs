use serde::Serialize;

use crate::coord::{Coordinate, Direction};
use crate::error::{Error, Result};
use crate::wavefront::{Distance, DistanceMap};

/// Ordered cells from start to goal inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<Coordinate>,
}

impl Path {
    pub fn steps(&self) -> &[Coordinate] {
        &self.steps
    }

    pub fn start(&self) -> Coordinate {
        self.steps[0]
    }

    pub fn goal(&self) -> Coordinate {
        self.steps[self.steps.len() - 1]
    }

    /// Number of moves in the path.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.steps.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Walk back from `goal` to `start` through strictly decreasing distances.
///
/// At every cell the predecessors are tried in
/// [`Direction::RECONSTRUCTION`] order and the first one whose distance is
/// exactly one less is taken.
pub fn reconstruct(distances: &DistanceMap, start: Coordinate, goal: Coordinate) -> Result<Path> {
    let Distance::Reached(mut current_distance) = distances.get(goal) else {
        return Err(Error::NoPathExists { start, goal });
    };

    let mut steps = Vec::with_capacity(current_distance as usize + 1);
    let mut current = goal;

    while current != start {
        let Some(previous) = current_distance.checked_sub(1) else {
            return Err(Error::PathReconstructionFailed {
                at: current,
                distance: current_distance,
            });
        };
        let predecessor = Direction::RECONSTRUCTION
            .iter()
            .filter_map(|&direction| current.step(direction))
            .find(|&neighbour| distances.get(neighbour) == Distance::Reached(previous));

        let Some(predecessor) = predecessor else {
            return Err(Error::PathReconstructionFailed {
                at: current,
                distance: current_distance,
            });
        };

        steps.push(current);
        current = predecessor;
        current_distance = previous;
    }

    steps.push(start);
    steps.reverse();
    Ok(Path { steps })
}
