use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Total path cost.
///
/// Twice as wide as [`crate::graph::Weight`]: a simple path has fewer than
/// 2^64 edges, so no reachable total can get to [`INFINITY`].
pub type Distance = u128;

/// Sentinel distance for vertices the search never reached.
pub const INFINITY: Distance = Distance::MAX;

/// Frontier entry for the Dijkstra heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexDistance {
    pub vertex: usize,
    pub distance: Distance,
}

impl VertexDistance {
    pub fn new(vertex: usize, distance: Distance) -> Self {
        VertexDistance { vertex, distance }
    }
}

// Ties on distance fall back to the vertex id so heap order is reproducible.
impl Ord for VertexDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for VertexDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
