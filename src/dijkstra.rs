use crate::error::SearchError;
use crate::graph::Graph;
use crate::utils::{Distance, INFINITY, VertexDistance};
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one single-source search.
///
/// `distances[v]` is the minimal cost from `source` to `v`, or [`INFINITY`]
/// when `v` was never reached. `previous[v]` is the vertex before `v` on one
/// shortest path; it is `None` exactly for the source and unreached vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShortestPaths {
    pub source: usize,
    pub distances: Vec<Distance>,
    pub previous: Vec<Option<usize>>,
}

impl ShortestPaths {
    fn empty(source: usize) -> Self {
        ShortestPaths {
            source,
            distances: Vec::new(),
            previous: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Finite distance to `vertex`, or `None` if unreachable or out of range.
    pub fn distance(&self, vertex: usize) -> Option<Distance> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|&d| d != INFINITY)
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Vertices with a finite distance, in id order.
    pub fn reachable(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&v| self.is_reachable(v))
    }

    /// Shortest path from the source to `destination`.
    ///
    /// Unlike [`extract_shortest_path`], an out-of-range destination is a
    /// caller error here. An unreachable destination still yields an empty path.
    pub fn path_to(&self, destination: usize) -> Result<Vec<usize>, SearchError> {
        if destination >= self.len() {
            return Err(SearchError::DestinationOutOfRange {
                vertex: destination,
                vertices: self.len(),
            });
        }
        Ok(extract_shortest_path(
            &self.distances,
            &self.previous,
            destination,
        ))
    }
}

/// Dijkstra's algorithm from `source` over every reachable vertex.
///
/// Edge weights must be non-negative; [`crate::graph::Weight`] being unsigned
/// enforces this. An empty graph yields an empty result for any source. An
/// edge pointing outside the graph is rejected before the search starts.
///
/// Runs in O((V + E) log V) with a binary heap. Among several equal-cost
/// paths, the one recorded is whichever the heap finalizes first.
pub fn dijkstra_shortest_path(graph: &Graph, source: usize) -> Result<ShortestPaths, SearchError> {
    let n = graph.vertices;
    if graph.is_empty() {
        return Ok(ShortestPaths::empty(source));
    }
    if source >= n {
        return Err(SearchError::SourceOutOfRange {
            vertex: source,
            vertices: n,
        });
    }
    if let Some((from, to)) = graph.dangling_edge() {
        return Err(SearchError::DanglingEdge {
            from,
            to,
            vertices: n,
        });
    }

    debug!(
        "dijkstra from {} over {} vertices, {} edges",
        source,
        n,
        graph.edge_count()
    );

    let mut distances = vec![INFINITY; n];
    let mut previous = vec![None; n];
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();

    distances[source] = 0;
    heap.push(Reverse(VertexDistance::new(source, 0)));

    while let Some(Reverse(VertexDistance {
        vertex: u,
        distance: dist,
    })) = heap.pop()
    {
        if visited[u] {
            trace!("skipping stale entry for {} at {}", u, dist);
            continue;
        }
        visited[u] = true;

        for edge in graph.outgoing(u) {
            let v = edge.to;
            if visited[v] {
                continue;
            }

            // Cannot overflow: see `Distance`.
            let new_dist = dist + Distance::from(edge.weight);
            if new_dist < distances[v] {
                distances[v] = new_dist;
                previous[v] = Some(u);
                heap.push(Reverse(VertexDistance::new(v, new_dist)));
            }
        }
    }

    let result = ShortestPaths {
        source,
        distances,
        previous,
    };
    debug!("dijkstra from {} reached {} vertices", source, result.reachable().count());
    Ok(result)
}

/// Walks the predecessor chain back from `destination` and returns the path
/// in source-to-destination order.
///
/// Returns an empty path when `destination` is out of range or unreachable,
/// or when `previous` does not lead back to a root within `distances.len()`
/// steps (a cycle).
pub fn extract_shortest_path(
    distances: &[Distance],
    previous: &[Option<usize>],
    destination: usize,
) -> Vec<usize> {
    let mut path = Vec::new();
    if destination >= distances.len() || distances[destination] == INFINITY {
        return path;
    }

    let mut current = Some(destination);
    while let Some(v) = current {
        if path.len() == distances.len() {
            return Vec::new();
        }
        path.push(v);
        current = previous.get(v).copied().flatten();
    }

    path.reverse();
    path
}

/// Total weight along `path`, taking the cheapest edge between each pair.
///
/// `None` if some consecutive pair has no connecting edge. An empty path has
/// no cost; a single vertex costs 0.
pub fn path_cost(graph: &Graph, path: &[usize]) -> Option<Distance> {
    if path.is_empty() {
        return None;
    }
    path.windows(2).try_fold(0, |total: Distance, pair| {
        graph
            .edge_weight(pair[0], pair[1])
            .map(|w| total.saturating_add(Distance::from(w)))
    })
}
