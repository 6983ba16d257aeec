#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;

/// Edge weight. Unsigned, so Dijkstra's non-negative precondition holds by construction.
pub type Weight = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub to: usize,
    pub weight: Weight,
}

/// Weighted directed graph stored as adjacency lists.
///
/// Vertices are the contiguous ids `0..vertices`. Outgoing edges keep their
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graph {
    pub vertices: usize,
    pub edges: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new(vertices: usize) -> Self {
        Graph {
            vertices,
            edges: vec![Vec::new(); vertices],
        }
    }

    /// Like [`Graph::new`], but reports an allocation failure instead of aborting.
    pub fn try_new(vertices: usize) -> Result<Self, TryReserveError> {
        let mut edges = Vec::new();
        edges.try_reserve_exact(vertices)?;
        edges.resize_with(vertices, Vec::new);
        Ok(Graph { vertices, edges })
    }

    /// Panics if `from` or `to` is not a vertex of this graph.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) {
        assert!(
            from < self.vertices && to < self.vertices,
            "edge {} -> {} out of range (graph has {} vertices)",
            from,
            to,
            self.vertices
        );
        self.edges[from].push(Edge { to, weight });
    }

    /// First edge whose endpoint is not a vertex, as `(from, to)`.
    ///
    /// Only possible when `edges` was filled in directly rather than through
    /// [`Graph::add_edge`].
    pub fn dangling_edge(&self) -> Option<(usize, usize)> {
        self.edges.iter().enumerate().find_map(|(from, adj)| {
            adj.iter()
                .find(|e| e.to >= self.vertices)
                .map(|e| (from, e.to))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|adj| adj.len()).sum()
    }

    pub fn outgoing(&self, vertex: usize) -> &[Edge] {
        self.edges.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.vertices == 0
    }

    /// Cheapest weight among the parallel edges `from -> to`, if any.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<Weight> {
        self.outgoing(from)
            .iter()
            .filter(|e| e.to == to)
            .map(|e| e.weight)
            .min()
    }

    #[cfg(feature = "petgraph")]
    pub fn to_petgraph(&self) -> petgraph::Graph<usize, Weight> {
        let mut pg_graph = petgraph::Graph::new();
        let nodes: Vec<_> = (0..self.vertices).map(|i| pg_graph.add_node(i)).collect();

        for (from_idx, from_node) in self.edges.iter().enumerate() {
            for edge in from_node {
                pg_graph.add_edge(nodes[from_idx], nodes[edge.to], edge.weight);
            }
        }
        pg_graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_keeps_insertion_order() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 2, 4);
        graph.add_edge(0, 1, 9);

        let targets: Vec<usize> = graph.outgoing(0).iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![2, 1]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    #[should_panic(expected = "edge 0 -> 5 out of range")]
    fn add_edge_rejects_unknown_target() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 5, 1);
    }

    #[test]
    fn dangling_edge_finds_direct_pushes() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 1);
        assert_eq!(graph.dangling_edge(), None);

        graph.edges[1].push(Edge { to: 5, weight: 1 });
        assert_eq!(graph.dangling_edge(), Some((1, 5)));
    }

    #[test]
    fn try_new_reports_impossible_allocation() {
        assert!(Graph::try_new(usize::MAX).is_err());
        assert_eq!(Graph::try_new(3).unwrap(), Graph::new(3));
    }

    #[test]
    fn outgoing_of_unknown_vertex_is_empty() {
        let graph = Graph::new(2);
        assert!(graph.outgoing(7).is_empty());
    }

    #[test]
    fn edge_weight_picks_cheapest_parallel_edge() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 8);
        graph.add_edge(0, 1, 3);

        assert_eq!(graph.edge_weight(0, 1), Some(3));
        assert_eq!(graph.edge_weight(1, 0), None);
    }

    #[cfg(feature = "petgraph")]
    #[test]
    fn to_petgraph_preserves_counts() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 1);
        graph.add_edge(1, 2, 2);

        let pg = graph.to_petgraph();
        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 2);
    }
}
