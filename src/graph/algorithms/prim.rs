//! Prim's minimum spanning tree algorithm, dense-matrix variant.
//!
//! Maintains for every vertex the lightest known edge weight connecting it to the
//! growing tree (`key`, `None` = infinity) and the tree vertex at the other end
//! of that edge (`parent`). Each round scans all vertices linearly for the
//! smallest finite key, so the whole run is *O*(*V*²) regardless of edge count.
//!
//! Ties between equal keys go to the lowest vertex index: the scan keeps the
//! first minimum it meets.

use crate::error::{GraphError, Result};
use crate::graph::algorithms::SpanningTree;
use crate::graph::edge::{Edge, VertexId, Weight};
use crate::graph::weighted_graph::WeightedGraph;

/// Prim's algorithm with a configurable start vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimSolver {
    start: VertexId,
}

impl PrimSolver {
    /// Creates a solver growing its tree from `start`.
    pub const fn new(start: VertexId) -> Self {
        Self { start }
    }

    /// Returns the start vertex.
    pub const fn start(&self) -> VertexId {
        self.start
    }

    /// Computes a minimum spanning tree from the graph's adjacency matrix.
    ///
    /// The result holds one edge `(parent[v], v, weight)` for every vertex `v`
    /// other than the start vertex, in vertex-index order (not weight order).
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if the start vertex is out of range.
    /// - [`GraphError::DisconnectedGraph`] if some vertex is unreachable.
    pub fn solve<W: Weight>(&self, graph: &WeightedGraph<W>) -> Result<SpanningTree<W>> {
        graph.check_vertex(self.start)?;

        let n = graph.vertex_count();
        let matrix = graph.matrix();

        let mut key: Vec<Option<W>> = vec![None; n];
        let mut parent: Vec<Option<VertexId>> = vec![None; n];
        let mut in_tree = vec![false; n];
        key[self.start] = Some(W::zero());

        for _ in 1..n {
            let u = lightest_outside(&key, &in_tree).ok_or_else(|| {
                tracing::debug!(
                    reached = in_tree.iter().filter(|&&t| t).count(),
                    vertices = n,
                    "prim found no reachable vertex outside the tree"
                );
                GraphError::DisconnectedGraph
            })?;
            in_tree[u] = true;

            for (v, weight) in matrix.row_entries(u) {
                if !in_tree[v] && key[v].map_or(true, |k| weight < k) {
                    key[v] = Some(weight);
                    parent[v] = Some(u);
                }
            }
        }

        let mut edges = Vec::with_capacity(n - 1);
        for v in (0..n).filter(|&v| v != self.start) {
            let p = parent[v].ok_or(GraphError::DisconnectedGraph)?;
            let weight = matrix.get(v, p).ok_or(GraphError::DisconnectedGraph)?;
            edges.push(Edge::new(p, v, weight));
        }

        tracing::trace!(start = self.start, edges = edges.len(), "prim finished");
        Ok(SpanningTree::from_edges(edges))
    }
}

/// Computes a minimum spanning tree with Prim's algorithm, starting at `start`.
///
/// # Errors
/// See [`PrimSolver::solve`].
pub fn prim<W: Weight>(graph: &WeightedGraph<W>, start: VertexId) -> Result<SpanningTree<W>> {
    PrimSolver::new(start).solve(graph)
}

/// Index of the first vertex outside the tree holding the smallest finite key.
fn lightest_outside<W: Weight>(key: &[Option<W>], in_tree: &[bool]) -> Option<VertexId> {
    let mut best: Option<(VertexId, W)> = None;
    for (v, k) in key.iter().enumerate() {
        if in_tree[v] {
            continue;
        }
        if let Some(k) = *k {
            if best.map_or(true, |(_, b)| k < b) {
                best = Some((v, k));
            }
        }
    }
    best.map(|(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::weighted_graph::{reference_graph, GraphBuilder};

    fn graph(n: usize, edges: &[(usize, usize, i64)]) -> WeightedGraph<i64> {
        GraphBuilder::new(n)
            .with_edges(edges.iter().copied())
            .and_then(GraphBuilder::build)
            .unwrap()
    }

    #[test]
    fn reference_graph_tree_in_vertex_order() {
        let tree = prim(&reference_graph(), 0).unwrap();
        assert_eq!(
            tree.edges(),
            &[
                Edge::new(0, 1, 2),
                Edge::new(3, 2, 2),
                Edge::new(0, 3, 1),
                Edge::new(6, 4, 6),
                Edge::new(6, 5, 1),
                Edge::new(3, 6, 4),
            ]
        );
        assert_eq!(tree.total_weight(), Some(16));
    }

    #[test]
    fn other_start_vertex_same_weight() {
        let g = reference_graph();
        for start in 0..g.vertex_count() {
            let tree = prim(&g, start).unwrap();
            assert_eq!(tree.len(), 6);
            assert_eq!(tree.total_weight(), Some(16));
            assert!(tree.edges().iter().all(|e| e.destination != start));
        }
    }

    #[test]
    fn ties_pick_lowest_index() {
        // From 0, vertices 1 and 2 both have key 1; 1 is taken first, then the
        // cheaper 1-2 edge would not beat 2's existing key.
        let g = graph(3, &[(0, 2, 1), (0, 1, 1), (1, 2, 1)]);
        let tree = prim(&g, 0).unwrap();
        assert_eq!(tree.edges(), &[Edge::new(0, 1, 1), Edge::new(0, 2, 1)]);
    }

    #[test]
    fn zero_weight_edge_is_used() {
        let g = graph(3, &[(0, 1, 5), (1, 2, 5), (0, 2, 0)]);
        let tree = prim(&g, 0).unwrap();
        assert_eq!(tree.total_weight(), Some(5));
        assert!(tree.contains(0, 2));
    }

    #[test]
    fn single_vertex_has_empty_tree() {
        assert!(prim(&graph(1, &[]), 0).unwrap().is_empty());
    }

    #[test]
    fn unreachable_last_vertex_is_an_error() {
        // Only n - 1 rounds run, so the isolated vertex is caught by the parent check.
        let g = graph(2, &[]);
        assert_eq!(prim(&g, 0), Err(GraphError::DisconnectedGraph));
    }

    #[test]
    fn two_components_is_an_error() {
        let g = graph(4, &[(0, 1, 1), (2, 3, 1)]);
        assert_eq!(prim(&g, 0), Err(GraphError::DisconnectedGraph));
    }

    #[test]
    fn bad_start_vertex() {
        let g = graph(2, &[(0, 1, 1)]);
        assert_eq!(
            prim(&g, 2),
            Err(GraphError::InvalidVertex {
                vertex: 2,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn duplicate_edge_uses_matrix_weight() {
        let g = graph(2, &[(0, 1, 1), (0, 1, 9)]);
        assert_eq!(prim(&g, 0).unwrap().edges(), &[Edge::new(0, 1, 9)]);
    }
}
