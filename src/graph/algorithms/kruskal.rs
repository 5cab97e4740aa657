//! Kruskal's minimum spanning tree algorithm.
//!
//! Greedy edge selection: consider edges in ascending weight order and accept
//! every edge whose endpoints lie in different components of a [`DisjointSet`].
//! The sort is stable, so equal-weight edges are considered in insertion order
//! and the output is deterministic.
//!
//! Time: *O*(*E* log *E*) for sorting plus the unions.

use crate::collections::DisjointSet;
use crate::error::{GraphError, Result};
use crate::graph::algorithms::SpanningTree;
use crate::graph::edge::Weight;
use crate::graph::weighted_graph::WeightedGraph;

/// Computes a minimum spanning tree from the graph's edge list.
///
/// Edges are returned in acceptance order. A single-vertex graph yields an
/// empty tree. Selection stops once `vertex_count - 1` edges are accepted.
///
/// # Errors
/// Returns [`GraphError::DisconnectedGraph`] if the edge list is exhausted
/// before `vertex_count - 1` edges are accepted.
pub fn kruskal<W: Weight>(graph: &WeightedGraph<W>) -> Result<SpanningTree<W>> {
    let target = graph.vertex_count() - 1;

    let mut sorted = graph.edges().to_vec();
    // `sort_by_key` is stable: ties keep insertion order.
    sorted.sort_by_key(|edge| edge.weight);

    let mut components = DisjointSet::new(graph.vertex_count());
    let mut selected = Vec::with_capacity(target);

    for edge in sorted {
        if selected.len() == target {
            break;
        }

        let x = components.find(edge.source);
        let y = components.find(edge.destination);
        if x != y {
            tracing::trace!(
                source = edge.source,
                destination = edge.destination,
                weight = ?edge.weight,
                "kruskal accepted edge"
            );
            selected.push(edge);
            components.union(x, y);
        }
    }

    if selected.len() < target {
        tracing::debug!(
            accepted = selected.len(),
            needed = target,
            "kruskal exhausted edges before spanning the graph"
        );
        return Err(GraphError::DisconnectedGraph);
    }

    Ok(SpanningTree::from_edges(selected))
}
