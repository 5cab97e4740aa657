//! Minimum spanning tree algorithms over [`WeightedGraph`].
//!
//! - [`kruskal`]: sorts the edge list, grows a forest with a
//!   [`DisjointSet`](crate::collections::DisjointSet)
//! - [`prim`]: grows a single tree from a start vertex using the adjacency matrix
//!
//! Both return a [`SpanningTree`] or a [`GraphError`](crate::GraphError); neither
//! mutates the graph, so they can run side by side on a shared reference.

pub mod kruskal;
pub mod prim;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::edge::{Edge, VertexId, Weight};
use crate::graph::weighted_graph::WeightedGraph;

pub use kruskal::kruskal;
pub use prim::{prim, PrimSolver};

/// The edges selected by a spanning-tree algorithm, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpanningTree<W> {
    edges: Vec<Edge<W>>,
}

impl<W: Weight> SpanningTree<W> {
    pub(crate) fn from_edges(edges: Vec<Edge<W>>) -> Self {
        Self { edges }
    }

    /// Returns the selected edges in the order the algorithm produced them.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Consumes the tree, returning its edges.
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }

    /// Returns the number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the tree has no edges (a single-vertex graph).
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of all edge weights, or `None` if the sum overflows `W`.
    pub fn total_weight(&self) -> Option<W> {
        self.edges
            .iter()
            .try_fold(W::zero(), |acc, edge| acc.checked_add(&edge.weight))
    }

    /// Returns `true` if some edge joins `a` and `b`, in either direction.
    pub fn contains(&self, a: VertexId, b: VertexId) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }
}

impl<W: Weight> IntoIterator for SpanningTree<W> {
    type Item = Edge<W>;
    type IntoIter = std::vec::IntoIter<Edge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// Selects one of the spanning-tree algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Edge-sorting with union-find, *O*(*E* log *E*).
    Kruskal,
    /// Key-array vertex growing, *O*(*V*²).
    Prim,
}

impl Algorithm {
    /// Every algorithm, in reporting order.
    pub const ALL: [Self; 2] = [Self::Kruskal, Self::Prim];

    /// Runs this algorithm. `start` is only consulted by Prim.
    ///
    /// # Errors
    /// Propagates the solver's [`GraphError`](crate::GraphError).
    pub fn solve<W: Weight>(
        self,
        graph: &WeightedGraph<W>,
        start: VertexId,
    ) -> Result<SpanningTree<W>> {
        match self {
            Self::Kruskal => kruskal(graph),
            Self::Prim => prim(graph, start),
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm `{}` (expected kruskal or prim)", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "prim" => Ok(Self::Prim),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_weight_sums_edges() {
        let tree = SpanningTree::from_edges(vec![Edge::new(0, 1, 3), Edge::new(1, 2, -1)]);
        assert_eq!(tree.total_weight(), Some(2));
        assert!(tree.contains(2, 1));
        assert!(!tree.contains(0, 2));
    }

    #[test]
    fn empty_tree_weighs_zero() {
        let tree = SpanningTree::<u32>::from_edges(Vec::new());
        assert!(tree.is_empty());
        assert_eq!(tree.total_weight(), Some(0));
    }

    #[test]
    fn overflowing_total_is_none() {
        let heavy = i64::MAX / 2 + 1;
        let tree = SpanningTree::from_edges(vec![Edge::new(0, 1, heavy), Edge::new(1, 2, heavy)]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.total_weight(), None);

        let tree = SpanningTree::from_edges(vec![Edge::new(0, 1, heavy), Edge::new(1, 2, -heavy)]);
        assert_eq!(tree.total_weight(), Some(0));
    }

    #[test]
    fn algorithm_parses_case_insensitively() {
        assert_eq!("Kruskal".parse::<Algorithm>(), Ok(Algorithm::Kruskal));
        assert_eq!("PRIM".parse::<Algorithm>(), Ok(Algorithm::Prim));
        assert!("boruvka".parse::<Algorithm>().is_err());
    }

    #[test]
    fn tree_serializes_as_edge_array() {
        let tree = SpanningTree::from_edges(vec![Edge::new(0, 1, 2)]);
        assert_eq!(
            serde_json::to_string(&tree).unwrap(),
            r#"[{"source":0,"destination":1,"weight":2}]"#
        );
    }
}
