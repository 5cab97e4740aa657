//! An immutable weighted undirected graph and its builder.
//!
//! The graph keeps two views of the same edges:
//! - an insertion-ordered edge list (read by Kruskal)
//! - a dense symmetric [`WeightMatrix`] (read by Prim)
//!
//! Duplicate edges are not rejected. A later insertion for the same vertex pair
//! overwrites the matrix cell while the edge list retains every insertion, so the
//! two views can disagree on multigraph input.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `GraphBuilder::new` | \(O(n^2)\) | Allocates the matrix |
//! | `add_edge` | \(O(1)\) amortized | Appends and writes two cells |
//! | `weight` | \(O(1)\) | Matrix lookup |
//! | `neighbors` | \(O(n)\) | Row scan |

use serde::{Deserialize, Serialize};

use crate::collections::WeightMatrix;
use crate::error::{GraphError, Result};
use crate::graph::edge::{Edge, VertexId, Weight};

/// A weighted undirected graph over the vertices `0..vertex_count`.
///
/// Built once through [`GraphBuilder`] and read-only afterwards; solvers take it
/// by shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
    matrix: WeightMatrix<W>,
}

impl<W: Weight> WeightedGraph<W> {
    /// Starts building a graph with `vertex_count` vertices.
    pub fn builder(vertex_count: usize) -> GraphBuilder<W> {
        GraphBuilder::new(vertex_count)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edges in the edge list, duplicates included.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns the adjacency matrix.
    #[inline]
    pub fn matrix(&self) -> &WeightMatrix<W> {
        &self.matrix
    }

    /// Returns the matrix weight between `a` and `b`, if an edge is present.
    pub fn weight(&self, a: VertexId, b: VertexId) -> Option<W> {
        self.matrix.get(a, b)
    }

    /// Returns the neighbours of `vertex` as `(neighbour, weight)` pairs in index order.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `vertex` is out of range.
    pub fn neighbors(&self, vertex: VertexId) -> Result<impl Iterator<Item = (VertexId, W)> + '_> {
        self.check_vertex(vertex)?;
        Ok(self.matrix.row_entries(vertex))
    }

    /// Ensures `vertex` lies in `[0, vertex_count)`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] otherwise.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        check_vertex(vertex, self.vertex_count)
    }
}

fn check_vertex(vertex: VertexId, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::InvalidVertex {
            vertex,
            vertex_count,
        })
    }
}

/// Incrementally collects edges, then freezes them into a [`WeightedGraph`].
#[derive(Debug, Clone)]
pub struct GraphBuilder<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
    matrix: WeightMatrix<W>,
}

impl<W: Weight> GraphBuilder<W> {
    /// Creates a builder for a graph with `vertex_count` vertices and no edges.
    ///
    /// # Panics
    /// Panics if the adjacency matrix cannot be allocated; use [`Self::try_new`]
    /// for untrusted vertex counts.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            matrix: WeightMatrix::new(vertex_count),
        }
    }

    /// Creates a builder, rejecting vertex counts whose matrix cannot be allocated.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] if `vertex_count²` cells overflow
    /// `usize` or the allocation is refused.
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        let matrix = WeightMatrix::try_new(vertex_count)
            .ok_or(GraphError::TooManyVertices { vertex_count })?;
        Ok(Self {
            vertex_count,
            edges: Vec::new(),
            matrix,
        })
    }

    /// Adds the undirected edge `source - destination`.
    ///
    /// Appends to the edge list and sets both symmetric matrix cells. A repeated
    /// pair overwrites the matrix cell; the edge list keeps both entries.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is out of range;
    /// the builder is left unchanged.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: W,
    ) -> Result<&mut Self> {
        check_vertex(source, self.vertex_count)?;
        check_vertex(destination, self.vertex_count)?;

        self.edges.push(Edge::new(source, destination, weight));
        self.matrix.set_symmetric(source, destination, weight);
        Ok(self)
    }

    /// Adds every edge from `edges`, stopping at the first invalid one.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] for the first out-of-range endpoint.
    pub fn with_edges<I, E>(mut self, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
    {
        for edge in edges {
            let edge = edge.into();
            self.add_edge(edge.source, edge.destination, edge.weight)?;
        }
        Ok(self)
    }

    /// Freezes the builder into an immutable graph.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] if the graph has no vertices.
    pub fn build(self) -> Result<WeightedGraph<W>> {
        if self.vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        debug_assert!(self.matrix.is_symmetric());
        tracing::debug!(
            vertices = self.vertex_count,
            edges = self.edges.len(),
            "graph built"
        );
        Ok(WeightedGraph {
            vertex_count: self.vertex_count,
            edges: self.edges,
            matrix: self.matrix,
        })
    }
}

/// A serializable graph description: a vertex count plus an edge list.
///
/// ```json
/// { "vertices": 3, "edges": [ { "source": 0, "destination": 1, "weight": 4 } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefinition<W> {
    /// Number of vertices.
    pub vertices: usize,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<Edge<W>>,
}

impl<W: Weight> GraphDefinition<W> {
    /// Validates the definition and builds the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`], [`GraphError::InvalidVertex`] or
    /// [`GraphError::EmptyGraph`].
    pub fn into_graph(self) -> Result<WeightedGraph<W>> {
        GraphBuilder::try_new(self.vertices)?.with_edges(self.edges)?.build()
    }
}

impl<W: Weight> From<&WeightedGraph<W>> for GraphDefinition<W> {
    fn from(graph: &WeightedGraph<W>) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edges().to_vec(),
        }
    }
}

/// The seven-vertex graph used by the demonstration run.
///
/// Its minimum spanning tree has total weight 16.
pub fn reference_graph() -> WeightedGraph<i64> {
    const EDGES: [(VertexId, VertexId, i64); 12] = [
        (0, 1, 2),
        (0, 3, 1),
        (0, 2, 4),
        (1, 3, 3),
        (1, 4, 10),
        (2, 3, 2),
        (2, 5, 5),
        (3, 4, 7),
        (3, 5, 8),
        (3, 6, 4),
        (4, 6, 6),
        (5, 6, 1),
    ];

    let mut builder = GraphBuilder::new(7);
    for (source, destination, weight) in EDGES {
        builder
            .add_edge(source, destination, weight)
            .unwrap_or_else(|e| unreachable!("reference edge rejected: {e}"));
    }
    builder
        .build()
        .unwrap_or_else(|e| unreachable!("reference graph rejected: {e}"))
}
