//! Error type shared by the graph store and the spanning-tree solvers.

use core::fmt;

/// Convenience alias for results carrying a [`GraphError`].
pub type Result<T> = core::result::Result<T, GraphError>;

/// The error type for graph construction and spanning-tree computation.
///
/// Every variant is detected from in-memory state; no I/O happens inside the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index fell outside `[0, vertex_count)`.
    InvalidVertex {
        /// The offending index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The graph has no spanning tree because some vertex cannot be reached.
    DisconnectedGraph,
    /// The graph was declared with zero vertices.
    EmptyGraph,
    /// The adjacency matrix for this many vertices cannot be allocated.
    TooManyVertices {
        /// The requested vertex count.
        vertex_count: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVertex {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} out of bounds for graph with {vertex_count} vertices"
            ),
            Self::DisconnectedGraph => {
                f.write_str("graph is disconnected; no spanning tree exists")
            }
            Self::EmptyGraph => f.write_str("graph has no vertices"),
            Self::TooManyVertices { vertex_count } => write!(
                f,
                "cannot allocate an adjacency matrix for {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for GraphError {}
