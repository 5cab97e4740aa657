//! Edge and weight types.

use core::fmt;

use num_traits::{CheckedAdd, Zero};
use serde::{Deserialize, Serialize};

/// Index of a vertex in `[0, vertex_count)`.
pub type VertexId = usize;

/// Types usable as edge weights.
///
/// Weights must be totally ordered (for sorting and key comparison), have a
/// zero (Prim's start key) and support overflow-checked addition (tree totals).
/// Any integer type qualifies; negative and zero weights are allowed.
pub trait Weight: Copy + Ord + Zero + CheckedAdd + fmt::Debug {}

impl<T: Copy + Ord + Zero + CheckedAdd + fmt::Debug> Weight for T {}

/// An undirected weighted edge.
///
/// `source` and `destination` keep the order they were given in, although the
/// edge is treated as undirected everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<W> {
    /// First endpoint.
    pub source: VertexId,
    /// Second endpoint.
    pub destination: VertexId,
    /// Edge weight.
    pub weight: W,
}

impl<W> Edge<W> {
    /// Creates a new edge.
    pub const fn new(source: VertexId, destination: VertexId, weight: W) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns `true` if the edge joins `a` and `b` in either direction.
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.source == a && self.destination == b) || (self.source == b && self.destination == a)
    }
}

impl<W> From<(VertexId, VertexId, W)> for Edge<W> {
    fn from((source, destination, weight): (VertexId, VertexId, W)) -> Self {
        Self::new(source, destination, weight)
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge: {}-{}, Weight: {}",
            self.source, self.destination, self.weight
        )
    }
}
