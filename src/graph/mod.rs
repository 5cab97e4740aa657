//! Weighted undirected graphs and their spanning-tree algorithms.
//!
//! - `edge`: edge and weight types
//! - `weighted_graph`: the immutable graph store and its builder
//! - `algorithms`: Kruskal's and Prim's minimum spanning tree solvers

pub mod algorithms;
pub mod edge;
pub mod weighted_graph;

pub use algorithms::{kruskal, prim, Algorithm, ParseAlgorithmError, PrimSolver, SpanningTree};
pub use edge::{Edge, VertexId, Weight};
pub use weighted_graph::{reference_graph, GraphBuilder, GraphDefinition, WeightedGraph};
