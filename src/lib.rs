//! # `arbor` - Minimum Spanning Tree Toolkit
//!
//! Computes minimum spanning trees of weighted, undirected, connected graphs with
//! two independent textbook algorithms and reports how long each one took.
//!
//! ## Algorithms
//!
//! - **Kruskal** (`kruskal`): stable-sorts the edge list by weight and accepts
//!   every edge that joins two different components of a union-find structure.
//!   *O*(*E* log *E*).
//! - **Prim** (`prim`): grows one tree from a chosen start vertex, scanning a
//!   key array for the lightest connecting edge each round. *O*(*V*²).
//!
//! Both read the same immutable [`WeightedGraph`]: Kruskal its insertion-ordered
//! edge list, Prim its dense adjacency matrix. On any connected graph the two
//! trees have equal total weight, though edge order (acceptance order versus
//! vertex order) and, with equal-weight alternatives, the edge sets may differ.
//!
//! ## Errors
//!
//! Out-of-range vertices, empty graphs and disconnected graphs surface as
//! [`GraphError`] values; no solver returns a partial tree.
//!
//! ## Example
//!
//! ```rust
//! use arbor::{kruskal, prim, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new(4);
//! builder.add_edge(0, 1, 4)?;
//! builder.add_edge(1, 2, 1)?;
//! builder.add_edge(2, 3, 3)?;
//! builder.add_edge(3, 0, 2)?;
//! let graph = builder.build()?;
//!
//! let k = kruskal(&graph)?;
//! let p = prim(&graph, 0)?;
//! assert_eq!(k.total_weight(), Some(6));
//! assert_eq!(p.total_weight(), Some(6));
//! # Ok::<(), arbor::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod report;

pub use collections::{DisjointSet, WeightMatrix};
pub use error::{GraphError, Result};
pub use graph::{
    kruskal, prim, reference_graph, Algorithm, Edge, GraphBuilder, GraphDefinition, PrimSolver,
    SpanningTree, VertexId, Weight, WeightedGraph,
};
pub use report::{compare, run, Comparison, SolveOptions, SolverReport};

#[cfg(feature = "parallel")]
pub use report::compare_parallel;

// Solvers share the graph across threads by reference.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WeightedGraph<i64>>();
    assert_send_sync::<SpanningTree<i64>>();
};
