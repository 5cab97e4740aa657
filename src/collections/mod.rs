//! Supporting data structures for the graph store and the solvers.
//!
//! - `disjoint_set`: union-find used for cycle detection
//! - `matrix`: dense symmetric adjacency matrix

pub mod disjoint_set;
pub mod matrix;

pub use disjoint_set::DisjointSet;
pub use matrix::WeightMatrix;
