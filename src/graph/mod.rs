//! Undirected multigraph representation.
//!
//! This module provides the mutable [`Graph`] the circuit search runs on.
//! Vertices are plain indices, edges live in an arena and are deleted
//! lazily, and every vertex keeps a live degree and a traversal cursor so
//! that finding the next unused edge is amortized O(1).

mod multigraph;
mod types;

pub use multigraph::Graph;
pub use types::*;
