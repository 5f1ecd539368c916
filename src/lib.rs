//! # Euler Core
//!
//! Eulerian circuits on undirected multigraphs.
//!
//! This library provides:
//! - A mutable multigraph with lazy edge deletion and per-vertex traversal cursors
//! - Hierholzer's algorithm with O(1) splicing of sub-loops into a linked path
//! - A validator that checks a walk against the original edge multiset
//! - A plain-text edge list reader for feeding graphs in from files
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`graph`] - Multigraph representation with tombstoned edges
//! - [`circuit`] - Path, circuit search and circuit validation
//! - [`edgelist`] - Parser for the edge list text format
//! - [`error`] - Unified error type
//!
//! ## Usage
//!
//! ```
//! use euler_core::{eulerian_circuit, is_eulerian_circuit, Graph};
//!
//! let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)])?;
//! let circuit = eulerian_circuit(&graph)?;
//! assert_eq!(circuit.len(), 4);
//! assert!(is_eulerian_circuit(&graph, &circuit)?);
//! # Ok::<(), euler_core::EulerError>(())
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! eulerian graph.edges --verify
//! ```
//!
//! ## Circuit Search Method
//!
//! The search runs on a clone of the caller's graph so the original stays
//! available for validation:
//!
//! 1. Walk from the start vertex, deleting each edge taken, until the walk
//!    returns to the start
//! 2. Record the vertices on that loop that still have unused edges
//! 3. Walk a sub-loop from each recorded vertex and splice it into the path
//!    at that vertex, queueing any further vertices the sub-loop leaves behind
//!
//! Pending splice points live on an explicit work stack, so deep nesting
//! does not grow the call stack.

pub mod circuit;
pub mod edgelist;
pub mod error;
pub mod graph;

// Re-export main types for convenience
pub use circuit::{
    eulerian_circuit, eulerian_circuit_from, find_circuit, is_eulerian_circuit, CircuitFinder,
    FinderConfig, Path, SpliceStrategy, SubPath,
};
pub use error::{EulerError, Result};
pub use graph::{Edge, EdgeId, Graph, VertexId};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmEulerGraph;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
