//! Eulerian circuit search, representation and validation.
//!
//! [`CircuitFinder`] runs Hierholzer's algorithm on a working copy of a
//! [`Graph`](crate::graph::Graph): it walks until a loop closes, then
//! resolves every vertex on that loop that still has unused edges as a
//! sub-loop and splices it into the [`Path`]. [`is_eulerian_circuit`]
//! checks the result against the original edge multiset.

mod finder;
mod order;
mod path;
mod validate;

pub use finder::{
    eulerian_circuit, eulerian_circuit_from, find_circuit, CircuitFinder, CircuitStats,
    FinderConfig, SpliceStrategy,
};
pub use path::{Path, PathIter, SubPath};
pub use validate::{is_eulerian_circuit, is_valid_circuit};
