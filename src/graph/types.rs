//! Core types for graph representation.

use std::fmt;

use crate::error::{EulerError, Result};

/// A vertex of the graph, identified by its index in `[0, vertex_count)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Raw index of this vertex.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of an edge in the graph's edge arena.
///
/// Both adjacency lists of an edge hold the same id, so they see the same
/// tombstone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// An undirected edge. `v1 == v2` is a self-loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// First endpoint
    pub v1: VertexId,
    /// Second endpoint
    pub v2: VertexId,
    /// Lazy deletion flag
    pub deleted: bool,
}

impl Edge {
    /// Create a live edge between two vertices.
    pub fn new(v1: VertexId, v2: VertexId) -> Self {
        Self {
            v1,
            v2,
            deleted: false,
        }
    }

    /// Check if this edge starts and ends at the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.v1 == self.v2
    }

    /// Endpoints as an unordered key: smaller index first.
    pub fn key(&self) -> (VertexId, VertexId) {
        if self.v1 <= self.v2 {
            (self.v1, self.v2)
        } else {
            (self.v2, self.v1)
        }
    }

    /// Endpoint opposite to `vertex`; for a self-loop that is `vertex` itself.
    pub fn other_endpoint(&self, vertex: VertexId) -> Result<VertexId> {
        if vertex == self.v1 {
            Ok(self.v2)
        } else if vertex == self.v2 {
            Ok(self.v1)
        } else {
            Err(EulerError::invalid_state(format!(
                "vertex {} is not an endpoint of edge ({}, {})",
                vertex, self.v1, self.v2
            )))
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.v1, self.v2)
    }
}
