//! Error types for Euler Core.
//!
//! This module provides a unified error type [`EulerError`] that covers
//! all error conditions that can occur while building a graph, searching
//! for a circuit, splicing paths, validating a result, and reading edge
//! lists from text.

use thiserror::Error;

use crate::graph::{EdgeId, VertexId};

/// Result type alias using [`EulerError`].
pub type Result<T> = std::result::Result<T, EulerError>;

/// Unified error type for all Euler Core operations.
#[derive(Error, Debug)]
pub enum EulerError {
    // ============ Graph Errors ============
    /// Vertex index outside the graph's bookkeeping
    #[error("Unknown vertex {vertex} (graph has {vertex_count} vertices)")]
    UnknownVertex {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// An edge or graph operation hit an inconsistent state
    #[error("Invalid graph state: {message}")]
    InvalidState { message: String },

    // ============ Circuit Errors ============
    /// The walk got stuck before returning to its start
    #[error("Graph is not Eulerian: walk from {start} got stuck at {vertex}")]
    NotEulerian { start: VertexId, vertex: VertexId },

    /// Splice point was never appended to the host path
    #[error("Vertex {vertex} not found in path")]
    VertexNotFound { vertex: VertexId },

    /// Sub-path is too short or does not start at the splice vertex
    #[error("Invalid sub-path for splice at {vertex}: {message}")]
    InvalidSubPath { vertex: VertexId, message: String },

    // ============ Validation Errors ============
    /// Circuit uses an edge that is absent or already used up
    #[error("Edge ({from}, {to}) in path does not belong to the graph")]
    EdgeNotInGraph { from: VertexId, to: VertexId },

    // ============ Input Errors ============
    /// Error while parsing an edge list
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Error reading an edge list file
    #[error("Failed to read graph file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl EulerError {
    /// Create an invalid state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create an invalid sub-path error
    pub fn invalid_sub_path(vertex: VertexId, message: impl Into<String>) -> Self {
        Self::InvalidSubPath {
            vertex,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an error for an edge id the graph never handed out or already deleted.
    pub fn stale_edge(edge: EdgeId) -> Self {
        Self::invalid_state(format!("edge {} is unknown or already deleted", edge))
    }
}
