//! Edge list reader for building graphs from text.
//!
//! The format is line-oriented and human-editable, one edge per line.
//!
//! # Grammar Overview
//!
//! ```text
//! file      = { line }
//! line      = comment | directive | edge | empty
//! comment   = ('#' | ';') { any_char }
//! directive = '.' directive_name integer
//! edge      = integer integer
//!
//! directive_name = "vertices" | "start"
//! integer   = digit+
//! ```
//!
//! # Directives
//!
//! | Directive | Description | Syntax |
//! |-----------|-------------|--------|
//! | .vertices | Number of vertices (default: highest index + 1) | `.vertices <n>` |
//! | .start | Start vertex for the circuit (default: 0) | `.start <v>` |
//!
//! # Example
//!
//! ```text
//! # Triangle
//! .vertices 3
//! 0 1
//! 1 2
//! 2 0
//! ```

mod parser;

pub use parser::{EdgeList, Parser};

use crate::error::Result;

/// Parse an edge list string.
pub fn parse(input: &str) -> Result<EdgeList> {
    Parser::new(input).parse()
}

/// Parse an edge list file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<EdgeList> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::EulerError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
