//! Parser for the edge list format.

use crate::error::{EulerError, Result};
use crate::graph::{Graph, VertexId};

/// A parsed edge list, ready to be turned into a [`Graph`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    /// Number of vertices (declared or inferred)
    pub vertex_count: usize,
    /// Start vertex for the circuit
    pub start: VertexId,
    /// Edges in file order
    pub edges: Vec<(VertexId, VertexId)>,
}

impl EdgeList {
    /// Build a graph holding every edge in file order.
    pub fn to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new(self.vertex_count);
        for &(v1, v2) in &self.edges {
            graph.add_edge(v1, v2)?;
        }
        Ok(graph)
    }
}

/// Line-oriented parser for edge lists.
pub struct Parser<'a> {
    input: &'a str,
    declared_vertices: Option<usize>,
    start: Option<(usize, VertexId)>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            declared_vertices: None,
            start: None,
        }
    }

    /// Parse the whole input.
    pub fn parse(&mut self) -> Result<EdgeList> {
        let mut edges = Vec::new();
        let mut edge_lines = Vec::new();

        for (idx, raw) in self.input.lines().enumerate() {
            let line = idx + 1;
            let content = strip_comment(raw).trim();
            if content.is_empty() {
                continue;
            }

            let fields: Vec<&str> = content.split_whitespace().collect();
            if let Some(name) = fields[0].strip_prefix('.') {
                self.parse_directive(line, name, &fields[1..])?;
                continue;
            }

            match fields.as_slice() {
                [a, b] => {
                    let v1 = parse_index(line, a)?;
                    let v2 = parse_index(line, b)?;
                    edges.push((VertexId(v1), VertexId(v2)));
                    edge_lines.push(line);
                }
                _ => {
                    return Err(EulerError::parse(
                        line,
                        format!("expected 'u v', found {:?}", content),
                    ));
                }
            }
        }

        let inferred = edges
            .iter()
            .map(|(a, b)| a.0.max(b.0) + 1)
            .max()
            .unwrap_or(0);
        let vertex_count = match self.declared_vertices {
            Some(n) => n,
            None => inferred,
        };

        if let Some((&line, &(a, b))) = edge_lines
            .iter()
            .zip(&edges)
            .find(|(_, (a, b))| a.0 >= vertex_count || b.0 >= vertex_count)
        {
            return Err(EulerError::parse(
                line,
                format!("edge ({}, {}) exceeds .vertices {}", a, b, vertex_count),
            ));
        }

        let start = match self.start {
            Some((line, v)) if v.0 >= vertex_count.max(1) => {
                return Err(EulerError::parse(
                    line,
                    format!("start vertex {} out of range", v),
                ));
            }
            Some((_, v)) => v,
            None => VertexId(0),
        };

        Ok(EdgeList {
            vertex_count,
            start,
            edges,
        })
    }

    fn parse_directive(&mut self, line: usize, name: &str, args: &[&str]) -> Result<()> {
        let value = match args {
            [value] => parse_index(line, value)?,
            _ => {
                return Err(EulerError::parse(
                    line,
                    format!(".{} takes exactly one argument", name),
                ));
            }
        };

        match name {
            "vertices" => self.declared_vertices = Some(value),
            "start" => self.start = Some((line, VertexId(value))),
            _ => {
                return Err(EulerError::parse(
                    line,
                    format!("unknown directive '.{}'", name),
                ));
            }
        }
        Ok(())
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find(['#', ';']) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_index(line: usize, text: &str) -> Result<usize> {
    text.parse::<usize>()
        .map_err(|_| EulerError::parse(line, format!("invalid vertex index {:?}", text)))
}
