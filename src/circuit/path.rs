//! Closed-walk representation with O(1) splicing.

use std::collections::HashMap;
use std::fmt;

use crate::error::{EulerError, Result};
use crate::graph::VertexId;

use super::order::OrderList;

/// Sentinel index for "no next node".
const NIL: usize = usize::MAX;

/// One vertex occurrence in the walk.
#[derive(Debug, Clone, Copy)]
struct Node {
    vertex: VertexId,
    next: usize,
}

/// A walk through the graph, stored as a singly linked list in an arena.
///
/// Links are arena indices, so splicing a sub-walk in is a couple of index
/// writes. Sub-walks are built in the same arena (see [`Path::open_sub_path`])
/// and are never copied. Nodes never move once placed; the arena order is not
/// the walk order after a splice.
#[derive(Debug, Clone)]
pub struct Path {
    /// Node arena, shared by the walk and every open sub-path
    nodes: Vec<Node>,
    /// Walk-order labels for every arena slot
    order: OrderList,
    /// First node of the walk
    head: usize,
    /// Last node of the walk
    tail: usize,
    /// Number of linked nodes (arena may hold unlinked ones)
    len: usize,
    /// Latest occurrence of each vertex in walk order
    last_occurrence: HashMap<VertexId, usize>,
    /// Bumped by every append and splice
    generation: u64,
}

/// A closed sub-walk under construction inside a host [`Path`]'s arena.
///
/// Opened with [`Path::open_sub_path`], grown with
/// [`Path::extend_sub_path`] and linked in with [`Path::insert_at_vertex`].
/// It is only valid until the host is next appended to or spliced.
#[derive(Debug)]
pub struct SubPath {
    /// Vertex the sub-walk starts at
    vertex: VertexId,
    /// Host node the sub-walk will follow
    anchor: usize,
    /// First node (a duplicate of the anchor's vertex, skipped on splice)
    head: usize,
    /// Last node
    tail: usize,
    /// Number of nodes, head included
    len: usize,
    /// Host generation when opened
    generation: u64,
    /// Latest occurrence of each vertex after the head
    occurrences: HashMap<VertexId, usize>,
}

impl SubPath {
    /// Vertex the sub-walk starts at.
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// Number of vertices, the starting one included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A sub-path always holds its starting vertex.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            order: OrderList::default(),
            head: NIL,
            tail: NIL,
            len: 0,
            last_occurrence: HashMap::new(),
            generation: 0,
        }
    }

    /// Create a path holding a single start vertex.
    pub fn starting_at(vertex: VertexId) -> Self {
        let mut path = Self::new();
        path.append(vertex);
        path
    }

    fn push_node(&mut self, vertex: VertexId, after: Option<usize>) -> usize {
        let idx = self.order.insert_after(after);
        debug_assert_eq!(idx, self.nodes.len());
        self.nodes.push(Node { vertex, next: NIL });
        idx
    }

    /// Append a vertex at the end of the walk.
    pub fn append(&mut self, vertex: VertexId) {
        let after = (self.tail != NIL).then_some(self.tail);
        let idx = self.push_node(vertex, after);
        if self.head == NIL {
            self.head = idx;
        } else {
            self.nodes[self.tail].next = idx;
        }
        self.tail = idx;
        self.len += 1;
        self.last_occurrence.insert(vertex, idx);
        self.generation += 1;
    }

    /// Number of vertices in the walk.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the walk has no vertices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First vertex of the walk.
    pub fn first(&self) -> Option<VertexId> {
        self.nodes.get(self.head).map(|n| n.vertex)
    }

    /// Last vertex of the walk.
    pub fn last(&self) -> Option<VertexId> {
        self.nodes.get(self.tail).map(|n| n.vertex)
    }

    /// Check if the walk ends where it started.
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.first() == self.last()
    }

    /// Check if `vertex` occurs in this walk.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.last_occurrence.contains_key(&vertex)
    }

    /// Iterate over the vertices in walk order.
    pub fn iter(&self) -> PathIter<'_> {
        PathIter {
            path: self,
            cursor: self.head,
        }
    }

    /// Vertices in walk order, start to end.
    pub fn as_sequence(&self) -> Vec<VertexId> {
        self.iter().collect()
    }

    /// Start a sub-walk at `vertex`, to be spliced after its last occurrence.
    pub fn open_sub_path(&mut self, vertex: VertexId) -> Result<SubPath> {
        let anchor = *self
            .last_occurrence
            .get(&vertex)
            .ok_or(EulerError::VertexNotFound { vertex })?;
        let head = self.push_node(vertex, Some(anchor));
        Ok(SubPath {
            vertex,
            anchor,
            head,
            tail: head,
            len: 1,
            generation: self.generation,
            occurrences: HashMap::new(),
        })
    }

    /// Append a vertex to an open sub-walk. The host walk is unchanged.
    pub fn extend_sub_path(&mut self, sub_path: &mut SubPath, vertex: VertexId) {
        let idx = self.push_node(vertex, Some(sub_path.tail));
        self.nodes[sub_path.tail].next = idx;
        sub_path.tail = idx;
        sub_path.len += 1;
        sub_path.occurrences.insert(vertex, idx);
    }

    /// Splice `sub_path` into this walk right after the last occurrence of `vertex`.
    ///
    /// `sub_path` must start at `vertex`, hold at least two nodes and have
    /// been opened on this walk since its last change. Its first node is
    /// dropped since `vertex` is already in this walk. Linking is two index
    /// writes; the last-occurrence map is then updated for the vertices the
    /// sub-walk visits.
    pub fn insert_at_vertex(&mut self, vertex: VertexId, sub_path: SubPath) -> Result<()> {
        let anchor = *self
            .last_occurrence
            .get(&vertex)
            .ok_or(EulerError::VertexNotFound { vertex })?;

        if sub_path.vertex != vertex {
            return Err(EulerError::invalid_sub_path(
                vertex,
                format!("sub-path starts at {}", sub_path.vertex),
            ));
        }
        if sub_path.len < 2 {
            return Err(EulerError::invalid_sub_path(
                vertex,
                "sub-path must have at least 2 nodes",
            ));
        }
        if sub_path.generation != self.generation || sub_path.anchor != anchor {
            return Err(EulerError::invalid_sub_path(
                vertex,
                "path changed since the sub-path was opened",
            ));
        }

        let second = self.nodes[sub_path.head].next;
        let old_next = self.nodes[anchor].next;
        self.nodes[anchor].next = second;
        self.nodes[sub_path.tail].next = old_next;
        if anchor == self.tail {
            self.tail = sub_path.tail;
        }
        self.len += sub_path.len - 1;
        self.generation += 1;

        // Sub-path nodes now sit right after the anchor; they win over any
        // host occurrence that comes before them.
        for (v, idx) in sub_path.occurrences {
            match self.last_occurrence.get(&v) {
                Some(&current) if !self.order.precedes(current, idx) => {}
                _ => {
                    self.last_occurrence.insert(v, idx);
                }
            }
        }
        Ok(())
    }

    /// Render the walk as `[v0, v1, ...]`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, vertex) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, "]")
    }
}

/// Iterator over a [`Path`] in walk order.
pub struct PathIter<'a> {
    path: &'a Path,
    cursor: usize,
}

impl<'a> Iterator for PathIter<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let node = self.path.nodes.get(self.cursor)?;
        self.cursor = node.next;
        Some(node.vertex)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = VertexId;
    type IntoIter = PathIter<'a>;

    fn into_iter(self) -> PathIter<'a> {
        self.iter()
    }
}
