//! Mutable undirected multigraph with lazy edge deletion.

use super::types::{Edge, EdgeId, VertexId};
use crate::error::{EulerError, Result};

/// An undirected multigraph over vertices `0..vertex_count`.
///
/// Edges are stored once in an arena and referenced from each endpoint's
/// adjacency list by [`EdgeId`]. Deleting an edge only sets its tombstone;
/// adjacency lists are never shrunk, so traversal cursors stay valid.
#[derive(Debug)]
pub struct Graph {
    /// Number of vertices
    vertex_count: usize,

    /// Edge arena, in insertion order
    edges: Vec<Edge>,

    /// Incident edges per vertex, in insertion order.
    /// A self-loop appears twice in its vertex's list.
    adjacency: Vec<Vec<EdgeId>>,

    /// Live degree per vertex
    degrees: Vec<usize>,

    /// Traversal cursor per vertex (index into `adjacency[v]`)
    cursors: Vec<usize>,

    /// Number of edges not yet deleted
    live_edges: usize,
}

impl Graph {
    /// Create an empty graph with a fixed number of vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
            degrees: vec![0; vertex_count],
            cursors: vec![0; vertex_count],
            live_edges: 0,
        }
    }

    /// Build a graph from `(v1, v2)` index pairs.
    pub fn from_edges<I>(vertex_count: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (v1, v2) in pairs {
            graph.add_edge(VertexId(v1), VertexId(v2))?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges that have not been deleted.
    pub fn live_edge_count(&self) -> usize {
        self.live_edges
    }

    /// Add an undirected edge and return its id.
    ///
    /// A self-loop is recorded twice in its vertex's adjacency list and adds
    /// 2 to that vertex's degree.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<EdgeId> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(v1, v2));

        self.adjacency[v1.0].push(id);
        self.adjacency[v2.0].push(id);
        self.degrees[v1.0] += 1;
        self.degrees[v2.0] += 1;
        self.live_edges += 1;

        Ok(id)
    }

    /// Live degree of a vertex.
    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.degrees[vertex.0])
    }

    /// Look up an edge by id, deleted or not.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges
            .get(id.0)
            .ok_or_else(|| EulerError::invalid_state(format!("edge {} does not exist", id)))
    }

    /// First live edge at `vertex`, or `None` once every incident edge is gone.
    ///
    /// The cursor only moves past tombstones, so calling this again before
    /// the returned edge is deleted yields the same edge.
    pub fn next_live_edge(&mut self, vertex: VertexId) -> Result<Option<EdgeId>> {
        self.check_vertex(vertex)?;

        let incident = &self.adjacency[vertex.0];
        let cursor = &mut self.cursors[vertex.0];
        while let Some(&id) = incident.get(*cursor) {
            if !self.edges[id.0].deleted {
                return Ok(Some(id));
            }
            *cursor += 1;
        }
        Ok(None)
    }

    /// Tombstone an edge and update the degrees of its endpoints.
    ///
    /// Every edge may be deleted at most once.
    pub fn delete_edge(&mut self, id: EdgeId) -> Result<()> {
        let edge = match self.edges.get_mut(id.0) {
            Some(edge) if !edge.deleted => edge,
            _ => return Err(EulerError::stale_edge(id)),
        };
        edge.deleted = true;
        let (v1, v2) = (edge.v1, edge.v2);

        self.degrees[v1.0] -= 1;
        self.degrees[v2.0] -= 1;
        self.live_edges -= 1;
        Ok(())
    }

    /// Iterate over live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|e| !e.deleted)
    }

    /// Iterate over live edges together with their ids.
    pub fn edges_with_ids(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.deleted)
            .map(|(i, e)| (EdgeId(i), e))
    }

    /// Vertices whose live degree is odd.
    ///
    /// Diagnostic only; the circuit search never checks parity up front.
    pub fn odd_degree_vertices(&self) -> Vec<VertexId> {
        self.degrees
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d % 2 == 1)
            .map(|(v, _)| VertexId(v))
            .collect()
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.0 < self.vertex_count {
            Ok(())
        } else {
            Err(EulerError::UnknownVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}

/// Cloning yields a fresh working copy: live edges only, new ids, all
/// cursors rewound.
impl Clone for Graph {
    fn clone(&self) -> Self {
        let mut graph = Graph::new(self.vertex_count);
        for edge in self.edges() {
            // Endpoints were bounds-checked on insertion into `self`.
            let id = EdgeId(graph.edges.len());
            graph.edges.push(Edge::new(edge.v1, edge.v2));
            graph.adjacency[edge.v1.0].push(id);
            graph.adjacency[edge.v2.0].push(id);
            graph.degrees[edge.v1.0] += 1;
            graph.degrees[edge.v2.0] += 1;
            graph.live_edges += 1;
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId(i)
    }

    #[test]
    fn test_add_edge_updates_degrees() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0), (0, 1)]).unwrap();
        assert_eq!(graph.degree(v(0)).unwrap(), 3);
        assert_eq!(graph.degree(v(1)).unwrap(), 3);
        assert_eq!(graph.degree(v(2)).unwrap(), 2);
        assert_eq!(graph.live_edge_count(), 4);
        assert_eq!(graph.odd_degree_vertices(), vec![v(0), v(1)]);
    }

    #[test]
    fn test_self_loop_counts_twice() {
        let mut graph = Graph::new(1);
        let id = graph.add_edge(v(0), v(0)).unwrap();
        assert_eq!(graph.degree(v(0)).unwrap(), 2);
        assert!(graph.edge(id).unwrap().is_self_loop());

        graph.delete_edge(id).unwrap();
        assert_eq!(graph.degree(v(0)).unwrap(), 0);
        assert_eq!(graph.next_live_edge(v(0)).unwrap(), None);
    }

    #[test]
    fn test_out_of_range_vertex() {
        let mut graph = Graph::new(2);
        assert!(matches!(
            graph.add_edge(v(0), v(2)),
            Err(EulerError::UnknownVertex { vertex_count: 2, .. })
        ));
        assert!(matches!(
            graph.next_live_edge(v(5)),
            Err(EulerError::UnknownVertex { .. })
        ));
        assert!(graph.degree(v(2)).is_err());
    }

    #[test]
    fn test_next_live_edge_skips_tombstones() {
        let mut graph = Graph::from_edges(3, [(0, 1), (0, 2), (1, 2)]).unwrap();
        let first = graph.next_live_edge(v(0)).unwrap().unwrap();
        // Not consumed until deleted
        assert_eq!(graph.next_live_edge(v(0)).unwrap(), Some(first));

        graph.delete_edge(first).unwrap();
        let second = graph.next_live_edge(v(0)).unwrap().unwrap();
        assert_ne!(first, second);
        assert_eq!(graph.edge(second).unwrap().other_endpoint(v(0)).unwrap(), v(2));

        graph.delete_edge(second).unwrap();
        assert_eq!(graph.next_live_edge(v(0)).unwrap(), None);
        assert_eq!(graph.degree(v(0)).unwrap(), 0);
    }

    #[test]
    fn test_edge_deleted_through_other_endpoint() {
        let mut graph = Graph::from_edges(2, [(0, 1), (0, 1)]).unwrap();
        let from_one = graph.next_live_edge(v(1)).unwrap().unwrap();
        graph.delete_edge(from_one).unwrap();

        // Vertex 0's list shares the tombstone
        let from_zero = graph.next_live_edge(v(0)).unwrap().unwrap();
        assert_ne!(from_one, from_zero);
    }

    #[test]
    fn test_double_delete_fails() {
        let mut graph = Graph::from_edges(2, [(0, 1)]).unwrap();
        let id = graph.next_live_edge(v(0)).unwrap().unwrap();
        graph.delete_edge(id).unwrap();
        assert!(matches!(
            graph.delete_edge(id),
            Err(EulerError::InvalidState { .. })
        ));
        assert!(graph.delete_edge(EdgeId(7)).is_err());
    }

    #[test]
    fn test_clone_drops_tombstones() {
        let mut graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let id = graph.next_live_edge(v(0)).unwrap().unwrap();
        graph.delete_edge(id).unwrap();

        assert!(graph.edges_with_ids().all(|(live, _)| live != id));

        let mut copy = graph.clone();
        assert_eq!(copy.live_edge_count(), 2);
        assert_eq!(copy.edges().count(), 2);
        assert_eq!(copy.degree(v(0)).unwrap(), 1);

        // Deleting from the copy leaves the source untouched
        let id = copy.next_live_edge(v(2)).unwrap().unwrap();
        copy.delete_edge(id).unwrap();
        assert_eq!(graph.degree(v(2)).unwrap(), 2);
        assert_eq!(graph.live_edge_count(), 2);
    }

    #[test]
    fn test_other_endpoint_rejects_foreign_vertex() {
        let edge = Edge::new(v(1), v(3));
        assert_eq!(edge.other_endpoint(v(3)).unwrap(), v(1));
        assert_eq!(edge.key(), (v(1), v(3)));
        assert!(edge.other_endpoint(v(2)).is_err());
    }
}
