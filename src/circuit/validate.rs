//! Circuit validation.

use std::collections::HashMap;

use crate::error::{EulerError, Result};
use crate::graph::{Graph, VertexId};

use super::Path;

/// Check that `path` uses every live edge of `graph` exactly once.
///
/// Builds a frequency table of unordered endpoint pairs (a self-loop is
/// counted once under `(v, v)`) and consumes one entry per consecutive pair
/// of the path. Neither argument is modified.
///
/// Returns `Err(EdgeNotInGraph)` as soon as the path steps over an edge the
/// graph does not have, or has fewer copies of; otherwise `Ok(true)` iff no
/// edge is left over.
pub fn is_eulerian_circuit(graph: &Graph, path: &Path) -> Result<bool> {
    let mut frequency: HashMap<(VertexId, VertexId), usize> = HashMap::new();
    for edge in graph.edges() {
        *frequency.entry(edge.key()).or_insert(0) += 1;
    }

    let mut vertices = path.iter();
    if let Some(mut prev) = vertices.next() {
        for vertex in vertices {
            let key = if prev <= vertex {
                (prev, vertex)
            } else {
                (vertex, prev)
            };
            match frequency.get_mut(&key) {
                Some(count) if *count > 0 => *count -= 1,
                _ => {
                    return Err(EulerError::EdgeNotInGraph {
                        from: prev,
                        to: vertex,
                    })
                }
            }
            prev = vertex;
        }
    }

    Ok(frequency.values().all(|&count| count == 0))
}

/// Plain predicate form of [`is_eulerian_circuit`]: a path that uses a
/// foreign or over-used edge is simply not a circuit of the graph.
pub fn is_valid_circuit(graph: &Graph, path: &Path) -> bool {
    is_eulerian_circuit(graph, path).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(vertices: &[usize]) -> Path {
        let mut path = Path::new();
        for &v in vertices {
            path.append(VertexId(v));
        }
        path
    }

    fn triangle() -> Graph {
        Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap()
    }

    #[test]
    fn test_accepts_circuit_in_either_direction() {
        let graph = triangle();
        assert!(is_eulerian_circuit(&graph, &path_of(&[0, 1, 2, 0])).unwrap());
        assert!(is_eulerian_circuit(&graph, &path_of(&[0, 2, 1, 0])).unwrap());
    }

    #[test]
    fn test_leftover_edge_is_false() {
        let graph = triangle();
        assert!(!is_eulerian_circuit(&graph, &path_of(&[0, 1, 2])).unwrap());
    }

    #[test]
    fn test_foreign_edge_is_error() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let err = is_eulerian_circuit(&graph, &path_of(&[0, 3, 0])).unwrap_err();
        assert!(matches!(
            err,
            EulerError::EdgeNotInGraph { from, to } if from == VertexId(0) && to == VertexId(3)
        ));
        assert!(!is_valid_circuit(&graph, &path_of(&[0, 3, 0])));
    }

    #[test]
    fn test_overused_edge_is_error() {
        let graph = triangle();
        assert!(matches!(
            is_eulerian_circuit(&graph, &path_of(&[0, 1, 0, 1, 2, 0])),
            Err(EulerError::EdgeNotInGraph { .. })
        ));
    }

    #[test]
    fn test_parallel_edges_and_self_loops() {
        let graph = Graph::from_edges(2, [(0, 1), (1, 0), (1, 1)]).unwrap();
        assert!(is_eulerian_circuit(&graph, &path_of(&[0, 1, 1, 0])).unwrap());
        assert!(!is_eulerian_circuit(&graph, &path_of(&[0, 1, 0])).unwrap());
    }

    #[test]
    fn test_pure_and_repeatable() {
        let graph = triangle();
        let path = path_of(&[0, 1, 2, 0]);
        let first = is_eulerian_circuit(&graph, &path).unwrap();
        let second = is_eulerian_circuit(&graph, &path).unwrap();
        assert_eq!(first, second);
        assert_eq!(graph.live_edge_count(), 3);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_empty_graph_and_path() {
        let graph = Graph::new(1);
        assert!(is_eulerian_circuit(&graph, &Path::new()).unwrap());
        assert!(is_eulerian_circuit(&graph, &path_of(&[0])).unwrap());
    }
}
