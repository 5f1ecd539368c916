//! Hierholzer's algorithm with an explicit work stack.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, trace, warn};

use crate::error::{EulerError, Result};
use crate::graph::{Graph, VertexId};

use super::validate::is_eulerian_circuit;
use super::Path;

/// How the vertices that still need a sub-loop are discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpliceStrategy {
    /// Collect vertices with unused edges while walking the loop.
    #[default]
    CandidateSet,
    /// Rescan the finished loop for vertices with unused edges.
    Rescan,
}

/// Configuration for the circuit finder.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    /// Splice point discovery strategy.
    pub strategy: SpliceStrategy,
    /// Check the produced circuit against the source graph before returning it.
    pub verify: bool,
}

impl FinderConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the splice point discovery strategy.
    pub fn with_strategy(mut self, strategy: SpliceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable the post-search validation pass.
    ///
    /// Only applies to [`CircuitFinder::eulerian_circuit_from`], which keeps
    /// the untouched source graph around.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Counters for the last search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CircuitStats {
    /// Edges deleted from the working graph
    pub edges_consumed: usize,
    /// Closed loops walked, including the outermost one
    pub loops: usize,
    /// Sub-loops spliced into the circuit
    pub splices: usize,
    /// Deepest nesting of a sub-loop below the outermost loop
    pub max_depth: usize,
}

/// A vertex that had unused edges when its loop closed.
#[derive(Debug, Clone, Copy)]
struct SpliceTask {
    vertex: VertexId,
    depth: usize,
}

/// Eulerian circuit search.
#[derive(Debug, Default)]
pub struct CircuitFinder {
    config: FinderConfig,
    stats: CircuitStats,
}

impl CircuitFinder {
    /// Create a finder with default configuration.
    pub fn new() -> Self {
        Self::with_config(FinderConfig::default())
    }

    /// Create a finder with custom configuration.
    pub fn with_config(config: FinderConfig) -> Self {
        Self {
            config,
            stats: CircuitStats::default(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Counters from the most recent search.
    pub fn stats(&self) -> CircuitStats {
        self.stats
    }

    /// Find a closed walk from `start` using every edge reachable from it.
    ///
    /// `graph` is a working copy: every edge the walk uses is deleted from it.
    /// On error the graph is left partially consumed and should be dropped.
    pub fn find_circuit(&mut self, graph: &mut Graph, start: VertexId) -> Result<Path> {
        self.stats = CircuitStats::default();

        if graph.degree(start)? == 0 {
            return Err(EulerError::NotEulerian {
                start,
                vertex: start,
            });
        }

        let mut pending = Vec::new();
        let mut circuit = Path::starting_at(start);
        self.close_loop(graph, start, 0, &mut pending, |vertex| circuit.append(vertex))?;

        while let Some(task) = pending.pop() {
            // A sibling sub-loop may have used up the remaining edges
            if graph.degree(task.vertex)? == 0 {
                continue;
            }
            let mut sub_loop = circuit.open_sub_path(task.vertex)?;
            self.close_loop(graph, task.vertex, task.depth, &mut pending, |vertex| {
                circuit.extend_sub_path(&mut sub_loop, vertex)
            })?;
            debug!(
                vertex = task.vertex.0,
                depth = task.depth,
                len = sub_loop.len(),
                "splicing sub-loop"
            );
            circuit.insert_at_vertex(task.vertex, sub_loop)?;
            self.stats.splices += 1;
        }

        debug!(
            start = start.0,
            edges = self.stats.edges_consumed,
            loops = self.stats.loops,
            "circuit found"
        );
        Ok(circuit)
    }

    /// Find a circuit from `start` on a copy of `graph`, leaving `graph` intact.
    pub fn eulerian_circuit_from(&mut self, graph: &Graph, start: VertexId) -> Result<Path> {
        let mut working = graph.clone();
        let circuit = self.find_circuit(&mut working, start)?;

        let remaining = working.live_edge_count();
        if remaining > 0 {
            warn!(
                start = start.0,
                remaining, "edges not reachable from start vertex"
            );
        }

        if self.config.verify {
            verify_circuit(graph, &circuit, start)?;
        }
        Ok(circuit)
    }

    /// Walk from `start` until the walk returns to it, deleting every edge
    /// taken and handing each vertex reached to `emit`, then queue the
    /// vertices on the loop that still have edges.
    fn close_loop(
        &mut self,
        graph: &mut Graph,
        start: VertexId,
        depth: usize,
        pending: &mut Vec<SpliceTask>,
        mut emit: impl FnMut(VertexId),
    ) -> Result<()> {
        let rescan = self.config.strategy == SpliceStrategy::Rescan;
        let mut candidates = BTreeSet::new();
        let mut walked = Vec::new();
        if rescan {
            walked.push(start);
        }
        let mut len = 1;
        let mut current = start;

        loop {
            let id = graph
                .next_live_edge(current)?
                .ok_or(EulerError::NotEulerian {
                    start,
                    vertex: current,
                })?;
            let next = graph.edge(id)?.other_endpoint(current)?;
            graph.delete_edge(id)?;
            self.stats.edges_consumed += 1;

            if rescan {
                walked.push(next);
            } else {
                if graph.degree(current)? == 0 {
                    candidates.remove(&current);
                }
                if graph.degree(next)? > 0 {
                    candidates.insert(next);
                } else {
                    candidates.remove(&next);
                }
            }

            emit(next);
            len += 1;
            current = next;
            if current == start {
                break;
            }
        }

        self.stats.loops += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        trace!(start = start.0, depth, len, "loop closed");

        let child_depth = depth + 1;
        let queued: Vec<VertexId> = if rescan {
            let mut seen = HashSet::new();
            let mut queued = Vec::new();
            for vertex in walked {
                if graph.degree(vertex)? > 0 && seen.insert(vertex) {
                    queued.push(vertex);
                }
            }
            queued
        } else {
            candidates.into_iter().collect()
        };
        // Reversed so the first queued vertex is resolved first
        pending.extend(queued.into_iter().rev().map(|vertex| SpliceTask {
            vertex,
            depth: child_depth,
        }));

        Ok(())
    }
}

/// Check `circuit` against the untouched source graph, reporting any
/// mismatch as `InvalidState`.
fn verify_circuit(graph: &Graph, circuit: &Path, start: VertexId) -> Result<()> {
    match is_eulerian_circuit(graph, circuit) {
        Ok(true) => Ok(()),
        Ok(false) => {
            let unused = graph.live_edge_count().saturating_sub(circuit.len().saturating_sub(1));
            Err(EulerError::invalid_state(format!(
                "circuit from {} leaves {} edges unused",
                start, unused
            )))
        }
        Err(err) => Err(EulerError::invalid_state(format!(
            "circuit from {} does not follow the graph: {}",
            start, err
        ))),
    }
}

/// Find a circuit from `start` on a working graph, consuming its edges.
pub fn find_circuit(graph: &mut Graph, start: VertexId) -> Result<Path> {
    CircuitFinder::new().find_circuit(graph, start)
}

/// Find a circuit from `start` without modifying `graph`.
pub fn eulerian_circuit_from(graph: &Graph, start: VertexId) -> Result<Path> {
    CircuitFinder::new().eulerian_circuit_from(graph, start)
}

/// Find a circuit from vertex 0 without modifying `graph`.
pub fn eulerian_circuit(graph: &Graph) -> Result<Path> {
    eulerian_circuit_from(graph, VertexId(0))
}
