//! WASM bindings for Euler Core.
//!
//! This module provides JavaScript-friendly bindings so a browser front end
//! can build a graph, ask for a circuit and render the returned walk.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmEulerGraph } from 'euler_core';
//!
//! await init();
//!
//! const graph = new WasmEulerGraph(3);
//! graph.add_edge(0, 1);
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 0);
//!
//! const walk = graph.circuit(0); // Uint32Array [0, 1, 2, 0]
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{is_valid_circuit, CircuitFinder, Path};
use crate::graph::{Graph, VertexId};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible multigraph with circuit search.
#[wasm_bindgen]
pub struct WasmEulerGraph {
    graph: Graph,
}

#[wasm_bindgen]
impl WasmEulerGraph {
    /// Create an empty graph with a fixed number of vertices.
    #[wasm_bindgen(constructor)]
    pub fn new(vertex_count: u32) -> WasmEulerGraph {
        WasmEulerGraph {
            graph: Graph::new(vertex_count as usize),
        }
    }

    /// Add an undirected edge. Throws if either endpoint is out of range.
    #[wasm_bindgen]
    pub fn add_edge(&mut self, v1: u32, v2: u32) -> Result<(), JsValue> {
        self.graph
            .add_edge(VertexId(v1 as usize), VertexId(v2 as usize))
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of edges in the graph.
    #[wasm_bindgen(getter)]
    pub fn edge_count(&self) -> u32 {
        self.graph.live_edge_count() as u32
    }

    /// Find a circuit from `start`, returned as vertex indices in walk order.
    ///
    /// The graph itself is not consumed and can be queried again.
    #[wasm_bindgen]
    pub fn circuit(&self, start: u32) -> Result<Vec<u32>, JsValue> {
        let path = CircuitFinder::new()
            .eulerian_circuit_from(&self.graph, VertexId(start as usize))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(path.iter().map(|v| v.0 as u32).collect())
    }

    /// Check whether `walk` uses every edge of the graph exactly once.
    #[wasm_bindgen]
    pub fn is_circuit(&self, walk: &[u32]) -> bool {
        let mut path = Path::new();
        for &v in walk {
            path.append(VertexId(v as usize));
        }
        is_valid_circuit(&self.graph, &path)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    crate::VERSION.to_string()
}
