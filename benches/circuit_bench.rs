//! Criterion microbenches for circuit search (group "circuit").
//!
//! - Grid torus: every vertex has degree 4, one long outer loop plus many
//!   short sub-loops.
//! - Doubled chain: each vertex opens a nested sub-loop, the deepest case
//!   for the work stack.
//! - Validation of a found circuit against its source graph.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use euler_core::{find_circuit, is_eulerian_circuit, Graph, VertexId};

fn torus(side: usize) -> Graph {
    let mut g = Graph::new(side * side);
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            let right = r * side + (c + 1) % side;
            let down = ((r + 1) % side) * side + c;
            g.add_edge(VertexId(v), VertexId(right)).expect("in range");
            g.add_edge(VertexId(v), VertexId(down)).expect("in range");
        }
    }
    g
}

fn doubled_chain(n: usize) -> Graph {
    let mut g = Graph::new(n + 1);
    for i in 0..n {
        g.add_edge(VertexId(i), VertexId(i + 1)).expect("in range");
        g.add_edge(VertexId(i + 1), VertexId(i)).expect("in range");
    }
    g
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit");
    for (name, g) in [("torus_100", torus(100)), ("chain_10k", doubled_chain(10_000))] {
        group.throughput(Throughput::Elements(g.live_edge_count() as u64));
        group.bench_function(name, |b| {
            b.iter_batched(
                || g.clone(),
                |mut work| find_circuit(&mut work, VertexId(0)).expect("eulerian"),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit");
    let g = torus(100);
    let path = find_circuit(&mut g.clone(), VertexId(0)).expect("eulerian");
    group.throughput(Throughput::Elements(g.live_edge_count() as u64));
    group.bench_function("validate_torus_100", |b| {
        b.iter(|| is_eulerian_circuit(&g, &path).expect("valid"))
    });
    group.finish();
}

criterion_group!(benches, bench_find, bench_validate);
criterion_main!(benches);
