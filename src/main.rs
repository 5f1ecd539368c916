//! Eulerian - circuit finder for edge list files
//!
//! Reads an undirected multigraph from an edge list and prints a closed walk
//! that uses every edge exactly once.
//!
//! # Usage
//!
//! ```bash
//! eulerian graph.edges --start 0 --verify
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use euler_core::{
    circuit::{CircuitFinder, FinderConfig, SpliceStrategy},
    edgelist,
    error::{EulerError, Result},
    VertexId,
};
use tracing_subscriber::EnvFilter;

/// Splice point discovery strategy
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Collect candidates while walking each loop
    Candidate,
    /// Rescan each finished loop
    Rescan,
}

impl From<Strategy> for SpliceStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Candidate => SpliceStrategy::CandidateSet,
            Strategy::Rescan => SpliceStrategy::Rescan,
        }
    }
}

/// Eulerian circuit finder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the edge list file
    #[arg(value_name = "GRAPH_FILE")]
    graph_file: PathBuf,

    /// Start vertex (overrides the file's .start directive)
    #[arg(short, long)]
    start: Option<usize>,

    /// Splice point discovery strategy
    #[arg(long, value_enum, default_value_t = Strategy::Candidate)]
    strategy: Strategy,

    /// Check the circuit against the input graph
    #[arg(long)]
    verify: bool,

    /// Log search progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Parse the edge list
    let list = edgelist::parse_file(&args.graph_file)?;
    let start = args.start.map(VertexId).unwrap_or(list.start);

    // Build the graph
    let graph = list.to_graph()?;
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.live_edge_count(),
        start = start.0,
        "graph loaded"
    );

    // Search
    let config = FinderConfig::new()
        .with_strategy(args.strategy.into())
        .with_verify(args.verify);
    let mut finder = CircuitFinder::with_config(config);
    let circuit = match finder.eulerian_circuit_from(&graph, start) {
        Ok(circuit) => circuit,
        Err(EulerError::InvalidState { message }) if args.verify => {
            tracing::error!(%message, "verification failed");
            println!("eulerian: false");
            std::process::exit(1);
        }
        Err(err) => return Err(err),
    };
    let stats = finder.stats();
    tracing::info!(
        loops = stats.loops,
        splices = stats.splices,
        max_depth = stats.max_depth,
        "search done"
    );

    println!("{}", circuit);
    if args.verify {
        println!("eulerian: true");
    }

    Ok(())
}
