//! Suurballe's algorithm for minimum-weight edge-disjoint paths
//!
//! Given a weighted directed graph, a source and a target, this library finds
//! `k` paths (default 2) from source to target that share no edge and whose
//! combined weight is minimal over all such k-tuples.
//!
//! The algorithm composes a Dijkstra pass, a potential transform that keeps
//! edge costs non-negative, a residual-graph overlay where already-used edges
//! are reversed at cost zero, and a cancellation step that resolves the
//! passes into genuinely disjoint paths.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    suurballe::{combined_weight, edge_disjoint_paths, Path, Suurballe},
    ShortestPathAlgorithm, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::traits::{EdgeRef, EdgeWeights, Graph, UnitWeights};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative weight on edge {edge}")]
    NegativeWeight { edge: usize },

    #[error("No path from vertex {from} to vertex {to}")]
    Unreachable { from: usize, to: usize },

    #[error("Only {found} of {requested} edge-disjoint paths exist")]
    InsufficientDisjointPaths { requested: usize, found: usize },

    #[error("Path decomposition failed: {0}")]
    PathDecomposition(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
