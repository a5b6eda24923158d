//! Waygraph - Weighted Graphs with Single-Source Shortest Paths
//!
//! This library provides an append-only weighted graph store (directed or
//! undirected) together with Dijkstra's algorithm for single-source shortest
//! paths and reconstruction of the shortest path to any destination.
//!
//! Vertices carry an arbitrary payload and are addressed through opaque
//! [`VertexRef`] handles; a handle minted by one graph is rejected by every
//! other graph. Edge weights are real non-negative numbers; an edge inserted
//! without a weight is stored with weight `+infinity` and never shortens a
//! finite route.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPaths};
/// Re-export main types for convenient use
pub use graph::{Graph, GraphStore, VertexRef};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex reference {0} does not belong to this graph")]
    InvalidReference(usize),

    #[error("No path from vertex {from} to vertex {destination}")]
    Unreachable { from: usize, destination: usize },

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
