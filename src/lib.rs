//! Routegraph - incrementally built weighted undirected graphs with
//! Dijkstra shortest-path queries.
//!
//! The crate is built around three pieces: an [`UndirectedGraph`] store that
//! interns string node labels and keeps a symmetric adjacency view, a
//! [`Dijkstra`] engine that computes distance and predecessor tables from a
//! single source over the whole reachable component, and a [`PathFinder`]
//! facade that validates caller input and materializes concrete
//! source-to-target paths.
//!
//! Edge weights are integers (any `PrimInt` type, `i64` by default). They are
//! expected to be non-negative; [`PathFinder`] rejects negative weights and
//! self-loops before they reach the store.

pub mod algorithm;
pub mod data_structures;
pub mod finder;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathResult};
pub use finder::{PathFinder, PathResult};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;
pub use graph::NodeId;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("self-loop edge on node: {0}")]
    SelfLoop(String),

    #[error("negative weight on edge {0} - {1}")]
    NegativeWeight(String, String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
