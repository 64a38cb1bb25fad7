pub mod undirected;

pub use undirected::UndirectedGraph;

/// Dense index assigned to a node label when it first appears in an edge
pub type NodeId = usize;
