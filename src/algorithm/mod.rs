pub mod dijkstra;

pub use dijkstra::{Dijkstra, ShortestPathResult};
