pub mod dijkstra;
pub mod traits;

pub use dijkstra::Dijkstra;
pub use traits::{ShortestPathAlgorithm, ShortestPaths};
