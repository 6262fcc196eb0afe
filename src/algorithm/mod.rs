pub mod dijkstra;
pub mod suurballe;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathTree};
