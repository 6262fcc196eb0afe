pub mod directed;
pub mod generators;
pub mod residual;
pub mod traits;

pub use directed::DirectedGraph;
pub use residual::ResidualGraph;
pub use traits::{EdgeRef, EdgeWeights, Graph, UnitWeights};
