pub mod store;
pub mod traits;

pub use store::GraphStore;
pub use traits::{Graph, GraphId, VertexRef};
