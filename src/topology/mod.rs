pub mod edge;
pub mod path;
pub mod vertex;

pub use edge::{
    ClassifiedEdge, Connection, Edge, EdgeId, EdgeTags, CROSSING_WEIGHT, DUPLICATE_WEIGHT,
};
pub use path::Path;
pub use vertex::Vertex;
