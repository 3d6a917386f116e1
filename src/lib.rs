pub mod error;
pub mod flat;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{Error, FlatError, ParamsError, PathError, Result};
pub use flat::{Flat, FlatKind};
pub use operations::{build_level_flats, BuildFlat, CrossingLinks, FlatParams, SectorEdges};
pub use topology::{ClassifiedEdge, Edge, EdgeTags, Path, Vertex};
