pub mod flat;

pub use flat::{
    build_level_flats, BuildFlat, Classification, CrossingLinks, ExpandResult, FlatParams,
    SectorEdges,
};
