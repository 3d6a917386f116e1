use tracing::{info, warn};

use super::{BuildFlat, FlatParams};
use crate::error::{FlatError, Result};
use crate::flat::Flat;
use crate::topology::Edge;

/// The wall edges of one sector, as grouped by the map decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorEdges {
    pub sector_id: i32,
    pub edges: Vec<Edge>,
}

impl SectorEdges {
    #[must_use]
    pub fn new(sector_id: i32, edges: Vec<Edge>) -> Self {
        Self { sector_id, edges }
    }
}

/// Builds the flat of every sector of a level.
///
/// Sectors are independent: a failed sector is logged and reported in its
/// slot while the others are still built. Results keep the input order.
///
/// # Errors
///
/// Returns an error if `params` is invalid.
pub fn build_level_flats(
    sectors: &[SectorEdges],
    params: &FlatParams,
) -> Result<Vec<std::result::Result<Flat, FlatError>>> {
    params.validate()?;

    let results: Vec<_> = sectors
        .iter()
        .map(|sector| BuildFlat::new(sector.sector_id, &sector.edges, *params).execute())
        .collect();

    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        warn!(
            sector_id = err.sector_id(),
            skipped = err.skipped(),
            %err,
            "sector flat dropped"
        );
    }
    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(
        sectors = sectors.len(),
        built = sectors.len() - failed,
        failed,
        "level flats built"
    );
    Ok(results)
}
