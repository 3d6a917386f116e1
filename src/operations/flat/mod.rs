pub mod classify;
mod close;
pub mod expand;
pub mod group;
mod join;
mod level;

#[cfg(test)]
pub(crate) mod fixtures;

pub use classify::{classify, Classification};
pub use close::close;
pub use expand::{expand, ExpandResult};
pub use group::{group_by_outer_path, sort_by_holes};
pub use join::join;
pub use level::{build_level_flats, SectorEdges};

use tracing::{debug, debug_span, warn};

use crate::error::{FlatError, ParamsError};
use crate::flat::{Flat, FlatKind};
use crate::math::DEFAULT_VERTEX_TOLERANCE;
use crate::topology::{Edge, Path};

/// Whether expansion may link two crossing edges directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossingLinks {
    /// Never link two crossing edges.
    Forbid,
    /// Link them only when a full pass placed no other edge.
    #[default]
    LastResort,
    /// Treat crossing edges like any other.
    Allow,
}

/// Parameters controlling flat reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatParams {
    /// Per-axis distance, in map units, under which two vertices meet.
    pub vertex_tolerance: i32,
    /// Skipped edges tolerated before the sector is dropped.
    pub max_skip: usize,
    /// Linking policy at junction vertices.
    pub crossing_links: CrossingLinks,
}

impl Default for FlatParams {
    fn default() -> Self {
        Self {
            vertex_tolerance: DEFAULT_VERTEX_TOLERANCE,
            max_skip: 2,
            crossing_links: CrossingLinks::LastResort,
        }
    }
}

impl FlatParams {
    #[must_use]
    pub fn with_vertex_tolerance(mut self, vertex_tolerance: i32) -> Self {
        self.vertex_tolerance = vertex_tolerance;
        self
    }

    #[must_use]
    pub fn with_max_skip(mut self, max_skip: usize) -> Self {
        self.max_skip = max_skip;
        self
    }

    #[must_use]
    pub fn with_crossing_links(mut self, crossing_links: CrossingLinks) -> Self {
        self.crossing_links = crossing_links;
        self
    }

    /// Checks the parameters for values reconstruction cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ParamsError::NegativeTolerance` for a negative vertex
    /// tolerance.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.vertex_tolerance < 0 {
            return Err(ParamsError::NegativeTolerance(self.vertex_tolerance));
        }
        Ok(())
    }
}

/// Reconstructs the flat of one sector from its unordered wall edges.
///
/// Runs classify, expand, join and close, then sorts the closed paths into
/// a single polygon, disjoint shapes or a polygon with holes.
#[derive(Debug)]
pub struct BuildFlat<'a> {
    sector_id: i32,
    edges: &'a [Edge],
    params: FlatParams,
}

impl<'a> BuildFlat<'a> {
    /// Creates a new flat reconstruction for one sector.
    #[must_use]
    pub fn new(sector_id: i32, edges: &'a [Edge], params: FlatParams) -> Self {
        Self {
            sector_id,
            edges,
            params,
        }
    }

    /// Executes the reconstruction.
    ///
    /// # Errors
    ///
    /// Returns `FlatError::InvalidParams` for parameters rejected by
    /// [`FlatParams::validate`], `FlatError::TooManySkipped` when more than
    /// `max_skip` edges found no place, or `FlatError::NoPaths` when no path
    /// was built.
    pub fn execute(&self) -> Result<Flat, FlatError> {
        let _span = debug_span!("flat", sector_id = self.sector_id).entered();
        self.params
            .validate()
            .map_err(|source| FlatError::InvalidParams {
                sector_id: self.sector_id,
                source,
            })?;
        let tolerance = self.params.vertex_tolerance;

        let classified = classify(self.edges);
        let mut result = expand(classified, Vec::new(), true, &self.params);

        if result.open_count(tolerance) > 1 {
            result = join(result, &self.params);
        } else {
            debug!("nothing to join");
        }
        if result.has_open(tolerance) {
            result = close(result, &self.params);
        } else {
            debug!("all paths closed");
        }

        let skipped = result.skipped.len();
        if skipped > self.params.max_skip {
            return Err(FlatError::TooManySkipped {
                sector_id: self.sector_id,
                skipped,
                max_skip: self.params.max_skip,
            });
        }
        if result.paths.is_empty() {
            return Err(FlatError::NoPaths {
                sector_id: self.sector_id,
                skipped,
            });
        }
        if skipped > 0 {
            let ids: Vec<i32> = result.skipped.iter().map(|e| e.edge.id).collect();
            warn!(skipped, ?ids, "tolerating skipped edges");
        }
        for path in &result.paths {
            if !path.is_continuous(tolerance) {
                warn!(edges = path.len(), "path is closed but not continuous");
            }
        }

        let kind = flat_kind(&result.paths);
        let paths = match kind {
            FlatKind::WithHoles => sort_by_holes(result.paths),
            FlatKind::Simple | FlatKind::Disjoint => result.paths,
        };
        debug!(?kind, paths = paths.len(), "flat assembled");
        let skipped = result.skipped.iter().map(|e| e.edge).collect();
        Ok(Flat::new(self.sector_id, kind, paths, skipped))
    }
}

/// Classifies a sector's final path set.
#[must_use]
pub fn flat_kind(paths: &[Path]) -> FlatKind {
    if paths.len() == 1 {
        FlatKind::Simple
    } else if paths.iter().any(Path::has_crossing) {
        FlatKind::Disjoint
    } else {
        FlatKind::WithHoles
    }
}
