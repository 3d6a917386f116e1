use thiserror::Error;

/// Top-level error type for sector flat reconstruction.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Flat(#[from] FlatError),

    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// Reasons a single edge is refused by a single path.
///
/// These are expected during expansion: most candidates are rejected by
/// most paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("edge {id} has equal start and end vertices")]
    Degenerate { id: i32 },

    #[error("edge {id} is already the boundary edge of this path")]
    AlreadyPresent { id: i32 },

    #[error("path is already closed")]
    Closed,

    #[error("edge {id} would link two crossing edges")]
    CrossingLink { id: i32 },

    #[error("edge {id} shares no vertex with the path boundary")]
    Disconnected { id: i32 },
}

/// A sector whose flat could not be built.
///
/// Carries enough for a caller to log the failure and continue with the
/// remaining sectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlatError {
    #[error("sector {sector_id}: {skipped} edges skipped, at most {max_skip} allowed")]
    TooManySkipped {
        sector_id: i32,
        skipped: usize,
        max_skip: usize,
    },

    #[error("sector {sector_id}: no path could be built ({skipped} edges skipped)")]
    NoPaths { sector_id: i32, skipped: usize },

    #[error("sector {sector_id}: {source}")]
    InvalidParams {
        sector_id: i32,
        #[source]
        source: ParamsError,
    },
}

impl FlatError {
    /// The sector that failed.
    #[must_use]
    pub fn sector_id(&self) -> i32 {
        match self {
            Self::TooManySkipped { sector_id, .. }
            | Self::NoPaths { sector_id, .. }
            | Self::InvalidParams { sector_id, .. } => *sector_id,
        }
    }

    /// Number of edges that could not be placed into any path.
    #[must_use]
    pub fn skipped(&self) -> usize {
        match self {
            Self::TooManySkipped { skipped, .. } | Self::NoPaths { skipped, .. } => *skipped,
            Self::InvalidParams { .. } => 0,
        }
    }
}

/// Invalid reconstruction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("vertex tolerance must not be negative, got {0}")]
    NegativeTolerance(i32),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
