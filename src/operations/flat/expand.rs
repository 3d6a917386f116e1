use std::cmp::Reverse;

use tracing::{debug, trace};

use super::{CrossingLinks, FlatParams};
use crate::topology::{ClassifiedEdge, Path};

/// Paths grown so far, plus the edges that fit nowhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandResult {
    pub paths: Vec<Path>,
    pub skipped: Vec<ClassifiedEdge>,
}

impl ExpandResult {
    /// Returns `true` if any path is still open.
    #[must_use]
    pub fn has_open(&self, tolerance: i32) -> bool {
        self.paths.iter().any(|p| !p.is_closed(tolerance))
    }

    /// Number of paths that are still open.
    #[must_use]
    pub fn open_count(&self, tolerance: i32) -> usize {
        self.paths.iter().filter(|p| !p.is_closed(tolerance)).count()
    }
}

/// Greedily grows paths from `candidates`, extending `existing` first.
///
/// Candidates are placed highest weight first. Each pass hands every
/// remaining candidate to the paths in order; a pass that places nothing
/// either links two crossing edges (when [`CrossingLinks::LastResort`]) or
/// starts a new path from the best remaining candidate. Prepending is only
/// tried when `bidirectional` is set.
///
/// Degenerate candidates and paths left with a single edge end up in
/// [`ExpandResult::skipped`].
#[must_use]
pub fn expand(
    candidates: Vec<ClassifiedEdge>,
    existing: Vec<Path>,
    bidirectional: bool,
    params: &FlatParams,
) -> ExpandResult {
    let mut remaining = candidates;
    remaining.sort_by_key(|e| Reverse(e.weight()));

    let mut skipped = Vec::new();
    remaining.retain(|e| {
        if e.edge.is_degenerate() {
            debug!(id = e.edge.id, "skipping zero-length edge");
            skipped.push(*e);
            false
        } else {
            true
        }
    });

    let mut paths = existing;
    let always_link = params.crossing_links == CrossingLinks::Allow;
    let budget = remaining.len();

    for _ in 0..budget {
        if remaining.is_empty() {
            break;
        }
        if place_pass(&mut remaining, &mut paths, bidirectional, always_link, params) > 0 {
            continue;
        }
        if params.crossing_links == CrossingLinks::LastResort
            && place_one(&mut remaining, &mut paths, bidirectional, params)
        {
            continue;
        }
        let seed = remaining.remove(0);
        trace!(id = seed.edge.id, "starting new path");
        paths.push(Path::from_edge(seed));
    }

    let (paths, singles): (Vec<Path>, Vec<Path>) = paths.into_iter().partition(|p| p.len() > 1);
    skipped.extend(singles.into_iter().flat_map(Path::into_edges));

    debug!(
        paths = paths.len(),
        skipped = skipped.len(),
        bidirectional,
        "expansion finished"
    );
    ExpandResult { paths, skipped }
}

/// Offers every remaining candidate once, returning how many were placed.
fn place_pass(
    remaining: &mut Vec<ClassifiedEdge>,
    paths: &mut [Path],
    bidirectional: bool,
    crossing_links: bool,
    params: &FlatParams,
) -> usize {
    let before = remaining.len();
    remaining.retain(|&e| !insert(e, paths, bidirectional, crossing_links, params));
    before - remaining.len()
}

/// Places the first candidate that fits once crossing links are allowed.
fn place_one(
    remaining: &mut Vec<ClassifiedEdge>,
    paths: &mut [Path],
    bidirectional: bool,
    params: &FlatParams,
) -> bool {
    let placed = remaining
        .iter()
        .position(|&e| insert(e, paths, bidirectional, true, params));
    if let Some(index) = placed {
        let edge = remaining.remove(index);
        debug!(id = edge.edge.id, "linked crossing edges as a last resort");
    }
    placed.is_some()
}

fn insert(
    edge: ClassifiedEdge,
    paths: &mut [Path],
    bidirectional: bool,
    crossing_links: bool,
    params: &FlatParams,
) -> bool {
    let tolerance = params.vertex_tolerance;
    for path in paths.iter_mut() {
        match path.append(edge, tolerance, crossing_links) {
            Ok(()) => return true,
            Err(err) => trace!(%err, "append rejected"),
        }
        if bidirectional {
            match path.prepend(edge, tolerance, crossing_links) {
                Ok(()) => return true,
                Err(err) => trace!(%err, "prepend rejected"),
            }
        }
    }
    false
}
