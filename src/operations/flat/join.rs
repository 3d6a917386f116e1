use std::cmp::Reverse;

use tracing::debug;

use super::expand::{expand, ExpandResult};
use super::FlatParams;
use crate::topology::Path;

/// Splices open paths into one another.
///
/// The longest open path is taken apart and its edges are offered, in both
/// directions, to the remaining open paths. Closed paths are left alone and
/// keep their position ahead of the joined ones. Runs a single round; open
/// paths that still do not meet are left for the closer.
#[must_use]
pub fn join(result: ExpandResult, params: &FlatParams) -> ExpandResult {
    let tolerance = params.vertex_tolerance;
    let ExpandResult { paths, mut skipped } = result;
    let (mut closed, mut open): (Vec<Path>, Vec<Path>) =
        paths.into_iter().partition(|p| p.is_closed(tolerance));

    let longest = open
        .iter()
        .enumerate()
        .min_by_key(|&(index, path)| (Reverse(path.len()), index))
        .map(|(index, _)| index);
    let Some(longest) = longest.filter(|_| open.len() > 1) else {
        closed.append(&mut open);
        return ExpandResult {
            paths: closed,
            skipped,
        };
    };

    let before = open.len();
    let candidates = open.remove(longest).into_edges();
    let joined = expand(candidates, open, true, params);
    debug!(
        open_before = before,
        open_after = joined.open_count(tolerance),
        "joined open paths"
    );

    closed.extend(joined.paths);
    skipped.extend(joined.skipped);
    ExpandResult {
        paths: closed,
        skipped,
    }
}
