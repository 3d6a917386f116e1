use tracing::warn;

use super::expand::ExpandResult;
use super::FlatParams;

/// Closes every open path with one synthetic edge from its end back to its
/// start.
///
/// The healed boundary is approximate: the path becomes closed but is never
/// reported as continuous.
#[must_use]
pub fn close(mut result: ExpandResult, params: &FlatParams) -> ExpandResult {
    for path in &mut result.paths {
        if let Some(edge) = path.close_with_synthetic(params.vertex_tolerance) {
            warn!(
                from = ?edge.start,
                to = ?edge.end,
                edges = path.len(),
                "closed open path with a synthetic edge"
            );
        }
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::flat::fixtures::{edge, path_of, square};
    use crate::topology::Vertex;

    #[test]
    fn heals_gap() {
        let open = path_of(&[
            edge(1, (0, 0), (10, 0)),
            edge(2, (10, 0), (10, 10)),
            edge(3, (10, 10), (0, 10)),
            edge(4, (0, 10), (0, 5)),
        ]);
        let result = ExpandResult {
            paths: vec![open],
            skipped: Vec::new(),
        };
        let closed = close(result, &FlatParams::default());
        let path = &closed.paths[0];
        assert_eq!(path.len(), 5);
        let last = path.last().unwrap().edge;
        assert!(last.is_synthetic());
        assert_eq!(last.start, Vertex::new(0, 5));
        assert_eq!(last.end, Vertex::new(0, 0));
        assert!(path.is_closed(1));
        assert!(!path.is_continuous(1));
    }

    #[test]
    fn closed_paths_are_untouched() {
        let result = ExpandResult {
            paths: vec![path_of(&square(1, 0, 0, 10))],
            skipped: Vec::new(),
        };
        assert_eq!(close(result.clone(), &FlatParams::default()), result);
    }
}
