use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::topology::{ClassifiedEdge, Edge, EdgeId, EdgeTags, Vertex};

/// Side table of classification tags, keyed by edge id.
///
/// Built fresh for each sector; the caller's edges are never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    tags: HashMap<EdgeId, EdgeTags>,
}

impl Classification {
    /// Tags every edge of one sector.
    ///
    /// An edge is crossing when one of its endpoints is shared by more than
    /// two distinct walls, and duplicate when its id occurs more than once.
    #[must_use]
    pub fn of(edges: &[Edge]) -> Self {
        let mut tags: HashMap<EdgeId, EdgeTags> =
            edges.iter().map(|e| (e.id, EdgeTags::NONE)).collect();

        let duplicates = duplicate_ids(edges);
        if duplicates.is_empty() {
            debug!("no duplicates found");
        }
        for id in &duplicates {
            if let Some(t) = tags.get_mut(id) {
                t.duplicate = true;
            }
        }

        let junctions = junction_vertices(edges);
        if junctions.is_empty() {
            debug!("no crossings found");
        }
        for edge in edges {
            if junctions.iter().any(|&v| edge.touches(v)) {
                if let Some(t) = tags.get_mut(&edge.id) {
                    t.crossing = true;
                }
            }
        }

        Self { tags }
    }

    /// Tags recorded for `id`; unknown ids carry no tags.
    #[must_use]
    pub fn tags(&self, id: EdgeId) -> EdgeTags {
        self.tags.get(&id).copied().unwrap_or_default()
    }

    /// Wraps each edge with its tags, preserving input order.
    #[must_use]
    pub fn apply(&self, edges: &[Edge]) -> Vec<ClassifiedEdge> {
        edges
            .iter()
            .map(|&e| ClassifiedEdge::new(e, self.tags(e.id)))
            .collect()
    }

    /// Number of edge ids tagged crossing.
    #[must_use]
    pub fn crossing_count(&self) -> usize {
        self.tags.values().filter(|t| t.crossing).count()
    }

    /// Number of edge ids tagged duplicate.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.tags.values().filter(|t| t.duplicate).count()
    }
}

/// Classifies `edges` and wraps each with its tags.
#[must_use]
pub fn classify(edges: &[Edge]) -> Vec<ClassifiedEdge> {
    Classification::of(edges).apply(edges)
}

fn duplicate_ids(edges: &[Edge]) -> HashSet<EdgeId> {
    let mut counts: HashMap<EdgeId, usize> = HashMap::new();
    for edge in edges {
        *counts.entry(edge.id).or_default() += 1;
    }
    counts
        .into_iter()
        .filter_map(|(id, n)| (n > 1).then_some(id))
        .collect()
}

/// Vertices shared by more than two walls, counting each id once.
fn junction_vertices(edges: &[Edge]) -> Vec<Vertex> {
    let mut seen: HashSet<EdgeId> = HashSet::new();
    let mut counts: HashMap<Vertex, usize> = HashMap::new();
    for edge in edges.iter().filter(|e| seen.insert(e.id)) {
        *counts.entry(edge.start).or_default() += 1;
        if !edge.is_degenerate() {
            *counts.entry(edge.end).or_default() += 1;
        }
    }
    let mut junctions: Vec<Vertex> = counts
        .into_iter()
        .filter_map(|(v, n)| (n > 2).then_some(v))
        .collect();
    junctions.sort_unstable();
    junctions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::flat::fixtures::{edge, square, touching_squares};

    #[test]
    fn plain_square_has_no_tags() {
        let edges = square(1, 0, 0, 10);
        let classified = classify(&edges);
        assert_eq!(classified.len(), 4);
        assert!(classified.iter().all(|e| e.tags == EdgeTags::NONE));
    }

    #[test]
    fn duplicate_and_crossing_are_tagged() {
        // Square 1..4 with a two-sided wall 5 from (0,0) to (5,5), recorded
        // twice, making (0,0) a junction of three walls.
        let mut edges = square(1, 0, 0, 10);
        edges.push(edge(5, (0, 0), (5, 5)));
        edges.push(edge(5, (5, 5), (0, 0)));
        let classification = Classification::of(&edges);

        assert!(classification.tags(5).duplicate);
        assert!(classification.tags(5).crossing);
        // Walls 1 and 4 touch (0,0).
        assert!(classification.tags(1).crossing);
        assert!(classification.tags(4).crossing);
        assert!(!classification.tags(2).crossing);
        assert!(!classification.tags(3).crossing);
        assert!(!classification.tags(1).duplicate);
        assert_eq!(classification.duplicate_count(), 1);
        assert_eq!(classification.crossing_count(), 3);
    }

    #[test]
    fn duplicates_alone_do_not_make_crossings() {
        let mut edges = square(1, 0, 0, 10);
        edges.push(edges[0].reversed());
        let classification = Classification::of(&edges);
        assert_eq!(classification.crossing_count(), 0);
        assert!(classification.tags(1).duplicate);
    }

    #[test]
    fn touching_squares_share_a_junction() {
        let classification = Classification::of(&touching_squares());
        // Two walls from each square meet at the shared corner.
        assert_eq!(classification.crossing_count(), 4);
        assert_eq!(classification.duplicate_count(), 0);
    }

    #[test]
    fn input_is_not_modified() {
        let edges = square(1, 0, 0, 10);
        let before = edges.clone();
        let _ = classify(&edges);
        let _ = classify(&edges);
        assert_eq!(edges, before);
        assert_eq!(Classification::of(&edges).tags(99), EdgeTags::NONE);
    }
}
