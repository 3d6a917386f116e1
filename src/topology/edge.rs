use super::vertex::Vertex;

/// Identifier tying an edge back to its source wall segment.
pub type EdgeId = i32;

/// Priority added to a crossing edge's weight during expansion.
///
/// Junction edges are the most ambiguous and must claim their slot before
/// ordinary edges consume the junction vertex.
pub const CROSSING_WEIGHT: i64 = 10_000;

/// Priority added to a duplicate edge's weight during expansion.
///
/// Larger than [`CROSSING_WEIGHT`] so that two-sided walls are placed
/// before plain junction edges.
pub const DUPLICATE_WEIGHT: i64 = 11_000;

/// A directed wall segment of one sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub start: Vertex,
    pub end: Vertex,
}

impl Edge {
    /// Id carried by edges the path closer synthesizes.
    pub const SYNTHETIC_ID: EdgeId = -1;

    /// Creates a new edge.
    #[must_use]
    pub const fn new(id: EdgeId, start: Vertex, end: Vertex) -> Self {
        Self { id, start, end }
    }

    /// Creates the edge that closes a gap from `start` back to `end`.
    #[must_use]
    pub const fn synthetic(start: Vertex, end: Vertex) -> Self {
        Self::new(Self::SYNTHETIC_ID, start, end)
    }

    /// Returns the same wall traversed end to start.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.id, self.end, self.start)
    }

    /// Returns `true` for zero-length edges.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the edge was produced by the path closer.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.id == Self::SYNTHETIC_ID
    }

    /// Returns `true` if `vertex` is one of the edge's endpoints.
    #[must_use]
    pub fn touches(&self, vertex: Vertex) -> bool {
        self.start == vertex || self.end == vertex
    }
}

/// Classification tags derived for an edge within one sector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EdgeTags {
    /// The edge touches a vertex shared by more than two edges.
    pub crossing: bool,
    /// The edge's id occurs more than once in the sector.
    pub duplicate: bool,
}

impl EdgeTags {
    /// Tags for an edge that is neither crossing nor duplicate.
    pub const NONE: Self = Self {
        crossing: false,
        duplicate: false,
    };
}

/// An edge carried together with the tags the classifier derived for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassifiedEdge {
    pub edge: Edge,
    pub tags: EdgeTags,
}

impl ClassifiedEdge {
    /// Wraps an edge with the given tags.
    #[must_use]
    pub const fn new(edge: Edge, tags: EdgeTags) -> Self {
        Self { edge, tags }
    }

    /// Wraps an edge with no tags.
    #[must_use]
    pub const fn plain(edge: Edge) -> Self {
        Self::new(edge, EdgeTags::NONE)
    }

    /// Expansion priority: higher weights are placed first.
    #[must_use]
    pub fn weight(&self) -> i64 {
        let mut weight = i64::from(self.edge.id);
        if self.tags.crossing {
            weight += CROSSING_WEIGHT;
        }
        if self.tags.duplicate {
            weight += DUPLICATE_WEIGHT;
        }
        weight
    }

    /// Returns the edge reversed, keeping its tags.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.edge.reversed(), self.tags)
    }

    #[must_use]
    pub fn start(&self) -> Vertex {
        self.edge.start
    }

    #[must_use]
    pub fn end(&self) -> Vertex {
        self.edge.end
    }
}

impl From<Edge> for ClassifiedEdge {
    fn from(edge: Edge) -> Self {
        Self::plain(edge)
    }
}

/// How a candidate edge `v2` meets an existing edge `v1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    /// `v1.end` meets `v2.start`: `v2` follows `v1` as is.
    V1EndToV2Start,
    /// `v1.start` meets `v2.start`: `v2` precedes `v1` once reversed.
    V1StartToV2Start,
    /// `v1.end` meets `v2.end`: `v2` follows `v1` once reversed.
    V1EndToV2End,
    /// `v1.start` meets `v2.end`: `v2` precedes `v1` as is.
    V1StartToV2End,
    None,
}

impl Connection {
    /// Classifies how `v2` can follow `v1`, preferring the orientation that
    /// needs no reversal.
    #[must_use]
    pub fn at_end_of(v1: &Edge, v2: &Edge, tolerance: i32) -> Self {
        if v1.end.near(v2.start, tolerance) {
            Self::V1EndToV2Start
        } else if v1.end.near(v2.end, tolerance) {
            Self::V1EndToV2End
        } else {
            Self::None
        }
    }

    /// Classifies how `v2` can precede `v1`, preferring the orientation that
    /// needs no reversal.
    #[must_use]
    pub fn at_start_of(v1: &Edge, v2: &Edge, tolerance: i32) -> Self {
        if v1.start.near(v2.end, tolerance) {
            Self::V1StartToV2End
        } else if v1.start.near(v2.start, tolerance) {
            Self::V1StartToV2Start
        } else {
            Self::None
        }
    }

    /// Returns `true` if `v2` must be reversed to attach.
    #[must_use]
    pub fn reverses(self) -> bool {
        matches!(self, Self::V1StartToV2Start | Self::V1EndToV2End)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(id: EdgeId, a: (i32, i32), b: (i32, i32)) -> Edge {
        Edge::new(id, a.into(), b.into())
    }

    #[test]
    fn weight_orders_duplicates_above_crossings() {
        let e = edge(5, (0, 0), (1, 0));
        let plain = ClassifiedEdge::plain(e);
        let crossing = ClassifiedEdge::new(e, EdgeTags { crossing: true, duplicate: false });
        let duplicate = ClassifiedEdge::new(e, EdgeTags { crossing: false, duplicate: true });
        let both = ClassifiedEdge::new(e, EdgeTags { crossing: true, duplicate: true });
        assert_eq!(plain.weight(), 5);
        assert_eq!(crossing.weight(), 10_005);
        assert_eq!(duplicate.weight(), 11_005);
        assert_eq!(both.weight(), 21_005);
    }

    #[test]
    fn connection_cases() {
        let v1 = edge(1, (0, 0), (10, 0));
        assert_eq!(
            Connection::at_end_of(&v1, &edge(2, (10, 0), (10, 10)), 0),
            Connection::V1EndToV2Start
        );
        assert_eq!(
            Connection::at_start_of(&v1, &edge(2, (0, 0), (0, 10)), 0),
            Connection::V1StartToV2Start
        );
        assert_eq!(
            Connection::at_end_of(&v1, &edge(2, (10, 10), (10, 0)), 0),
            Connection::V1EndToV2End
        );
        assert_eq!(
            Connection::at_start_of(&v1, &edge(2, (0, 10), (0, 0)), 0),
            Connection::V1StartToV2End
        );
        assert_eq!(
            Connection::at_end_of(&v1, &edge(2, (0, 10), (0, 0)), 0),
            Connection::None
        );
        assert!(Connection::V1EndToV2End.reverses());
        assert!(!Connection::V1StartToV2End.reverses());
    }

    #[test]
    fn connection_prefers_unreversed() {
        // Both endpoints of a short edge lie within tolerance of v1.end.
        let v1 = edge(1, (0, 0), (10, 0));
        let short = edge(2, (10, 0), (11, 0));
        assert_eq!(Connection::at_end_of(&v1, &short, 1), Connection::V1EndToV2Start);
    }

    #[test]
    fn connection_uses_tolerance() {
        let v1 = edge(1, (0, 0), (10, 0));
        let off = edge(2, (11, 1), (10, 10));
        assert_eq!(Connection::at_end_of(&v1, &off, 0), Connection::None);
        assert_eq!(Connection::at_end_of(&v1, &off, 1), Connection::V1EndToV2Start);
    }

    #[test]
    fn reversed_keeps_the_id() {
        let e = edge(3, (0, 0), (4, 4));
        assert_eq!(e.reversed(), edge(3, (4, 4), (0, 0)));
        assert_ne!(e, e.reversed());
        assert!(edge(7, (1, 1), (1, 1)).is_degenerate());
    }
}
