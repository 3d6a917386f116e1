use crate::error::PathError;
use crate::math::Point2;

use super::edge::{ClassifiedEdge, Connection, Edge};
use super::vertex::Vertex;

/// An ordered sequence of edges, each ending where the next one starts.
///
/// A path is closed once it has more than two edges and its last edge ends
/// near the first edge's start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    edges: Vec<ClassifiedEdge>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path holding a single edge.
    #[must_use]
    pub fn from_edge(edge: ClassifiedEdge) -> Self {
        Self { edges: vec![edge] }
    }

    /// Creates a path from edges that are already in order.
    #[must_use]
    pub fn from_edges(edges: Vec<ClassifiedEdge>) -> Self {
        Self { edges }
    }

    #[must_use]
    pub fn edges(&self) -> &[ClassifiedEdge] {
        &self.edges
    }

    /// Consumes the path, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<ClassifiedEdge> {
        self.edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&ClassifiedEdge> {
        self.edges.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ClassifiedEdge> {
        self.edges.last()
    }

    /// Returns `true` if the path has more than two edges and its end meets
    /// its start.
    #[must_use]
    pub fn is_closed(&self, tolerance: i32) -> bool {
        match (self.edges.first(), self.edges.last()) {
            (Some(first), Some(last)) if self.edges.len() > 2 => {
                last.end().near(first.start(), tolerance)
            }
            _ => false,
        }
    }

    /// Returns `true` if the path is closed without gaps.
    ///
    /// A path holding a synthetic closing edge bridges a gap and is never
    /// continuous.
    #[must_use]
    pub fn is_continuous(&self, tolerance: i32) -> bool {
        self.is_closed(tolerance)
            && !self.contains_synthetic()
            && self
                .edges
                .windows(2)
                .all(|pair| pair[0].end().near(pair[1].start(), tolerance))
    }

    /// Returns `true` if any edge of the path is tagged crossing.
    #[must_use]
    pub fn has_crossing(&self) -> bool {
        self.edges.iter().any(|e| e.tags.crossing)
    }

    /// Returns `true` if the path closer added an edge to this path.
    #[must_use]
    pub fn contains_synthetic(&self) -> bool {
        self.edges.iter().any(|e| e.edge.is_synthetic())
    }

    /// Returns `true` if `edge` is identical to either boundary edge.
    ///
    /// The same wall traversed the other way is a different edge: it is the
    /// back side of a two-sided wall.
    #[must_use]
    pub fn is_boundary(&self, edge: &Edge) -> bool {
        self.edges.first().is_some_and(|e| e.edge == *edge)
            || self.edges.last().is_some_and(|e| e.edge == *edge)
    }

    /// Appends `candidate` after the last edge, reversing it if needed.
    ///
    /// `crossing_links` permits linking two crossing edges.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] naming why the candidate does not fit.
    pub fn append(
        &mut self,
        candidate: ClassifiedEdge,
        tolerance: i32,
        crossing_links: bool,
    ) -> Result<(), PathError> {
        let Some(last) = self.accepts(&candidate, tolerance)?.1 else {
            self.edges.push(candidate);
            return Ok(());
        };
        let connection = Connection::at_end_of(&last.edge, &candidate.edge, tolerance);
        let edge = Self::link(&last, candidate, connection, crossing_links)?;
        self.edges.push(edge);
        Ok(())
    }

    /// Prepends `candidate` before the first edge, reversing it if needed.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] naming why the candidate does not fit.
    pub fn prepend(
        &mut self,
        candidate: ClassifiedEdge,
        tolerance: i32,
        crossing_links: bool,
    ) -> Result<(), PathError> {
        let Some(first) = self.accepts(&candidate, tolerance)?.0 else {
            self.edges.push(candidate);
            return Ok(());
        };
        let connection = Connection::at_start_of(&first.edge, &candidate.edge, tolerance);
        let edge = Self::link(&first, candidate, connection, crossing_links)?;
        self.edges.insert(0, edge);
        Ok(())
    }

    /// Appends an edge from the path's end back to its start.
    ///
    /// Does nothing for empty or already closed paths.
    pub fn close_with_synthetic(&mut self, tolerance: i32) -> Option<Edge> {
        if self.is_closed(tolerance) {
            return None;
        }
        let (first, last) = (self.edges.first()?, self.edges.last()?);
        let edge = Edge::synthetic(last.end(), first.start());
        self.edges.push(ClassifiedEdge::plain(edge));
        Some(edge)
    }

    /// Start vertex of every edge, in path order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Vertex> {
        self.edges.iter().map(ClassifiedEdge::start).collect()
    }

    /// The path as a closed render ring, one point per edge start.
    #[must_use]
    pub fn ring(&self) -> Vec<Point2> {
        self.edges.iter().map(|e| e.start().to_point()).collect()
    }

    /// Greatest `x` and greatest `y` over every endpoint, each taken
    /// independently.
    #[must_use]
    pub fn max_vertex(&self) -> Option<Vertex> {
        self.edges
            .iter()
            .flat_map(|e| [e.start(), e.end()])
            .reduce(|acc, v| Vertex::new(acc.x.max(v.x), acc.y.max(v.y)))
    }

    /// Shared checks for both insertion ends; yields the boundary edges.
    fn accepts(
        &self,
        candidate: &ClassifiedEdge,
        tolerance: i32,
    ) -> Result<(Option<ClassifiedEdge>, Option<ClassifiedEdge>), PathError> {
        let id = candidate.edge.id;
        if candidate.edge.is_degenerate() {
            return Err(PathError::Degenerate { id });
        }
        if self.is_closed(tolerance) {
            return Err(PathError::Closed);
        }
        if self.is_boundary(&candidate.edge) {
            return Err(PathError::AlreadyPresent { id });
        }
        Ok((self.edges.first().copied(), self.edges.last().copied()))
    }

    fn link(
        boundary: &ClassifiedEdge,
        candidate: ClassifiedEdge,
        connection: Connection,
        crossing_links: bool,
    ) -> Result<ClassifiedEdge, PathError> {
        let id = candidate.edge.id;
        if connection == Connection::None {
            return Err(PathError::Disconnected { id });
        }
        if boundary.tags.crossing && candidate.tags.crossing && !crossing_links {
            return Err(PathError::CrossingLink { id });
        }
        Ok(if connection.reverses() {
            candidate.reversed()
        } else {
            candidate
        })
    }
}
