use crate::math::Point2;

/// A map vertex in integer map units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinate deltas are within `tolerance`.
    ///
    /// Absorbs the few-unit misalignments left behind by map editors.
    #[must_use]
    pub fn near(self, other: Self, tolerance: i32) -> bool {
        (i64::from(self.x) - i64::from(other.x)).abs() <= i64::from(tolerance)
            && (i64::from(self.y) - i64::from(other.y)).abs() <= i64::from(tolerance)
    }

    /// Converts the vertex to a floating-point render point.
    #[must_use]
    pub fn to_point(self) -> Point2 {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
