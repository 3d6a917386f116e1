use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The closing
/// segment from the last point back to the first is implied.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a: Vector2 = points[i].coords;
        let b: Vector2 = points[(i + 1) % n].coords;
        sum += a.perp(&b);
    }
    sum * 0.5
}

/// Returns `true` if the ring winds counter-clockwise.
///
/// Degenerate rings (zero area) are reported as not counter-clockwise.
#[must_use]
pub fn is_ccw(points: &[Point2]) -> bool {
    signed_area_2d(points) > TOLERANCE
}

/// Returns the ring with the requested winding, reversing it if needed.
#[must_use]
pub fn with_winding(points: &[Point2], ccw: bool) -> Vec<Point2> {
    let area = signed_area_2d(points);
    if area.abs() < TOLERANCE || (area > 0.0) == ccw {
        return points.to_vec();
    }
    points.iter().rev().copied().collect()
}
