pub mod polygon_2d;

/// 2D point type used for rendered polygon rings.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default per-axis tolerance, in map units, for treating two vertices as
/// the same point.
pub const DEFAULT_VERTEX_TOLERANCE: i32 = 1;

/// Tolerance for floating-point comparisons on rendered rings.
pub const TOLERANCE: f64 = 1e-10;
