use crate::math::polygon_2d::{signed_area_2d, with_winding};
use crate::math::Point2;
use crate::topology::{Edge, Path};

/// How the paths of a flat relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatKind {
    /// A single simple polygon.
    Simple,
    /// Several shapes touching at junction vertices, each rendered on its
    /// own.
    Disjoint,
    /// One outer polygon; the remaining rings are holes.
    WithHoles,
}

/// The reconstructed floor/ceiling footprint of one sector.
#[derive(Debug, Clone, PartialEq)]
pub struct Flat {
    pub sector_id: i32,
    pub kind: FlatKind,
    /// Boundary paths. For [`FlatKind::WithHoles`] this is the outer
    /// boundary alone.
    pub walls: Vec<Path>,
    /// One ring per path; the outer boundary comes first.
    pub walls_polygon: Vec<Vec<Point2>>,
    /// Present only for [`FlatKind::WithHoles`].
    pub holes: Option<Vec<Path>>,
    /// Edges tolerated without a place in any path.
    pub skipped: Vec<Edge>,
}

impl Flat {
    /// Builds a flat from closed paths, the outer boundary first.
    #[must_use]
    pub fn new(sector_id: i32, kind: FlatKind, mut paths: Vec<Path>, skipped: Vec<Edge>) -> Self {
        let walls_polygon = paths.iter().map(Path::ring).collect();
        let holes = (kind == FlatKind::WithHoles).then(|| paths.split_off(1.min(paths.len())));
        Self {
            sector_id,
            kind,
            walls: paths,
            walls_polygon,
            holes,
            skipped,
        }
    }

    /// Walls followed by holes.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.walls.iter().chain(self.holes.iter().flatten())
    }

    /// Signed area of each ring of [`Flat::walls_polygon`].
    #[must_use]
    pub fn signed_areas(&self) -> Vec<f64> {
        self.walls_polygon
            .iter()
            .map(|ring| signed_area_2d(ring))
            .collect()
    }

    /// Covered area: the outer ring minus holes, or the sum of disjoint
    /// shapes.
    #[must_use]
    pub fn area(&self) -> f64 {
        let areas = self.signed_areas();
        match self.kind {
            FlatKind::WithHoles => match areas.split_first() {
                Some((outer, holes)) => {
                    outer.abs() - holes.iter().copied().map(f64::abs).sum::<f64>()
                }
                None => 0.0,
            },
            FlatKind::Simple | FlatKind::Disjoint => areas.iter().copied().map(f64::abs).sum(),
        }
    }

    /// Rings with outer boundaries counter-clockwise and holes clockwise.
    #[must_use]
    pub fn oriented_polygon(&self) -> Vec<Vec<Point2>> {
        self.walls_polygon
            .iter()
            .enumerate()
            .map(|(i, ring)| {
                let hole = self.kind == FlatKind::WithHoles && i > 0;
                with_winding(ring, !hole)
            })
            .collect()
    }
}
