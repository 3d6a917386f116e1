//! Shared sector fixtures for the stage tests.

use crate::topology::{ClassifiedEdge, Edge, Path};

pub(crate) fn edge(id: i32, a: (i32, i32), b: (i32, i32)) -> Edge {
    Edge::new(id, a.into(), b.into())
}

/// Counter-clockwise square with ids `first..first + 4`.
pub(crate) fn square(first: i32, x: i32, y: i32, size: i32) -> Vec<Edge> {
    vec![
        edge(first, (x, y), (x + size, y)),
        edge(first + 1, (x + size, y), (x + size, y + size)),
        edge(first + 2, (x + size, y + size), (x, y + size)),
        edge(first + 3, (x, y + size), (x, y)),
    ]
}

/// Two squares touching at the corner (10, 10), ids 1..=8.
pub(crate) fn touching_squares() -> Vec<Edge> {
    let mut edges = square(1, 0, 0, 10);
    edges.extend(square(5, 10, 10, 10));
    edges
}

/// Nine-wall outer boundary, ids 1..=9.
pub(crate) fn outer_nine() -> Vec<Edge> {
    vec![
        edge(1, (0, 0), (50, 0)),
        edge(2, (50, 0), (100, 0)),
        edge(3, (100, 0), (100, 50)),
        edge(4, (100, 50), (100, 100)),
        edge(5, (100, 100), (60, 100)),
        edge(6, (60, 100), (20, 100)),
        edge(7, (20, 100), (0, 100)),
        edge(8, (0, 100), (0, 40)),
        edge(9, (0, 40), (0, 0)),
    ]
}

/// Five-wall pentagon hole inside [`outer_nine`], ids 20..=24.
pub(crate) fn hole_five() -> Vec<Edge> {
    vec![
        edge(20, (30, 30), (60, 30)),
        edge(21, (60, 30), (70, 50)),
        edge(22, (70, 50), (50, 70)),
        edge(23, (50, 70), (30, 60)),
        edge(24, (30, 60), (30, 30)),
    ]
}

pub(crate) fn path_of(edges: &[Edge]) -> Path {
    Path::from_edges(edges.iter().copied().map(ClassifiedEdge::plain).collect())
}

/// Every non-synthetic edge id placed into a path or skipped, sorted.
pub(crate) fn placed_ids(paths: &[Path], skipped: &[ClassifiedEdge]) -> Vec<i32> {
    let mut ids: Vec<i32> = paths
        .iter()
        .flat_map(Path::edges)
        .chain(skipped)
        .filter(|e| !e.edge.is_synthetic())
        .map(|e| e.edge.id)
        .collect();
    ids.sort_unstable();
    ids
}

/// Installs a test subscriber honoring `RUST_LOG`; later calls are no-ops.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
