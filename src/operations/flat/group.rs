use crate::topology::Path;

/// Picks the outer boundary among closed paths of one sector.
///
/// Each path is reduced to its maximum vertex (greatest `x` and greatest
/// `y`, taken independently). The path reaching furthest along `x` wins,
/// ties broken by `y`, then by position. Returns `None` for an empty slice.
///
/// This is a heuristic: a hole reaching further along `x` than a narrow
/// outer boundary would be picked instead.
#[must_use]
pub fn group_by_outer_path(paths: &[Path]) -> Option<usize> {
    let mut best: Option<(usize, (i32, i32))> = None;
    for (index, path) in paths.iter().enumerate() {
        let Some(max) = path.max_vertex() else {
            continue;
        };
        let key = (max.x, max.y);
        if best.is_none_or(|(_, best_key)| key > best_key) {
            best = Some((index, key));
        }
    }
    best.map(|(index, _)| index)
}

/// Moves the outer boundary to the front; the remaining paths are holes in
/// their original order.
#[must_use]
pub fn sort_by_holes(mut paths: Vec<Path>) -> Vec<Path> {
    if let Some(outer) = group_by_outer_path(&paths).filter(|&i| i > 0) {
        let path = paths.remove(outer);
        paths.insert(0, path);
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::flat::fixtures::{hole_five, outer_nine, path_of, square};

    #[test]
    fn outer_is_found_in_either_order() {
        let a = path_of(&square(1, 0, 0, 100));
        let b = path_of(&square(5, 10, 10, 20));
        assert_eq!(group_by_outer_path(&[a.clone(), b.clone()]), Some(0));
        assert_eq!(group_by_outer_path(&[b, a]), Some(1));
        assert_eq!(group_by_outer_path(&[]), None);
    }

    #[test]
    fn ties_on_x_use_y() {
        let low = path_of(&square(1, 0, 0, 10));
        let high = path_of(&square(5, 0, 5, 10));
        assert_eq!(group_by_outer_path(&[low, high]), Some(1));
    }

    #[test]
    fn outer_nine_and_hole_five() {
        let outer = path_of(&outer_nine());
        let hole = path_of(&hole_five());
        for input in [
            vec![outer.clone(), hole.clone()],
            vec![hole.clone(), outer.clone()],
        ] {
            let sorted = sort_by_holes(input);
            assert_eq!(sorted.len(), 2);
            assert_eq!(sorted[0].len(), 9);
            assert_eq!(sorted[1].len(), 5);
        }
    }

    #[test]
    fn holes_keep_their_order() {
        let outer = path_of(&square(1, 0, 0, 100));
        let h1 = path_of(&square(5, 10, 10, 10));
        let h2 = path_of(&square(9, 50, 50, 10));
        let sorted = sort_by_holes(vec![h1.clone(), outer.clone(), h2.clone()]);
        assert_eq!(sorted, vec![outer, h1, h2]);
    }
}
