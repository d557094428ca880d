use crate::UiVertex;

/// Vertices per slice cell in sliced geometry.
pub const SLICE_CELL_VERTS: usize = 4;

/// Remove slice cells that collapsed while scaling.
///
/// The first `count` vertices are walked in cells of four. A cell is
/// degenerate when two cyclically adjacent corners (v1-v2, v2-v3, v3-v4,
/// v4-v1) share a position. A degenerate cell is overwritten with the last
/// live cell and the live range shrinks by one cell; the cursor stays put so
/// the swapped-in cell is checked too.
///
/// Compaction is not order-stable across cells, only within them. Sliced
/// cells have no winding dependency on each other so this is fine.
///
/// The removed tail `[effective, count)` is drained from `verts`; anything
/// after `count` keeps its position relative to the live range. Returns the
/// effective count. A trailing partial cell is left as-is.
pub fn exclude_degenerate_slices(verts: &mut Vec<UiVertex>, count: usize) -> usize {
    let count = count.min(verts.len());
    let mut real_count = count;
    let mut i = 0;

    while i + SLICE_CELL_VERTS <= real_count {
        if is_degenerate_cell(&verts[i..i + SLICE_CELL_VERTS]) {
            let last = real_count - SLICE_CELL_VERTS;
            for offset in 0..SLICE_CELL_VERTS {
                verts[i + offset] = verts[last + offset];
            }
            real_count -= SLICE_CELL_VERTS;
            continue;
        }

        i += SLICE_CELL_VERTS;
    }

    if real_count < count {
        verts.drain(real_count..count);
    }

    real_count
}

fn is_degenerate_cell(cell: &[UiVertex]) -> bool {
    let [v1, v2, v3, v4] = [cell[0].position, cell[1].position, cell[2].position, cell[3].position];
    v1 == v2 || v2 == v3 || v3 == v4 || v4 == v1
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_color::Color;
    use bevy_math::Vec2;

    fn cell(x: f32, width: f32) -> [UiVertex; 4] {
        let at = |x: f32, y: f32| UiVertex::new(Vec2::new(x, y), Vec2::ZERO, Color::WHITE);
        [at(x, 0.0), at(x, 10.0), at(x + width, 10.0), at(x + width, 0.0)]
    }

    fn cells(widths: &[f32]) -> Vec<UiVertex> {
        widths
            .iter()
            .enumerate()
            .flat_map(|(i, &w)| cell(i as f32 * 100.0, w))
            .collect()
    }

    fn has_degenerate(verts: &[UiVertex]) -> bool {
        verts.chunks_exact(SLICE_CELL_VERTS).any(is_degenerate_cell)
    }

    #[test]
    fn test_keeps_healthy_cells_in_order() {
        let mut verts = cells(&[10.0, 20.0, 30.0]);
        let original = verts.clone();

        let count = exclude_degenerate_slices(&mut verts, 12);

        assert_eq!(count, 12);
        assert_eq!(verts, original);
    }

    #[test]
    fn test_removes_single_degenerate_cell() {
        // k = 4 cells, the second one has zero width
        let mut verts = cells(&[10.0, 0.0, 30.0, 40.0]);

        let count = exclude_degenerate_slices(&mut verts, 16);

        assert_eq!(count, 4 * 3);
        assert_eq!(verts.len(), 12);
        assert!(!has_degenerate(&verts));
        // Last cell was swapped into the hole
        assert_eq!(verts[4].position.x, 300.0);
    }

    #[test]
    fn test_rechecks_swapped_in_cell() {
        // Both the first and the last cell are degenerate; the last one gets
        // swapped into slot 0 and must be removed as well.
        let mut verts = cells(&[0.0, 20.0, 30.0, 0.0]);

        let count = exclude_degenerate_slices(&mut verts, 16);

        assert_eq!(count, 8);
        assert!(!has_degenerate(&verts));
        let mut lefts: Vec<f32> = verts.iter().step_by(4).map(|v| v.position.x).collect();
        lefts.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(lefts, vec![100.0, 200.0]);
    }

    #[test]
    fn test_all_degenerate_empties_range() {
        let mut verts = cells(&[0.0, 0.0]);
        assert_eq!(exclude_degenerate_slices(&mut verts, 8), 0);
        assert!(verts.is_empty());
    }

    #[test]
    fn test_vertices_past_count_are_preserved() {
        let mut verts = cells(&[0.0, 10.0]);
        let tail = cell(900.0, 5.0);
        verts.extend(tail);

        let count = exclude_degenerate_slices(&mut verts, 8);

        assert_eq!(count, 4);
        assert_eq!(verts.len(), 8);
        assert_eq!(&verts[4..], &tail);
    }
}
