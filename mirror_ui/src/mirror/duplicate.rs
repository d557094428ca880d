use bevy_math::Rect;

use super::{MirrorDirection, MirrorType};
use crate::{
    geometry::{extend_capacity, Axis},
    UiVertex,
};

/// Append reflected copies of the first `count` vertices.
///
/// Each copy is reflected across the rect's center line on the direction's
/// axis (`x' = 2 * center.x - x`, or the same for Y). Copies are appended
/// from index `count - 1` down to `0`: a reflection alone flips a triangle's
/// winding, and emitting its corners in reverse order flips it back.
///
/// The caller should reserve room for `count` more vertices first.
pub fn mirror_vertices(rect: Rect, verts: &mut Vec<UiVertex>, count: usize, direction: MirrorDirection) {
    let center = rect.center();
    let count = count.min(verts.len());

    for i in (0..count).rev() {
        let mut vertex = verts[i];

        match direction.axis() {
            Axis::Horizontal => vertex.position.x = center.x * 2.0 - vertex.position.x,
            Axis::Vertical => vertex.position.y = center.y * 2.0 - vertex.position.y,
        }

        verts.push(vertex);
    }
}

/// Run every mirror pass `mirror_type` calls for over the first `count`
/// vertices of an already scaled buffer.
///
/// Axis modes end with `count` extra vertices. Quarter modes mirror the
/// source horizontally and then mirror both halves vertically, ending with
/// `3 * count` extra vertices. Capacity for all of them is reserved up front.
pub fn duplicate_for(rect: Rect, verts: &mut Vec<UiVertex>, count: usize, mirror_type: MirrorType) {
    let extra = if mirror_type.is_quarter() { count * 3 } else { count };
    extend_capacity(verts, extra);

    let mut source = count;
    for direction in mirror_type.passes() {
        mirror_vertices(rect, verts, source, direction);
        source *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::signed_area;
    use bevy_color::Color;
    use bevy_math::Vec2;

    const EPSILON: f32 = 1e-5;

    fn triangle() -> Vec<UiVertex> {
        [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]
            .into_iter()
            .map(|(x, y)| UiVertex::new(Vec2::new(x, y), Vec2::new(x / 10.0, y / 10.0), Color::WHITE))
            .collect()
    }

    #[test]
    fn test_mirror_appends_in_reverse_order() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let mut verts = triangle();

        mirror_vertices(rect, &mut verts, 3, MirrorDirection::Left2Right);

        assert_eq!(verts.len(), 6);
        let appended: Vec<f32> = verts[3..].iter().map(|v| v.position.x).collect();
        // Sources 2, 1, 0 reflected about x = 50
        assert_eq!(appended, vec![100.0, 90.0, 100.0]);
        assert_eq!(verts[3].uv0, verts[2].uv0);
        assert_eq!(verts[5].uv0, verts[0].uv0);
    }

    #[test]
    fn test_reflection_is_symmetric_about_center() {
        let rect = Rect::new(-20.0, 5.0, 80.0, 45.0);
        let center = rect.center();
        let mut verts = triangle();

        mirror_vertices(rect, &mut verts, 3, MirrorDirection::Bottom2Top);

        for i in 0..3 {
            let source = verts[i].position;
            let copy = verts[5 - i].position;
            assert!(((source.y + copy.y) / 2.0 - center.y).abs() < EPSILON);
            assert_eq!(source.x, copy.x);
        }
    }

    #[test]
    fn test_mirror_keeps_winding() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        for direction in [MirrorDirection::Left2Right, MirrorDirection::Top2Bottom] {
            let mut verts = triangle();
            let original = signed_area(verts[0].position, verts[1].position, verts[2].position);
            assert!(original > 0.0);

            mirror_vertices(rect, &mut verts, 3, direction);

            let mirrored = signed_area(verts[3].position, verts[4].position, verts[5].position);
            assert!(mirrored > 0.0, "{:?} flipped winding", direction);
        }
    }

    #[test]
    fn test_duplicate_counts() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        for mirror_type in MirrorType::ALL {
            let mut verts = triangle();
            duplicate_for(rect, &mut verts, 3, mirror_type);

            let expected = if mirror_type.is_quarter() { 12 } else { 6 };
            assert_eq!(verts.len(), expected, "{:?}", mirror_type);
        }
    }

    #[test]
    fn test_quarter_covers_all_four_quadrants() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut verts = triangle();

        duplicate_for(rect, &mut verts, 3, MirrorType::QuarterLRBT);

        let corner = |x: f32, y: f32| verts.iter().any(|v| v.position.x == x && v.position.y == y);
        assert!(corner(0.0, 0.0));
        assert!(corner(100.0, 0.0));
        assert!(corner(0.0, 100.0));
        assert!(corner(100.0, 100.0));
    }
}
