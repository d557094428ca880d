use bevy_math::{Vec2, Vec3};
use bevy_reflect::Reflect;
use serde::{Deserialize, Serialize};

/// One of the two mirror axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Midpoint of the range spanned by three coordinates.
///
/// This is `(max + min) / 2`, not the arithmetic mean. Tiled layouts assign
/// one tile per triangle this way even though the diagonal crosses tiles.
pub fn triangle_center(p1: f32, p2: f32, p3: f32) -> f32 {
    let max = p1.max(p2).max(p3);
    let min = p1.min(p2).min(p3);
    (max + min) / 2.0
}

/// Make sure `verts` can take `add_count` more items without reallocating.
pub fn extend_capacity<T>(verts: &mut Vec<T>, add_count: usize) {
    let needed = verts.len() + add_count;
    if verts.capacity() < needed {
        verts.reserve_exact(needed - verts.len());
    }
}

/// Reflect a UV coordinate inside the `[start, end]` interval on one axis.
///
/// Applying it twice with the same interval gives back the input.
pub fn overturn_uv(uv: Vec2, start: f32, end: f32, axis: Axis) -> Vec2 {
    match axis {
        Axis::Horizontal => Vec2::new(end - uv.x + start, uv.y),
        Axis::Vertical => Vec2::new(uv.x, end - uv.y + start),
    }
}

/// Twice the signed area of the triangle `a, b, c` in the XY plane.
///
/// Positive for counter-clockwise winding, negative for clockwise.
pub fn signed_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    (b.truncate() - a.truncate()).perp_dot(c.truncate() - a.truncate())
}
