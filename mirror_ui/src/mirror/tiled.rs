use bevy_math::{Rect, Vec2};

use super::{MirrorDirection, MirrorType};
use crate::{
    geometry::{overturn_uv, triangle_center, Axis},
    UiVertex,
};

/// Flip the UVs of triangles that sit in odd tiles of a repeating fill.
///
/// Positions are never touched: the tiled fill already covers the whole
/// rect, so mirroring is only a matter of turning every other tile around.
/// Each triangle's tile is picked from the midpoint of its coordinate range
/// on each axis, `floor((center - rect.min) / tile_size)`. On an enabled axis
/// an odd tile index reflects all three UVs inside `inner_uv`.
///
/// Returns the number of triangles that had at least one axis flipped.
pub fn remap_tiled_uvs(
    rect: Rect,
    verts: &mut [UiVertex],
    count: usize,
    mirror_type: MirrorType,
    tile_size: Vec2,
    inner_uv: Rect,
) -> usize {
    let flip_x = flips_horizontally(mirror_type);
    let flip_y = mirror_type.vertical() == Some(MirrorDirection::Bottom2Top);

    let count = count.min(verts.len());
    let mut flipped = 0;

    for triangle in verts[..count].chunks_exact_mut(3) {
        let mut touched = false;

        if flip_x {
            let center = triangle_center(
                triangle[0].position.x,
                triangle[1].position.x,
                triangle[2].position.x,
            );
            if is_odd_tile(center, rect.min.x, tile_size.x) {
                for vertex in triangle.iter_mut() {
                    vertex.uv0 = overturn_uv(vertex.uv0, inner_uv.min.x, inner_uv.max.x, Axis::Horizontal);
                }
                touched = true;
            }
        }

        if flip_y {
            let center = triangle_center(
                triangle[0].position.y,
                triangle[1].position.y,
                triangle[2].position.y,
            );
            if is_odd_tile(center, rect.min.y, tile_size.y) {
                for vertex in triangle.iter_mut() {
                    vertex.uv0 = overturn_uv(vertex.uv0, inner_uv.min.y, inner_uv.max.y, Axis::Vertical);
                }
                touched = true;
            }
        }

        if touched {
            flipped += 1;
        }
    }

    flipped
}

/// Horizontal tile flipping applies to the modes that keep the left half.
/// Parity counts from `rect.min.x`, so right-anchored modes are left alone.
fn flips_horizontally(mirror_type: MirrorType) -> bool {
    matches!(
        mirror_type,
        MirrorType::HorizontalLR | MirrorType::QuarterLRBT | MirrorType::QuarterLRTB
    )
}

fn is_odd_tile(center: f32, origin: f32, tile: f32) -> bool {
    let index = ((center - origin) / tile).floor() as i64;
    index.rem_euclid(2) == 1
}
