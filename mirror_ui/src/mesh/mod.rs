//! Default (unmirrored) image geometry.
//!
//! These producers emit the vertex layouts an image widget's default
//! renderer hands to the mirror effect: two triangles for a simple image,
//! nine 4-vertex slice cells for a sliced one, two triangles per tile for a
//! tiled fill. Faces are clockwise in a Y-up space.

use bevy_color::Color;
use bevy_log::warn;
use bevy_math::{Rect, Vec2};

use crate::{
    mirror::effect::{ImageGraphic, ImageType, SpriteInfo},
    UiVertex,
};

/// Full UV range, used when an image has no sprite.
const FULL_UV: Rect = Rect {
    min: Vec2::ZERO,
    max: Vec2::ONE,
};

/// Upper bound on tiles in one tiled fill.
pub const MAX_TILES: usize = 1 << 16;

/// Build the geometry the host renderer would produce for `graphic`.
pub fn default_mesh(graphic: &ImageGraphic) -> Vec<UiVertex> {
    let uv = graphic.sprite.map_or(FULL_UV, |sprite| sprite.inner_uv);

    match (graphic.image_type, graphic.sprite) {
        (ImageType::Sliced, Some(sprite)) if sprite.has_border() => {
            sliced_mesh(graphic.rect, &sprite, graphic.color)
        }
        (ImageType::Tiled, Some(sprite)) => tiled_mesh(graphic.rect, &sprite, graphic.color),
        _ => simple_mesh(graphic.rect, uv, graphic.color),
    }
}

/// A quad as two triangles: (bl, tl, tr), (tr, br, bl).
pub fn simple_mesh(rect: Rect, uv: Rect, color: Color) -> Vec<UiVertex> {
    let mut verts = Vec::with_capacity(6);
    push_quad_triangles(&mut verts, rect, uv, color);
    verts
}

/// Nine slice cells of four vertices each (bl, tl, tr, br), row by row from
/// the bottom.
///
/// Inset coordinates come from [`crate::Border::positions`] on the border
/// adjusted to `rect`, which is what the sliced scale pass compares against.
pub fn sliced_mesh(rect: Rect, sprite: &SpriteInfo, color: Color) -> Vec<UiVertex> {
    let border = sprite.unit_border().adjusted_to(rect);
    let insets = border.positions(rect);

    let xs = [rect.min.x, insets.left, insets.right, rect.max.x];
    let ys = [rect.min.y, insets.bottom, insets.top, rect.max.y];

    let uv = sprite.inner_uv;
    let fraction = |pixels: f32, extent: f32| if extent > 0.0 { pixels / extent } else { 0.0 };
    let us = [
        uv.min.x,
        uv.min.x + uv.width() * fraction(sprite.border.left, sprite.pixel_size.x),
        uv.max.x - uv.width() * fraction(sprite.border.right, sprite.pixel_size.x),
        uv.max.x,
    ];
    let vs = [
        uv.min.y,
        uv.min.y + uv.height() * fraction(sprite.border.bottom, sprite.pixel_size.y),
        uv.max.y - uv.height() * fraction(sprite.border.top, sprite.pixel_size.y),
        uv.max.y,
    ];

    let mut verts = Vec::with_capacity(9 * 4);
    for row in 0..3 {
        for col in 0..3 {
            let at = |c: usize, r: usize| UiVertex::new(Vec2::new(xs[c], ys[r]), Vec2::new(us[c], vs[r]), color);
            verts.extend([at(col, row), at(col, row + 1), at(col + 1, row + 1), at(col + 1, row)]);
        }
    }
    verts
}

/// Repeat the sprite from `rect.min` at its unit size.
///
/// The last column and row are clipped to the rect and their UVs cropped to
/// match. A sprite without a positive size, or a fill needing more than
/// [`MAX_TILES`] tiles, falls back to [`simple_mesh`].
pub fn tiled_mesh(rect: Rect, sprite: &SpriteInfo, color: Color) -> Vec<UiVertex> {
    let tile = sprite.unit_size();
    let uv = sprite.inner_uv;

    if !(tile.x > 0.0 && tile.y > 0.0) {
        return simple_mesh(rect, uv, color);
    }

    let Some((cols, rows)) = tile_grid_size(rect, tile) else {
        warn!(
            "Tiled fill of {:?} with {:?} tiles exceeds {} tiles, drawing a single quad",
            rect.size(),
            tile,
            MAX_TILES
        );
        return simple_mesh(rect, uv, color);
    };

    let mut verts = Vec::with_capacity(cols * rows * 6);
    for row in 0..rows {
        let y0 = rect.min.y + row as f32 * tile.y;
        let y1 = (y0 + tile.y).min(rect.max.y);

        for col in 0..cols {
            let x0 = rect.min.x + col as f32 * tile.x;
            let x1 = (x0 + tile.x).min(rect.max.x);

            let cropped = Rect {
                min: uv.min,
                max: Vec2::new(
                    uv.min.x + uv.width() * (x1 - x0) / tile.x,
                    uv.min.y + uv.height() * (y1 - y0) / tile.y,
                ),
            };
            let cell = Rect {
                min: Vec2::new(x0, y0),
                max: Vec2::new(x1, y1),
            };
            push_quad_triangles(&mut verts, cell, cropped, color);
        }
    }
    verts
}

/// Columns and rows of a tiled fill, or `None` past [`MAX_TILES`].
fn tile_grid_size(rect: Rect, tile: Vec2) -> Option<(usize, usize)> {
    let cols = (rect.width() / tile.x).ceil();
    let rows = (rect.height() / tile.y).ceil();

    if !(cols.is_finite() && rows.is_finite()) || cols * rows > MAX_TILES as f32 {
        return None;
    }

    let (cols, rows) = (cols as usize, rows as usize);
    match cols.checked_mul(rows) {
        Some(tiles) if tiles <= MAX_TILES => Some((cols, rows)),
        _ => None,
    }
}

fn push_quad_triangles(verts: &mut Vec<UiVertex>, rect: Rect, uv: Rect, color: Color) {
    let bl = UiVertex::new(rect.min, uv.min, color);
    let tl = UiVertex::new(Vec2::new(rect.min.x, rect.max.y), Vec2::new(uv.min.x, uv.max.y), color);
    let tr = UiVertex::new(rect.max, uv.max, color);
    let br = UiVertex::new(Vec2::new(rect.max.x, rect.min.y), Vec2::new(uv.max.x, uv.min.y), color);

    verts.extend([bl, tl, tr, tr, br, bl]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::signed_area, Border};

    #[test]
    fn test_simple_mesh_is_two_clockwise_triangles() {
        let verts = simple_mesh(Rect::new(0.0, 0.0, 20.0, 10.0), FULL_UV, Color::WHITE);

        assert_eq!(verts.len(), 6);
        for tri in verts.chunks_exact(3) {
            assert!(signed_area(tri[0].position, tri[1].position, tri[2].position) < 0.0);
        }
        assert_eq!(verts[2].uv0, Vec2::ONE);
    }

    #[test]
    fn test_sliced_mesh_layout() {
        let sprite = SpriteInfo::new(Vec2::new(40.0, 40.0)).with_border(Border::uniform(10.0));
        let verts = sliced_mesh(Rect::new(0.0, 0.0, 100.0, 100.0), &sprite, Color::WHITE);

        assert_eq!(verts.len(), 36);

        let mut xs: Vec<f32> = verts.iter().map(|v| v.position.x).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        xs.dedup();
        assert_eq!(xs, vec![0.0, 10.0, 90.0, 100.0]);

        // Bottom-left cell spans the first quarter of the UV range
        assert_eq!(verts[2].uv0, Vec2::new(0.25, 0.25));
    }

    #[test]
    fn test_tiled_mesh_clips_last_tile() {
        let sprite = SpriteInfo::new(Vec2::new(10.0, 10.0));
        let verts = tiled_mesh(Rect::new(0.0, 0.0, 25.0, 10.0), &sprite, Color::WHITE);

        // 3 columns x 1 row
        assert_eq!(verts.len(), 18);
        let last = &verts[12..];
        let max_x = last.iter().map(|v| v.position.x).fold(f32::MIN, f32::max);
        let max_u = last.iter().map(|v| v.uv0.x).fold(f32::MIN, f32::max);
        assert_eq!(max_x, 25.0);
        assert!((max_u - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_tiled_mesh_caps_tile_count() {
        let sprite = SpriteInfo::new(Vec2::new(1.0, 1.0));

        let huge = tiled_mesh(Rect::new(0.0, 0.0, 1.0e30, 10.0), &sprite, Color::WHITE);
        assert_eq!(huge.len(), 6);

        // Exactly at the limit still tiles
        let side = (MAX_TILES as f32).sqrt();
        let limit = tiled_mesh(Rect::new(0.0, 0.0, side, side), &sprite, Color::WHITE);
        assert_eq!(limit.len(), MAX_TILES * 6);

        let over = tiled_mesh(Rect::new(0.0, 0.0, side + 1.0, side), &sprite, Color::WHITE);
        assert_eq!(over.len(), 6);
    }

    #[test]
    fn test_default_mesh_dispatch() {
        let rect = Rect::new(0.0, 0.0, 30.0, 30.0);
        let bordered = SpriteInfo::new(Vec2::new(10.0, 10.0)).with_border(Border::uniform(2.0));

        let sliced = ImageGraphic::new(rect, ImageType::Sliced).with_sprite(bordered);
        assert_eq!(default_mesh(&sliced).len(), 36);

        let borderless = ImageGraphic::new(rect, ImageType::Sliced).with_sprite(SpriteInfo::new(Vec2::splat(10.0)));
        assert_eq!(default_mesh(&borderless).len(), 6);

        let tiled = ImageGraphic::new(rect, ImageType::Tiled).with_sprite(bordered);
        assert_eq!(default_mesh(&tiled).len(), 9 * 6);

        let filled = ImageGraphic::new(rect, ImageType::Filled);
        assert_eq!(default_mesh(&filled).len(), 6);
    }
}
