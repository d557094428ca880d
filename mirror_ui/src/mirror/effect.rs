use bevy_color::Color;
use bevy_ecs::prelude::Component;
use bevy_log::{debug, warn};
use bevy_math::{Rect, Vec2};
use bevy_reflect::Reflect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    duplicate::duplicate_for,
    scale::{simple_scale, sliced_scale},
    slice_filter::exclude_degenerate_slices,
    tiled::remap_tiled_uvs,
    MirrorDirection, MirrorType,
};
use crate::{geometry::Border, UiVertex};

/// How the host renderer filled the image's vertex list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum ImageType {
    #[default]
    Simple,
    Sliced,
    Tiled,
    Filled,
}

/// Sprite metadata the mirror passes need.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct SpriteInfo {
    /// Unscaled size of the sprite in pixels.
    pub pixel_size: Vec2,
    /// 9-slice insets in pixels.
    pub border: Border,
    pub pixels_per_unit: f32,
    /// UV sub-rectangle of the sprite's visible pixels inside its atlas.
    pub inner_uv: Rect,
}

impl SpriteInfo {
    pub fn new(pixel_size: Vec2) -> Self {
        Self {
            pixel_size,
            border: Border::ZERO,
            pixels_per_unit: 1.0,
            inner_uv: Rect::new(0.0, 0.0, 1.0, 1.0),
        }
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn with_inner_uv(mut self, inner_uv: Rect) -> Self {
        self.inner_uv = inner_uv;
        self
    }

    pub fn has_border(&self) -> bool {
        !self.border.is_zero()
    }

    /// Sprite size in local units.
    pub fn unit_size(&self) -> Vec2 {
        self.pixel_size / self.pixels_per_unit
    }

    /// Border in local units, not yet adjusted to any rect.
    pub fn unit_border(&self) -> Border {
        Border::from_pixels(self.border, self.pixels_per_unit)
    }
}

/// Snapshot of the image widget the effect is attached to.
///
/// The host resolves this once per redraw and hands it to
/// [`MirrorEffect::modify_vertices`].
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
pub struct ImageGraphic {
    /// Local drawing area, pixel-adjusted by the host.
    pub rect: Rect,
    pub image_type: ImageType,
    pub sprite: Option<SpriteInfo>,
    /// Whether the rendering component is active and enabled.
    pub active: bool,
    /// Vertex colour used by the default mesh producers.
    pub color: Color,
}

impl ImageGraphic {
    pub fn new(rect: Rect, image_type: ImageType) -> Self {
        Self {
            rect,
            image_type,
            sprite: None,
            active: true,
            color: Color::WHITE,
        }
    }

    pub fn with_sprite(mut self, sprite: SpriteInfo) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sliced images without a border render like simple ones.
    pub fn has_border(&self) -> bool {
        self.sprite.is_some_and(|sprite| sprite.has_border())
    }
}

/// What a sliced image without a border does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlicedFallback {
    /// Run the simple sequence and stop.
    #[default]
    EarlyReturn,
    /// Run the simple sequence, then the sliced sequence on top of it over
    /// the original source range. Reproduces legacy output bit for bit.
    BugCompatible,
}

/// Why a transform pass left the buffer alone.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    #[error("image component is not active")]
    Inactive,
    #[error("no vertices to mirror")]
    NoVertices,
    #[error("tiled mirroring needs a sprite with a positive size")]
    MissingSprite,
    #[error("mirroring is not implemented for {0:?} images")]
    UnimplementedImageType(ImageType),
    #[error("tiled mirroring is not implemented for top-to-bottom mode {0:?}")]
    TiledTopToBottom(MirrorType),
}

/// Result of a [`MirrorEffect::modify_vertices`] call. Never a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// Geometry was scaled and duplicated; `vertex_count` is the final length.
    Mirrored { vertex_count: usize },
    /// Tiled geometry had the UVs of `triangles` triangles flipped.
    TilesFlipped { triangles: usize },
    /// Nothing was changed.
    Skipped(SkipReason),
}

impl MirrorOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, MirrorOutcome::Skipped(_))
    }
}

/// Mirror effect configuration for one image widget.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorEffect {
    pub mirror_type: MirrorType,
    pub sliced_fallback: SlicedFallback,
}

impl MirrorEffect {
    pub fn new(mirror_type: MirrorType) -> Self {
        Self {
            mirror_type,
            sliced_fallback: SlicedFallback::default(),
        }
    }

    pub fn with_sliced_fallback(mut self, sliced_fallback: SlicedFallback) -> Self {
        self.sliced_fallback = sliced_fallback;
        self
    }

    /// Change the mirror type. Returns `true` when the value actually
    /// changed and the host should mark the vertices dirty.
    pub fn set_mirror_type(&mut self, mirror_type: MirrorType) -> bool {
        if self.mirror_type == mirror_type {
            return false;
        }
        self.mirror_type = mirror_type;
        true
    }

    /// Rewrite the default geometry of `graphic` into its mirrored form.
    ///
    /// Skips (and logs a warning) when the graphic is inactive, the buffer
    /// is empty, or the image type has no mirrored form. A skipped call
    /// leaves `verts` exactly as it was.
    pub fn modify_vertices(&self, verts: &mut Vec<UiVertex>, graphic: &ImageGraphic) -> MirrorOutcome {
        let outcome = self.dispatch(verts, graphic);

        match outcome {
            MirrorOutcome::Skipped(reason) => {
                warn!("Mirror effect skipped ({:?}, {:?}): {}", graphic.image_type, self.mirror_type, reason);
            }
            MirrorOutcome::Mirrored { vertex_count } => {
                debug!("Mirrored {:?} image with {:?}: {} vertices", graphic.image_type, self.mirror_type, vertex_count);
            }
            MirrorOutcome::TilesFlipped { triangles } => {
                debug!("Flipped {} tiled triangles with {:?}", triangles, self.mirror_type);
            }
        }

        outcome
    }

    /// Size the widget should take to show the whole sprite in every
    /// mirrored copy. See [`super::native_size::native_size`].
    pub fn native_size(&self, sprite: &SpriteInfo) -> Vec2 {
        super::native_size::native_size(sprite, self.mirror_type)
    }

    fn dispatch(&self, verts: &mut Vec<UiVertex>, graphic: &ImageGraphic) -> MirrorOutcome {
        if !graphic.active {
            return MirrorOutcome::Skipped(SkipReason::Inactive);
        }
        if verts.is_empty() {
            return MirrorOutcome::Skipped(SkipReason::NoVertices);
        }

        let count = verts.len();
        match graphic.image_type {
            ImageType::Simple => self.draw_simple(verts, graphic.rect, count),
            ImageType::Sliced => self.draw_sliced(verts, graphic, count),
            ImageType::Tiled => self.draw_tiled(verts, graphic, count),
            ImageType::Filled => MirrorOutcome::Skipped(SkipReason::UnimplementedImageType(ImageType::Filled)),
        }
    }

    fn draw_simple(&self, verts: &mut Vec<UiVertex>, rect: Rect, count: usize) -> MirrorOutcome {
        simple_scale(rect, verts, count, self.mirror_type);
        duplicate_for(rect, verts, count, self.mirror_type);

        MirrorOutcome::Mirrored { vertex_count: verts.len() }
    }

    fn draw_sliced(&self, verts: &mut Vec<UiVertex>, graphic: &ImageGraphic, count: usize) -> MirrorOutcome {
        let rect = graphic.rect;

        if !graphic.has_border() {
            let outcome = self.draw_simple(verts, rect, count);
            if self.sliced_fallback == SlicedFallback::EarlyReturn {
                return outcome;
            }
        }

        let border = graphic
            .sprite
            .map(|sprite| sprite.unit_border().adjusted_to(rect))
            .unwrap_or_default();

        sliced_scale(rect, verts, count, self.mirror_type, border);
        let count = exclude_degenerate_slices(verts, count);
        duplicate_for(rect, verts, count, self.mirror_type);

        MirrorOutcome::Mirrored { vertex_count: verts.len() }
    }

    fn draw_tiled(&self, verts: &mut Vec<UiVertex>, graphic: &ImageGraphic, count: usize) -> MirrorOutcome {
        let Some(sprite) = graphic.sprite else {
            return MirrorOutcome::Skipped(SkipReason::MissingSprite);
        };

        let tile_size = sprite.unit_size();
        if !(tile_size.x > 0.0 && tile_size.y > 0.0) {
            return MirrorOutcome::Skipped(SkipReason::MissingSprite);
        }

        if self.mirror_type.vertical() == Some(MirrorDirection::Top2Bottom) {
            return MirrorOutcome::Skipped(SkipReason::TiledTopToBottom(self.mirror_type));
        }

        let triangles = remap_tiled_uvs(graphic.rect, verts, count, self.mirror_type, tile_size, sprite.inner_uv);
        MirrorOutcome::TilesFlipped { triangles }
    }
}
