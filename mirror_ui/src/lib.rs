use bevy_color::Color;
use bevy_math::{Vec2, Vec3};

pub mod config;
pub mod geometry;
pub mod mesh;
pub mod mirror;
pub mod plugin;

// Re-export commonly used types
pub use geometry::{
    border::{Border, BorderPositions},
    utils::{extend_capacity, overturn_uv, signed_area, triangle_center, Axis},
};

pub use mirror::{
    duplicate::{duplicate_for, mirror_vertices},
    effect::{ImageGraphic, ImageType, MirrorEffect, MirrorOutcome, SkipReason, SlicedFallback, SpriteInfo},
    native_size::native_size,
    scale::{simple_scale, sliced_scale},
    slice_filter::exclude_degenerate_slices,
    tiled::remap_tiled_uvs,
    MirrorDirection, MirrorType,
};

pub use mesh::{default_mesh, simple_mesh, sliced_mesh, tiled_mesh};

pub use config::{ConfigError, MirrorDefinition};

// Re-export main plugin
pub use plugin::{change_mirror_type, MirrorEffectPlugin, MirrorFrameStats, MirrorSet, SetNativeSize, UiMesh};

/// A single UI vertex as produced by the widget's default renderer.
///
/// Only `position` and `uv0` are ever rewritten by the mirror transforms;
/// `normal` and `color` ride along untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Color,
    pub uv0: Vec2,
}

impl UiVertex {
    /// Vertex in the XY plane facing the camera.
    pub fn new(position: Vec2, uv0: Vec2, color: Color) -> Self {
        Self {
            position: position.extend(0.0),
            normal: Vec3::NEG_Z,
            color,
            uv0,
        }
    }
}

impl Default for UiVertex {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            normal: Vec3::NEG_Z,
            color: Color::WHITE,
            uv0: Vec2::ZERO,
        }
    }
}
