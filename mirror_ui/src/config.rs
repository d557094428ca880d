//! TOML definitions for a mirrored image.
//!
//! ```toml
//! [effect]
//! mirror_type = "QuarterLRBT"
//! sliced_fallback = "early_return"
//!
//! [image]
//! rect = [0.0, 0.0, 200.0, 120.0]   # x, y, width, height
//! image_type = "Sliced"
//!
//! [sprite]
//! pixel_size = [64.0, 64.0]
//! border = { left = 8.0, top = 8.0, right = 8.0, bottom = 8.0 }
//! ```

use std::{fs, path::Path};

use bevy_color::Color;
use bevy_log::debug;
use bevy_math::{Rect, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    geometry::Border,
    mirror::effect::{ImageGraphic, ImageType, MirrorEffect, SpriteInfo},
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Mirror definition file not found at path: {0}")]
    FileNotFound(String),
    #[error("Failed to read mirror definition file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse mirror definition (TOML): {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid mirror definition: {0}")]
    Invalid(String),
}

/// `[image]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSection {
    /// `[x, y, width, height]` in local units.
    pub rect: [f32; 4],
    pub image_type: ImageType,
    pub active: bool,
    /// Linear RGBA.
    pub color: [f32; 4],
}

impl Default for ImageSection {
    fn default() -> Self {
        Self {
            rect: [0.0, 0.0, 100.0, 100.0],
            image_type: ImageType::Simple,
            active: true,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// `[sprite]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSection {
    pub pixel_size: [f32; 2],
    /// Insets in pixels.
    pub border: Border,
    pub pixels_per_unit: f32,
    /// `[min_x, min_y, max_x, max_y]`.
    pub inner_uv: [f32; 4],
}

impl Default for SpriteSection {
    fn default() -> Self {
        Self {
            pixel_size: [0.0, 0.0],
            border: Border::ZERO,
            pixels_per_unit: 1.0,
            inner_uv: [0.0, 0.0, 1.0, 1.0],
        }
    }
}

/// A mirrored image as written in a definition file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorDefinition {
    pub effect: MirrorEffect,
    pub image: ImageSection,
    pub sprite: Option<SpriteSection>,
}

impl MirrorDefinition {
    /// Load and validate a definition from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let definition = Self::from_toml_str(&content)?;
        debug!("Loaded mirror definition from {:?}: {:?}", path, definition.effect.mirror_type);

        Ok(definition)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let definition: MirrorDefinition = toml::from_str(content)?;
        definition.validate()?;
        Ok(definition)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [_, _, width, height] = self.image.rect;
        if width < 0.0 || height < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "image rect has negative size {}x{}",
                width, height
            )));
        }

        if let Some(sprite) = &self.sprite {
            if sprite.pixels_per_unit <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "sprite pixels_per_unit must be positive, got {}",
                    sprite.pixels_per_unit
                )));
            }

            let [w, h] = sprite.pixel_size;
            if w < 0.0 || h < 0.0 {
                return Err(ConfigError::Invalid(format!("sprite pixel_size has negative size {}x{}", w, h)));
            }

            let [min_x, min_y, max_x, max_y] = sprite.inner_uv;
            if min_x > max_x || min_y > max_y {
                return Err(ConfigError::Invalid(format!(
                    "sprite inner_uv is inverted: {:?}",
                    sprite.inner_uv
                )));
            }
        }

        Ok(())
    }

    /// Split into the components an entity carries.
    pub fn into_parts(self) -> (MirrorEffect, ImageGraphic) {
        let [x, y, width, height] = self.image.rect;
        let [r, g, b, a] = self.image.color;

        let rect = Rect {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        };

        let mut graphic = ImageGraphic::new(rect, self.image.image_type)
            .with_active(self.image.active)
            .with_color(Color::linear_rgba(r, g, b, a));

        if let Some(sprite) = self.sprite {
            let [min_x, min_y, max_x, max_y] = sprite.inner_uv;
            graphic = graphic.with_sprite(
                SpriteInfo::new(Vec2::from(sprite.pixel_size))
                    .with_border(sprite.border)
                    .with_pixels_per_unit(sprite.pixels_per_unit)
                    .with_inner_uv(Rect {
                        min: Vec2::new(min_x, min_y),
                        max: Vec2::new(max_x, max_y),
                    }),
            );
        }

        (self.effect, graphic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mirror::{effect::SlicedFallback, MirrorType};

    const SLICED: &str = r#"
        [effect]
        mirror_type = "QuarterLRBT"
        sliced_fallback = "bug_compatible"

        [image]
        rect = [10.0, 20.0, 200.0, 120.0]
        image_type = "Sliced"

        [sprite]
        pixel_size = [64.0, 32.0]
        border = { left = 8.0, top = 4.0, right = 8.0, bottom = 4.0 }
        pixels_per_unit = 2.0
        inner_uv = [0.0, 0.5, 0.5, 1.0]
    "#;

    #[test]
    fn test_parse_full_definition() {
        let (effect, graphic) = MirrorDefinition::from_toml_str(SLICED).unwrap().into_parts();

        assert_eq!(effect.mirror_type, MirrorType::QuarterLRBT);
        assert_eq!(effect.sliced_fallback, SlicedFallback::BugCompatible);

        assert_eq!(graphic.rect, Rect::new(10.0, 20.0, 210.0, 140.0));
        assert_eq!(graphic.image_type, ImageType::Sliced);
        assert!(graphic.active);

        let sprite = graphic.sprite.unwrap();
        assert_eq!(sprite.unit_size(), Vec2::new(32.0, 16.0));
        assert_eq!(sprite.border, Border::new(8.0, 4.0, 8.0, 4.0));
        assert_eq!(sprite.inner_uv, Rect::new(0.0, 0.5, 0.5, 1.0));
    }

    #[test]
    fn test_sections_default() {
        let definition = MirrorDefinition::from_toml_str("[effect]\nmirror_type = \"VerticalTB\"\n").unwrap();

        assert_eq!(definition.image, ImageSection::default());
        assert!(definition.sprite.is_none());

        let (effect, graphic) = definition.into_parts();
        assert_eq!(effect.sliced_fallback, SlicedFallback::EarlyReturn);
        assert_eq!(graphic.rect, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(graphic.sprite.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let negative_rect = "[image]\nrect = [0.0, 0.0, -5.0, 10.0]\n";
        assert!(matches!(MirrorDefinition::from_toml_str(negative_rect), Err(ConfigError::Invalid(_))));

        let zero_ppu = "[sprite]\npixel_size = [8.0, 8.0]\npixels_per_unit = 0.0\n";
        assert!(matches!(MirrorDefinition::from_toml_str(zero_ppu), Err(ConfigError::Invalid(_))));

        let inverted_uv = "[sprite]\npixel_size = [8.0, 8.0]\ninner_uv = [1.0, 0.0, 0.0, 1.0]\n";
        assert!(matches!(MirrorDefinition::from_toml_str(inverted_uv), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_mirror_type_is_parse_error() {
        let text = "[effect]\nmirror_type = \"Diagonal\"\n";
        assert!(matches!(MirrorDefinition::from_toml_str(text), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = MirrorDefinition::load(Path::new("/nonexistent/mirror.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
