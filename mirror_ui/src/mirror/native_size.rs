use bevy_math::Vec2;

use super::MirrorType;
use crate::mirror::effect::SpriteInfo;

/// Layout size that shows the whole sprite in each mirrored copy.
///
/// The sprite's unit size is doubled on every mirrored axis: width for the
/// horizontal modes, height for the vertical ones, both for quarters.
pub fn native_size(sprite: &SpriteInfo, mirror_type: MirrorType) -> Vec2 {
    let size = sprite.unit_size();
    let scale = Vec2::new(
        if mirror_type.horizontal().is_some() { 2.0 } else { 1.0 },
        if mirror_type.vertical().is_some() { 2.0 } else { 1.0 },
    );
    size * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_doubles_both_axes() {
        let sprite = SpriteInfo::new(Vec2::new(64.0, 64.0));
        assert_eq!(native_size(&sprite, MirrorType::QuarterLRBT), Vec2::new(128.0, 128.0));
        assert_eq!(native_size(&sprite, MirrorType::QuarterRLTB), Vec2::new(128.0, 128.0));
    }

    #[test]
    fn test_axis_modes_double_one_axis() {
        let sprite = SpriteInfo::new(Vec2::new(40.0, 30.0)).with_pixels_per_unit(2.0);

        assert_eq!(native_size(&sprite, MirrorType::HorizontalLR), Vec2::new(40.0, 15.0));
        assert_eq!(native_size(&sprite, MirrorType::HorizontalRL), Vec2::new(40.0, 15.0));
        assert_eq!(native_size(&sprite, MirrorType::VerticalBT), Vec2::new(20.0, 30.0));
        assert_eq!(native_size(&sprite, MirrorType::VerticalTB), Vec2::new(20.0, 30.0));
    }
}
