//! Mirrored image geometry.
//!
//! The default renderer of an image widget produces an unmirrored vertex
//! list. The passes in this module rewrite that list in place so the image
//! is drawn as two (or four) reflected copies inside the widget's rect:
//!
//! - [`scale`] squeezes the source geometry into one half or quadrant,
//! - [`slice_filter`] drops slice cells that collapsed while scaling,
//! - [`duplicate`] appends the reflected copies,
//! - [`tiled`] flips the UVs of alternating tiles for repeating fills,
//! - [`effect`] picks the passes for the widget's image type.

pub mod duplicate;
pub mod effect;
pub mod native_size;
pub mod scale;
pub mod slice_filter;
pub mod tiled;


use bevy_reflect::Reflect;
use serde::{Deserialize, Serialize};

use crate::geometry::Axis;

/// Which axes get mirrored, and from which side the source half is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum MirrorType {
    /// Keep the left half, mirror it to the right.
    #[default]
    HorizontalLR,
    /// Keep the bottom half, mirror it upward.
    VerticalBT,
    /// Keep the right half, mirror it to the left.
    HorizontalRL,
    /// Keep the top half, mirror it downward.
    VerticalTB,
    /// Bottom-left quadrant: left to right, then bottom to top.
    QuarterLRBT,
    /// Top-left quadrant: left to right, then top to bottom.
    QuarterLRTB,
    /// Bottom-right quadrant: right to left, then bottom to top.
    QuarterRLBT,
    /// Top-right quadrant: right to left, then top to bottom.
    QuarterRLTB,
}

/// Direction of a single mirror pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum MirrorDirection {
    Left2Right,
    Right2Left,
    Bottom2Top,
    Top2Bottom,
}

impl MirrorDirection {
    pub fn axis(self) -> Axis {
        match self {
            MirrorDirection::Left2Right | MirrorDirection::Right2Left => Axis::Horizontal,
            MirrorDirection::Bottom2Top | MirrorDirection::Top2Bottom => Axis::Vertical,
        }
    }
}

impl MirrorType {
    pub const ALL: [MirrorType; 8] = [
        MirrorType::HorizontalLR,
        MirrorType::VerticalBT,
        MirrorType::HorizontalRL,
        MirrorType::VerticalTB,
        MirrorType::QuarterLRBT,
        MirrorType::QuarterLRTB,
        MirrorType::QuarterRLBT,
        MirrorType::QuarterRLTB,
    ];

    /// Horizontal pass of this mode, if any.
    pub fn horizontal(self) -> Option<MirrorDirection> {
        match self {
            MirrorType::HorizontalLR | MirrorType::QuarterLRBT | MirrorType::QuarterLRTB => {
                Some(MirrorDirection::Left2Right)
            }
            MirrorType::HorizontalRL | MirrorType::QuarterRLBT | MirrorType::QuarterRLTB => {
                Some(MirrorDirection::Right2Left)
            }
            MirrorType::VerticalBT | MirrorType::VerticalTB => None,
        }
    }

    /// Vertical pass of this mode, if any.
    pub fn vertical(self) -> Option<MirrorDirection> {
        match self {
            MirrorType::VerticalBT | MirrorType::QuarterLRBT | MirrorType::QuarterRLBT => {
                Some(MirrorDirection::Bottom2Top)
            }
            MirrorType::VerticalTB | MirrorType::QuarterLRTB | MirrorType::QuarterRLTB => {
                Some(MirrorDirection::Top2Bottom)
            }
            MirrorType::HorizontalLR | MirrorType::HorizontalRL => None,
        }
    }

    pub fn is_quarter(self) -> bool {
        self.horizontal().is_some() && self.vertical().is_some()
    }

    /// Mirror passes in the order they are applied: horizontal first.
    pub fn passes(self) -> impl Iterator<Item = MirrorDirection> {
        self.horizontal().into_iter().chain(self.vertical())
    }

    /// Number of mirrored axes, 1 or 2.
    pub fn mirrored_axes(self) -> usize {
        self.passes().count()
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_axis_modes_have_one_pass() {
        for mirror_type in [
            MirrorType::HorizontalLR,
            MirrorType::HorizontalRL,
            MirrorType::VerticalBT,
            MirrorType::VerticalTB,
        ] {
            assert_eq!(mirror_type.mirrored_axes(), 1, "{:?}", mirror_type);
            assert!(!mirror_type.is_quarter());
        }
    }

    #[test]
    fn test_quarter_modes_run_horizontal_first() {
        let passes: Vec<_> = MirrorType::QuarterRLTB.passes().collect();
        assert_eq!(passes, vec![MirrorDirection::Right2Left, MirrorDirection::Top2Bottom]);

        let passes: Vec<_> = MirrorType::QuarterLRBT.passes().collect();
        assert_eq!(passes, vec![MirrorDirection::Left2Right, MirrorDirection::Bottom2Top]);
    }

    #[test]
    fn test_direction_axis() {
        assert_eq!(MirrorDirection::Left2Right.axis(), Axis::Horizontal);
        assert_eq!(MirrorDirection::Top2Bottom.axis(), Axis::Vertical);
    }
}
