use bevy_math::Rect;
use bevy_reflect::Reflect;
use serde::{Deserialize, Serialize};

/// Insets of the non-scaling frame of a 9-sliced sprite.
///
/// Values are either sprite pixels (as stored on a [`crate::SpriteInfo`]) or
/// local units (after [`Border::from_pixels`]); the type does not track which.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
pub struct Border {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Absolute coordinates of the four border insets inside a rect.
///
/// `left`/`right` are X coordinates, `top`/`bottom` are Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderPositions {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Border {
    pub const ZERO: Self = Self { left: 0.0, top: 0.0, right: 0.0, bottom: 0.0 };

    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same inset on all four sides.
    pub fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Convert a pixel border into local units.
    pub fn from_pixels(pixels: Border, pixels_per_unit: f32) -> Self {
        Self {
            left: pixels.left / pixels_per_unit,
            top: pixels.top / pixels_per_unit,
            right: pixels.right / pixels_per_unit,
            bottom: pixels.bottom / pixels_per_unit,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    /// Shrink the insets so opposite sides never overlap past the rect.
    ///
    /// Each axis is handled on its own: when `left + right` exceeds the rect
    /// width (or `top + bottom` the height) both insets on that axis are
    /// scaled by `size / combined`.
    pub fn adjusted_to(self, rect: Rect) -> Self {
        let mut border = self;

        let combined_x = border.left + border.right;
        if rect.width() < combined_x && combined_x != 0.0 {
            let ratio = rect.width() / combined_x;
            border.left *= ratio;
            border.right *= ratio;
        }

        let combined_y = border.top + border.bottom;
        if rect.height() < combined_y && combined_y != 0.0 {
            let ratio = rect.height() / combined_y;
            border.top *= ratio;
            border.bottom *= ratio;
        }

        border
    }

    /// Inset coordinates inside `rect`.
    ///
    /// Both the sliced mesh producer and the sliced scale pass derive their
    /// coordinates from this, which is what makes their exact float
    /// comparisons line up.
    pub fn positions(&self, rect: Rect) -> BorderPositions {
        BorderPositions {
            left: rect.min.x + self.left,
            top: rect.max.y - self.top,
            right: rect.max.x - self.right,
            bottom: rect.min.y + self.bottom,
        }
    }
}
