//! Small geometric helpers shared by the mirror transforms.
//!
//! Rectangles are plain `bevy_math::Rect` values in the widget's local
//! space, with the origin at the bottom-left and Y increasing upward.

pub mod border;
pub mod utils;

pub use border::{Border, BorderPositions};
pub use utils::{extend_capacity, overturn_uv, signed_area, triangle_center, Axis};
