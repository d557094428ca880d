//! Squeeze source geometry into the half (or quadrant) of the rect that is
//! kept before mirroring.

use bevy_math::Rect;

use super::{MirrorDirection, MirrorType};
use crate::{geometry::Border, UiVertex};

/// Half-scale the first `count` vertices toward the anchor edge of each
/// mirrored axis.
///
/// The anchor is the rect's min edge for a near-to-far direction
/// (left-to-right, bottom-to-top) and its max edge otherwise, so a vertex at
/// coordinate `p` ends up at `(p + anchor) / 2`.
pub fn simple_scale(rect: Rect, verts: &mut [UiVertex], count: usize, mirror_type: MirrorType) {
    let horizontal = mirror_type.horizontal();
    let vertical = mirror_type.vertical();

    for vertex in verts.iter_mut().take(count) {
        let mut position = vertex.position;

        match horizontal {
            Some(MirrorDirection::Left2Right) => position.x = (position.x + rect.min.x) * 0.5,
            Some(MirrorDirection::Right2Left) => position.x = (rect.max.x + position.x) * 0.5,
            _ => {}
        }

        match vertical {
            Some(MirrorDirection::Bottom2Top) => position.y = (position.y + rect.min.y) * 0.5,
            Some(MirrorDirection::Top2Bottom) => position.y = (rect.max.y + position.y) * 0.5,
            _ => {}
        }

        vertex.position = position;
    }
}

/// Border-aware variant of [`simple_scale`] for 9-sliced geometry.
///
/// `border` must already be in local units and adjusted to `rect`. Vertices
/// sitting exactly on an inset coordinate are pinned so the frame keeps its
/// on-screen thickness: the inset nearest the anchor edge stays where it is,
/// the opposite inset moves to the same distance from the rect's center.
/// Every other vertex is half-scaled toward the anchor.
///
/// The comparisons are exact on purpose; the sliced mesh producer computes
/// its inset coordinates with [`Border::positions`] as well.
pub fn sliced_scale(
    rect: Rect,
    verts: &mut [UiVertex],
    count: usize,
    mirror_type: MirrorType,
    border: Border,
) {
    let insets = border.positions(rect);
    let center = rect.center();

    let horizontal = mirror_type.horizontal();
    let vertical = mirror_type.vertical();

    for vertex in verts.iter_mut().take(count) {
        let mut position = vertex.position;

        match horizontal {
            Some(MirrorDirection::Left2Right) => {
                position.x = if position.x == insets.right {
                    center.x - border.right
                } else if position.x == insets.left {
                    rect.min.x + border.left
                } else {
                    (position.x + rect.min.x) * 0.5
                };
            }
            Some(MirrorDirection::Right2Left) => {
                position.x = if position.x == insets.right {
                    rect.max.x - border.right
                } else if position.x == insets.left {
                    center.x + border.left
                } else {
                    (rect.max.x + position.x) * 0.5
                };
            }
            _ => {}
        }

        match vertical {
            Some(MirrorDirection::Bottom2Top) => {
                position.y = if position.y == insets.top {
                    center.y - border.top
                } else if position.y == insets.bottom {
                    rect.min.y + border.bottom
                } else {
                    (position.y + rect.min.y) * 0.5
                };
            }
            Some(MirrorDirection::Top2Bottom) => {
                position.y = if position.y == insets.top {
                    rect.max.y - border.top
                } else if position.y == insets.bottom {
                    center.y + border.bottom
                } else {
                    (rect.max.y + position.y) * 0.5
                };
            }
            _ => {}
        }

        #[cfg(feature = "trace_logging")]
        bevy_log::trace!("sliced_scale: {:?} -> {:?}", vertex.position, position);

        vertex.position = position;
    }
}
