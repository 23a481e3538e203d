use crate::geometry::{CropLimits, CropRect};

use super::scale::scale_within;
use super::{DragDelta, DragSnapshot, HandlePosition};

/// Aspect-locked scale about the snapshot center.
///
/// The handle sits half a size away from the center, so moving it by `d`
/// implies a factor of `1 + 2d / size` on that axis. Corners take the larger
/// of the two so the edge keeps up with the pointer.
pub(super) fn scale(
    snapshot: DragSnapshot,
    handle: HandlePosition,
    delta: DragDelta,
    limits: CropLimits,
) -> CropRect {
    let rect = snapshot.rect();
    let horizontal = handle
        .horizontal()
        .map(|side| implied_scale(rect.width, side.sign() * delta.dx));
    let vertical = handle
        .vertical()
        .map(|side| implied_scale(rect.height, side.sign() * delta.dy));
    let factor = match (horizontal, vertical) {
        (Some(sx), Some(sy)) => sx.max(sy),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => return rect,
    };

    scale_within(rect, rect.center(), factor, limits)
}

fn implied_scale(size: f64, growth: f64) -> f64 {
    if size > 0.0 {
        1.0 + 2.0 * growth / size
    } else {
        1.0
    }
}
