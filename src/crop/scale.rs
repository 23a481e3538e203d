use crate::geometry::{bounded, CropLimits, CropRect};

use super::{AxisSide, DragDelta, DragSnapshot, HandlePosition};

/// Proportional resize anchored at the side opposite the dragged handle.
///
/// Corner handles anchor at the diagonally opposite corner and average the
/// two per-axis scales; edge handles anchor at the midpoint of the opposite
/// edge and use their own axis.
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
        (Some(sx), Some(sy)) => (sx + sy) / 2.0,
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => return rect,
    };

    let anchor = (
        opposite_anchor(rect.x, rect.width, handle.horizontal()),
        opposite_anchor(rect.y, rect.height, handle.vertical()),
    );
    scale_within(rect, anchor, factor, limits)
}

fn implied_scale(size: f64, growth: f64) -> f64 {
    if size > 0.0 {
        (size + growth) / size
    } else {
        1.0
    }
}

fn opposite_anchor(origin: f64, size: f64, side: Option<AxisSide>) -> f64 {
    match side {
        Some(AxisSide::Leading) => origin + size,
        Some(AxisSide::Trailing) => origin,
        None => origin + size / 2.0,
    }
}

/// Scales `rect` about `anchor`, limiting the factor so the result stays
/// inside the unit square and no smaller than `limits`.
///
/// A snapshot taken on a larger frame can be too small for `limits` while
/// already touching a boundary, leaving no factor that satisfies both. The
/// minimum then wins and the uniformly scaled rectangle is shifted back
/// inside, which keeps its ratio.
pub(super) fn scale_within(
    rect: CropRect,
    anchor: (f64, f64),
    factor: f64,
    limits: CropLimits,
) -> CropRect {
    let upper = axis_upper_bound(anchor.0, rect.x, rect.right())
        .min(axis_upper_bound(anchor.1, rect.y, rect.bottom()));
    let lower = axis_lower_bound(rect.width, limits.min_width)
        .max(axis_lower_bound(rect.height, limits.min_height));
    if lower <= upper {
        return scale_about(rect, anchor, bounded(factor, lower, upper));
    }

    let fit = axis_fit_bound(rect.width).min(axis_fit_bound(rect.height));
    let scaled = scale_about(rect, anchor, lower.min(fit));
    CropRect::new(
        bounded(scaled.x, 0.0, 1.0 - scaled.width),
        bounded(scaled.y, 0.0, 1.0 - scaled.height),
        scaled.width,
        scaled.height,
    )
}

/// Largest factor keeping `[low, high]` inside `[0, 1]` when scaled about `anchor`.
fn axis_upper_bound(anchor: f64, low: f64, high: f64) -> f64 {
    let mut upper = f64::INFINITY;
    let before = anchor - low;
    if before > 0.0 {
        upper = upper.min(anchor / before);
    }
    let after = high - anchor;
    if after > 0.0 {
        upper = upper.min((1.0 - anchor) / after);
    }
    upper
}

/// Largest factor keeping `size` no larger than the unit square.
fn axis_fit_bound(size: f64) -> f64 {
    if size > 0.0 {
        1.0 / size
    } else {
        f64::INFINITY
    }
}

fn axis_lower_bound(size: f64, min_size: f64) -> f64 {
    if size > 0.0 {
        (min_size / size).max(0.0)
    } else {
        0.0
    }
}

fn scale_about(rect: CropRect, anchor: (f64, f64), factor: f64) -> CropRect {
    let (anchor_x, anchor_y) = anchor;
    CropRect::new(
        anchor_x - (anchor_x - rect.x) * factor,
        anchor_y - (anchor_y - rect.y) * factor,
        rect.width * factor,
        rect.height * factor,
    )
}
