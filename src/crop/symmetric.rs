use crate::geometry::{bounded, CropLimits, CropRect};

use super::{AxisSide, DragDelta, DragSnapshot, HandlePosition};

/// Mirrored resize around the snapshot center.
///
/// Dragging an edge outward by `d` moves the opposite edge outward by `d` as
/// well, so the size changes by `2d` and the center stays put.
pub(super) fn resize(
    snapshot: DragSnapshot,
    handle: HandlePosition,
    delta: DragDelta,
    limits: CropLimits,
) -> CropRect {
    let rect = snapshot.rect();
    let (x, width) = mirror_edges(
        rect.x,
        rect.width,
        handle.horizontal(),
        delta.dx,
        limits.min_width,
    );
    let (y, height) = mirror_edges(
        rect.y,
        rect.height,
        handle.vertical(),
        delta.dy,
        limits.min_height,
    );
    CropRect::new(x, y, width, height)
}

fn mirror_edges(
    origin: f64,
    size: f64,
    side: Option<AxisSide>,
    delta: f64,
    min_size: f64,
) -> (f64, f64) {
    let Some(side) = side else {
        return (origin, size);
    };
    // Both edges share one growth value, so its range is the intersection of
    // the leading edge's and trailing edge's limits.
    let max_growth = origin.min(1.0 - (origin + size));
    let min_growth = (min_size - size) / 2.0;
    let growth = bounded(side.sign() * delta, min_growth, max_growth);
    (origin - growth, size + 2.0 * growth)
}
