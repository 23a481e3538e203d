use crate::geometry::{bounded, CropLimits, CropRect};

use super::{AxisSide, DragDelta, DragSnapshot, HandlePosition};

/// Free resize: the handle moves only the edges it touches.
pub(super) fn resize(
    snapshot: DragSnapshot,
    handle: HandlePosition,
    delta: DragDelta,
    limits: CropLimits,
) -> CropRect {
    let rect = snapshot.rect();
    let (x, width) = move_edge(
        rect.x,
        rect.width,
        handle.horizontal(),
        delta.dx,
        limits.min_width,
    );
    let (y, height) = move_edge(
        rect.y,
        rect.height,
        handle.vertical(),
        delta.dy,
        limits.min_height,
    );
    CropRect::new(x, y, width, height)
}

/// Whole-rectangle move, kept inside the unit square.
pub(super) fn translate(
    snapshot: DragSnapshot,
    _handle: HandlePosition,
    delta: DragDelta,
    _limits: CropLimits,
) -> CropRect {
    let rect = snapshot.rect();
    CropRect::new(
        bounded(rect.x + delta.dx, 0.0, 1.0 - rect.width),
        bounded(rect.y + delta.dy, 0.0, 1.0 - rect.height),
        rect.width,
        rect.height,
    )
}

fn move_edge(
    origin: f64,
    size: f64,
    side: Option<AxisSide>,
    delta: f64,
    min_size: f64,
) -> (f64, f64) {
    match side {
        Some(AxisSide::Leading) => {
            let moved = bounded(delta, -origin, size - min_size);
            (origin + moved, size - moved)
        }
        Some(AxisSide::Trailing) => {
            let moved = bounded(delta, min_size - size, 1.0 - (origin + size));
            (origin, size + moved)
        }
        None => (origin, size),
    }
}
