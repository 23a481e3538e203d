//! On-screen handle positions and hit testing for the crop overlay.

use crate::geometry::{CropRect, FramePoint, FrameRect};

use super::{AxisSide, DragMode, HandlePosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleEmphasis {
    Idle,
    /// The handle under the pointer.
    Active,
    /// Moves with the active handle in the current mode.
    Linked,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    pub handle: HandlePosition,
    pub point: FramePoint,
    pub emphasis: HandleEmphasis,
}

/// Fraction along an axis: 0 for leading, 0.5 for middle, 1 for trailing.
const fn axis_fraction(side: Option<AxisSide>) -> f64 {
    match side {
        Some(AxisSide::Leading) => 0.0,
        None => 0.5,
        Some(AxisSide::Trailing) => 1.0,
    }
}

pub fn handle_point(rect: CropRect, frame: FrameRect, handle: HandlePosition) -> FramePoint {
    let fx = axis_fraction(handle.horizontal());
    let fy = axis_fraction(handle.vertical());
    FramePoint::new(
        frame.x + (rect.x + rect.width * fx) * frame.width,
        frame.y + (rect.y + rect.height * fy) * frame.height,
    )
}

/// Which of the three handle rows/columns on one axis move during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct AxisMotion {
    leading: bool,
    middle: bool,
    trailing: bool,
}

impl AxisMotion {
    const STILL: Self = Self {
        leading: false,
        middle: false,
        trailing: false,
    };
    const ALL: Self = Self {
        leading: true,
        middle: true,
        trailing: true,
    };

    const fn moves(self, side: Option<AxisSide>) -> bool {
        match side {
            Some(AxisSide::Leading) => self.leading,
            None => self.middle,
            Some(AxisSide::Trailing) => self.trailing,
        }
    }

    fn for_drag(mode: DragMode, active_side: Option<AxisSide>) -> Self {
        match (mode, active_side) {
            (DragMode::Normal, Some(AxisSide::Leading)) => Self {
                leading: true,
                middle: true,
                trailing: false,
            },
            (DragMode::Normal, Some(AxisSide::Trailing)) => Self {
                leading: false,
                middle: true,
                trailing: true,
            },
            (DragMode::Normal | DragMode::Symmetric, None) => Self::STILL,
            (DragMode::Symmetric, Some(_)) => Self {
                leading: true,
                middle: false,
                trailing: true,
            },
            // Scale anchors at the opposite side, or at the middle for the
            // axis an edge handle does not touch.
            (DragMode::Scale, Some(AxisSide::Leading)) => Self {
                leading: true,
                middle: true,
                trailing: false,
            },
            (DragMode::Scale, Some(AxisSide::Trailing)) => Self {
                leading: false,
                middle: true,
                trailing: true,
            },
            (DragMode::Scale, None) | (DragMode::AspectRatioLockScale, _) => Self {
                leading: true,
                middle: false,
                trailing: true,
            },
        }
    }
}

fn emphasis_for(
    handle: HandlePosition,
    active: Option<HandlePosition>,
    mode: DragMode,
) -> HandleEmphasis {
    let Some(active) = active else {
        return HandleEmphasis::Idle;
    };
    if handle == active {
        return HandleEmphasis::Active;
    }
    let (horizontal, vertical) = if active.is_center() {
        (AxisMotion::ALL, AxisMotion::ALL)
    } else {
        (
            AxisMotion::for_drag(mode, active.horizontal()),
            AxisMotion::for_drag(mode, active.vertical()),
        )
    };
    if horizontal.moves(handle.horizontal()) || vertical.moves(handle.vertical()) {
        HandleEmphasis::Linked
    } else {
        HandleEmphasis::Idle
    }
}

/// Positions and emphasis for all nine handles, in `HandlePosition::ALL` order.
pub fn handle_layout(
    rect: CropRect,
    frame: FrameRect,
    mode: DragMode,
    active: Option<HandlePosition>,
) -> [HandleMarker; 9] {
    HandlePosition::ALL.map(|handle| HandleMarker {
        handle,
        point: handle_point(rect, frame, handle),
        emphasis: emphasis_for(handle, active, mode),
    })
}

/// Handle under `point`, if any. Corners win over edges, edges over the body.
pub fn handle_at_point(
    rect: CropRect,
    frame: FrameRect,
    point: FramePoint,
    hit_size: f64,
) -> Option<HandlePosition> {
    let reach = (hit_size / 2.0).max(0.0);
    let within = |handle: HandlePosition| {
        let target = handle_point(rect, frame, handle);
        (point.x - target.x).abs() <= reach && (point.y - target.y).abs() <= reach
    };

    let handles = HandlePosition::ALL;
    let (corners, rest) = handles.split_at(4);
    if let Some(handle) = corners.iter().copied().find(|handle| within(*handle)) {
        return Some(handle);
    }
    if let Some(handle) = rest
        .iter()
        .copied()
        .filter(|handle| !handle.is_center())
        .find(|handle| within(*handle))
    {
        return Some(handle);
    }

    let top_left = handle_point(rect, frame, HandlePosition::TopLeft);
    let bottom_right = handle_point(rect, frame, HandlePosition::BottomRight);
    let inside = point.x >= top_left.x
        && point.x <= bottom_right.x
        && point.y >= top_left.y
        && point.y <= bottom_right.y;
    inside.then_some(HandlePosition::Center)
}
