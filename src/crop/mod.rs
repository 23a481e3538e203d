//! Crop handle model and the per-mode drag transforms.

mod aspect;
pub mod handles;
mod normal;
mod preset;
mod scale;
mod symmetric;

use serde::{Deserialize, Serialize};

use crate::geometry::{CropLimits, CropRect, FramePoint, FrameRect};

pub use handles::{handle_at_point, handle_layout, handle_point, HandleEmphasis, HandleMarker};
pub use preset::CropPreset;

/// Default handle size in on-screen pixels; the minimum crop is two of these.
pub const CROP_HANDLE_SIZE: f64 = 10.0;

/// Default square hit area around each handle, in pixels.
pub const CROP_HANDLE_HIT_SIZE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HandlePosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

/// Which end of an axis a handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Leading,
    Trailing,
}

impl AxisSide {
    pub const fn sign(self) -> f64 {
        match self {
            Self::Leading => -1.0,
            Self::Trailing => 1.0,
        }
    }
}

impl HandlePosition {
    pub const ALL: [HandlePosition; 9] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::Center,
    ];

    pub const fn horizontal(self) -> Option<AxisSide> {
        match self {
            Self::TopLeft | Self::BottomLeft | Self::Left => Some(AxisSide::Leading),
            Self::TopRight | Self::BottomRight | Self::Right => Some(AxisSide::Trailing),
            Self::Top | Self::Bottom | Self::Center => None,
        }
    }

    pub const fn vertical(self) -> Option<AxisSide> {
        match self {
            Self::TopLeft | Self::TopRight | Self::Top => Some(AxisSide::Leading),
            Self::BottomLeft | Self::BottomRight | Self::Bottom => Some(AxisSide::Trailing),
            Self::Left | Self::Right | Self::Center => None,
        }
    }

    pub const fn is_corner(self) -> bool {
        self.horizontal().is_some() && self.vertical().is_some()
    }

    pub const fn is_center(self) -> bool {
        matches!(self, Self::Center)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DragMode {
    #[default]
    Normal,
    Symmetric,
    Scale,
    AspectRatioLockScale,
}

/// Crop rectangle as it was when the drag started.
///
/// Every transform works from this value plus the total pointer displacement,
/// so a long drag never accumulates clamping error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapshot {
    rect: CropRect,
}

impl DragSnapshot {
    pub const fn capture(rect: CropRect) -> Self {
        Self { rect }
    }

    pub const fn rect(&self) -> CropRect {
        self.rect
    }
}

/// Pointer displacement since drag start, in normalized units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragDelta {
    pub dx: f64,
    pub dy: f64,
}

impl DragDelta {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// `None` when the frame has no usable extent.
    pub fn from_pointer(start: FramePoint, current: FramePoint, frame: FrameRect) -> Option<Self> {
        if frame.is_degenerate() {
            return None;
        }
        let dx = (current.x - start.x) / frame.width;
        let dy = (current.y - start.y) / frame.height;
        (dx.is_finite() && dy.is_finite()).then_some(Self::new(dx, dy))
    }
}

pub type CropTransform = fn(DragSnapshot, HandlePosition, DragDelta, CropLimits) -> CropRect;

/// Picks the transform for a handle and mode. `Center` always moves.
pub fn transform_for(handle: HandlePosition, mode: DragMode) -> CropTransform {
    match (handle, mode) {
        (HandlePosition::Center, _) => normal::translate,
        (_, DragMode::Normal) => normal::resize,
        (_, DragMode::Symmetric) => symmetric::resize,
        (_, DragMode::Scale) => scale::scale,
        (_, DragMode::AspectRatioLockScale) => aspect::scale,
    }
}

/// Runs the selected transform and clamps the candidate to the invariants.
pub fn apply_drag(
    snapshot: DragSnapshot,
    handle: HandlePosition,
    mode: DragMode,
    delta: DragDelta,
    limits: CropLimits,
) -> CropRect {
    transform_for(handle, mode)(snapshot, handle, delta, limits).clamp(limits)
}
