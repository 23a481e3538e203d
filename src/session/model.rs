use serde::{Deserialize, Serialize};

use crate::geometry::CropRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// What the editor hands to the conversion request when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropOutcome {
    pub rect: CropRect,
    pub crop_enabled: bool,
}

impl CropOutcome {
    pub const fn new(rect: CropRect, crop_enabled: bool) -> Self {
        Self { rect, crop_enabled }
    }

    /// Crop that actually changes the output: enabled and not the full frame.
    pub fn effective_rect(&self) -> Option<CropRect> {
        (self.crop_enabled && !self.rect.is_full()).then_some(self.rect)
    }
}
