use serde::{Deserialize, Serialize};

use crate::crop::DragMode;

/// Modifier keys held while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierState {
    pub option: bool,
    pub shift: bool,
    pub command: bool,
    pub control: bool,
}

impl ModifierState {
    pub const NONE: Self = Self::new(false, false);

    pub const fn new(option: bool, shift: bool) -> Self {
        Self {
            option,
            shift,
            command: false,
            control: false,
        }
    }
}

impl DragMode {
    /// Command and control do not affect the drag mode.
    pub const fn from_modifiers(modifiers: ModifierState) -> Self {
        match (modifiers.option, modifiers.shift) {
            (false, false) => Self::Normal,
            (true, false) => Self::Symmetric,
            (false, true) => Self::Scale,
            (true, true) => Self::AspectRatioLockScale,
        }
    }
}

/// Follows modifier changes as the host reports them, including mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeTracker {
    modifiers: ModifierState,
}

impl ModeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn mode(&self) -> DragMode {
        DragMode::from_modifiers(self.modifiers)
    }

    /// Records new modifier state and returns the resulting mode.
    pub fn update(&mut self, modifiers: ModifierState) -> DragMode {
        let previous = self.mode();
        self.modifiers = modifiers;
        let mode = self.mode();
        if mode != previous {
            tracing::debug!(from = ?previous, to = ?mode, "crop drag mode changed");
        }
        mode
    }
}
