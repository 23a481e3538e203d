use super::{CropOutcome, DragError, DragPhase, DragSession};
use crate::config::EditorConfig;
use crate::crop::{
    handle_at_point, handle_layout, CropPreset, DragMode, HandleMarker, HandlePosition,
};
use crate::geometry::{CropLimits, CropRect, FramePoint, FrameRect};
use crate::input::CropShortcutAction;

/// Crop state for one open editor: the published rectangle, the enable flag
/// and the drag session that is the rectangle's only writer.
#[derive(Debug)]
pub struct CropEditor {
    rect: CropRect,
    crop_enabled: bool,
    opened_with: CropOutcome,
    reset_rect: CropRect,
    session: DragSession,
    config: EditorConfig,
}

impl CropEditor {
    pub fn new(initial: CropRect, crop_enabled: bool, config: EditorConfig) -> Self {
        let rect = initial.clamp(CropLimits::NONE);
        Self {
            rect,
            crop_enabled,
            opened_with: CropOutcome::new(rect, crop_enabled),
            reset_rect: CropRect::FULL,
            session: DragSession::with_handle_size(config.handle_size),
            config,
        }
    }

    /// Opens with the preset's centered rectangle; reset returns to it.
    pub fn from_preset(
        preset: CropPreset,
        video_width: u32,
        video_height: u32,
        config: EditorConfig,
    ) -> Self {
        let rect = preset.initial_rect(video_width, video_height);
        tracing::debug!(
            preset = preset.label(),
            video_width,
            video_height,
            ?rect,
            "opening crop editor from preset"
        );
        let mut editor = Self::new(rect, true, config);
        editor.reset_rect = editor.rect;
        editor
    }

    pub fn rect(&self) -> CropRect {
        self.rect
    }

    pub fn crop_enabled(&self) -> bool {
        self.crop_enabled
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn phase(&self) -> DragPhase {
        self.session.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Snapshots the published rectangle. No-op while a drag is running.
    pub fn begin_drag(&mut self) -> bool {
        self.session.begin_drag(self.rect)
    }

    /// Publishes the drag result. Misuse and degenerate frames leave the
    /// rectangle unchanged.
    pub fn update_drag(
        &mut self,
        pointer_start: FramePoint,
        pointer_current: FramePoint,
        frame: FrameRect,
        handle: HandlePosition,
        mode: DragMode,
    ) -> CropRect {
        let result =
            self.session
                .try_update_drag(pointer_start, pointer_current, frame, handle, mode);
        self.publish(result)
    }

    pub fn end_drag(
        &mut self,
        pointer_start: FramePoint,
        pointer_current: FramePoint,
        frame: FrameRect,
        handle: HandlePosition,
        mode: DragMode,
    ) -> CropRect {
        let result = self
            .session
            .try_end_drag(pointer_start, pointer_current, frame, handle, mode);
        self.publish(result)
    }

    /// Abandons the drag and restores the rectangle it started from.
    pub fn cancel_drag(&mut self) -> CropRect {
        if let Some(snapshot) = self.session.cancel_drag() {
            self.rect = snapshot.rect();
        }
        self.rect
    }

    pub fn set_crop_enabled(&mut self, enabled: bool) {
        self.crop_enabled = enabled;
    }

    /// Replaces the rectangle, ending any running drag first.
    pub fn reset(&mut self, rect: CropRect) -> CropRect {
        self.session.cancel_drag();
        self.rect = rect.clamp(CropLimits::NONE);
        self.rect
    }

    pub fn handle_at(&self, frame: FrameRect, point: FramePoint) -> Option<HandlePosition> {
        handle_at_point(self.rect, frame, point, self.config.hit_size)
    }

    pub fn handles(
        &self,
        frame: FrameRect,
        mode: DragMode,
        active: Option<HandlePosition>,
    ) -> [HandleMarker; 9] {
        handle_layout(self.rect, frame, mode, active)
    }

    /// Applies a resolved shortcut. Returns the outcome when it closes the editor.
    pub fn apply_shortcut(&mut self, action: CropShortcutAction) -> Option<CropOutcome> {
        match action {
            CropShortcutAction::Apply => {
                self.session.cancel_drag();
                Some(self.outcome())
            }
            CropShortcutAction::Cancel => {
                self.session.cancel_drag();
                self.rect = self.opened_with.rect;
                self.crop_enabled = self.opened_with.crop_enabled;
                Some(self.opened_with)
            }
            CropShortcutAction::CancelDrag => {
                self.cancel_drag();
                None
            }
            CropShortcutAction::ToggleCrop => {
                self.crop_enabled = !self.crop_enabled;
                None
            }
            CropShortcutAction::ResetRect => {
                self.reset(self.reset_rect);
                None
            }
        }
    }

    pub fn outcome(&self) -> CropOutcome {
        CropOutcome::new(self.rect, self.crop_enabled)
    }

    /// Closes the editor and hands the rectangle back unchanged.
    pub fn finish(mut self) -> CropOutcome {
        if self.session.cancel_drag().is_some() {
            tracing::warn!("crop editor closed during a drag; keeping last published rect");
        }
        self.outcome()
    }

    fn publish(&mut self, result: Result<CropRect, DragError>) -> CropRect {
        match result {
            Ok(rect) => self.rect = rect,
            Err(err @ DragError::NoActiveSession { .. }) => {
                tracing::warn!(%err, "ignoring crop drag event");
            }
            Err(err @ DragError::DegenerateFrame { .. }) => {
                tracing::warn!(%err, "skipping crop update");
            }
        }
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: FrameRect = FrameRect::new(0.0, 0.0, 400.0, 200.0);

    fn editor() -> CropEditor {
        CropEditor::new(
            CropRect::new(0.25, 0.25, 0.5, 0.5),
            true,
            EditorConfig::default(),
        )
    }

    #[test]
    fn new_clamps_out_of_bounds_initial_rect() {
        let editor = CropEditor::new(
            CropRect::new(0.8, -0.1, 0.5, 0.5),
            false,
            EditorConfig::default(),
        );
        assert_eq!(editor.rect(), CropRect::new(0.5, 0.0, 0.5, 0.5));
        assert!(!editor.crop_enabled());
    }

    #[test]
    fn update_while_idle_leaves_rect_unchanged() {
        let mut editor = editor();
        let before = editor.rect();
        let rect = editor.update_drag(
            FramePoint::new(0.0, 0.0),
            FramePoint::new(100.0, 100.0),
            FRAME,
            HandlePosition::Center,
            DragMode::Normal,
        );
        assert_eq!(rect, before);
        let rect = editor.end_drag(
            FramePoint::new(0.0, 0.0),
            FramePoint::new(100.0, 100.0),
            FRAME,
            HandlePosition::Center,
            DragMode::Normal,
        );
        assert_eq!(rect, before);
    }

    #[test]
    fn degenerate_frame_leaves_rect_unchanged() {
        let mut editor = editor();
        editor.begin_drag();
        let before = editor.rect();
        let rect = editor.update_drag(
            FramePoint::new(0.0, 0.0),
            FramePoint::new(40.0, 0.0),
            FrameRect::sized(-1.0, 200.0),
            HandlePosition::Right,
            DragMode::Normal,
        );
        assert_eq!(rect, before);
        assert!(editor.is_dragging());
    }

    #[test]
    fn cancel_drag_restores_snapshot() {
        let mut editor = editor();
        editor.begin_drag();
        editor.update_drag(
            FramePoint::new(0.0, 0.0),
            FramePoint::new(40.0, 0.0),
            FRAME,
            HandlePosition::Right,
            DragMode::Normal,
        );
        assert!((editor.rect().width - 0.6).abs() < 1e-12);
        assert_eq!(editor.cancel_drag(), CropRect::new(0.25, 0.25, 0.5, 0.5));
        assert_eq!(editor.phase(), DragPhase::Idle);
    }

    #[test]
    fn cancel_shortcut_restores_opening_state() {
        let mut editor = editor();
        editor.begin_drag();
        editor.end_drag(
            FramePoint::new(0.0, 0.0),
            FramePoint::new(40.0, 20.0),
            FRAME,
            HandlePosition::Center,
            DragMode::Normal,
        );
        editor.apply_shortcut(CropShortcutAction::ToggleCrop);
        assert!(!editor.crop_enabled());

        let outcome = editor
            .apply_shortcut(CropShortcutAction::Cancel)
            .expect("cancel closes the editor");
        assert_eq!(
            outcome,
            CropOutcome::new(CropRect::new(0.25, 0.25, 0.5, 0.5), true)
        );
        assert_eq!(editor.outcome(), outcome);
    }

    #[test]
    fn reset_shortcut_returns_to_preset_rect() {
        let mut editor = CropEditor::from_preset(
            CropPreset::Ratio1x1,
            1600,
            800,
            EditorConfig::default(),
        );
        assert_eq!(editor.rect(), CropRect::new(0.25, 0.0, 0.5, 1.0));
        editor.reset(CropRect::new(0.0, 0.0, 0.3, 0.3));
        assert_eq!(editor.apply_shortcut(CropShortcutAction::ResetRect), None);
        assert_eq!(editor.rect(), CropRect::new(0.25, 0.0, 0.5, 1.0));
    }

    #[test]
    fn hit_test_uses_configured_hit_size() {
        let config = EditorConfig {
            hit_size: 4.0,
            ..EditorConfig::default()
        };
        let editor = CropEditor::new(CropRect::new(0.25, 0.25, 0.5, 0.5), true, config);
        // Top-left handle sits at (100, 50).
        assert_eq!(
            editor.handle_at(FRAME, FramePoint::new(101.0, 51.0)),
            Some(HandlePosition::TopLeft)
        );
        assert_eq!(
            editor.handle_at(FRAME, FramePoint::new(105.0, 55.0)),
            Some(HandlePosition::Center)
        );
    }

    #[test]
    fn finish_hands_back_last_published_rect() {
        let mut editor = editor();
        editor.begin_drag();
        let rect = editor.update_drag(
            FramePoint::new(0.0, 0.0),
            FramePoint::new(-40.0, 0.0),
            FRAME,
            HandlePosition::Left,
            DragMode::Symmetric,
        );
        let outcome = editor.finish();
        assert_eq!(outcome.rect, rect);
        assert!(outcome.crop_enabled);
    }
}
