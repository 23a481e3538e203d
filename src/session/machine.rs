use super::error::{DragError, DragResult};
use super::DragPhase;
use crate::crop::{self, DragDelta, DragMode, DragSnapshot, HandlePosition, CROP_HANDLE_SIZE};
use crate::geometry::{CropRect, FramePoint, FrameRect};

/// Owns the snapshot for one pointer drag at a time.
#[derive(Debug)]
pub struct DragSession {
    snapshot: Option<DragSnapshot>,
    handle_size: f64,
}

impl DragSession {
    pub fn new() -> Self {
        Self::with_handle_size(CROP_HANDLE_SIZE)
    }

    pub fn with_handle_size(handle_size: f64) -> Self {
        Self {
            snapshot: None,
            handle_size,
        }
    }

    pub fn phase(&self) -> DragPhase {
        if self.snapshot.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<DragSnapshot> {
        self.snapshot
    }

    /// Starts a session. Returns `false` and keeps the existing snapshot when
    /// one is already running, since handle and body gestures can both fire.
    pub fn begin_drag(&mut self, initial: CropRect) -> bool {
        if let Some(snapshot) = self.snapshot {
            tracing::debug!(snapshot = ?snapshot.rect(), "drag already active; keeping snapshot");
            return false;
        }
        tracing::debug!(rect = ?initial, "crop drag started");
        self.snapshot = Some(DragSnapshot::capture(initial));
        true
    }

    pub fn try_update_drag(
        &self,
        pointer_start: FramePoint,
        pointer_current: FramePoint,
        frame: FrameRect,
        handle: HandlePosition,
        mode: DragMode,
    ) -> DragResult<CropRect> {
        let snapshot = self.snapshot.ok_or(DragError::NoActiveSession {
            operation: "update_drag",
        })?;
        self.compute(snapshot, pointer_start, pointer_current, frame, handle, mode)
    }

    /// Runs one final update and ends the session. The session ends even if
    /// the final update is rejected.
    pub fn try_end_drag(
        &mut self,
        pointer_start: FramePoint,
        pointer_current: FramePoint,
        frame: FrameRect,
        handle: HandlePosition,
        mode: DragMode,
    ) -> DragResult<CropRect> {
        let snapshot = self.snapshot.take().ok_or(DragError::NoActiveSession {
            operation: "end_drag",
        })?;
        let result = self.compute(snapshot, pointer_start, pointer_current, frame, handle, mode);
        tracing::debug!(?handle, ?mode, result = ?result, "crop drag ended");
        result
    }

    /// Drops the snapshot without a final update.
    pub fn cancel_drag(&mut self) -> Option<DragSnapshot> {
        let snapshot = self.snapshot.take();
        if snapshot.is_some() {
            tracing::debug!("crop drag cancelled");
        }
        snapshot
    }

    fn compute(
        &self,
        snapshot: DragSnapshot,
        pointer_start: FramePoint,
        pointer_current: FramePoint,
        frame: FrameRect,
        handle: HandlePosition,
        mode: DragMode,
    ) -> DragResult<CropRect> {
        let delta = DragDelta::from_pointer(pointer_start, pointer_current, frame).ok_or(
            DragError::DegenerateFrame {
                width: frame.width,
                height: frame.height,
            },
        )?;
        let limits = frame.limits(self.handle_size);
        let rect = crop::apply_drag(snapshot, handle, mode, delta, limits);
        tracing::trace!(?handle, ?mode, dx = delta.dx, dy = delta.dy, ?rect, "crop drag update");
        Ok(rect)
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DragSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DragPhase::{:?}", self.phase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: FrameRect = FrameRect::new(0.0, 0.0, 200.0, 100.0);

    fn origin() -> FramePoint {
        FramePoint::new(50.0, 50.0)
    }

    #[test]
    fn begin_drag_keeps_first_snapshot() {
        let mut session = DragSession::new();
        assert_eq!(session.phase(), DragPhase::Idle);
        assert!(session.begin_drag(CropRect::new(0.1, 0.1, 0.5, 0.5)));
        assert!(!session.begin_drag(CropRect::new(0.3, 0.3, 0.2, 0.2)));
        assert_eq!(session.phase(), DragPhase::Dragging);
        assert_eq!(
            session.snapshot().map(|snapshot| snapshot.rect()),
            Some(CropRect::new(0.1, 0.1, 0.5, 0.5))
        );
    }

    #[test]
    fn update_is_relative_to_snapshot_not_previous_update() {
        let mut session = DragSession::new();
        session.begin_drag(CropRect::new(0.2, 0.2, 0.4, 0.4));

        let first = session
            .try_update_drag(
                origin(),
                FramePoint::new(90.0, 50.0),
                FRAME,
                HandlePosition::Right,
                DragMode::Normal,
            )
            .expect("session is active");
        let second = session
            .try_update_drag(
                origin(),
                FramePoint::new(90.0, 50.0),
                FRAME,
                HandlePosition::Right,
                DragMode::Normal,
            )
            .expect("session is active");
        assert_eq!(first, second);
        assert!((first.width - 0.6).abs() < 1e-12);
    }

    #[test]
    fn update_without_session_reports_error() {
        let session = DragSession::new();
        let err = session
            .try_update_drag(
                origin(),
                origin(),
                FRAME,
                HandlePosition::Center,
                DragMode::Normal,
            )
            .expect_err("idle session should reject updates");
        assert_eq!(
            err,
            DragError::NoActiveSession {
                operation: "update_drag"
            }
        );
    }

    #[test]
    fn degenerate_frame_is_rejected() {
        let mut session = DragSession::new();
        session.begin_drag(CropRect::FULL);
        let err = session
            .try_update_drag(
                origin(),
                FramePoint::new(60.0, 60.0),
                FrameRect::sized(200.0, 0.0),
                HandlePosition::Right,
                DragMode::Normal,
            )
            .expect_err("zero-height frame should be rejected");
        assert!(matches!(err, DragError::DegenerateFrame { .. }));
        assert!(session.is_dragging());
    }

    #[test]
    fn end_drag_returns_final_rect_and_goes_idle() {
        let mut session = DragSession::new();
        session.begin_drag(CropRect::new(0.2, 0.2, 0.4, 0.4));
        let rect = session
            .try_end_drag(
                origin(),
                FramePoint::new(70.0, 60.0),
                FRAME,
                HandlePosition::Center,
                DragMode::Scale,
            )
            .expect("session is active");
        assert!((rect.x - 0.3).abs() < 1e-12);
        assert!((rect.y - 0.3).abs() < 1e-12);
        assert_eq!(session.phase(), DragPhase::Idle);

        let err = session
            .try_end_drag(
                origin(),
                origin(),
                FRAME,
                HandlePosition::Center,
                DragMode::Normal,
            )
            .expect_err("second end should fail");
        assert_eq!(
            err,
            DragError::NoActiveSession {
                operation: "end_drag"
            }
        );
    }

    #[test]
    fn cancel_drag_discards_snapshot() {
        let mut session = DragSession::new();
        assert_eq!(session.cancel_drag(), None);
        session.begin_drag(CropRect::FULL);
        assert_eq!(
            session.cancel_drag().map(|snapshot| snapshot.rect()),
            Some(CropRect::FULL)
        );
        assert!(!session.is_dragging());
        assert_eq!(session.to_string(), "DragPhase::Idle");
    }
}
