//! Headless replay of recorded crop drags.
//!
//! A script names the frame, how the editor opens, and a list of drags. Each
//! drag is a pointer-down point, the moves that follow (with the modifier keys
//! held at that moment), and the pointer-up point.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::EditorConfig;
use crate::crop::{CropPreset, HandlePosition};
use crate::geometry::{CropRect, FramePoint, FrameRect};
use crate::input::{ModeTracker, ModifierState};
use crate::session::{CropEditor, CropOutcome};

pub type ReplayResult<T> = std::result::Result<T, ReplayError>;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read drag script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse drag script {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("frame {width}x{height} has no usable extent")]
    InvalidFrame { width: f64, height: f64 },

    #[error("preset {preset:?} needs videoSize")]
    MissingVideoSize { preset: CropPreset },

    #[error("drag #{index} starts at ({x}, {y}) outside every crop handle")]
    NoHandleAtPoint { index: usize, x: f64, y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VideoSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragScript {
    pub frame: FrameRect,
    #[serde(default)]
    pub initial: Option<CropRect>,
    #[serde(default)]
    pub preset: Option<CropPreset>,
    #[serde(default)]
    pub video_size: Option<VideoSize>,
    #[serde(default = "default_crop_enabled")]
    pub crop_enabled: bool,
    #[serde(default)]
    pub drags: Vec<ScriptedDrag>,
}

fn default_crop_enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedDrag {
    /// Hit-tested from `start` when omitted.
    #[serde(default)]
    pub handle: Option<HandlePosition>,
    pub start: FramePoint,
    #[serde(default)]
    pub moves: Vec<PointerMove>,
    pub end: PointerMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointerMove {
    pub to: FramePoint,
    #[serde(default)]
    pub modifiers: ModifierState,
}

pub fn load_script(path: &Path) -> ReplayResult<DragScript> {
    let contents = std::fs::read_to_string(path).map_err(|source| ReplayError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ReplayError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn open_editor(script: &DragScript, config: EditorConfig) -> ReplayResult<CropEditor> {
    if let Some(initial) = script.initial {
        return Ok(CropEditor::new(initial, script.crop_enabled, config));
    }
    let preset = script.preset.unwrap_or(config.default_preset);
    let (video_width, video_height) = match (preset.ratio(), script.video_size) {
        (_, Some(video)) => (video.width, video.height),
        (None, None) => (0, 0),
        (Some(_), None) => return Err(ReplayError::MissingVideoSize { preset }),
    };
    let mut editor = CropEditor::from_preset(preset, video_width, video_height, config);
    editor.set_crop_enabled(script.crop_enabled);
    Ok(editor)
}

pub fn replay(script: &DragScript, config: EditorConfig) -> ReplayResult<CropOutcome> {
    let frame = script.frame;
    if frame.is_degenerate() {
        return Err(ReplayError::InvalidFrame {
            width: frame.width,
            height: frame.height,
        });
    }

    let mut editor = open_editor(script, config)?;
    let mut tracker = ModeTracker::new();
    for (index, drag) in script.drags.iter().enumerate() {
        let handle = match drag.handle {
            Some(handle) => handle,
            None => editor
                .handle_at(frame, drag.start)
                .ok_or(ReplayError::NoHandleAtPoint {
                    index,
                    x: drag.start.x,
                    y: drag.start.y,
                })?,
        };

        editor.begin_drag();
        for step in &drag.moves {
            let mode = tracker.update(step.modifiers);
            editor.update_drag(drag.start, step.to, frame, handle, mode);
        }
        let mode = tracker.update(drag.end.modifiers);
        let rect = editor.end_drag(drag.start, drag.end.to, frame, handle, mode);
        tracing::debug!(index, ?handle, ?rect, "replayed crop drag");
    }

    Ok(editor.finish())
}

pub fn replay_file(path: &Path, config: EditorConfig) -> ReplayResult<CropOutcome> {
    let script = load_script(path)?;
    tracing::info!(?path, drags = script.drags.len(), "replaying crop drags");
    replay(&script, config)
}
