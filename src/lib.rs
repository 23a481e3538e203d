pub mod config;
pub mod crop;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod replay;
pub mod session;

use std::path::Path;

pub use error::{AppError, AppResult};

/// Replays a drag script with the given or user config.
pub fn run(script: &Path, config_path: Option<&Path>) -> AppResult<session::CropOutcome> {
    logging::init();

    let config = match config_path {
        Some(path) => config::load_editor_config_from(path)?,
        None => config::load_editor_config(),
    };
    tracing::debug!(?config, "loaded editor config");

    let outcome = replay::replay_file(script, config)?;
    tracing::info!(rect = ?outcome.rect, crop_enabled = outcome.crop_enabled, "replay complete");
    Ok(outcome)
}
