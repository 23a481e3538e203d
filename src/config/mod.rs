use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::crop::{CropPreset, CROP_HANDLE_HIT_SIZE, CROP_HANDLE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{field} must be a positive number of pixels, got {value}")]
    InvalidSize { field: &'static str, value: f64 },
}

const APP_DIR: &str = "cropkit";
const APP_CONFIG_FILE: &str = "config.json";

/// Crop editor settings from `config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub handle_size: f64,
    pub hit_size: f64,
    pub default_preset: CropPreset,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            handle_size: CROP_HANDLE_SIZE,
            hit_size: CROP_HANDLE_HIT_SIZE,
            default_preset: CropPreset::Free,
        }
    }
}

impl EditorConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        for (field, value) in [("handleSize", self.handle_size), ("hitSize", self.hit_size)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSize { field, value });
            }
        }
        Ok(self)
    }
}

/// Loads the user config, falling back to defaults on any problem.
pub fn load_editor_config() -> EditorConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_editor_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_editor_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> EditorConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return EditorConfig::default(),
    };
    if !path.exists() {
        return EditorConfig::default();
    }
    load_editor_config_from(&path).unwrap_or_else(|err| {
        tracing::warn!(%err, ?path, "failed to load config.json; using defaults");
        EditorConfig::default()
    })
}

/// Loads and validates an explicit config file.
pub fn load_editor_config_from(path: &Path) -> Result<EditorConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: EditorConfig =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
