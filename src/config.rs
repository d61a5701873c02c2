//! Configuration loaded from defaults, an optional TOML file and CLI flags.

use crate::errors::ClipboardError;
use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR_NAME: &str = "fencecopy";
const CONFIG_FILE_NAME: &str = "config.toml";

/// The two user-facing toggles of a copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardCopierConfig {
    /// Tag fences with the full path instead of the extension.
    #[serde(default = "ClipboardCopierConfig::default_include_full_path")]
    pub include_full_path: bool,
    /// Keep the existing clipboard text in front of the new blocks.
    #[serde(default)]
    pub append_to_clipboard: bool,
}

impl ClipboardCopierConfig {
    fn default_include_full_path() -> bool {
        true
    }
}

impl Default for ClipboardCopierConfig {
    fn default() -> Self {
        Self {
            include_full_path: Self::default_include_full_path(),
            append_to_clipboard: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub copy: ClipboardCopierConfig,
}

impl Config {
    /// Loads `path`, or the per-user config file when `path` is `None`.
    ///
    /// A missing per-user file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ClipboardError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) => match Self::from_file(&path) {
                    Err(ClipboardError::MissingFile(_)) => {
                        debug!("No config file at {}, using defaults", path.display());
                        Ok(Self::default())
                    }
                    other => other,
                },
                None => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ClipboardError> {
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ClipboardError::MissingFile(path.to_path_buf()),
            _ => ClipboardError::ConfigError(format!("{}: {}", path.display(), e)),
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ClipboardError> {
        Ok(toml::from_str(raw)?)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
