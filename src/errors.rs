use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard read failed: {0}")]
    ClipboardReadError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Invalid file reference: {0}")]
    InvalidReference(String),

    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read {}: {reason}", .path.display())]
    ReadFailure { path: PathBuf, reason: String },

    #[error("Nothing to copy")]
    EmptyResult,

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for ClipboardError {
    fn from(err: std::io::Error) -> Self {
        ClipboardError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for ClipboardError {
    fn from(err: toml::de::Error) -> Self {
        ClipboardError::ConfigError(err.to_string())
    }
}
