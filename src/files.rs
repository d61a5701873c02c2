use crate::errors::ClipboardError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs as async_fs;

/// Read access to file contents, injected into the copy pipeline.
#[async_trait]
pub trait FileSource: Send + Sync {
    /// Reads the whole file as UTF-8 text.
    async fn read_all_text(&self, path: &Path) -> Result<String, ClipboardError>;

    /// Whether `path` currently names a regular file.
    fn exists(&self, path: &Path) -> bool;
}

/// The local filesystem, read through tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

#[async_trait]
impl FileSource for LocalFiles {
    async fn read_all_text(&self, path: &Path) -> Result<String, ClipboardError> {
        async_fs::read_to_string(path).await.map_err(|err| match err.kind() {
            ErrorKind::NotFound => ClipboardError::MissingFile(path.to_path_buf()),
            _ => ClipboardError::ReadFailure {
                path: path.to_path_buf(),
                reason: err.to_string(),
            },
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
