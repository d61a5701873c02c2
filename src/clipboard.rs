use crate::errors::ClipboardError;
use arboard::{Clipboard, Error as ArboardError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::task;
use tracing::{debug, trace};

/// Text access to a clipboard, injected into the copy pipeline.
#[async_trait]
pub trait ClipboardAccess: Send + Sync {
    /// Current clipboard text, `None` when the clipboard holds no text.
    async fn get_text(&self) -> Result<Option<String>, ClipboardError>;

    async fn set_text(&self, text: String) -> Result<(), ClipboardError>;
}

/// The platform clipboard via arboard.
///
/// Each call opens its own arboard handle on the blocking pool, since the
/// handle is not `Send` on every platform.
#[derive(Debug, Clone, Copy)]
pub struct SystemClipboard {
    _private: (),
}

impl SystemClipboard {
    /// Checks that a clipboard can be opened at all.
    pub fn new() -> Result<Self, ClipboardError> {
        debug!("Initializing clipboard");
        open_clipboard()?;
        Ok(SystemClipboard { _private: () })
    }
}

fn open_clipboard() -> Result<Clipboard, ClipboardError> {
    Clipboard::new().map_err(|e| ClipboardError::ClipboardInitError(e.to_string()))
}

#[async_trait]
impl ClipboardAccess for SystemClipboard {
    async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        task::spawn_blocking(|| {
            let mut clipboard = open_clipboard()?;
            match clipboard.get_text() {
                Ok(text) => Ok(Some(text)),
                Err(ArboardError::ContentNotAvailable) => Ok(None),
                Err(e) => Err(ClipboardError::ClipboardReadError(e.to_string())),
            }
        })
        .await
        .map_err(|e| ClipboardError::ClipboardReadError(e.to_string()))?
    }

    async fn set_text(&self, text: String) -> Result<(), ClipboardError> {
        trace!("Writing {} bytes to clipboard", text.len());
        task::spawn_blocking(move || {
            open_clipboard()?
                .set_text(text)
                .map_err(|e| ClipboardError::ClipboardWriteError(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::ClipboardWriteError(e.to_string()))?
    }
}

/// A process-local clipboard, used for dry runs and in tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        MemoryClipboard {
            text: Mutex::new(Some(text.into())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.text.lock().ok().and_then(|text| text.clone())
    }
}

#[async_trait]
impl ClipboardAccess for MemoryClipboard {
    async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        self.text
            .lock()
            .map(|text| text.clone())
            .map_err(|e| ClipboardError::ClipboardReadError(e.to_string()))
    }

    async fn set_text(&self, text: String) -> Result<(), ClipboardError> {
        let mut current = self
            .text
            .lock()
            .map_err(|e| ClipboardError::ClipboardWriteError(e.to_string()))?;
        *current = Some(text);
        Ok(())
    }
}

#[async_trait]
impl<C: ClipboardAccess + ?Sized> ClipboardAccess for Arc<C> {
    async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        (**self).get_text().await
    }

    async fn set_text(&self, text: String) -> Result<(), ClipboardError> {
        (**self).set_text(text).await
    }
}
