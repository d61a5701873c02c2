use crate::clipboard::ClipboardAccess;
use crate::config::ClipboardCopierConfig;
use crate::copy::{BasicClipboardCopier, ClipboardCopier, OperationResult, Outcome};
use crate::files::FileSource;
use crate::manifest::{ManifestBuffer, StageOutcome};
use crate::recent::RecentFilesTracker;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

pub const INITIAL_STATUS: &str = "Drop files here to copy their contents";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    Idle,
    Busy,
}

/// A unit of work that runs with the session marked busy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchRequest {
    /// Copy dropped or listed files straight to the clipboard.
    CopyFiles(Vec<PathBuf>),
    /// Copy every file referenced by the staged manifest text.
    ProcessManifest,
    /// Copy one file from the recent list again.
    CopyRecent(PathBuf),
    /// Add dropped items to the staged manifest text.
    StageItems(Vec<PathBuf>),
}

/// State that outlives a single batch: toggles, status and history.
pub struct CopySession<C, F> {
    copier: BasicClipboardCopier<C, F>,
    config: ClipboardCopierConfig,
    recent: RecentFilesTracker,
    manifest: ManifestBuffer,
    status: String,
    files_copied: usize,
}

impl<C: ClipboardAccess, F: FileSource> CopySession<C, F> {
    pub fn new(copier: BasicClipboardCopier<C, F>, config: ClipboardCopierConfig) -> Self {
        CopySession {
            copier,
            config,
            recent: RecentFilesTracker::new(),
            manifest: ManifestBuffer::new(),
            status: INITIAL_STATUS.to_owned(),
            files_copied: 0,
        }
    }

    pub async fn run(&mut self, request: BatchRequest) -> OperationResult {
        debug!("Running batch: {:?}", request);
        let result = match request {
            BatchRequest::CopyFiles(files) => {
                let result = self.copier.copy_files(&files, self.config).await;
                self.record_copied(&result);
                result
            }
            BatchRequest::ProcessManifest => {
                let result = self
                    .copier
                    .copy_manifest(self.manifest.text(), self.config)
                    .await;
                self.record_copied(&result);
                result
            }
            BatchRequest::CopyRecent(path) => self.copier.copy_file(&path, self.config).await,
            BatchRequest::StageItems(items) => self.stage_items(&items).await,
        };

        self.status = result.status.clone();
        self.files_copied = result.files_copied;
        info!("{}", result.status);
        result
    }

    async fn stage_items(&mut self, items: &[PathBuf]) -> OperationResult {
        match self.manifest.stage_items(items, self.copier.files()).await {
            Ok(StageOutcome::Loaded) => OperationResult::new(Outcome::Staged, "File list loaded"),
            Ok(StageOutcome::Added) => OperationResult::new(Outcome::Staged, "File added to list"),
            Ok(StageOutcome::NoValidFiles) => {
                OperationResult::new(Outcome::NoValidFiles, "No valid files found")
            }
            Err(e) => OperationResult::new(
                Outcome::ReadFailed,
                format!("Failed to process file list: {e}"),
            ),
        }
    }

    fn record_copied(&mut self, result: &OperationResult) {
        if !result.is_copied() {
            return;
        }
        for file in &result.copied {
            self.recent.record(&file.path);
        }
    }

    pub fn clear_recent(&mut self) {
        self.recent.clear();
        self.status = "Recent files cleared".to_owned();
    }

    pub fn clear_manifest(&mut self) {
        self.manifest.clear();
        self.status = "File list cleared".to_owned();
    }

    pub fn set_include_full_path(&mut self, enabled: bool) {
        self.config.include_full_path = enabled;
    }

    pub fn set_append_to_clipboard(&mut self, enabled: bool) {
        self.config.append_to_clipboard = enabled;
    }

    pub fn config(&self) -> ClipboardCopierConfig {
        self.config
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn files_copied(&self) -> usize {
        self.files_copied
    }

    pub fn recent(&self) -> &RecentFilesTracker {
        &self.recent
    }

    pub fn manifest(&self) -> &ManifestBuffer {
        &self.manifest
    }

    pub fn manifest_mut(&mut self) -> &mut ManifestBuffer {
        &mut self.manifest
    }

    pub fn copier(&self) -> &BasicClipboardCopier<C, F> {
        &self.copier
    }
}

/// Shared handle that runs at most one batch at a time.
///
/// A batch submitted while another is in flight is dropped, not queued.
pub struct SessionHandle<C, F> {
    session: Arc<Mutex<CopySession<C, F>>>,
    busy: Arc<AtomicBool>,
}

impl<C, F> Clone for SessionHandle<C, F> {
    fn clone(&self) -> Self {
        SessionHandle {
            session: Arc::clone(&self.session),
            busy: Arc::clone(&self.busy),
        }
    }
}

impl<C: ClipboardAccess, F: FileSource> SessionHandle<C, F> {
    pub fn new(session: CopySession<C, F>) -> Self {
        SessionHandle {
            session: Arc::new(Mutex::new(session)),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn phase(&self) -> BatchPhase {
        if self.busy.load(Ordering::Acquire) {
            BatchPhase::Busy
        } else {
            BatchPhase::Idle
        }
    }

    /// Runs `request`, or returns `None` when a batch is already running.
    pub async fn submit(&self, request: BatchRequest) -> Option<OperationResult> {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            debug!("Batch already in flight, ignoring {:?}", request);
            return None;
        };
        let mut session = self.session.lock().await;
        Some(session.run(request).await)
    }

    /// Locks the session for commands that are not batches.
    pub async fn lock(&self) -> MutexGuard<'_, CopySession<C, F>> {
        self.session.lock().await
    }
}

struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
