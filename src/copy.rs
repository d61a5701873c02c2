use crate::assembler::assemble_payload;
use crate::clipboard::{ClipboardAccess, SystemClipboard};
use crate::config::ClipboardCopierConfig;
use crate::errors::ClipboardError;
use crate::files::{FileSource, LocalFiles};
use crate::formatter::format_as_markdown;
use crate::manifest::ManifestParser;
use crate::utils::expand_references;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// How a batch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Copied,
    NoValidFiles,
    EmptyManifest,
    NothingToCopy,
    MissingFile,
    ReadFailed,
    ClipboardFailed,
    Staged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedFile {
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one batch: what was copied and what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub outcome: Outcome,
    pub files_copied: usize,
    pub status: String,
    pub payload: Option<String>,
    pub copied: Vec<CopiedFile>,
    pub failures: Vec<FileFailure>,
}

impl OperationResult {
    pub fn new(outcome: Outcome, status: impl Into<String>) -> Self {
        OperationResult {
            outcome,
            files_copied: 0,
            status: status.into(),
            payload: None,
            copied: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn is_copied(&self) -> bool {
        self.outcome == Outcome::Copied
    }

    fn with_failures(mut self, failures: Vec<FileFailure>) -> Self {
        for failure in &failures {
            self.status.push_str("; ");
            self.status.push_str(&failure.reason);
        }
        self.failures = failures;
        self
    }
}

#[async_trait]
pub trait ClipboardCopier: Send + Sync {
    /// Copies directly supplied files, skipping duplicates and empty files.
    async fn copy_files(&self, files: &[PathBuf], config: ClipboardCopierConfig)
        -> OperationResult;

    /// Copies every existing file referenced by manifest text.
    async fn copy_manifest(&self, manifest: &str, config: ClipboardCopierConfig)
        -> OperationResult;

    /// Copies a single file, always replacing the clipboard.
    async fn copy_file(&self, file: &Path, config: ClipboardCopierConfig) -> OperationResult;
}

pub struct BasicClipboardCopier<C, F> {
    clipboard: C,
    files: F,
}

impl<C: ClipboardAccess, F: FileSource> BasicClipboardCopier<C, F> {
    pub fn new(clipboard: C, files: F) -> Self {
        BasicClipboardCopier { clipboard, files }
    }

    pub fn files(&self) -> &F {
        &self.files
    }

    async fn copy_paths(
        &self,
        paths: Vec<PathBuf>,
        config: ClipboardCopierConfig,
    ) -> OperationResult {
        let mut blocks = Vec::new();
        let mut copied = Vec::new();
        let mut failures = Vec::new();

        for path in paths {
            debug!("Processing file: {}", path.display());
            match self.files.read_all_text(&path).await {
                Ok(content) if content.is_empty() => {
                    debug!("Skipping empty file: {}", path.display());
                }
                Ok(content) => {
                    blocks.push(format_as_markdown(&content, &path, config.include_full_path));
                    trace!("Formatted content for file: {}", path.display());
                    copied.push(CopiedFile {
                        path,
                        bytes: content.len(),
                    });
                }
                Err(e) => {
                    warn!("Failed to read file {}: {}", path.display(), e);
                    failures.push(FileFailure {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if blocks.is_empty() {
            return nothing_to_copy(failures);
        }

        let prior = if config.append_to_clipboard {
            self.read_prior_text().await
        } else {
            None
        };

        // `blocks` is non-empty here, so the assembler always yields a payload.
        let payload = assemble_payload(&blocks, prior.as_deref(), config.append_to_clipboard)
            .unwrap_or_default();
        trace!("Final content length: {}", payload.len());

        if let Err(e) = self.clipboard.set_text(payload.clone()).await {
            warn!("Failed to write clipboard: {}", e);
            let mut result =
                OperationResult::new(Outcome::ClipboardFailed, format!("Copy failed: {e}"))
                    .with_failures(failures);
            result.payload = Some(payload);
            return result;
        }

        info!("{} file(s) copied to clipboard.", copied.len());
        let mut result = OperationResult::new(
            Outcome::Copied,
            format!("Copied {} file(s) to clipboard", copied.len()),
        )
        .with_failures(failures);
        result.files_copied = copied.len();
        result.copied = copied;
        result.payload = Some(payload);
        result
    }

    async fn read_prior_text(&self) -> Option<String> {
        match self.clipboard.get_text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not read existing clipboard text, replacing it: {}", e);
                None
            }
        }
    }
}

fn nothing_to_copy(failures: Vec<FileFailure>) -> OperationResult {
    OperationResult::new(Outcome::NothingToCopy, ClipboardError::EmptyResult.to_string())
        .with_failures(failures)
}

#[async_trait]
impl<C: ClipboardAccess, F: FileSource> ClipboardCopier for BasicClipboardCopier<C, F> {
    async fn copy_files(
        &self,
        files: &[PathBuf],
        config: ClipboardCopierConfig,
    ) -> OperationResult {
        if files.is_empty() {
            return OperationResult::new(Outcome::NoValidFiles, "No valid files found");
        }

        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(files.len());
        for path in files {
            if seen.insert(path.as_path()) {
                unique.push(path.clone());
            }
        }
        if unique.len() < files.len() {
            debug!("Dropped {} duplicate path(s)", files.len() - unique.len());
        }

        self.copy_paths(unique, config).await
    }

    async fn copy_manifest(
        &self,
        manifest: &str,
        config: ClipboardCopierConfig,
    ) -> OperationResult {
        if manifest.trim().is_empty() {
            return OperationResult::new(Outcome::EmptyManifest, "File list is empty");
        }

        let paths = ManifestParser::new(&self.files).parse(manifest);
        if paths.is_empty() {
            return OperationResult::new(Outcome::NoValidFiles, "No valid files found");
        }

        self.copy_paths(paths, config).await
    }

    async fn copy_file(&self, file: &Path, config: ClipboardCopierConfig) -> OperationResult {
        if !self.files.exists(file) {
            return OperationResult::new(Outcome::MissingFile, "File does not exist");
        }

        let content = match self.files.read_all_text(file).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read file {}: {}", file.display(), e);
                return OperationResult::new(Outcome::ReadFailed, format!("Copy failed: {e}"));
            }
        };

        let payload = format_as_markdown(&content, file, config.include_full_path);
        if let Err(e) = self.clipboard.set_text(payload.clone()).await {
            warn!("Failed to write clipboard: {}", e);
            let mut result =
                OperationResult::new(Outcome::ClipboardFailed, format!("Copy failed: {e}"));
            result.payload = Some(payload);
            return result;
        }

        let name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        let mut result = OperationResult::new(
            Outcome::Copied,
            format!("Copied file content to clipboard: {name}"),
        );
        result.files_copied = 1;
        result.copied = vec![CopiedFile {
            path: file.to_path_buf(),
            bytes: content.len(),
        }];
        result.payload = Some(payload);
        result
    }
}

/// Copies the files named by `references` to the system clipboard.
pub async fn copy_files_to_clipboard(
    config: ClipboardCopierConfig,
    references: Vec<String>,
) -> Result<OperationResult, ClipboardError> {
    debug!("Expanding file references");
    let files = expand_references(&references)?;
    let copier = BasicClipboardCopier::new(SystemClipboard::new()?, LocalFiles);
    Ok(copier.copy_files(&files, config).await)
}
