use crate::errors::ClipboardError;
use crate::files::FileSource;
use crate::resolver::resolve_reference;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use url::Url;

/// Extension of files whose content is itself a manifest.
pub const MANIFEST_EXTENSION: &str = "fl";

const COMMENT_PREFIX: char = '#';

/// Splits manifest text into references and keeps those naming existing files.
pub struct ManifestParser<'a, F: FileSource> {
    files: &'a F,
}

impl<'a, F: FileSource> ManifestParser<'a, F> {
    pub fn new(files: &'a F) -> Self {
        ManifestParser { files }
    }

    /// Returns the existing files referenced by `text`, in input order.
    ///
    /// Blank lines, `#` comments, unresolvable references and paths that
    /// don't exist are dropped without error.
    pub fn parse(&self, text: &str) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for line in text.split(&['\r', '\n'][..]).filter(|s| !s.is_empty()) {
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                trace!("Skipping manifest line: {:?}", line);
                continue;
            }

            let path = match resolve_reference(line) {
                Ok(path) => path,
                Err(e) => {
                    debug!("Skipping unresolvable reference {:?}: {}", line, e);
                    continue;
                }
            };

            if self.files.exists(&path) {
                paths.push(path);
            } else {
                debug!("Skipping missing file: {}", path.display());
            }
        }
        debug!("Manifest resolved to {} file(s)", paths.len());
        paths
    }
}

/// What happened when items were dropped onto the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// A manifest file replaced the staged text.
    Loaded,
    /// At least one file was appended as a reference line.
    Added,
    /// None of the items was a regular file.
    NoValidFiles,
}

/// Manifest text being put together before it is processed.
#[derive(Debug, Default, Clone)]
pub struct ManifestBuffer {
    text: String,
}

impl ManifestBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Stages dropped items: `.fl` files replace the text with their
    /// content, any other file is appended as a `file://` reference.
    /// The outcome reflects the last item handled.
    pub async fn stage_items<F: FileSource>(
        &mut self,
        items: &[PathBuf],
        files: &F,
    ) -> Result<StageOutcome, ClipboardError> {
        let file_items: Vec<&PathBuf> = items.iter().filter(|p| files.exists(p)).collect();
        if file_items.is_empty() {
            return Ok(StageOutcome::NoValidFiles);
        }

        let mut outcome = StageOutcome::Added;
        for path in file_items {
            if is_manifest_file(path) {
                debug!("Loading manifest file: {}", path.display());
                self.text = files.read_all_text(path).await?;
                outcome = StageOutcome::Loaded;
            } else {
                trace!("Adding file to manifest: {}", path.display());
                if !self.text.is_empty() {
                    self.text.push('\n');
                }
                self.text.push_str(&file_reference(path));
                outcome = StageOutcome::Added;
            }
        }
        Ok(outcome)
    }
}

pub fn is_manifest_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MANIFEST_EXTENSION))
}

fn file_reference(path: &Path) -> String {
    Url::from_file_path(path)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| path.display().to_string())
}
