use crate::errors::ClipboardError;
use crate::resolver::resolve_reference;
use std::path::PathBuf;
use tracing::{debug, warn};

const GLOB_CHARS: &[char] = &['*', '?', '['];

/// Expands command-line references into file paths.
///
/// Each reference is resolved first, so `file:` URIs work everywhere.
/// Directories are walked recursively. A reference is only treated as a
/// glob pattern when no file of that literal name exists, so paths such as
/// `app/[id]/page.tsx` are kept. Anything else is passed through untouched
/// so a missing file is reported when it is read.
pub fn expand_references(references: &[String]) -> Result<Vec<PathBuf>, ClipboardError> {
    let mut files = Vec::new();
    for reference in references {
        let path = resolve_reference(reference)?;

        if path.is_dir() {
            debug!("Walking directory: {}", path.display());
            for entry in walkdir::WalkDir::new(&path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
            continue;
        }

        let pattern = path.to_string_lossy();
        if path.exists() || !pattern.contains(GLOB_CHARS) {
            files.push(path);
            continue;
        }

        let entries = glob::glob(&pattern)
            .map_err(|e| ClipboardError::InvalidReference(format!("{}: {}", reference, e)))?;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Err(e) => warn!("Error processing pattern {}: {:?}", reference, e),
                _ => {}
            }
        }
    }
    Ok(files)
}
