use crate::errors::ClipboardError;
use std::path::PathBuf;
use tracing::{debug, trace};
use url::Url;

/// Prefix shared by the `file:/path` and `file:///path` reference forms.
pub const FILE_URI_PREFIX: &str = "file:/";

/// Turns a textual file reference into a filesystem path.
///
/// Plain text is taken literally. References starting with `file:/` are
/// parsed as URLs and converted to local paths; when the URL is malformed,
/// or names a host we can't map to a local path, the scheme is stripped
/// by hand and the rest percent-decoded. The returned path is not checked
/// for existence.
pub fn resolve_reference(reference: &str) -> Result<PathBuf, ClipboardError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(ClipboardError::InvalidReference(
            "empty reference".to_owned(),
        ));
    }

    if !reference.starts_with(FILE_URI_PREFIX) {
        trace!("Treating reference as literal path: {}", reference);
        return Ok(PathBuf::from(reference));
    }

    match Url::parse(reference).map(|url| url.to_file_path()) {
        Ok(Ok(path)) => {
            trace!("Parsed file URI {} as {:?}", reference, path);
            Ok(path)
        }
        _ => {
            debug!("Falling back to literal file URI stripping for {}", reference);
            strip_file_scheme(reference)
        }
    }
}

fn strip_file_scheme(reference: &str) -> Result<PathBuf, ClipboardError> {
    let rest = reference
        .strip_prefix("file:")
        .unwrap_or(reference)
        .trim_start_matches('/');

    let decoded = urlencoding::decode(rest)
        .map_err(|e| ClipboardError::InvalidReference(format!("{}: {}", reference, e)))?;

    if decoded.is_empty() {
        return Err(ClipboardError::InvalidReference(reference.to_owned()));
    }

    if has_drive_letter(&decoded) {
        Ok(PathBuf::from(decoded.into_owned()))
    } else {
        Ok(PathBuf::from(format!("/{}", decoded)))
    }
}

fn has_drive_letter(path: &str) -> bool {
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic()
    )
}
