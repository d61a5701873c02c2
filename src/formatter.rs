use std::path::Path;

const FENCE: &str = "```";

/// Wraps `content` in a fenced code block.
///
/// The fence is tagged with the full path when `include_full_path` is set,
/// otherwise with the file extension including its dot (or nothing).
/// Trailing whitespace is trimmed from the content; backticks inside it are
/// left alone.
pub fn format_as_markdown(content: &str, path: &Path, include_full_path: bool) -> String {
    let identifier = if include_full_path {
        path.to_string_lossy().into_owned()
    } else {
        extension_identifier(path)
    };

    format!("{FENCE}{identifier}\n{}\n{FENCE}\n", content.trim_end())
}

fn extension_identifier(path: &Path) -> String {
    match path.extension().map(|ext| ext.to_string_lossy()) {
        Some(ext) if !ext.is_empty() => format!(".{ext}"),
        _ => String::new(),
    }
}
