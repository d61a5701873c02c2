use fencecopy::formatter::format_as_markdown;
use std::path::Path;

#[test]
fn test_full_path_identifier_and_trailing_trim() {
    let block = format_as_markdown(" x \n", Path::new("/p/q.go"), true);
    assert_eq!(block, "```/p/q.go\n x\n```\n");
}

#[test]
fn test_extension_identifier() {
    let block = format_as_markdown("package q", Path::new("/p/q.go"), false);
    assert_eq!(block, "```.go\npackage q\n```\n");
}

#[test]
fn test_missing_extension_gives_empty_identifier() {
    assert_eq!(
        format_as_markdown("all:\n\ttrue\n", Path::new("/p/Makefile"), false),
        "```\nall:\n\ttrue\n```\n"
    );
    assert_eq!(
        format_as_markdown("x", Path::new("/p/trailing."), false),
        "```\nx\n```\n"
    );
}

#[test]
fn test_only_last_extension_is_used() {
    let block = format_as_markdown("data", Path::new("archive.tar.gz"), false);
    assert_eq!(block, "```.gz\ndata\n```\n");
}

#[test]
fn test_trailing_blank_lines_removed_leading_kept() {
    let block = format_as_markdown("\n\n  fn main() {}\r\n\r\n\t", Path::new("main.rs"), true);
    assert_eq!(block, "```main.rs\n\n\n  fn main() {}\n```\n");
}

#[test]
fn test_backticks_in_content_are_not_escaped() {
    let content = "Example:\n```rust\nlet x = 1;\n```\n";
    let block = format_as_markdown(content, Path::new("README.md"), false);
    assert_eq!(block, "```.md\nExample:\n```rust\nlet x = 1;\n```\n```\n");
}
