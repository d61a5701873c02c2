use fencecopy::errors::ClipboardError;
use fencecopy::resolver::resolve_reference;
use std::path::PathBuf;

#[test]
fn test_plain_path_is_taken_literally() {
    let path = resolve_reference("  src/main.rs \t").unwrap();
    assert_eq!(path, PathBuf::from("src/main.rs"));
}

#[test]
fn test_empty_reference_is_invalid() {
    let result = resolve_reference("   ");
    assert!(
        matches!(result, Err(ClipboardError::InvalidReference(_))),
        "Expected InvalidReference, got {:?}",
        result
    );
}

#[test]
fn test_file_prefix_without_slash_is_a_literal_path() {
    let path = resolve_reference("file:notes.txt").unwrap();
    assert_eq!(path, PathBuf::from("file:notes.txt"));
}

#[cfg(unix)]
#[test]
fn test_triple_slash_uri_decodes_spaces() {
    let path = resolve_reference("file:///a/b%20c.txt").unwrap();
    assert_eq!(path, PathBuf::from("/a/b c.txt"));
}

#[cfg(unix)]
#[test]
fn test_single_slash_uri() {
    let path = resolve_reference("file:/tmp/report%2Dfinal.md").unwrap();
    assert_eq!(path, PathBuf::from("/tmp/report-final.md"));
}

#[cfg(unix)]
#[test]
fn test_localhost_uri_maps_to_local_path() {
    let path = resolve_reference("file://localhost/etc/hosts").unwrap();
    assert_eq!(path, PathBuf::from("/etc/hosts"));
}

#[cfg(unix)]
#[test]
fn test_uri_with_remote_host_falls_back_to_stripping() {
    let path = resolve_reference("file://server/share/a%20b.txt").unwrap();
    assert_eq!(path, PathBuf::from("/server/share/a b.txt"));
}

#[cfg(unix)]
#[test]
fn test_unparseable_uri_falls_back_to_stripping() {
    let path = resolve_reference("file://[broken/a%20b.txt").unwrap();
    assert_eq!(path, PathBuf::from("/[broken/a b.txt"));
}

#[test]
fn test_unparseable_uri_with_bad_encoding_is_invalid() {
    let result = resolve_reference("file://[broken/x%FF");
    assert!(
        matches!(result, Err(ClipboardError::InvalidReference(_))),
        "Expected InvalidReference, got {:?}",
        result
    );
}

#[test]
fn test_resolution_does_not_check_existence() {
    let path = resolve_reference("/definitely/not/here.txt").unwrap();
    assert_eq!(path, PathBuf::from("/definitely/not/here.txt"));
}
