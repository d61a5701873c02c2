use fencecopy::reporting::render_tree;
use fencecopy::trie::PathTrie;
use std::path::Path;

#[test]
fn test_tree_groups_files_by_directory() {
    let mut trie = PathTrie::new();
    trie.insert(Path::new("src/main.rs"), 120);
    trie.insert(Path::new("src/lib.rs"), 30);
    trie.insert(Path::new("README.md"), 50);

    assert_eq!(trie.root().total_bytes(), 200);
    assert_eq!(
        render_tree(trie.root()),
        vec![
            "┣━━ README.md (50 bytes)".to_owned(),
            "┗━━ src/ (150 bytes)".to_owned(),
            "     ┣━━ lib.rs (30 bytes)".to_owned(),
            "     ┗━━ main.rs (120 bytes)".to_owned(),
        ]
    );
}

#[test]
fn test_absolute_paths_skip_the_root() {
    let mut trie = PathTrie::new();
    trie.insert(Path::new("/tmp/a.txt"), 7);

    let lines = render_tree(trie.root());
    assert_eq!(lines[0], "┗━━ tmp/ (7 bytes)");
    assert_eq!(lines[1], "     ┗━━ a.txt (7 bytes)");
}
