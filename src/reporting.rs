use crate::copy::OperationResult;
use crate::trie::{PathTrie, TrieNode};
use tracing::{info, warn};

/// Logs a tree of the copied files with their sizes, then any failures.
pub fn print_stats(result: &OperationResult) {
    let mut trie = PathTrie::new();
    for file in &result.copied {
        trie.insert(&file.path, file.bytes);
    }

    if !result.copied.is_empty() {
        info!("Overall ({} bytes)", trie.root().total_bytes());
        for line in render_tree(trie.root()) {
            info!("{}", line);
        }
    }

    for failure in &result.failures {
        warn!("Skipped {}: {}", failure.path.display(), failure.reason);
    }
}

/// Renders the trie as indented lines, directories before their files.
pub fn render_tree(root: &TrieNode) -> Vec<String> {
    let mut lines = Vec::new();
    render_children(root, "", &mut lines);
    lines
}

fn render_children(node: &TrieNode, prefix: &str, lines: &mut Vec<String>) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "┗━━" } else { "┣━━" };

        match child.bytes {
            Some(bytes) if child.children.is_empty() => {
                lines.push(format!("{prefix}{connector} {name} ({bytes} bytes)"));
            }
            _ => {
                lines.push(format!(
                    "{prefix}{connector} {name}/ ({} bytes)",
                    child.total_bytes()
                ));
                let child_prefix = format!("{prefix}{}    ", if is_last { " " } else { "┃" });
                render_children(child, &child_prefix, lines);
            }
        }
    }
}
