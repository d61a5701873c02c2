use std::collections::BTreeMap;
use std::path::{Component, Path};
use tracing::trace;

/// A node in the path trie; leaves carry the size of a copied file.
#[derive(Debug, Default)]
pub struct TrieNode {
    pub children: BTreeMap<String, TrieNode>,
    pub bytes: Option<usize>,
}

impl TrieNode {
    /// Total bytes in this subtree.
    pub fn total_bytes(&self) -> usize {
        self.bytes.unwrap_or(0) + self.children.values().map(TrieNode::total_bytes).sum::<usize>()
    }
}

/// Copied files keyed by path component.
#[derive(Debug, Default)]
pub struct PathTrie {
    root: TrieNode,
}

impl PathTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &Path, bytes: usize) {
        trace!("Inserting path: {:?} ({} bytes)", path, bytes);
        let mut node = &mut self.root;
        for component in path.components() {
            if let Component::RootDir = component {
                continue;
            }
            node = node
                .children
                .entry(component.as_os_str().to_string_lossy().into_owned())
                .or_default();
        }
        node.bytes = Some(bytes);
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}
