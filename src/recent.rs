use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::trace;

pub const RECENT_FILES_CAPACITY: usize = 10;

/// Most-recently-used list of copied files, newest first.
#[derive(Debug, Clone)]
pub struct RecentFilesTracker {
    entries: VecDeque<PathBuf>,
    capacity: usize,
}

impl RecentFilesTracker {
    pub fn new() -> Self {
        Self::with_capacity(RECENT_FILES_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RecentFilesTracker {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Puts `path` at the front unless it is already listed.
    ///
    /// A path already in the list keeps its position. The oldest entry is
    /// evicted only to make room for a new one. Returns whether the path was
    /// inserted.
    pub fn record(&mut self, path: &Path) -> bool {
        if self.capacity == 0 || self.contains(path) {
            return false;
        }
        if self.entries.len() >= self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                trace!("Evicting recent file: {}", evicted.display());
            }
        }
        self.entries.push_front(path.to_path_buf());
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.entries.get(index).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RecentFilesTracker {
    fn default() -> Self {
        Self::new()
    }
}
