use fencecopy::recent::{RecentFilesTracker, RECENT_FILES_CAPACITY};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

fn path(i: usize) -> PathBuf {
    PathBuf::from(format!("/work/file{}.rs", i))
}

fn entries(tracker: &RecentFilesTracker) -> Vec<PathBuf> {
    tracker.iter().map(Path::to_path_buf).collect()
}

#[test]
fn test_newest_first() {
    let mut tracker = RecentFilesTracker::new();
    tracker.record(&path(1));
    tracker.record(&path(2));
    tracker.record(&path(3));
    assert_eq!(entries(&tracker), vec![path(3), path(2), path(1)]);
}

#[test]
fn test_duplicate_keeps_its_position() {
    let mut tracker = RecentFilesTracker::new();
    tracker.record(&path(1));
    tracker.record(&path(2));
    assert!(!tracker.record(&path(1)));
    assert_eq!(entries(&tracker), vec![path(2), path(1)]);
}

#[test]
fn test_oldest_entry_evicted_past_capacity() {
    let mut tracker = RecentFilesTracker::new();
    for i in 0..=RECENT_FILES_CAPACITY {
        tracker.record(&path(i));
    }
    assert_eq!(tracker.len(), RECENT_FILES_CAPACITY);
    assert!(!tracker.contains(&path(0)), "Oldest entry should be evicted");
    assert_eq!(tracker.get(0), Some(path(RECENT_FILES_CAPACITY).as_path()));
}

#[test]
fn test_duplicate_on_full_list_evicts_nothing() {
    let mut tracker = RecentFilesTracker::new();
    for i in 0..RECENT_FILES_CAPACITY {
        tracker.record(&path(i));
    }
    let before = entries(&tracker);
    tracker.record(&path(5));
    assert_eq!(entries(&tracker), before);
}

#[test]
fn test_never_exceeds_capacity_or_duplicates() {
    let mut tracker = RecentFilesTracker::new();
    for i in 0..200 {
        tracker.record(&path((i * 7) % 23));
        assert!(tracker.len() <= RECENT_FILES_CAPACITY);
        let unique: HashSet<_> = tracker.iter().collect();
        assert_eq!(unique.len(), tracker.len());
    }
}

#[test]
fn test_clear() {
    let mut tracker = RecentFilesTracker::new();
    tracker.record(&path(1));
    tracker.clear();
    assert!(tracker.is_empty());
    assert!(tracker.get(0).is_none());
}

#[test]
fn test_zero_capacity_records_nothing() {
    let mut tracker = RecentFilesTracker::with_capacity(0);
    assert!(!tracker.record(&path(1)));
    assert!(tracker.is_empty());
}
