//! In-process clipboard holding file references for paste

use gallery_fs::FileEntry;
use std::collections::HashSet;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;

/// Immutable list of entries captured at copy time
///
/// Entries are not re-checked here; paste re-validates each path when it runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnapshot(Arc<[FileEntry]>);

impl ClipboardSnapshot {
    pub fn paths(&self) -> Vec<PathBuf> {
        self.0.iter().map(|e| e.path.clone()).collect()
    }
}

impl Deref for ClipboardSnapshot {
    type Target = [FileEntry];

    fn deref(&self) -> &[FileEntry] {
        &self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClipboardStore {
    snapshot: ClipboardSnapshot,
}

impl ClipboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents; repeated paths keep their first position
    pub fn copy<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = FileEntry>,
    {
        let mut seen = HashSet::new();
        let unique: Vec<FileEntry> = entries
            .into_iter()
            .filter(|e| seen.insert(e.path.clone()))
            .collect();

        tracing::debug!("Clipboard holds {} entries", unique.len());
        self.snapshot = ClipboardSnapshot(unique.into());
    }

    /// Shares storage with the store; later copies do not affect it
    pub fn contents(&self) -> ClipboardSnapshot {
        self.snapshot.clone()
    }

    pub fn has_contents(&self) -> bool {
        !self.snapshot.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshot = ClipboardSnapshot::default();
    }
}
