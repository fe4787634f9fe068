//! Engine notifications
//!
//! Completion of every background unit of work is announced on an
//! [`EventBus`]. Listing results carry the [`DirectoryTag`] they were
//! produced for so consumers can drop results for a directory that is no
//! longer active.

use crate::{ImageEntry, Thumbnail};
use crossbeam_channel::{unbounded, Receiver, Sender};
use gallery_fs::FileEntry;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

/// Identifies one directory selection
///
/// The generation grows with every selection, so re-selecting the same
/// directory still yields a fresh tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryTag {
    pub path: PathBuf,
    pub generation: u64,
}

/// Result of indexing one directory
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    pub tag: DirectoryTag,
    pub subdirectories: Vec<FileEntry>,
    pub images: Vec<ImageEntry>,
    pub total_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Delete,
    Copy,
    Rename,
    BatchRename,
}

#[derive(Debug, Clone)]
pub enum EngineEvent {
    ListingReady(DirectoryListing),
    ThumbnailReady {
        path: PathBuf,
        thumbnail: Arc<Thumbnail>,
    },
    ThumbnailFailed {
        path: PathBuf,
        reason: String,
    },
    /// A file operation finished; `directories` should be re-indexed
    OperationFinished {
        kind: OperationKind,
        directories: Vec<PathBuf>,
        all_succeeded: bool,
        failed: Vec<PathBuf>,
    },
}

/// Fan-out of [`EngineEvent`]s to any number of subscribers
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Sender<EngineEvent>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber; it sees every event emitted from now on
    pub fn subscribe(&self) -> Receiver<EngineEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Deliver `event` to all live subscribers, dropping disconnected ones
    pub fn emit(&self, event: EngineEvent) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
