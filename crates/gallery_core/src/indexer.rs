//! Directory indexing: subdirectories, image files, aggregate size

use crate::ImageEntry;
use gallery_fs::{list_entries, FileEntry, FileSystemGateway};
use std::path::Path;
use std::sync::Arc;

/// Read-only view of a directory's contents through the gateway
///
/// Listing failures never propagate: an unreadable or non-directory input
/// yields an empty result, logged at debug level.
#[derive(Clone)]
pub struct DirectoryIndexer {
    fs: Arc<dyn FileSystemGateway>,
}

impl DirectoryIndexer {
    pub fn new(fs: Arc<dyn FileSystemGateway>) -> Self {
        Self { fs }
    }

    /// Direct children that are directories, in listing order
    pub fn list_subdirectories(&self, dir: &Path) -> Vec<FileEntry> {
        self.entries(dir).into_iter().filter(|e| e.is_dir).collect()
    }

    /// Direct children with a supported image extension, in listing order
    pub fn list_image_files(&self, dir: &Path) -> Vec<ImageEntry> {
        self.entries(dir)
            .into_iter()
            .filter_map(ImageEntry::new)
            .collect()
    }

    fn entries(&self, dir: &Path) -> Vec<FileEntry> {
        match list_entries(self.fs.as_ref(), dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Cannot list {}: {}", dir.display(), e);
                Vec::new()
            }
        }
    }
}

/// Sum of the byte sizes of `entries`
pub fn compute_total_size<T: AsRef<FileEntry>>(entries: &[T]) -> u64 {
    entries.iter().map(|e| e.as_ref().size).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_fs::MemoryFileSystem;

    fn indexer() -> DirectoryIndexer {
        let fs = MemoryFileSystem::new();
        fs.add_file("/album/a.jpg", vec![0u8; 10])
            .add_file("/album/b.png", vec![0u8; 20])
            .add_file("/album/c.txt", vec![0u8; 40])
            .add_file("/album/D.GIF", vec![0u8; 5])
            .add_dir("/album/notes")
            .add_dir("/album/notes.jpg");
        DirectoryIndexer::new(Arc::new(fs))
    }

    #[test]
    fn test_list_subdirectories() {
        let dirs = indexer().list_subdirectories(Path::new("/album"));
        let names: Vec<_> = dirs.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["notes", "notes.jpg"]);
    }

    #[test]
    fn test_list_image_files_excludes_other_files_and_dirs() {
        let images = indexer().list_image_files(Path::new("/album"));
        let names: Vec<_> = images.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["D.GIF", "a.jpg", "b.png"]);
    }

    #[test]
    fn test_unreadable_input_is_empty() {
        let idx = indexer();
        assert!(idx.list_subdirectories(Path::new("/missing")).is_empty());
        assert!(idx.list_image_files(Path::new("/album/a.jpg")).is_empty());
    }

    #[test]
    fn test_compute_total_size() {
        let idx = indexer();
        let images = idx.list_image_files(Path::new("/album"));
        assert_eq!(compute_total_size(&images), 35);
        assert_eq!(compute_total_size::<FileEntry>(&[]), 0);
    }
}
