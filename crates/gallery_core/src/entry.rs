//! Image entries handed to the presentation layer

use crate::Thumbnail;
use gallery_fs::{FileEntry, PathKey};
use std::path::Path;
use std::sync::Arc;

/// A [`FileEntry`] with a supported image extension
///
/// Carries the cached thumbnail when one was ready at the time the entry
/// was built. Identity is the path, like the entry it wraps.
#[derive(Debug, Clone)]
pub struct ImageEntry {
    pub entry: FileEntry,
    pub thumbnail: Option<Arc<Thumbnail>>,
}

impl ImageEntry {
    /// Wrap `entry` if it is a supported image file
    pub fn new(entry: FileEntry) -> Option<Self> {
        entry.is_image().then_some(Self {
            entry,
            thumbnail: None,
        })
    }

    pub fn with_thumbnail(mut self, thumbnail: Arc<Thumbnail>) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    pub fn path(&self) -> &Path {
        &self.entry.path
    }

    pub fn name(&self) -> &str {
        &self.entry.name
    }

    pub fn size(&self) -> u64 {
        self.entry.size
    }
}

impl PartialEq for ImageEntry {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry
    }
}

impl Eq for ImageEntry {}

impl std::hash::Hash for ImageEntry {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.entry.hash(state);
    }
}

impl AsRef<FileEntry> for ImageEntry {
    fn as_ref(&self) -> &FileEntry {
        &self.entry
    }
}

impl PathKey for ImageEntry {
    fn path_key(&self) -> &Path {
        &self.entry.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_fs::FsMetadata;

    fn file(path: &str, size: u64) -> FileEntry {
        FileEntry::from_metadata(
            path,
            &FsMetadata {
                size,
                modified: None,
                is_dir: false,
            },
        )
    }

    #[test]
    fn test_only_images_are_wrapped() {
        assert!(ImageEntry::new(file("/p/a.JPG", 1)).is_some());
        assert!(ImageEntry::new(file("/p/c.txt", 1)).is_none());
    }

    #[test]
    fn test_identity_ignores_thumbnail() {
        let plain = ImageEntry::new(file("/p/a.png", 1)).unwrap();
        let thumb = Arc::new(Thumbnail {
            width: 1,
            height: 1,
            rgba: vec![0; 4],
        });
        let decorated = plain.clone().with_thumbnail(thumb);

        assert_eq!(plain, decorated);
        assert_eq!(decorated.path_key(), Path::new("/p/a.png"));
    }
}
