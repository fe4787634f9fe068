//! Directory listing, file entries, and view ordering

use crate::{FileSystemGateway, FsMetadata, Result};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// File entry with metadata
///
/// Identity is the path: two entries for the same path compare equal and
/// hash the same even when their metadata was captured at different times.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    /// Seconds since the Unix epoch
    pub modified: Option<i64>,
    /// Lower-cased extension, empty when there is none
    pub extension: String,
}

impl FileEntry {
    /// Build an entry from a path and the metadata the gateway reported for it
    pub fn from_metadata<P: Into<PathBuf>>(path: P, metadata: &FsMetadata) -> Self {
        let path = path.into();

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Self {
            path,
            name,
            is_dir: metadata.is_dir,
            size: metadata.size,
            modified: metadata.modified,
            extension,
        }
    }

    /// Stat `path` through the gateway and build an entry
    pub fn from_path<P: AsRef<Path>>(fs: &dyn FileSystemGateway, path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs.stat(path)?;
        Ok(Self::from_metadata(path, &metadata))
    }

    /// Check if this is a supported image file
    pub fn is_image(&self) -> bool {
        !self.is_dir && crate::SUPPORTED_IMAGE_EXTENSIONS.contains(&self.extension.as_str())
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

impl PartialEq for FileEntry {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FileEntry {}

impl Hash for FileEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl AsRef<FileEntry> for FileEntry {
    fn as_ref(&self) -> &FileEntry {
        self
    }
}

/// Anything that can be keyed by its absolute path
pub trait PathKey {
    fn path_key(&self) -> &Path;
}

impl PathKey for FileEntry {
    fn path_key(&self) -> &Path {
        &self.path
    }
}

impl PathKey for PathBuf {
    fn path_key(&self) -> &Path {
        self
    }
}

impl PathKey for &Path {
    fn path_key(&self) -> &Path {
        self
    }
}

/// List the direct children of `dir` as entries, in gateway order
///
/// Children that vanish or cannot be stat-ed between listing and stat are skipped.
pub fn list_entries(fs: &dyn FileSystemGateway, dir: &Path) -> Result<Vec<FileEntry>> {
    let children = fs.list(dir)?;
    let mut entries = Vec::with_capacity(children.len());

    for child in children {
        match fs.stat(&child) {
            Ok(metadata) => entries.push(FileEntry::from_metadata(child, &metadata)),
            Err(e) => {
                tracing::debug!("Skipping {}: {}", child.display(), e);
            }
        }
    }

    Ok(entries)
}

/// Sort key for the visible listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "size")]
    Size,
    #[serde(rename = "modified")]
    Modified,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// How the presentation layer wants a listing filtered and ordered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Case-insensitive substring matched against the display name
    pub filter: String,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl ViewOptions {
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = filter.to_string();
        self
    }

    pub fn sorted(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }
}

/// Filter and sort entries into the visible display order
///
/// Directories stay ahead of files. The sort is stable, so entries that
/// compare equal keep their listing order.
pub fn apply_view<T: AsRef<FileEntry>>(entries: Vec<T>, options: &ViewOptions) -> Vec<T> {
    let needle = options.filter.to_lowercase();

    let mut visible: Vec<T> = entries
        .into_iter()
        .filter(|e| needle.is_empty() || e.as_ref().name.to_lowercase().contains(&needle))
        .collect();

    visible.sort_by(|a, b| {
        let (a, b) = (a.as_ref(), b.as_ref());

        // Directories always come first
        if a.is_dir != b.is_dir {
            return if a.is_dir {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Greater
            };
        }

        let cmp = match options.sort_by {
            SortBy::Name => natural_sort_key(&a.name).cmp(&natural_sort_key(&b.name)),
            SortBy::Size => a.size.cmp(&b.size),
            SortBy::Modified => a.modified.cmp(&b.modified),
        };

        match options.sort_order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });

    visible
}

/// Generate a natural sort key (handles numbers correctly)
/// "image2.jpg" < "image10.jpg"
fn natural_sort_key(s: &str) -> Vec<NaturalSortPart> {
    let mut parts = Vec::new();
    let mut current_num = String::new();
    let mut current_str = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            if !current_str.is_empty() {
                parts.push(NaturalSortPart::Str(current_str.to_lowercase()));
                current_str.clear();
            }
            current_num.push(c);
        } else {
            if !current_num.is_empty() {
                parts.push(NaturalSortPart::from_digits(&current_num));
                current_num.clear();
            }
            current_str.push(c);
        }
    }

    if !current_num.is_empty() {
        parts.push(NaturalSortPart::from_digits(&current_num));
    }
    if !current_str.is_empty() {
        parts.push(NaturalSortPart::Str(current_str.to_lowercase()));
    }

    parts
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum NaturalSortPart {
    Num(u64),
    Str(String),
}

impl NaturalSortPart {
    fn from_digits(digits: &str) -> Self {
        // Runs too long for u64 fall back to text comparison
        digits
            .parse::<u64>()
            .map(NaturalSortPart::Num)
            .unwrap_or_else(|_| NaturalSortPart::Str(digits.to_string()))
    }
}
