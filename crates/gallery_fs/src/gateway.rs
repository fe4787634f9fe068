//! File system gateway - the seam between the engine and the disk

use crate::{FsError, Result};
use std::path::{Path, PathBuf};

/// Metadata returned by [`FileSystemGateway::stat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsMetadata {
    pub size: u64,
    /// Last modification time in seconds since the Unix epoch
    pub modified: Option<i64>,
    pub is_dir: bool,
}

/// Thin abstraction over the file system calls the engine needs
///
/// Implementations must be callable from worker threads. Paths handed in are
/// absolute; `list` returns absolute child paths in the order the underlying
/// file system yields them.
pub trait FileSystemGateway: Send + Sync {
    /// List the direct children of a directory
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Size, modification time and directory flag of a path
    fn stat(&self, path: &Path) -> Result<FsMetadata>;

    /// Remove a file, or a directory with all its contents
    fn remove(&self, path: &Path) -> Result<()>;

    /// Rename `from` to `to`. Fails with [`FsError::AlreadyExists`] instead of replacing `to`.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    /// Copy a file (or a directory recursively) to `to`
    fn copy(&self, from: &Path, to: &Path) -> Result<()>;

    /// Read the whole file
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    fn exists(&self, path: &Path) -> bool {
        self.stat(path).is_ok()
    }

    /// Whether `a` and `b` resolve to the same file, e.g. two spellings of
    /// one name on a case-insensitive file system
    fn same_file(&self, a: &Path, b: &Path) -> bool {
        a == b
    }
}

/// Gateway backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystemGateway for StdFileSystem {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let read_dir = std::fs::read_dir(dir).map_err(|e| FsError::from_io(e, dir))?;

        let mut children = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(entry) => children.push(entry.path()),
                Err(e) => {
                    // Skip entries we can't read
                    tracing::debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                }
            }
        }

        Ok(children)
    }

    fn stat(&self, path: &Path) -> Result<FsMetadata> {
        let metadata = std::fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;

        let modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64);

        Ok(FsMetadata {
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            modified,
            is_dir: metadata.is_dir(),
        })
    }

    fn remove(&self, path: &Path) -> Result<()> {
        // symlink_metadata: never follow a link into its target
        let metadata = std::fs::symlink_metadata(path).map_err(|e| FsError::from_io(e, path))?;

        if metadata.is_dir() {
            std::fs::remove_dir_all(path).map_err(|e| FsError::from_io(e, path))?;
        } else {
            std::fs::remove_file(path).map_err(|e| FsError::from_io(e, path))?;
        }

        tracing::debug!("Removed: {}", path.display());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if std::fs::symlink_metadata(from).is_err() {
            return Err(FsError::NotFound(from.to_path_buf()));
        }

        // A case-only rename finds the source itself at `to`
        if std::fs::symlink_metadata(to).is_ok() && !self.same_file(from, to) {
            return Err(FsError::AlreadyExists(to.to_path_buf()));
        }

        std::fs::rename(from, to).map_err(|e| FsError::from_io(e, from))?;
        tracing::debug!("Renamed: {} -> {}", from.display(), to.display());

        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        let metadata = std::fs::metadata(from).map_err(|e| FsError::from_io(e, from))?;

        if metadata.is_dir() {
            copy_dir_recursive(from, to)?;
        } else {
            std::fs::copy(from, to).map_err(|e| FsError::from_io(e, from))?;
        }

        tracing::debug!("Copied: {} -> {}", from.display(), to.display());
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::from_io(e, path))
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        if a == b {
            return true;
        }

        // Only spellings of one name in one directory; hard links stay distinct
        let same_name = match (a.file_name(), b.file_name()) {
            (Some(x), Some(y)) => {
                x.to_string_lossy().to_lowercase() == y.to_string_lossy().to_lowercase()
            }
            _ => false,
        };

        a.parent() == b.parent() && same_name && same_identity(a, b)
    }
}

#[cfg(unix)]
fn same_identity(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (std::fs::symlink_metadata(a), std::fs::symlink_metadata(b)) {
        (Ok(x), Ok(y)) => x.dev() == y.dev() && x.ino() == y.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_identity(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

/// Maximum nesting followed by [`copy_dir_recursive`]; guards against link loops
const MAX_COPY_DEPTH: usize = 64;

/// Recursively copy a directory
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    copy_dir_at_depth(src, dst, 0)
}

fn copy_dir_at_depth(src: &Path, dst: &Path, depth: usize) -> Result<()> {
    if depth > MAX_COPY_DEPTH {
        return Err(FsError::InvalidPath(format!(
            "maximum copy depth ({MAX_COPY_DEPTH}) exceeded at {}",
            src.display()
        )));
    }

    std::fs::create_dir_all(dst).map_err(|e| FsError::from_io(e, dst))?;

    for entry in std::fs::read_dir(src).map_err(|e| FsError::from_io(e, src))? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_at_depth(&src_path, &dst_path, depth + 1)?;
        } else {
            std::fs::copy(&src_path, &dst_path).map_err(|e| FsError::from_io(e, &src_path))?;
        }
    }

    Ok(())
}
