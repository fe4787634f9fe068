//! Gallery file system layer
//!
//! Provides the pieces of the engine that touch the disk, or pretend to:
//! - FileSystemGateway: the list/stat/copy/remove/rename seam
//! - StdFileSystem: the real implementation over `std::fs`
//! - MemoryFileSystem: an in-process fake for deterministic tests
//! - FileEntry and listing view options (filter and sort)
//! - File name helpers (extension split, padding, conflict-free names)

mod browser;
mod gateway;
mod memory;
mod naming;

pub use browser::{apply_view, list_entries, FileEntry, PathKey, SortBy, SortOrder, ViewOptions};
pub use gateway::{FileSystemGateway, FsMetadata, StdFileSystem};
pub use memory::MemoryFileSystem;
pub use naming::{
    compose_file_name, find_non_conflicting_file_name, is_supported_image, split_file_name,
    validate_base_name, zero_pad, SUPPORTED_IMAGE_EXTENSIONS,
};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Access denied: {0}")]
    AccessDenied(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),
}

impl FsError {
    /// Classify an I/O error raised while operating on `path`
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::AccessDenied(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, FsError>;
