//! Engine error types

use std::path::PathBuf;
use thiserror::Error;

/// Main engine error type
#[derive(Error, Debug)]
pub enum AppError {
    // ===== Recoverable Errors (report per file, continue) =====
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Already exists: {}", .0.display())]
    Conflict(PathBuf),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    // ===== Fatal Errors (engine misuse or broken worker) =====
    #[error("Background task failed: {0}")]
    Task(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Is this error recoverable?
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_)
                | AppError::Conflict(_)
                | AppError::Validation(_)
                | AppError::Io(_)
                | AppError::ImageDecode(_)
        )
    }

    /// Is this a fatal error?
    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Get a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(path) => format!("File not found: {}", path.display()),
            AppError::Conflict(path) => format!("A file named {} already exists", file_label(path)),
            AppError::Validation(msg) => format!("Invalid input: {}", msg),
            AppError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                format!("Access denied: {}", e)
            }
            AppError::ImageDecode(msg) => format!("Cannot load image: {}", msg),
            _ => self.to_string(),
        }
    }
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl From<gallery_fs::FsError> for AppError {
    fn from(e: gallery_fs::FsError) -> Self {
        use gallery_fs::FsError;
        use std::io::{Error, ErrorKind};

        match e {
            FsError::NotFound(p) => AppError::NotFound(p),
            FsError::AlreadyExists(p) => AppError::Conflict(p),
            FsError::InvalidName(name) => AppError::Validation(format!("invalid name {:?}", name)),
            FsError::AccessDenied(p) => AppError::Io(Error::new(
                ErrorKind::PermissionDenied,
                p.display().to_string(),
            )),
            FsError::InvalidPath(msg) => AppError::Io(Error::new(ErrorKind::InvalidInput, msg)),
            FsError::Io(e) => AppError::Io(e),
        }
    }
}

impl From<image::ImageError> for AppError {
    fn from(e: image::ImageError) -> Self {
        AppError::ImageDecode(e.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        if e.is_panic() {
            AppError::Task("worker panicked".to_string())
        } else {
            AppError::Task(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_fs::FsError;

    #[test]
    fn test_fs_errors_map_to_engine_kinds() {
        let p = PathBuf::from("/photos/a.jpg");

        assert!(matches!(AppError::from(FsError::NotFound(p.clone())), AppError::NotFound(_)));
        assert!(matches!(
            AppError::from(FsError::AlreadyExists(p.clone())),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(FsError::InvalidName(String::new())),
            AppError::Validation(_)
        ));

        match AppError::from(FsError::AccessDenied(p)) {
            AppError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_recoverability() {
        assert!(AppError::Conflict(PathBuf::from("/a")).is_recoverable());
        assert!(AppError::ImageDecode("bad header".into()).is_recoverable());
        assert!(AppError::Task("worker panicked".into()).is_fatal());
        assert!(AppError::Config("zero width".into()).is_fatal());
    }

    #[test]
    fn test_user_message_names_the_file() {
        let msg = AppError::Conflict(PathBuf::from("/photos/img_001.jpg")).user_message();
        assert_eq!(msg, "A file named img_001.jpg already exists");
    }
}
