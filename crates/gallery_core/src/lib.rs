//! Image browser file-management engine
//!
//! This crate contains:
//! - Directory indexing (subdirectories, image files, total size)
//! - Asynchronous, coalescing thumbnail cache
//! - Selection with anchor-based range clicks
//! - In-process clipboard
//! - Delete, paste, rename and batch rename with partial-failure reports
//! - Engine events, configuration, slideshow and status helpers

pub mod clipboard;
pub mod config;
pub mod engine;
pub mod entry;
pub mod error;
pub mod event;
pub mod file_ops;
pub mod image_loader;
pub mod indexer;
pub mod selection;
pub mod slideshow;
pub mod status;
pub mod task;
pub mod thumbnail;

pub use clipboard::{ClipboardSnapshot, ClipboardStore};
pub use config::{EngineConfig, SlideshowConfig, ThumbnailConfig, ViewConfig};
pub use engine::Engine;
pub use entry::ImageEntry;
pub use error::AppError;
pub use event::{DirectoryListing, DirectoryTag, EngineEvent, EventBus, OperationKind};
pub use file_ops::{BatchRenameSpec, FileOperationEngine, OperationFailure, OperationReport};
pub use image_loader::{ImageCrateDecoder, ImageDecoder, LoadedImage, Thumbnail};
pub use indexer::{compute_total_size, DirectoryIndexer};
pub use selection::SelectionModel;
pub use slideshow::{Slideshow, SlideshowState};
pub use status::{format_file_size, StatusSummary};
pub use task::TaskHandle;
pub use thumbnail::{CacheStats, ThumbnailCache, ThumbnailError, ThumbnailHandle};
