//! Engine facade wiring the indexer, thumbnail cache, selection, clipboard
//! and file operations around one active directory

use crate::{
    compute_total_size, AppError, BatchRenameSpec, ClipboardStore, DirectoryIndexer,
    DirectoryListing, DirectoryTag, EngineConfig, EngineEvent, EventBus, FileOperationEngine,
    ImageCrateDecoder, ImageDecoder, ImageEntry, LoadedImage, OperationReport, SelectionModel,
    Slideshow, StatusSummary, TaskHandle, ThumbnailCache, ThumbnailHandle,
};
use crossbeam_channel::Receiver;
use gallery_fs::{FileEntry, FileSystemGateway, ViewOptions};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Main engine state
///
/// Selection and clipboard are plain state owned by the caller's thread;
/// everything that touches the disk runs on the runtime's blocking pool and
/// reports back through [`EngineEvent`]s.
pub struct Engine {
    /// Current selection
    pub selection: RwLock<SelectionModel>,

    /// In-process clipboard
    pub clipboard: RwLock<ClipboardStore>,

    config: EngineConfig,
    fs: Arc<dyn FileSystemGateway>,
    decoder: Arc<dyn ImageDecoder>,
    runtime: Handle,
    events: EventBus,
    indexer: DirectoryIndexer,
    thumbnails: ThumbnailCache,
    file_ops: FileOperationEngine,

    /// Tag of the directory most recently selected
    active: RwLock<Option<DirectoryTag>>,
    generation: AtomicU64,
}

impl Engine {
    /// Create an engine decoding with the `image` crate
    pub fn new(
        fs: Arc<dyn FileSystemGateway>,
        runtime: Handle,
        config: EngineConfig,
    ) -> Result<Self, AppError> {
        Self::with_decoder(fs, Arc::new(ImageCrateDecoder::new()), runtime, config)
    }

    pub fn with_decoder(
        fs: Arc<dyn FileSystemGateway>,
        decoder: Arc<dyn ImageDecoder>,
        runtime: Handle,
        config: EngineConfig,
    ) -> Result<Self, AppError> {
        config.validate()?;

        let events = EventBus::new();
        let thumbnails = ThumbnailCache::new(
            Arc::clone(&fs),
            Arc::clone(&decoder),
            runtime.clone(),
            events.clone(),
        );
        let file_ops = FileOperationEngine::new(Arc::clone(&fs), runtime.clone(), events.clone())
            .with_thumbnail_cache(thumbnails.clone());

        tracing::info!("Engine initialized");

        Ok(Self {
            selection: RwLock::new(SelectionModel::new()),
            clipboard: RwLock::new(ClipboardStore::new()),
            config,
            indexer: DirectoryIndexer::new(Arc::clone(&fs)),
            fs,
            decoder,
            runtime,
            events,
            thumbnails,
            file_ops,
            active: RwLock::new(None),
            generation: AtomicU64::new(0),
        })
    }

    /// Receive every event emitted from now on
    pub fn subscribe(&self) -> Receiver<EngineEvent> {
        self.events.subscribe()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn indexer(&self) -> &DirectoryIndexer {
        &self.indexer
    }

    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    pub fn file_operations(&self) -> &FileOperationEngine {
        &self.file_ops
    }

    /// Initial view options from configuration
    pub fn default_view(&self) -> ViewOptions {
        self.config.view.view_options()
    }

    // ===== Directory selection =====

    /// Make `dir` the active directory and index it in the background
    ///
    /// Clears the selection. The listing is emitted as
    /// [`EngineEvent::ListingReady`] tagged for this selection; results for
    /// an older tag should be dropped (see [`is_current`](Self::is_current)).
    pub fn select_directory(&self, dir: &Path) -> TaskHandle<DirectoryListing> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let tag = DirectoryTag {
            path: dir.to_path_buf(),
            generation,
        };

        *self.active.write() = Some(tag.clone());
        self.selection.write().reset();
        tracing::debug!("Selected directory {} (#{})", dir.display(), generation);

        let indexer = self.indexer.clone();
        let thumbnails = self.thumbnails.clone();
        let events = self.events.clone();

        TaskHandle::spawn_blocking(&self.runtime, move || {
            let subdirectories = indexer.list_subdirectories(&tag.path);
            let images: Vec<ImageEntry> = indexer
                .list_image_files(&tag.path)
                .into_iter()
                .map(|image| match thumbnails.peek(image.path()) {
                    Some(thumb) => image.with_thumbnail(thumb),
                    None => image,
                })
                .collect();
            let total_size = compute_total_size(&images);

            let listing = DirectoryListing {
                tag,
                subdirectories,
                images,
                total_size,
            };
            tracing::info!(
                "Indexed {}: {} folders, {} images",
                listing.tag.path.display(),
                listing.subdirectories.len(),
                listing.images.len()
            );
            events.emit(EngineEvent::ListingReady(listing.clone()));
            Ok(listing)
        })
    }

    pub fn active_directory(&self) -> Option<DirectoryTag> {
        self.active.read().clone()
    }

    /// Whether results tagged with `tag` belong to the active directory
    pub fn is_current(&self, tag: &DirectoryTag) -> bool {
        self.active.read().as_ref() == Some(tag)
    }

    // ===== Images =====

    /// Thumbnail bounded by the configured size
    pub fn request_thumbnail(&self, path: &Path) -> ThumbnailHandle {
        let bounds = self.config.thumbnails;
        self.thumbnails
            .request(path, bounds.max_width, bounds.max_height)
    }

    /// Decode `path` at full resolution; not cached
    pub fn load_image(&self, path: &Path) -> TaskHandle<LoadedImage> {
        let fs = Arc::clone(&self.fs);
        let decoder = Arc::clone(&self.decoder);
        let path = path.to_path_buf();

        TaskHandle::spawn_blocking(&self.runtime, move || {
            tracing::debug!("Loading image: {}", path.display());
            let bytes = fs.read(&path)?;
            decoder.decode_full(&bytes)
        })
    }

    /// Slideshow over `images` starting at `start`, paced by configuration
    pub fn slideshow(&self, images: &[ImageEntry], start: usize) -> Slideshow {
        let paths = images.iter().map(|i| i.path().to_path_buf()).collect();
        Slideshow::new(paths, start, self.config.slideshow.interval())
    }

    pub fn status(&self, images: &[ImageEntry]) -> StatusSummary {
        StatusSummary::compute(images, &self.selection.read())
    }

    // ===== File operations =====

    pub fn delete(&self, paths: Vec<PathBuf>) -> TaskHandle<OperationReport<PathBuf>> {
        self.file_ops.delete(paths)
    }

    /// Delete the current selection, in selection order
    pub fn delete_selected(&self) -> TaskHandle<OperationReport<PathBuf>> {
        let paths = self.selection.read().selected().to_vec();
        self.file_ops.delete(paths)
    }

    pub fn copy_into(&self, paths: Vec<PathBuf>, target_dir: &Path) -> TaskHandle<OperationReport<PathBuf>> {
        self.file_ops.copy_into(paths, target_dir.to_path_buf())
    }

    /// Replace the clipboard contents
    pub fn copy_to_clipboard<I>(&self, entries: I)
    where
        I: IntoIterator<Item = FileEntry>,
    {
        self.clipboard.write().copy(entries);
    }

    /// Copy the clipboard snapshot into `target_dir`
    pub fn paste_clipboard(&self, target_dir: &Path) -> TaskHandle<OperationReport<PathBuf>> {
        let paths = self.clipboard.read().contents().paths();
        self.file_ops.copy_into(paths, target_dir.to_path_buf())
    }

    pub fn rename(&self, path: &Path, new_base_name: &str) -> TaskHandle<PathBuf> {
        self.file_ops
            .rename(path.to_path_buf(), new_base_name.to_string())
    }

    /// Validate the batch parameters, then rename `paths` in the background
    pub fn batch_rename(
        &self,
        paths: Vec<PathBuf>,
        prefix: &str,
        start_number: i64,
        digit_width: usize,
    ) -> Result<TaskHandle<OperationReport<PathBuf>>, AppError> {
        let spec = BatchRenameSpec::new(prefix, start_number, digit_width)?;
        Ok(self.file_ops.batch_rename(paths, spec))
    }
}
