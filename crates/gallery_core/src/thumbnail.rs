//! Thumbnail generation and caching
//!
//! One record per path:
//! - absent: never requested, failed, or invalidated
//! - loading: an in-flight decode that later requests attach to
//! - loaded: the finished thumbnail, kept for the life of the cache
//!
//! There is no eviction. Bounds are applied by the request that starts a
//! load; later requests for the same path share that result.

use crate::{AppError, EngineEvent, EventBus, ImageDecoder, Thumbnail};
use futures::future::{BoxFuture, FutureExt, Shared};
use gallery_fs::FileSystemGateway;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Handle;

/// Why a thumbnail could not be produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Thumbnail unavailable for {}: {reason}", path.display())]
pub struct ThumbnailError {
    pub path: PathBuf,
    pub reason: String,
}

impl ThumbnailError {
    fn new(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

impl From<ThumbnailError> for AppError {
    fn from(e: ThumbnailError) -> Self {
        AppError::ImageDecode(e.to_string())
    }
}

type LoadResult = Result<Arc<Thumbnail>, ThumbnailError>;
type SharedLoad = Shared<BoxFuture<'static, LoadResult>>;

enum Record {
    Loading { generation: u64, load: SharedLoad },
    Loaded(Arc<Thumbnail>),
}

/// Result of [`ThumbnailCache::request`]
#[derive(Clone)]
pub enum ThumbnailHandle {
    Ready(Arc<Thumbnail>),
    Pending(SharedLoad),
}

impl ThumbnailHandle {
    pub fn is_ready(&self) -> bool {
        matches!(self, ThumbnailHandle::Ready(_))
    }

    /// The thumbnail, if it was already cached when requested
    pub fn ready(&self) -> Option<&Arc<Thumbnail>> {
        match self {
            ThumbnailHandle::Ready(thumb) => Some(thumb),
            ThumbnailHandle::Pending(_) => None,
        }
    }

    /// Wait for the load this handle is attached to
    pub async fn wait(self) -> LoadResult {
        match self {
            ThumbnailHandle::Ready(thumb) => Ok(thumb),
            ThumbnailHandle::Pending(load) => load.await,
        }
    }
}

impl std::fmt::Debug for ThumbnailHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThumbnailHandle::Ready(t) => write!(f, "Ready({}x{})", t.width, t.height),
            ThumbnailHandle::Pending(_) => f.write_str("Pending"),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub loaded: usize,
    pub loading: usize,
    pub loaded_bytes: usize,
}

/// Asynchronous, coalescing thumbnail cache
///
/// Cloning is cheap and clones share the same records.
#[derive(Clone)]
pub struct ThumbnailCache {
    inner: Arc<CacheInner>,
}

struct CacheInner {
    fs: Arc<dyn FileSystemGateway>,
    decoder: Arc<dyn ImageDecoder>,
    runtime: Handle,
    events: EventBus,
    records: Mutex<HashMap<PathBuf, Record>>,
    next_generation: AtomicU64,
}

impl ThumbnailCache {
    pub fn new(
        fs: Arc<dyn FileSystemGateway>,
        decoder: Arc<dyn ImageDecoder>,
        runtime: Handle,
        events: EventBus,
    ) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                fs,
                decoder,
                runtime,
                events,
                records: Mutex::new(HashMap::new()),
                next_generation: AtomicU64::new(0),
            }),
        }
    }

    /// Get a thumbnail for `path`, starting a decode if none is cached or in flight
    pub fn request(&self, path: &Path, max_width: u32, max_height: u32) -> ThumbnailHandle {
        let mut records = self.inner.records.lock();

        match records.get(path) {
            Some(Record::Loaded(thumb)) => return ThumbnailHandle::Ready(Arc::clone(thumb)),
            Some(Record::Loading { load, .. }) => {
                tracing::trace!("Attaching to in-flight thumbnail: {}", path.display());
                return ThumbnailHandle::Pending(load.clone());
            }
            None => {}
        }

        let generation = self.inner.next_generation.fetch_add(1, Ordering::Relaxed);
        let owned = path.to_path_buf();
        let inner = Arc::clone(&self.inner);

        // Spawned under the lock: the worker cannot complete before its record exists
        let join = self.inner.runtime.spawn_blocking(move || {
            inner.load(owned, generation, max_width, max_height)
        });

        let failed_path = path.to_path_buf();
        let cache = Arc::downgrade(&self.inner);
        let load: SharedLoad = async move {
            match join.await {
                Ok(result) => result,
                Err(e) => {
                    // The worker never ran to completion, so its record is cleared here
                    let result = Err(ThumbnailError::new(&failed_path, e));
                    if let Some(cache) = cache.upgrade() {
                        cache.complete(&failed_path, generation, &result);
                    }
                    result
                }
            }
        }
        .boxed()
        .shared();

        records.insert(
            path.to_path_buf(),
            Record::Loading {
                generation,
                load: load.clone(),
            },
        );

        tracing::debug!("Thumbnail load started: {}", path.display());
        ThumbnailHandle::Pending(load)
    }

    /// The cached thumbnail, without starting a load
    pub fn peek(&self, path: &Path) -> Option<Arc<Thumbnail>> {
        match self.inner.records.lock().get(path) {
            Some(Record::Loaded(thumb)) => Some(Arc::clone(thumb)),
            _ => None,
        }
    }

    /// Forget `path`; an in-flight load for it will not store its result
    pub fn invalidate(&self, path: &Path) -> bool {
        let removed = self.inner.records.lock().remove(path).is_some();
        if removed {
            tracing::debug!("Thumbnail invalidated: {}", path.display());
        }
        removed
    }

    /// Number of loaded thumbnails
    pub fn len(&self) -> usize {
        self.stats().loaded
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let records = self.inner.records.lock();
        records
            .values()
            .fold(CacheStats::default(), |mut stats, record| {
                match record {
                    Record::Loaded(thumb) => {
                        stats.loaded += 1;
                        stats.loaded_bytes += thumb.byte_len();
                    }
                    Record::Loading { .. } => stats.loading += 1,
                }
                stats
            })
    }
}

impl CacheInner {
    /// Decode on a worker thread and publish the outcome
    fn load(&self, path: PathBuf, generation: u64, max_width: u32, max_height: u32) -> LoadResult {
        let decoded = std::panic::catch_unwind(AssertUnwindSafe(|| {
            let bytes = self.fs.read(&path).map_err(|e| ThumbnailError::new(&path, e))?;
            self.decoder
                .thumbnail(&bytes, max_width, max_height)
                .map_err(|e| ThumbnailError::new(&path, e))
        }))
        .unwrap_or_else(|_| Err(ThumbnailError::new(&path, "decoder panicked")));

        let result = decoded.map(Arc::new);
        self.complete(&path, generation, &result);
        result
    }

    fn complete(&self, path: &Path, generation: u64, result: &LoadResult) {
        {
            let mut records = self.records.lock();
            let current = matches!(
                records.get(path),
                Some(Record::Loading { generation: g, .. }) if *g == generation
            );

            if current {
                match result {
                    Ok(thumb) => {
                        records.insert(path.to_path_buf(), Record::Loaded(Arc::clone(thumb)));
                    }
                    Err(_) => {
                        // Nothing stored: the path stays eligible for retry
                        records.remove(path);
                    }
                }
            } else {
                tracing::debug!("Discarding thumbnail for invalidated record: {}", path.display());
            }
        }

        match result {
            Ok(thumb) => {
                tracing::debug!(
                    "Thumbnail ready: {} ({}x{})",
                    path.display(),
                    thumb.width,
                    thumb.height
                );
                self.events.emit(EngineEvent::ThumbnailReady {
                    path: path.to_path_buf(),
                    thumbnail: Arc::clone(thumb),
                });
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.events.emit(EngineEvent::ThumbnailFailed {
                    path: path.to_path_buf(),
                    reason: e.reason.clone(),
                });
            }
        }
    }
}
