//! Delete, copy-paste, rename and batch rename
//!
//! Every operation runs as its own task on the blocking pool, touches files
//! in caller order, and never stops at the first failing file. Completion is
//! reported through the returned [`TaskHandle`] and as an
//! [`EngineEvent::OperationFinished`] naming the directories to re-index.

use crate::{AppError, EngineEvent, EventBus, OperationKind, TaskHandle, ThumbnailCache};
use gallery_fs::{
    compose_file_name, find_non_conflicting_file_name, split_file_name, validate_base_name,
    zero_pad, FileSystemGateway, FsError,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Handle;

/// One file that an operation could not handle
#[derive(Debug)]
pub struct OperationFailure {
    pub path: PathBuf,
    pub error: AppError,
}

/// Per-file outcome of a batch operation
#[derive(Debug)]
pub struct OperationReport<T> {
    /// Results of the files that went through, in caller order
    pub succeeded: Vec<T>,
    pub failures: Vec<OperationFailure>,
}

impl<T> Default for OperationReport<T> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> OperationReport<T> {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_paths(&self) -> Vec<PathBuf> {
        self.failures.iter().map(|f| f.path.clone()).collect()
    }

    fn fail(&mut self, path: &Path, error: AppError) {
        tracing::warn!("{}: {}", path.display(), error);
        self.failures.push(OperationFailure {
            path: path.to_path_buf(),
            error,
        });
    }
}

/// Parameters for renaming a batch to `prefix` + zero-padded counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRenameSpec {
    prefix: String,
    start_number: u64,
    digit_width: usize,
}

impl BatchRenameSpec {
    pub const MAX_DIGIT_WIDTH: usize = 10;

    /// Validate once, before any file is touched
    pub fn new(prefix: &str, start_number: i64, digit_width: usize) -> Result<Self, AppError> {
        let prefix = validate_base_name(prefix)
            .map_err(|_| AppError::Validation(format!("invalid prefix {:?}", prefix)))?;

        let start_number = u64::try_from(start_number).map_err(|_| {
            AppError::Validation(format!("start number {} is negative", start_number))
        })?;

        if !(1..=Self::MAX_DIGIT_WIDTH).contains(&digit_width) {
            return Err(AppError::Validation(format!(
                "digit width {} is outside 1..={}",
                digit_width,
                Self::MAX_DIGIT_WIDTH
            )));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            start_number,
            digit_width,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn start_number(&self) -> u64 {
        self.start_number
    }

    pub fn digit_width(&self) -> usize {
        self.digit_width
    }

    /// Base name for the file at `counter`
    pub fn base_name(&self, counter: u64) -> String {
        format!("{}{}", self.prefix, zero_pad(counter, self.digit_width))
    }
}

/// Runs file operations through the gateway
#[derive(Clone)]
pub struct FileOperationEngine {
    fs: Arc<dyn FileSystemGateway>,
    runtime: Handle,
    events: EventBus,
    thumbnails: Option<ThumbnailCache>,
}

impl FileOperationEngine {
    pub fn new(fs: Arc<dyn FileSystemGateway>, runtime: Handle, events: EventBus) -> Self {
        Self {
            fs,
            runtime,
            events,
            thumbnails: None,
        }
    }

    /// Invalidate thumbnails of paths that are removed or renamed away
    pub fn with_thumbnail_cache(mut self, cache: ThumbnailCache) -> Self {
        self.thumbnails = Some(cache);
        self
    }

    /// Delete every path; a path that no longer exists is a failure
    pub fn delete(&self, paths: Vec<PathBuf>) -> TaskHandle<OperationReport<PathBuf>> {
        let this = self.clone();
        TaskHandle::spawn_blocking(&self.runtime, move || {
            let report = this.run_delete(&paths);
            this.finish(OperationKind::Delete, parent_dirs(&paths), &report);
            Ok(report)
        })
    }

    /// Copy each surviving source into `target_dir` under a non-conflicting name
    ///
    /// Succeeds with the created destinations in source order. Sources that
    /// vanished before the task ran are skipped without a failure.
    pub fn copy_into(
        &self,
        paths: Vec<PathBuf>,
        target_dir: PathBuf,
    ) -> TaskHandle<OperationReport<PathBuf>> {
        let this = self.clone();
        TaskHandle::spawn_blocking(&self.runtime, move || {
            let result = this.run_copy_into(&paths, &target_dir);
            match &result {
                Ok(report) => this.finish(OperationKind::Copy, vec![target_dir], report),
                Err(e) => {
                    tracing::warn!("Paste into {} failed: {}", target_dir.display(), e);
                    this.events.emit(EngineEvent::OperationFinished {
                        kind: OperationKind::Copy,
                        directories: vec![target_dir.clone()],
                        all_succeeded: false,
                        failed: vec![target_dir],
                    });
                }
            }
            result
        })
    }

    /// Rename `path` to `new_base_name` plus its original extension
    ///
    /// Returns the new path. Nothing is renamed if `path` is gone, the name is
    /// empty after trimming, or the target name is taken.
    pub fn rename(&self, path: PathBuf, new_base_name: String) -> TaskHandle<PathBuf> {
        let this = self.clone();
        TaskHandle::spawn_blocking(&self.runtime, move || {
            let result = this.run_rename(&path, &new_base_name);
            let failed = match &result {
                Ok(new_path) => {
                    tracing::info!("Renamed {} -> {}", path.display(), new_path.display());
                    Vec::new()
                }
                Err(e) => {
                    tracing::warn!("Rename of {} failed: {}", path.display(), e);
                    vec![path.clone()]
                }
            };
            this.events.emit(EngineEvent::OperationFinished {
                kind: OperationKind::Rename,
                directories: parent_dirs(std::slice::from_ref(&path)),
                all_succeeded: failed.is_empty(),
                failed,
            });
            result
        })
    }

    /// Rename `paths` in order to `prefix` + counter + original extension
    ///
    /// The counter advances for every file that still exists, including ones
    /// skipped because their target name is taken. Vanished files are
    /// recorded as failures and do not consume a number.
    pub fn batch_rename(
        &self,
        paths: Vec<PathBuf>,
        spec: BatchRenameSpec,
    ) -> TaskHandle<OperationReport<PathBuf>> {
        let this = self.clone();
        TaskHandle::spawn_blocking(&self.runtime, move || {
            let report = this.run_batch_rename(&paths, &spec);
            this.finish(OperationKind::BatchRename, parent_dirs(&paths), &report);
            Ok(report)
        })
    }

    fn run_delete(&self, paths: &[PathBuf]) -> OperationReport<PathBuf> {
        let mut report = OperationReport::default();

        for path in paths {
            match self.fs.remove(path) {
                Ok(()) => {
                    self.forget_thumbnail(path);
                    report.succeeded.push(path.clone());
                }
                Err(e) => report.fail(path, e.into()),
            }
        }

        report
    }

    fn run_copy_into(
        &self,
        paths: &[PathBuf],
        target_dir: &Path,
    ) -> Result<OperationReport<PathBuf>, AppError> {
        if !self.fs.stat(target_dir)?.is_dir {
            return Err(AppError::Validation(format!(
                "{} is not a directory",
                target_dir.display()
            )));
        }

        let mut report = OperationReport::default();

        for src in paths {
            match self.fs.stat(src) {
                Ok(_) => {}
                Err(FsError::NotFound(_)) => {
                    tracing::debug!("Skipping vanished source: {}", src.display());
                    continue;
                }
                Err(e) => {
                    report.fail(src, e.into());
                    continue;
                }
            }

            if target_dir.starts_with(src) {
                report.fail(
                    src,
                    AppError::Validation("cannot copy a directory into itself".to_string()),
                );
                continue;
            }

            let Some(name) = src.file_name().map(|n| n.to_string_lossy().to_string()) else {
                report.fail(src, AppError::Validation("path has no file name".to_string()));
                continue;
            };
            let (base, ext) = split_file_name(&name);
            let dest = find_non_conflicting_file_name(self.fs.as_ref(), target_dir, base, ext);

            match self.fs.copy(src, &dest) {
                Ok(()) => {
                    tracing::debug!("Copied {} -> {}", src.display(), dest.display());
                    report.succeeded.push(dest);
                }
                Err(e) => report.fail(src, e.into()),
            }
        }

        Ok(report)
    }

    fn run_rename(&self, path: &Path, new_base_name: &str) -> Result<PathBuf, AppError> {
        let base = validate_base_name(new_base_name)?;

        // Existence first: a vanished source is NotFound, not a conflict
        self.fs.stat(path)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Validation("path has no file name".to_string()))?;
        let (_, ext) = split_file_name(&name);
        let dest = path.with_file_name(compose_file_name(base, ext));

        // The file's own current name counts as taken
        if self.fs.exists(&dest) {
            return Err(AppError::Conflict(dest));
        }

        self.fs.rename(path, &dest)?;
        self.forget_thumbnail(path);
        Ok(dest)
    }

    fn run_batch_rename(&self, paths: &[PathBuf], spec: &BatchRenameSpec) -> OperationReport<PathBuf> {
        let mut report = OperationReport::default();
        let mut counter = spec.start_number();

        for path in paths {
            if !self.fs.exists(path) {
                report.fail(path, AppError::NotFound(path.clone()));
                continue;
            }

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let (_, ext) = split_file_name(&name);
            let dest = path.with_file_name(compose_file_name(&spec.base_name(counter), ext));
            counter += 1;

            if &dest == path {
                report.succeeded.push(dest);
                continue;
            }
            if self.fs.exists(&dest) && !self.fs.same_file(path, &dest) {
                report.fail(path, AppError::Conflict(dest));
                continue;
            }

            match self.fs.rename(path, &dest) {
                Ok(()) => {
                    tracing::debug!("Renamed {} -> {}", path.display(), dest.display());
                    self.forget_thumbnail(path);
                    report.succeeded.push(dest);
                }
                Err(e) => report.fail(path, e.into()),
            }
        }

        report
    }

    fn forget_thumbnail(&self, path: &Path) {
        if let Some(cache) = &self.thumbnails {
            cache.invalidate(path);
        }
    }

    fn finish<T>(&self, kind: OperationKind, directories: Vec<PathBuf>, report: &OperationReport<T>) {
        tracing::info!(
            "{:?} finished: {} succeeded, {} failed",
            kind,
            report.succeeded.len(),
            report.failures.len()
        );
        self.events.emit(EngineEvent::OperationFinished {
            kind,
            directories,
            all_succeeded: report.all_succeeded(),
            failed: report.failed_paths(),
        });
    }
}

/// Distinct parent directories of `paths`, in first-seen order
fn parent_dirs(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    for parent in paths.iter().filter_map(|p| p.parent()) {
        if !dirs.iter().any(|d| d == parent) {
            dirs.push(parent.to_path_buf());
        }
    }
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_fs::MemoryFileSystem;

    fn engine(fs: &Arc<MemoryFileSystem>) -> (FileOperationEngine, EventBus) {
        let events = EventBus::new();
        let ops = FileOperationEngine::new(fs.clone(), Handle::current(), events.clone());
        (ops, events)
    }

    fn p(s: &str) -> PathBuf {
        PathBuf::from(s)
    }

    /// Resolves names case-insensitively, like a default macOS or Windows volume
    struct CaseFoldingFs(MemoryFileSystem);

    impl CaseFoldingFs {
        /// The spelling actually stored for `path`, or `path` itself when absent
        fn stored(&self, path: &Path) -> PathBuf {
            let folded = path.to_string_lossy().to_lowercase();
            self.0
                .paths()
                .into_iter()
                .find(|p| p.to_string_lossy().to_lowercase() == folded)
                .unwrap_or_else(|| path.to_path_buf())
        }
    }

    impl FileSystemGateway for CaseFoldingFs {
        fn list(&self, dir: &Path) -> gallery_fs::Result<Vec<PathBuf>> {
            self.0.list(&self.stored(dir))
        }

        fn stat(&self, path: &Path) -> gallery_fs::Result<gallery_fs::FsMetadata> {
            self.0.stat(&self.stored(path))
        }

        fn remove(&self, path: &Path) -> gallery_fs::Result<()> {
            self.0.remove(&self.stored(path))
        }

        fn rename(&self, from: &Path, to: &Path) -> gallery_fs::Result<()> {
            let from = self.stored(from);
            if self.same_file(&from, to) {
                let data = self.0.read(&from)?;
                self.0.remove(&from)?;
                self.0.add_file(to, data);
                return Ok(());
            }
            self.0.rename(&from, &self.stored(to))
        }

        fn copy(&self, from: &Path, to: &Path) -> gallery_fs::Result<()> {
            self.0.copy(&self.stored(from), &self.stored(to))
        }

        fn read(&self, path: &Path) -> gallery_fs::Result<Vec<u8>> {
            self.0.read(&self.stored(path))
        }

        fn same_file(&self, a: &Path, b: &Path) -> bool {
            self.stored(a) == self.stored(b)
        }
    }

    #[test]
    fn test_batch_spec_validation() {
        assert!(BatchRenameSpec::new("img_", 0, 1).is_ok());
        assert!(BatchRenameSpec::new("img_", 1, 10).is_ok());

        for bad in [
            BatchRenameSpec::new("", 1, 3),
            BatchRenameSpec::new("   ", 1, 3),
            BatchRenameSpec::new("a/b", 1, 3),
            BatchRenameSpec::new("img_", -1, 3),
            BatchRenameSpec::new("img_", 1, 0),
            BatchRenameSpec::new("img_", 1, 11),
        ] {
            assert!(matches!(bad, Err(AppError::Validation(_))));
        }

        let spec = BatchRenameSpec::new("img_", 7, 3).unwrap();
        assert_eq!(spec.base_name(7), "img_007");
    }

    #[test]
    fn test_parent_dirs_are_distinct_and_ordered() {
        let dirs = parent_dirs(&[p("/b/1.jpg"), p("/a/2.jpg"), p("/b/3.jpg")]);
        assert_eq!(dirs, vec![p("/b"), p("/a")]);
    }

    #[tokio::test]
    async fn test_delete_continues_past_failures() {
        let fs = Arc::new(MemoryFileSystem::new());
        fs.add_file("/p/a.jpg", b"a".to_vec())
            .add_file("/p/b.jpg", b"b".to_vec())
            .add_file("/p/locked.jpg", b"l".to_vec())
            .deny("/p/locked.jpg");
        let (ops, events) = engine(&fs);
        let rx = events.subscribe();

        let report = ops
            .delete(vec![p("/p/a.jpg"), p("/p/missing.jpg"), p("/p/locked.jpg"), p("/p/b.jpg")])
            .join()
            .await
            .unwrap();

        assert_eq!(report.succeeded, vec![p("/p/a.jpg"), p("/p/b.jpg")]);
        assert_eq!(report.failed_paths(), vec![p("/p/missing.jpg"), p("/p/locked.jpg")]);
        assert!(matches!(report.failures[0].error, AppError::NotFound(_)));
        assert!(!report.all_succeeded());
        assert!(!fs.exists(Path::new("/p/a.jpg")));

        match rx.try_recv() {
            Ok(EngineEvent::OperationFinished {
                kind,
                directories,
                all_succeeded,
                failed,
            }) => {
                assert_eq!(kind, OperationKind::Delete);
                assert_eq!(directories, vec![p("/p")]);
                assert!(!all_succeeded);
                assert_eq!(failed.len(), 2);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_copy_into_skips_vanished_and_avoids_conflicts() {
        let fs = Arc::new(MemoryFileSystem::new());
        fs.add_file("/src/photo.jpg", b"new".to_vec())
            .add_file("/dst/photo.jpg", b"old".to_vec());
        let (ops, _events) = engine(&fs);

        let report = ops
            .copy_into(vec![p("/src/photo.jpg"), p("/src/gone.png")], p("/dst"))
            .join()
            .await
            .unwrap();

        assert!(report.all_succeeded());
        assert_eq!(report.succeeded, vec![p("/dst/photo_1.jpg")]);
        assert_eq!(fs.contents("/dst/photo.jpg"), Some(b"old".to_vec()));
        assert_eq!(fs.contents("/dst/photo_1.jpg"), Some(b"new".to_vec()));

        let again = ops
            .copy_into(vec![p("/src/photo.jpg")], p("/dst"))
            .join()
            .await
            .unwrap();
        assert_eq!(again.succeeded, vec![p("/dst/photo_2.jpg")]);
    }

    #[tokio::test]
    async fn test_copy_into_same_directory_and_into_itself() {
        let fs = Arc::new(MemoryFileSystem::new());
        fs.add_file("/album/a.png", b"a".to_vec())
            .add_dir("/album/sub");
        let (ops, _events) = engine(&fs);

        let report = ops
            .copy_into(vec![p("/album/a.png"), p("/album")], p("/album/sub"))
            .join()
            .await
            .unwrap();
        assert_eq!(report.succeeded, vec![p("/album/sub/a.png")]);
        assert_eq!(report.failed_paths(), vec![p("/album")]);

        let dup = ops
            .copy_into(vec![p("/album/a.png")], p("/album"))
            .join()
            .await
            .unwrap();
        assert_eq!(dup.succeeded, vec![p("/album/a_1.png")]);
    }

    #[tokio::test]
    async fn test_copy_into_missing_target_fails_whole_operation() {
        let fs = Arc::new(MemoryFileSystem::new());
        fs.add_file("/src/a.jpg", b"a".to_vec());
        let (ops, _events) = engine(&fs);

        let err = ops
            .copy_into(vec![p("/src/a.jpg")], p("/nowhere"))
            .join()
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rename_outcomes() {
        let fs = Arc::new(MemoryFileSystem::new());
        fs.add_file("/p/a.jpg", b"a".to_vec())
            .add_file("/p/taken.jpg", b"t".to_vec());
        let (ops, _events) = engine(&fs);

        let err = ops.rename(p("/p/a.jpg"), "  ".into()).join().await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = ops.rename(p("/p/a.jpg"), "taken".into()).join().await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(fs.contents("/p/taken.jpg"), Some(b"t".to_vec()));
        assert!(fs.exists(Path::new("/p/a.jpg")));

        let err = ops.rename(p("/p/gone.jpg"), "x".into()).join().await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let renamed = ops.rename(p("/p/a.jpg"), " beach ".into()).join().await.unwrap();
        assert_eq!(renamed, p("/p/beach.jpg"));
        assert_eq!(fs.contents("/p/beach.jpg"), Some(b"a".to_vec()));
        assert!(!fs.exists(Path::new("/p/a.jpg")));

        let err = ops.rename(p("/p/beach.jpg"), "beach".into()).join().await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref dest) if dest == &p("/p/beach.jpg")));
        assert_eq!(fs.contents("/p/beach.jpg"), Some(b"a".to_vec()));
    }

    #[tokio::test]
    async fn test_batch_rename_sequence() {
        let fs = Arc::new(MemoryFileSystem::new());
        fs.add_file("/p/x.jpg", b"x".to_vec())
            .add_file("/p/y.JPG", b"y".to_vec())
            .add_file("/p/z.png", b"z".to_vec());
        let (ops, _events) = engine(&fs);

        let spec = BatchRenameSpec::new("img_", 1, 3).unwrap();
        let report = ops
            .batch_rename(vec![p("/p/x.jpg"), p("/p/y.JPG"), p("/p/z.png")], spec)
            .join()
            .await
            .unwrap();

        assert!(report.all_succeeded());
        assert_eq!(
            report.succeeded,
            vec![p("/p/img_001.jpg"), p("/p/img_002.JPG"), p("/p/img_003.png")]
        );
        assert_eq!(fs.contents("/p/img_002.JPG"), Some(b"y".to_vec()));
    }

    #[tokio::test]
    async fn test_batch_rename_counter_rules() {
        let fs = Arc::new(MemoryFileSystem::new());
        fs.add_file("/p/a.jpg", b"a".to_vec())
            .add_file("/p/b.jpg", b"b".to_vec())
            .add_file("/p/c.jpg", b"c".to_vec())
            .add_file("/p/n_2.jpg", b"occupied".to_vec());
        let (ops, _events) = engine(&fs);

        let spec = BatchRenameSpec::new("n_", 1, 1).unwrap();
        let report = ops
            .batch_rename(
                vec![p("/p/a.jpg"), p("/p/gone.jpg"), p("/p/b.jpg"), p("/p/c.jpg")],
                spec,
            )
            .join()
            .await
            .unwrap();

        // gone.jpg takes no number; b.jpg collides with n_2 and still uses it up
        assert_eq!(report.succeeded, vec![p("/p/n_1.jpg"), p("/p/n_3.jpg")]);
        assert_eq!(report.failed_paths(), vec![p("/p/gone.jpg"), p("/p/b.jpg")]);
        assert!(matches!(report.failures[0].error, AppError::NotFound(_)));
        assert!(matches!(report.failures[1].error, AppError::Conflict(_)));
        assert_eq!(fs.contents("/p/b.jpg"), Some(b"b".to_vec()));
        assert_eq!(fs.contents("/p/n_2.jpg"), Some(b"occupied".to_vec()));
    }

    #[tokio::test]
    async fn test_batch_rename_already_named_file_is_success() {
        let fs = Arc::new(MemoryFileSystem::new());
        fs.add_file("/p/img_1.jpg", b"a".to_vec());
        let (ops, _events) = engine(&fs);

        let spec = BatchRenameSpec::new("img_", 1, 1).unwrap();
        let report = ops
            .batch_rename(vec![p("/p/img_1.jpg")], spec)
            .join()
            .await
            .unwrap();
        assert!(report.all_succeeded());
        assert_eq!(report.succeeded, vec![p("/p/img_1.jpg")]);
    }

    #[tokio::test]
    async fn test_batch_rename_case_only_change_is_not_a_conflict() {
        let fs = Arc::new(CaseFoldingFs(MemoryFileSystem::new()));
        fs.0.add_file("/p/Img_001.jpg", b"a".to_vec())
            .add_file("/p/other.jpg", b"o".to_vec());
        let events = EventBus::new();
        let ops = FileOperationEngine::new(fs.clone(), Handle::current(), events);

        let spec = BatchRenameSpec::new("img_", 1, 3).unwrap();
        let report = ops
            .batch_rename(vec![p("/p/Img_001.jpg"), p("/p/other.jpg")], spec)
            .join()
            .await
            .unwrap();

        assert!(report.all_succeeded());
        assert_eq!(report.succeeded, vec![p("/p/img_001.jpg"), p("/p/img_002.jpg")]);
        assert_eq!(fs.0.contents("/p/img_001.jpg"), Some(b"a".to_vec()));
        assert_eq!(fs.0.contents("/p/Img_001.jpg"), None);
    }

    #[tokio::test]
    async fn test_batch_rename_other_file_with_folded_name_conflicts() {
        let fs = Arc::new(CaseFoldingFs(MemoryFileSystem::new()));
        fs.0.add_file("/p/a.jpg", b"a".to_vec())
            .add_file("/p/IMG_001.jpg", b"taken".to_vec());
        let events = EventBus::new();
        let ops = FileOperationEngine::new(fs.clone(), Handle::current(), events);

        let spec = BatchRenameSpec::new("img_", 1, 3).unwrap();
        let report = ops
            .batch_rename(vec![p("/p/a.jpg")], spec)
            .join()
            .await
            .unwrap();

        assert_eq!(report.failed_paths(), vec![p("/p/a.jpg")]);
        assert!(matches!(report.failures[0].error, AppError::Conflict(_)));
        assert_eq!(fs.0.contents("/p/IMG_001.jpg"), Some(b"taken".to_vec()));
    }
}
