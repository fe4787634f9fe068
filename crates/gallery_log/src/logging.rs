//! Structured logging setup with tracing

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where and how to log
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub directory: PathBuf,
    /// File name prefix for the daily rolling file
    pub file_prefix: String,
    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,
    /// Also log human-readable lines to stdout
    pub console: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            directory: super::log_dir(),
            file_prefix: "gallery.log".to_string(),
            default_filter: "info".to_string(),
            console: cfg!(debug_assertions),
        }
    }
}

/// Flushes the background file writer when dropped
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Initialize the logging system
///
/// Console output (when enabled) is pretty-printed; the file receives JSON lines.
pub fn init_logging(options: LogOptions) -> anyhow::Result<LogGuard> {
    std::fs::create_dir_all(&options.directory)?;

    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, &options.directory, &options.file_prefix);
    let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);

    let console = options.console.then(|| fmt::layer().pretty());

    tracing_subscriber::registry()
        .with(env_filter(&options.default_filter))
        .with(console)
        .with(fmt::layer().json().with_writer(non_blocking))
        .try_init()?;

    tracing::info!("Logging initialized in {}", options.directory.display());
    Ok(LogGuard { _worker: worker })
}

/// `RUST_LOG` if set and valid, otherwise `default`
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Remove `*.log*` files in `dir` not modified for `days` days
pub fn cleanup_old_logs(dir: &Path, days: u32) -> anyhow::Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let max_age = Duration::from_secs(u64::from(days) * 24 * 60 * 60);
    let threshold = SystemTime::now()
        .checked_sub(max_age)
        .unwrap_or(SystemTime::UNIX_EPOCH);
    let mut deleted = 0;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        // Rolling files are named `<prefix>.<date>`, e.g. gallery.log.2024-05-01
        let is_log = path
            .file_name()
            .map(|n| n.to_string_lossy().contains(".log"))
            .unwrap_or(false);
        if !is_log {
            continue;
        }

        let modified = entry.metadata().and_then(|m| m.modified());
        if matches!(modified, Ok(m) if m < threshold) && std::fs::remove_file(&path).is_ok() {
            deleted += 1;
            tracing::debug!("Deleted old log: {:?}", path);
        }
    }

    tracing::info!("Cleaned up {} old log files", deleted);
    Ok(deleted)
}
