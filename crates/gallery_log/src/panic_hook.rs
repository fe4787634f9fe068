//! Panic hook for crash reporting

use backtrace::Backtrace;
use chrono::Local;
use std::panic::PanicHookInfo;
use std::path::PathBuf;

/// Install a hook that logs every panic and writes a crash dump into `dump_dir`
pub fn init_panic_hook(dump_dir: PathBuf) {
    std::panic::set_hook(Box::new(move |info| panic_handler(info, &dump_dir)));
    tracing::debug!("Panic hook initialized");
}

fn panic_handler(info: &PanicHookInfo, dump_dir: &std::path::Path) {
    let backtrace = Backtrace::new();
    let thread = std::thread::current();
    let location = info.location().map(|l| l.to_string());

    let report = format_crash_report(
        &Local::now().to_rfc3339(),
        thread.name().unwrap_or("<unnamed>"),
        location.as_deref(),
        payload_text(info),
        &format!("{:?}", backtrace),
    );

    // 1. Log to stderr (always available)
    eprintln!("{}", report);

    // 2. Log via tracing (may fail if the subscriber is gone)
    tracing::error!("{}", report);

    // 3. Write crash dump file
    let dump_path = dump_dir.join(format!(
        "gallery_crash_{}.txt",
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    if let Err(e) = std::fs::write(&dump_path, &report) {
        eprintln!("Failed to write crash dump: {}", e);
    }
}

fn payload_text<'a>(info: &'a PanicHookInfo) -> &'a str {
    let payload = info.payload();
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<unknown>")
}

/// Render the crash report text
pub fn format_crash_report(
    timestamp: &str,
    thread: &str,
    location: Option<&str>,
    payload: &str,
    backtrace: &str,
) -> String {
    format!(
        "=== CRITICAL PANIC ===\n\
         Timestamp: {}\n\
         Thread: {}\n\
         Location: {}\n\
         Payload: {}\n\n\
         Stack Trace:\n{}",
        timestamp,
        thread,
        location.unwrap_or("<unknown>"),
        payload,
        backtrace
    )
}
