//! Simple file-based logging for debugging

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::{const_mutex, Mutex};

static LOG_FILE: Mutex<Option<File>> = const_mutex(None);

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "anchor-layout.log";

/// Get the directory where the executable is located
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_else(|_| PathBuf::from("anchor-layout"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Initialize logging to a file next to the executable
pub fn init() {
    init_with(&exe_dir().join(DEFAULT_LOG_FILE));
}

/// Initialize logging to a specific file (truncated on open)
pub fn init_with(path: &Path) {
    if let Ok(file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        *LOG_FILE.lock() = Some(file);
    }

    log("=== anchor-layout log started ===");
}

/// Close the log file; later messages are dropped
pub fn shutdown() {
    *LOG_FILE.lock() = None;
}

/// Whether a log file is currently open
pub fn is_enabled() -> bool {
    LOG_FILE.lock().is_some()
}

/// Log a message to the file
pub fn log(msg: &str) {
    if let Some(ref mut file) = *LOG_FILE.lock() {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", ts, msg);
        let _ = file.flush();
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}
