//! File logger with size-capped rotation.
//!
//! When enabled, lines go to `~/.config/vitrine/logs/vitrine.log`; once
//! the file grows past the configured limit it is renamed to
//! `vitrine.log.1` (one backup generation) and a fresh file is started.
//!
//! Window-state changes are the kind of thing users only investigate
//! after the fact, so everything of note is logged rather than printed.

use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "vitrine.log";
const BACKUP_SUFFIX: &str = ".1";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Turns file logging on. Off by default.
    pub enabled: bool,
    /// Lowest level that gets written: "debug", "info", "warn" or "error".
    pub level: String,
    /// Size in megabytes at which the log file rotates.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity, ordered from chattiest to most serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Unrecognised names fall back to Info.
    fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    sink: File,
    path: PathBuf,
    floor: Level,
    limit: u64,
    size: u64,
}

/// Initialises the global logger. Call once at host startup.
///
/// A disabled config leaves logging off and every later `log_*!`
/// becomes a no-op.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let log_dir = dir.join("logs");
    let _ = fs::create_dir_all(&log_dir);
    let path = log_dir.join(LOG_FILE_NAME);
    let Some((sink, size)) = open_sink(&path) else {
        return;
    };

    let _ = LOGGER.set(Mutex::new(Logger {
        sink,
        path,
        floor: Level::from_name(&config.level),
        limit: config.max_file_mb * 1024 * 1024,
        size,
    }));
}

/// Opens the log file for append and reports its current size, so the
/// rotation threshold carries across runs.
fn open_sink(path: &Path) -> Option<(File, u64)> {
    let sink = File::options().create(true).append(true).open(path).ok()?;
    let size = sink.metadata().map(|m| m.len()).unwrap_or(0);
    Some((sink, size))
}

/// Writes one log line, if the level clears the configured floor.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.floor {
        return;
    }

    let line = format!("{} [{}] {}\n", stamp(), level.tag(), args);
    let _ = logger.sink.write_all(line.as_bytes());
    logger.size += line.len() as u64;
    if logger.limit > 0 && logger.size >= logger.limit {
        logger.rotate();
    }
}

impl Logger {
    fn rotate(&mut self) {
        let backup = self
            .path
            .with_file_name(format!("{LOG_FILE_NAME}{BACKUP_SUFFIX}"));
        // Renaming releases the old file; a fresh one takes its place.
        let _ = fs::rename(&self.path, &backup);
        if let Some((sink, size)) = open_sink(&self.path) {
            self.sink = sink;
            self.size = size;
        }
    }
}

fn stamp() -> String {
    // Wall-clock UTC, seconds resolution. std::time only.
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{:02}:{:02}:{:02}", secs / 3600 % 24, secs / 60 % 60, secs % 60)
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
