//! Rolling Logger
//!
//! Installs a `tracing` subscriber writing to a daily rolling log file and
//! keeps only the newest [`MAX_LOG_FILES`] files. Records emitted through the
//! `log` facade are bridged into the same subscriber.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::{NaiveDate, Utc};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Number of daily log files kept on disk
pub const MAX_LOG_FILES: usize = 7;

/// Extension of every log file
pub const LOG_SUFFIX: &str = "log";

/// Target used by the [`info`] and [`error`] helpers
pub const APP_TARGET: &str = "app";

/// Flushes the background writer; lives for the rest of the process
static WRITER_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    Appender(String),
    AlreadyInitialized(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log directory error: {}", e),
            LoggerError::Appender(msg) => write!(f, "Failed to create log appender: {}", msg),
            LoggerError::AlreadyInitialized(msg) => write!(f, "Logger already initialized: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(err: io::Error) -> Self {
        LoggerError::Io(err)
    }
}

/// File the appender writes to on `date` (UTC), e.g. `LittleLemon.2024-05-01.log`
pub fn log_file_name(app_name: &str, date: NaiveDate) -> String {
    format!("{}.{}.{}", app_name, date.format("%Y-%m-%d"), LOG_SUFFIX)
}

/// Daily appender for `app_name` in `log_dir`.
///
/// Rolls over at UTC midnight; on each rollover files beyond
/// [`MAX_LOG_FILES`] are deleted, oldest first.
pub fn build_appender(log_dir: &Path, app_name: &str) -> Result<RollingFileAppender, LoggerError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix(LOG_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)
        .map_err(|e| LoggerError::Appender(e.to_string()))
}

/// Initialize the global logger writing into `log_dir`.
///
/// Returns the path of today's log file.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<PathBuf, LoggerError> {
    fs::create_dir_all(&log_dir)?;

    let path = log_dir.join(log_file_name(app_name, Utc::now().date_naive()));

    // Logcat is the log sink on Android
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(app_name),
        );
        return Ok(path);
    }

    #[cfg(not(target_os = "android"))]
    {
        let appender = build_appender(&log_dir, app_name)?;
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .try_init()
            .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

        let _ = WRITER_GUARD.set(guard);

        tracing::info!(log_file = %path.display(), "Logger initialized");
        Ok(path)
    }
}

pub fn info(msg: &str) {
    log::info!(target: APP_TARGET, "{}", msg);
}

pub fn error(msg: &str) {
    log::error!(target: APP_TARGET, "{}", msg);
}
