//! Log file setup.
//!
//! The TUI owns stdout, so `tracing` output goes to daily-rotated files in the
//! user's cache directory. Writes are handed to a background worker so the
//! event loop never blocks on disk.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use super::config::{AppConfig, DEFAULT_LOG_FILTER};

/// Log file prefix inside the log directory; files are suffixed with the date.
pub const LOG_FILE_NAME: &str = "graphqlconf.log";

/// Daily log files kept before the oldest is removed.
pub const MAX_LOG_FILES: usize = 7;

/// Keeps the background log writer running.
///
/// Hold it until the program exits; dropping it flushes buffered lines.
pub struct LogGuard {
    dir: PathBuf,
    _worker: WorkerGuard,
}

impl LogGuard {
    /// Directory the log files are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl fmt::Debug for LogGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogGuard").field("dir", &self.dir).finish()
    }
}

/// Directory holding the log files, if the platform has a cache dir.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("graphqlconf"))
}

/// Build the filter, falling back to the default on a bad directive.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Non-blocking writer over a daily-rotated file in `dir`.
pub fn file_writer(dir: &Path) -> io::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_NAME)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .map_err(io::Error::other)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber writing to `dir`.
///
/// Returns `None` when logging is disabled, the directory cannot be used, or
/// a subscriber is already installed.
pub fn init_logging_in(config: &AppConfig, dir: &Path) -> Option<LogGuard> {
    if !config.log_to_file {
        return None;
    }

    let (writer, worker) = match file_writer(dir) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Warning: Failed to open log directory {}: {}", dir.display(), e);
            return None;
        }
    };

    let filter_error = EnvFilter::try_new(&config.log_filter).err();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    if let Some(error) = filter_error {
        tracing::warn!(filter = %config.log_filter, %error, "Invalid log filter, using default");
    }

    Some(LogGuard {
        dir: dir.to_path_buf(),
        _worker: worker,
    })
}

/// Install the global subscriber in the default log directory.
pub fn init_logging(config: &AppConfig) -> Option<LogGuard> {
    let dir = default_log_dir()?;
    init_logging_in(config, &dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("graphqlconf-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_disabled_logging_creates_nothing() {
        let dir = scratch_dir("log-disabled");
        let config = AppConfig::default().with_log_to_file(false);
        assert!(init_logging_in(&config, &dir).is_none());
        assert!(!dir.exists());
    }

    #[test]
    fn test_file_writer_creates_dated_file() {
        let dir = scratch_dir("log-dated");
        let _ = fs::remove_dir_all(&dir);

        let (mut writer, worker) = file_writer(&dir).unwrap();
        writeln!(writer, "hello from the log").unwrap();
        drop(worker);

        let files: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(files.len(), 1);

        let date = files[0]
            .strip_prefix(&format!("{}.", LOG_FILE_NAME))
            .expect("file is prefixed with the log name");
        let bytes = date.as_bytes();
        assert_eq!(date.len(), 10);
        assert_eq!((bytes[4], bytes[7]), (b'-', b'-'));
        assert!(date.replace('-', "").chars().all(|c| c.is_ascii_digit()));

        let contents = fs::read_to_string(dir.join(&files[0])).unwrap();
        assert!(contents.contains("hello from the log"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_build_filter_accepts_directives() {
        let filter = build_filter("graphqlconf=debug,reqwest=warn");
        assert!(filter.to_string().contains("graphqlconf=debug"));
    }

    #[test]
    fn test_build_filter_falls_back_on_garbage() {
        let filter = build_filter("graphqlconf=notalevel");
        assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
    }
}
