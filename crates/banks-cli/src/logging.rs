//! Logging infrastructure.
//!
//! Two independent channels:
//!
//! - Diagnostics go through `tracing` and `tracing-subscriber` (stderr or
//!   `--log-file`), filtered by level or `RUST_LOG`.
//! - Pipeline milestones are appended to the progress log, one
//!   `<timestamp> : <message>` line per stage, by [`ProgressLog`].
//!
//! # Log Levels
//!
//! - `error`: the run failed
//! - `warn`: non-fatal issues
//! - `info`: stage progress, row counts, durations
//! - `debug`: files, URLs, queries touched
//! - `trace`: row-level data
//!
//! # Usage
//!
//! ```ignore
//! use banks_cli::logging::{init_logging, LogConfig, ProgressLog};
//!
//! init_logging(&LogConfig::default()).expect("init logging");
//! ProgressLog::new("code_log.txt").log("Preliminaries complete")?;
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDateTime};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Timestamp layout of progress log lines, e.g. `2026-Oct-19-14:03:07`.
pub const PROGRESS_TIMESTAMP_FORMAT: &str = "%Y-%b-%d-%H:%M:%S";

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter (off, error, warn, info, debug, trace).
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override `level_filter`.
    pub use_env_filter: bool,
    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Output format: "pretty", "compact", or "json".
    pub format: LogFormat,
    /// Optional log file path. When set, logs are written to the file.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if called more than once or if subscriber initialization fails.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, SharedFileWriter::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer (useful for testing).
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(config.with_target);

            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);

            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .init();
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);

            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .init();
            }
        }
    }
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Build an `EnvFilter` from the configured level, respecting `RUST_LOG` when allowed.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let default_filter = || {
        // External crates (reqwest, html5ever, ...) stay at warn to reduce noise
        EnvFilter::new(format!(
            "warn,banks_cli={level},banks_ingest={level},banks_model={level},\
             banks_output={level},banks_transform={level}",
            level = config.level_filter
        ))
    };
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter())
    } else {
        default_filter()
    }
}

/// Append-only milestone log.
///
/// Every call opens the file, writes one line and closes it again, so the
/// file is never held open between stages.
#[derive(Debug, Clone)]
pub struct ProgressLog {
    path: PathBuf,
}

impl ProgressLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `message` stamped with the current local time.
    pub fn log(&self, message: &str) -> io::Result<()> {
        self.log_at(Local::now().naive_local(), message)
    }

    /// Append `message` stamped with `timestamp`.
    pub fn log_at(&self, timestamp: NaiveDateTime, message: &str) -> io::Result<()> {
        let line = progress_line(timestamp, message);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        info!(progress = message, "progress logged");
        Ok(())
    }
}

/// Format one progress log line, including the trailing newline.
pub fn progress_line(timestamp: NaiveDateTime, message: &str) -> String {
    format!(
        "{} : {message}\n",
        timestamp.format(PROGRESS_TIMESTAMP_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
    }

    #[test]
    fn formats_progress_line() {
        assert_eq!(
            progress_line(at(14, 3, 7), "Data saved to CSV file"),
            "2026-Oct-19-14:03:07 : Data saved to CSV file\n"
        );
    }

    #[test]
    fn appends_across_calls() {
        let dir = TempDir::new().unwrap();
        let log = ProgressLog::new(dir.path().join("code_log.txt"));
        log.log_at(at(9, 0, 0), "first").unwrap();
        log.log_at(at(9, 0, 1), "second").unwrap();

        let again = ProgressLog::new(log.path());
        again.log_at(at(9, 0, 2), "third").unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            content,
            "2026-Oct-19-09:00:00 : first\n\
             2026-Oct-19-09:00:01 : second\n\
             2026-Oct-19-09:00:02 : third\n"
        );
    }

    #[test]
    fn current_timestamp_parses_back() {
        let dir = TempDir::new().unwrap();
        let log = ProgressLog::new(dir.path().join("code_log.txt"));
        log.log("now").unwrap();
        let content = std::fs::read_to_string(log.path()).unwrap();
        let (stamp, message) = content.trim_end().split_once(" : ").unwrap();
        assert_eq!(message, "now");
        assert!(NaiveDateTime::parse_from_str(stamp, PROGRESS_TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn unopenable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let log = ProgressLog::new(dir.path().join("missing").join("code_log.txt"));
        assert!(log.log("lost").is_err());
    }

    #[test]
    fn progress_event_records_message_once() {
        use tracing_subscriber::layer::SubscriberExt;

        let dir = TempDir::new().unwrap();
        let events = dir.path().join("events.json");
        let writer = SharedFileWriter::new(std::fs::File::create(&events).unwrap());
        let subscriber = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer));
        let log = ProgressLog::new(dir.path().join("code_log.txt"));

        tracing::subscriber::with_default(subscriber, || log.log_at(at(9, 0, 0), "first"))
            .unwrap();

        let json = std::fs::read_to_string(&events).unwrap();
        assert!(json.contains(r#""progress":"first""#), "{json}");
        assert!(json.contains(r#""message":"progress logged""#), "{json}");
    }
}
