//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{error_detail, is_io_failure, LoggerError, Result},
    log_format::LogFormat,
    log_level::{ActiveLevels, LogLevel},
    metrics::LoggerMetrics,
    sink_state::SinkState,
    thread_info::ThreadIdentity,
    timestamp::{Clock, SystemClock, TimestampFormat},
    xhtml,
};
use crate::sinks::{file_lock, ConsoleSink, FileSink, StdoutConsole};
use parking_lot::RwLock;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Mutable configuration, snapshotted before any I/O
struct LoggerState {
    format: LogFormat,
    active: ActiveLevels,
    default_level: LogLevel,
    file: PathBuf,
    sink_state: SinkState,
    timestamp_format: TimestampFormat,
    lock_timeout: Duration,
}

/// Leveled logger writing to the console or to one file.
///
/// All methods take `&self`; share a logger between threads with `Arc`.
/// No logging method returns an error or panics: lock timeouts drop the
/// write, I/O failures switch the logger to console output.
///
/// # Example
///
/// ```no_run
/// use mutex_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .format(LogFormat::Text)
///     .level(LogLevel::ALL)
///     .file("app.log")
///     .build();
///
/// logger.info("service started");
/// logger.log_multi(["first", "second"]);
/// ```
pub struct Logger {
    state: RwLock<LoggerState>,
    console: Arc<dyn ConsoleSink>,
    clock: Arc<dyn Clock>,
    file_sink: FileSink,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Console logger with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn with_config(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    // ----------------------------------------------------------------------
    // Configuration
    // ----------------------------------------------------------------------

    pub fn format(&self) -> LogFormat {
        self.state.read().format
    }

    /// Set the output format. This also clears a tripped circuit breaker.
    pub fn set_format(&self, format: LogFormat) {
        let mut state = self.state.write();
        state.format = format;
        state.sink_state = SinkState::Normal;
    }

    /// The active level mask
    pub fn level(&self) -> LogLevel {
        self.state.read().active.mask()
    }

    /// Assign the active levels. A value carrying `ALL` expands to every
    /// level but `DEBUG` (kept only if also requested); any other value is
    /// stored verbatim.
    pub fn set_level(&self, level: LogLevel) {
        self.state.write().active = ActiveLevels::activate(level);
    }

    pub fn active_levels(&self) -> ActiveLevels {
        self.state.read().active
    }

    /// Store a prebuilt active set, e.g. [`ActiveLevels::raw`]
    pub fn set_active_levels(&self, active: ActiveLevels) {
        self.state.write().active = active;
    }

    pub fn default_level(&self) -> LogLevel {
        self.state.read().default_level
    }

    pub fn set_default_level(&self, level: LogLevel) {
        self.state.write().default_level = level;
    }

    pub fn file(&self) -> PathBuf {
        self.state.read().file.clone()
    }

    /// Destination for `Text` and `Xhtml` output. Not validated; a bad path
    /// shows up as an I/O failure on the first write.
    pub fn set_file(&self, path: impl Into<PathBuf>) {
        self.state.write().file = path.into();
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        self.state.read().timestamp_format.clone()
    }

    pub fn set_timestamp_format(&self, format: TimestampFormat) {
        self.state.write().timestamp_format = format;
    }

    pub fn lock_timeout(&self) -> Duration {
        self.state.read().lock_timeout
    }

    pub fn set_lock_timeout(&self, timeout: Duration) {
        self.state.write().lock_timeout = timeout;
    }

    pub fn sink_state(&self) -> SinkState {
        self.state.read().sink_state
    }

    pub fn is_degraded(&self) -> bool {
        self.sink_state().is_degraded()
    }

    /// Get the logger metrics
    ///
    /// ```
    /// use mutex_logger::Logger;
    ///
    /// let logger = Logger::new();
    /// logger.info("filtered out by the default level set");
    /// assert_eq!(logger.metrics().filtered_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Number of file writes dropped on lock timeout
    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    // ----------------------------------------------------------------------
    // Writing
    // ----------------------------------------------------------------------

    /// Log `text` at the default level
    pub fn log(&self, text: impl AsRef<str>) {
        let level = self.default_level();
        self.log_with_error(text, level, None);
    }

    pub fn log_level(&self, text: impl AsRef<str>, level: LogLevel) {
        self.log_with_error(text, level, None);
    }

    /// Filter, prefix and route one message.
    ///
    /// `error` is only used when the message resolves to `EXCEPTION`.
    pub fn log_with_error(
        &self,
        text: impl AsRef<str>,
        level: LogLevel,
        error: Option<&(dyn Error + 'static)>,
    ) {
        let text = text.as_ref();
        let (active, default_level, format) = {
            let state = self.state.read();
            (state.active, state.default_level, state.format)
        };

        if !active.admits(level) {
            self.metrics.record_filtered();
            return;
        }

        let level = if level == LogLevel::ALL {
            default_level
        } else {
            level
        };

        let prefix = match level {
            LogLevel::EXCEPTION => {
                self.log_exception(error, text);
                return;
            }
            LogLevel::ERROR
            | LogLevel::WARNING
            | LogLevel::INFO
            | LogLevel::CUSTOM
            | LogLevel::ALL => format!("{} {}: ", self.timestamp(), level),
            LogLevel::DEBUG => format!(
                "{} DEBUG: {}: ",
                self.timestamp(),
                ThreadIdentity::current()
            ),
            LogLevel::NONE => return,
            // Combined sets pass through without a prefix
            _ => String::new(),
        };

        let line = format.render(&prefix, text);
        if format.writes_to_file() {
            self.write_to_file(level, &line, true);
        } else {
            self.to_console(level, &line);
        }
    }

    /// Log each text at the default level, in order. Not atomic: other
    /// writers may interleave.
    pub fn log_multi<I, S>(&self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in texts {
            self.log(text);
        }
    }

    #[inline]
    pub fn exception(&self, error: &(dyn Error + 'static), message: impl AsRef<str>) {
        self.log_with_error(message, LogLevel::EXCEPTION, Some(error));
    }

    #[inline]
    pub fn error(&self, text: impl AsRef<str>) {
        self.log_level(text, LogLevel::ERROR);
    }

    #[inline]
    pub fn warning(&self, text: impl AsRef<str>) {
        self.log_level(text, LogLevel::WARNING);
    }

    #[inline]
    pub fn info(&self, text: impl AsRef<str>) {
        self.log_level(text, LogLevel::INFO);
    }

    #[inline]
    pub fn custom(&self, text: impl AsRef<str>) {
        self.log_level(text, LogLevel::CUSTOM);
    }

    #[inline]
    pub fn debug(&self, text: impl AsRef<str>) {
        self.log_level(text, LogLevel::DEBUG);
    }

    /// Report an error, bypassing the level filter.
    ///
    /// An I/O error (anywhere in the source chain) trips the circuit
    /// breaker: the logger switches to console output for good, including
    /// for this report. Other errors go to the current destination as two
    /// lines, the error detail then `EXCEPTION: <timestamp>: <message>`.
    pub fn log_exception(&self, error: Option<&(dyn Error + 'static)>, message: &str) {
        let Some(error) = error else {
            return;
        };
        let (detail, info) = self.exception_lines(error, message);

        if is_io_failure(error) {
            let path = self.trip_breaker();
            self.to_console(LogLevel::EXCEPTION, &detail);
            self.to_console(
                LogLevel::EXCEPTION,
                &format!(
                    "File logging disabled: could not write to '{}', logging to the console instead",
                    path.display()
                ),
            );
            return;
        }

        if self.format() != LogFormat::Console {
            self.write_to_file(LogLevel::EXCEPTION, &detail, true);
            self.write_to_file(LogLevel::EXCEPTION, &info, true);
        } else {
            self.to_console(LogLevel::EXCEPTION, &detail);
            self.to_console(LogLevel::EXCEPTION, &info);
        }
    }

    /// Start an XHTML document: truncate the file and write the header.
    ///
    /// Without a title, the file path and current time are used. Only valid
    /// for `Xhtml`; other formats get an informational console line instead.
    pub fn write_header(&self, title: Option<&str>) {
        let (format, file) = {
            let state = self.state.read();
            (state.format, state.file.clone())
        };
        if format != LogFormat::Xhtml {
            self.inform(&format!(
                "write_header skipped: format is {}, headers are only written for Xhtml",
                format
            ));
            return;
        }

        let title = match title {
            Some(title) => title.to_string(),
            None => format!("{}: {}", file.display(), self.timestamp()),
        };

        self.write_to_file(LogLevel::INFO, "", false);
        for line in xhtml::header_lines(&title) {
            if self.is_degraded() {
                break;
            }
            self.write_to_file(LogLevel::INFO, &line, true);
        }
    }

    /// Close an XHTML document. Only valid for `Xhtml`.
    pub fn write_footer(&self) {
        let format = self.format();
        if format != LogFormat::Xhtml {
            self.inform(&format!(
                "write_footer skipped: format is {}, footers are only written for Xhtml",
                format
            ));
            return;
        }
        self.write_to_file(LogLevel::INFO, xhtml::FOOTER, true);
    }

    // ----------------------------------------------------------------------
    // Sinks
    // ----------------------------------------------------------------------

    /// One locked open/write/close cycle on the configured file.
    ///
    /// Empty `text` writes nothing but still creates or truncates the file.
    /// Once the breaker has tripped, `text` goes to the console instead and
    /// the file is not touched.
    fn write_to_file(&self, level: LogLevel, text: &str, append: bool) {
        let (path, timeout, sink_state) = {
            let state = self.state.read();
            (state.file.clone(), state.lock_timeout, state.sink_state)
        };

        if sink_state.is_degraded() {
            if !text.is_empty() {
                self.to_console(level, text);
            }
            return;
        }

        let started = Instant::now();
        let lock = file_lock::lock_for(&path);
        let guard = match lock.acquire(timeout) {
            Ok(guard) => guard,
            Err(e) => {
                self.record_dropped_write(&e);
                return;
            }
        };

        let mut lines = Vec::with_capacity(3);
        if guard.recovered_abandoned() {
            self.metrics.record_abandoned_lock();
            let abandoned = LoggerError::abandoned_lock(path.display().to_string());
            let (detail, info) = self.exception_lines(&abandoned, "lock recovered, writing continues");
            lines.push(detail);
            lines.push(info);
        }
        if !text.is_empty() {
            lines.push(text.to_string());
        }

        let remaining = timeout.saturating_sub(started.elapsed());
        let result = self.file_sink.write_lines(&path, &lines, append, remaining);
        drop(guard);

        match result {
            Ok(()) => {
                if !text.is_empty() {
                    self.metrics.record_written();
                }
            }
            Err(e @ LoggerError::LockTimeout { .. }) => self.record_dropped_write(&e),
            Err(e) => {
                self.metrics.record_io_failure();
                let error: &(dyn Error + 'static) = &e;
                self.log_exception(Some(error), "");
            }
        }
    }

    fn to_console(&self, level: LogLevel, line: &str) {
        self.console.write_line(level, line);
        self.metrics.record_written();
    }

    /// Informational notice that bypasses the level filter and the file
    fn inform(&self, message: &str) {
        let line = format!("{} INFO: {}", self.timestamp(), message);
        self.to_console(LogLevel::INFO, &line);
    }

    fn exception_lines(&self, error: &(dyn Error + 'static), message: &str) -> (String, String) {
        (
            error_detail(error),
            format!("EXCEPTION: {}: {}", self.timestamp(), message),
        )
    }

    /// Switch to console-only output; returns the path that failed
    fn trip_breaker(&self) -> PathBuf {
        let mut state = self.state.write();
        state.format = LogFormat::Console;
        state.sink_state = SinkState::Degraded;
        state.file.clone()
    }

    fn record_dropped_write(&self, error: &LoggerError) {
        let dropped = self.metrics.record_dropped();

        // Alert on first drop and periodically thereafter
        if dropped == 0 || (dropped + 1) % 1000 == 0 {
            eprintln!(
                "[LOGGER WARNING] {}. {} file writes dropped so far.",
                error,
                dropped + 1
            );
        }
    }

    fn timestamp(&self) -> String {
        let format = self.state.read().timestamp_format.clone();
        format.format(&self.clock.now())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} dropped file writes (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use mutex_logger::prelude::*;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let console = MemoryConsole::new();
/// let logger = Logger::builder()
///     .level(LogLevel::ALL | LogLevel::DEBUG)
///     .default_level(LogLevel::WARNING)
///     .lock_timeout(Duration::from_millis(250))
///     .console(Arc::new(console.clone()))
///     .build();
///
/// logger.log("low disk space");
/// assert!(console.lines()[0].ends_with("WARNING: low disk space"));
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    active: Option<ActiveLevels>,
    console: Option<Arc<dyn ConsoleSink>>,
    clock: Option<Arc<dyn Clock>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            active: None,
            console: None,
            clock: None,
        }
    }

    /// Start from a complete configuration value
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: LogFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Requested level set, expanded like [`Logger::set_level`]
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self.active = None;
        self
    }

    /// Exact active set, overriding [`LoggerBuilder::level`]
    #[must_use = "builder methods return a new value"]
    pub fn active_levels(mut self, active: ActiveLevels) -> Self {
        self.active = Some(active);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: LogLevel) -> Self {
        self.config.default_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file = path.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    /// How long a write waits for the file lock before it is dropped
    #[must_use = "builder methods return a new value"]
    pub fn lock_timeout(mut self, timeout: Duration) -> Self {
        self.config.lock_timeout = timeout;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: Arc<dyn ConsoleSink>) -> Self {
        self.console = Some(console);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the Logger, rejecting invalid configuration
    pub fn try_build(self) -> Result<Logger> {
        self.config.validate()?;
        Ok(self.build())
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let active = self
            .active
            .unwrap_or_else(|| self.config.active_levels());

        Logger {
            state: RwLock::new(LoggerState {
                format: self.config.format,
                active,
                default_level: self.config.default_level,
                file: self.config.file,
                sink_state: SinkState::Normal,
                timestamp_format: self.config.timestamp_format,
                lock_timeout: self.config.lock_timeout,
            }),
            console: self
                .console
                .unwrap_or_else(|| Arc::new(StdoutConsole::new())),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            file_sink: FileSink::new(),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
