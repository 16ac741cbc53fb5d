//! Logger configuration value
//!
//! Plain data with serde support so a host can embed it in whatever
//! configuration it already loads. The logger itself never reads files.

use super::{
    error::{LoggerError, Result},
    log_format::LogFormat,
    log_level::{ActiveLevels, LogLevel},
    timestamp::TimestampFormat,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default wait for the per-file lock (5 seconds)
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_millis(5000);

/// Default destination for `Text` and `Xhtml` output
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// # Example
///
/// ```
/// use mutex_logger::{LoggerConfig, LogFormat, LogLevel};
///
/// let config = LoggerConfig {
///     format: LogFormat::Text,
///     level: LogLevel::ALL,
///     ..LoggerConfig::default()
/// };
/// assert_eq!(config.active_levels().mask(), LogLevel::ALL_PRESET);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LogFormat,
    /// Requested level set; `ALL` is expanded when the logger is built
    pub level: LogLevel,
    pub default_level: LogLevel,
    pub file: PathBuf,
    pub timestamp_format: TimestampFormat,
    pub lock_timeout: Duration,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Console,
            level: ActiveLevels::DEFAULT.mask(),
            default_level: LogLevel::INFO,
            file: PathBuf::from(DEFAULT_LOG_FILE),
            timestamp_format: TimestampFormat::default(),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn active_levels(&self) -> ActiveLevels {
        ActiveLevels::activate(self.level)
    }

    /// Reject configurations that can never write anything useful
    pub fn validate(&self) -> Result<()> {
        if self.format.writes_to_file() && self.file.as_os_str().is_empty() {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("format {} needs a file path", self.format),
            ));
        }
        if self.lock_timeout.is_zero() {
            return Err(LoggerError::config(
                "LoggerConfig",
                "lock_timeout must be greater than zero",
            ));
        }
        self.timestamp_format.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.format, LogFormat::Console);
        assert_eq!(config.level, LogLevel::EXCEPTION | LogLevel::ERROR);
        assert_eq!(config.default_level, LogLevel::INFO);
        assert_eq!(config.file, PathBuf::from("log.txt"));
        assert_eq!(config.lock_timeout, Duration::from_millis(5000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_path_for_file_formats() {
        let config = LoggerConfig {
            format: LogFormat::Xhtml,
            file: PathBuf::new(),
            ..LoggerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = LoggerConfig {
            lock_timeout: Duration::ZERO,
            ..LoggerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_timestamp_pattern() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"timestamp_format":{"Custom":"%Y %Q"}}"#).expect("parse");
        assert!(matches!(
            config.validate(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = LoggerConfig {
            format: LogFormat::Xhtml,
            level: LogLevel::ALL | LogLevel::DEBUG,
            file: PathBuf::from("report.html"),
            ..LoggerConfig::default()
        };

        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("\"Xhtml\""));
        assert!(json.contains("DEBUG | ALL"));

        let back: LoggerConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"format":"Text","level":"warning|error"}"#).expect("parse");
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.level, LogLevel::WARNING | LogLevel::ERROR);
        assert_eq!(config.file, PathBuf::from("log.txt"));
    }
}
