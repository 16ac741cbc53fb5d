//! Error types for the logger system
//!
//! None of these escape the public logging surface: the logger routes them
//! to the exception path, to metrics, or to stderr. They are public so that
//! hosts can inspect what the exception path reports and so that lower-level
//! pieces (file sink, lock registry, parsers) can return `Result`.

use std::time::Duration;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation} '{path}'")]
    IoOperation {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The per-file lock was not acquired in time; the write was dropped
    #[error("Timed out after {timeout:?} waiting for the lock on '{path}'")]
    LockTimeout { path: String, timeout: Duration },

    /// The previous holder of the per-file lock panicked while holding it
    #[error("Lock on '{path}' was abandoned by a panicking writer and has been recovered")]
    AbandonedLock { path: String },

    /// Level string could not be parsed
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Format string could not be parsed
    #[error("Invalid log format: '{0}'")]
    InvalidFormat(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a lock timeout error
    pub fn lock_timeout(path: impl Into<String>, timeout: Duration) -> Self {
        LoggerError::LockTimeout {
            path: path.into(),
            timeout,
        }
    }

    /// Create an abandoned lock error
    pub fn abandoned_lock(path: impl Into<String>) -> Self {
        LoggerError::AbandonedLock { path: path.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Whether this error, or anything in its source chain, is an I/O failure
    pub fn is_io(&self) -> bool {
        is_io_failure(self)
    }
}

/// Walk `error` and its `source()` chain looking for a `std::io::Error`.
pub fn is_io_failure(error: &(dyn std::error::Error + 'static)) -> bool {
    std::iter::successors(Some(error), |e| e.source()).any(|e| e.is::<std::io::Error>())
}

/// Render an error and its whole source chain on one line.
pub fn error_detail(error: &(dyn std::error::Error + 'static)) -> String {
    std::iter::successors(Some(error), |e| e.source())
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(": caused by: ")
}
