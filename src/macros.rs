//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use mutex_logger::prelude::*;
//! use mutex_logger::error;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! error!(logger, "Server stopped");
//!
//! // With format arguments
//! let port = 8080;
//! error!(logger, "Could not bind port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use mutex_logger::prelude::*;
/// # let logger = Logger::new();
/// use mutex_logger::log;
/// log!(logger, LogLevel::ERROR, "Simple message");
/// log!(logger, LogLevel::ERROR | LogLevel::WARNING, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_level(format!($($arg)+), $level)
    };
}

/// Report an error value with a formatted message.
///
/// # Examples
///
/// ```
/// # use mutex_logger::prelude::*;
/// # let logger = Logger::new();
/// use mutex_logger::exception;
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "broken pipe");
/// exception!(logger, &err, "Upload of {} failed", "report.csv");
/// ```
#[macro_export]
macro_rules! exception {
    ($logger:expr, $err:expr, $($arg:tt)+) => {
        $logger.exception($err, format!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::ERROR, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use mutex_logger::prelude::*;
/// # let logger = Logger::new();
/// use mutex_logger::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::WARNING, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::INFO, $($arg)+)
    };
}

/// Log a custom-level message.
#[macro_export]
macro_rules! custom {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::CUSTOM, $($arg)+)
    };
}

/// Log a debug-level message; the line names the calling thread.
///
/// # Examples
///
/// ```
/// # use mutex_logger::prelude::*;
/// # let logger = Logger::new();
/// # logger.set_level(LogLevel::ALL | LogLevel::DEBUG);
/// use mutex_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::DEBUG, $($arg)+)
    };
}
