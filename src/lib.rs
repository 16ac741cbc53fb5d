//! # Mutex Logger
//!
//! A small leveled logger that writes to the console, a text file or an
//! XHTML file, with every file write guarded by a per-file lock.
//!
//! ## Features
//!
//! - **Bit-flag levels**: combine levels with `|`; `ALL` expands to every level but `DEBUG`
//! - **Thread Safe**: writes to the same file are serialized across loggers and threads
//! - **Never Fails the Host**: lock timeouts drop the write, I/O failures fall back to the console
//! - **XHTML Output**: optional document header and footer around `<br>`-framed lines

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ActiveLevels, Clock, FixedClock, LogFormat, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Result, SinkState, SystemClock,
        TimestampFormat, DEFAULT_LOCK_TIMEOUT,
    };
    pub use crate::sinks::{ConsoleSink, MemoryConsole, StdoutConsole};
}

pub use crate::core::{
    ActiveLevels, Clock, FixedClock, LogFormat, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, Result, SinkState, SystemClock, TimestampFormat,
    DEFAULT_LOCK_TIMEOUT,
};
pub use crate::sinks::{ConsoleSink, MemoryConsole, StdoutConsole};
