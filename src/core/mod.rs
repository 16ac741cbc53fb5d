//! Core logger types

pub mod config;
pub mod error;
pub mod log_format;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink_state;
pub mod thread_info;
pub mod timestamp;
pub mod xhtml;

pub use config::{LoggerConfig, DEFAULT_LOCK_TIMEOUT, DEFAULT_LOG_FILE};
pub use error::{LoggerError, Result};
pub use log_format::LogFormat;
pub use log_level::{ActiveLevels, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use sink_state::SinkState;
pub use thread_info::ThreadIdentity;
pub use timestamp::{Clock, FixedClock, SystemClock, TimestampFormat};
