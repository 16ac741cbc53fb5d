//! Console sink implementations

use crate::core::LogLevel;
#[cfg(feature = "console")]
use colored::Colorize;
use parking_lot::Mutex;
use std::sync::Arc;

/// Line-oriented console output
///
/// Console writes take no logger lock; lines from different threads may
/// interleave at line granularity.
pub trait ConsoleSink: Send + Sync {
    /// Write one line; `level` is the level the line was logged at
    fn write_line(&self, level: LogLevel, line: &str);

    fn name(&self) -> &str;
}

/// Writes to standard output
pub struct StdoutConsole {
    use_colors: bool,
}

impl StdoutConsole {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    /// Color whole lines by level. Only available with the `console` feature.
    #[cfg(feature = "console")]
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    #[cfg(feature = "console")]
    fn paint(&self, level: LogLevel, line: &str) -> String {
        if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line.to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, _level: LogLevel, line: &str) -> String {
        line.to_string()
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for StdoutConsole {
    fn write_line(&self, level: LogLevel, line: &str) {
        if self.use_colors {
            println!("{}", self.paint(level, line));
        } else {
            println!("{}", line);
        }
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// Keeps every line in memory
///
/// Clones share the same buffer, so a host can hand one clone to the logger
/// and read the other.
///
/// ```
/// use mutex_logger::prelude::*;
/// use std::sync::Arc;
///
/// let console = MemoryConsole::new();
/// let logger = Logger::builder()
///     .console(Arc::new(console.clone()))
///     .build();
///
/// logger.error("disk full");
/// assert!(console.lines()[0].ends_with("ERROR: disk full"));
/// ```
#[derive(Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ConsoleSink for MemoryConsole {
    fn write_line(&self, _level: LogLevel, line: &str) {
        self.lines.lock().push(line.to_string());
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_shares_buffer() {
        let console = MemoryConsole::new();
        let handle = console.clone();

        console.write_line(LogLevel::INFO, "first");
        handle.write_line(LogLevel::ERROR, "second");

        assert_eq!(console.lines(), vec!["first", "second"]);
        assert_eq!(handle.len(), 2);

        handle.clear();
        assert!(console.is_empty());
    }

    #[test]
    fn test_stdout_console_name() {
        assert_eq!(StdoutConsole::new().name(), "stdout");
        StdoutConsole::default().write_line(LogLevel::INFO, "stdout console smoke line");
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_paint_without_colors_is_verbatim() {
        let console = StdoutConsole::with_colors(false);
        assert_eq!(console.paint(LogLevel::ERROR, "plain"), "plain");
    }
}
