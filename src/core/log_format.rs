//! Output format for log lines
//!
//! The format picks both the sink and the wrapping:
//! - Console: the line goes to standard output as is (default)
//! - Text: the line is appended to the log file as is
//! - Xhtml: the line is wrapped in `<br>`...`<br/>` and appended to the log file

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogFormat {
    /// Standard output
    ///
    /// Example: `2025-01-08 10:30:45 ERROR: disk full`
    #[default]
    Console,

    /// Plain text file
    ///
    /// Example: `2025-01-08 10:30:45 ERROR: disk full`
    Text,

    /// XHTML file, one `<br>`-framed line per entry
    ///
    /// Example: `<br>2025-01-08 10:30:45 ERROR: disk full<br/>`
    Xhtml,
}

impl LogFormat {
    /// Whether lines in this format are written to the log file
    #[must_use]
    pub const fn writes_to_file(self) -> bool {
        matches!(self, LogFormat::Text | LogFormat::Xhtml)
    }

    /// Build the final line for `prefix` + `text` in this format
    #[must_use]
    pub fn render(self, prefix: &str, text: &str) -> String {
        match self {
            LogFormat::Xhtml => format!("<br>{}{}<br/>", prefix, text),
            LogFormat::Text | LogFormat::Console => format!("{}{}", prefix, text),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogFormat::Console => "Console",
            LogFormat::Text => "Text",
            LogFormat::Xhtml => "Xhtml",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" | "stdout" => Ok(LogFormat::Console),
            "text" | "txt" => Ok(LogFormat::Text),
            "xhtml" | "html" => Ok(LogFormat::Xhtml),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}
