//! Log level definitions
//!
//! Levels are bit flags so that callers can build an active set with `|`.
//! `ALL` is a pseudo-level: assigning it through [`ActiveLevels::activate`]
//! turns on every real level except `DEBUG`, which has to be asked for
//! explicitly.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogLevel(u8);

impl LogLevel {
    pub const NONE: LogLevel = LogLevel(0);
    pub const EXCEPTION: LogLevel = LogLevel(1);
    pub const ERROR: LogLevel = LogLevel(2);
    pub const WARNING: LogLevel = LogLevel(4);
    pub const INFO: LogLevel = LogLevel(8);
    pub const CUSTOM: LogLevel = LogLevel(16);
    pub const DEBUG: LogLevel = LogLevel(32);
    pub const ALL: LogLevel = LogLevel(64);

    /// What `ALL` expands to when used as an activation preset
    pub const ALL_PRESET: LogLevel = LogLevel(1 | 2 | 4 | 8 | 16);

    const NAMED: [(LogLevel, &'static str); 7] = [
        (LogLevel::EXCEPTION, "EXCEPTION"),
        (LogLevel::ERROR, "ERROR"),
        (LogLevel::WARNING, "WARNING"),
        (LogLevel::INFO, "INFO"),
        (LogLevel::CUSTOM, "CUSTOM"),
        (LogLevel::DEBUG, "DEBUG"),
        (LogLevel::ALL, "ALL"),
    ];

    /// Build a level set from raw bits, kept verbatim
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        LogLevel(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`
    #[must_use]
    pub const fn contains(self, other: LogLevel) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if `self` and `other` share at least one bit
    #[must_use]
    pub const fn intersects(self, other: LogLevel) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: LogLevel) -> Self {
        LogLevel(self.0 | other.0)
    }

    /// Name of a single level, `None` for combined sets
    pub fn to_str(&self) -> Option<&'static str> {
        if self.is_empty() {
            return Some("NONE");
        }
        Self::NAMED
            .iter()
            .find(|(level, _)| level == self)
            .map(|(_, name)| *name)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match *self {
            LogLevel::EXCEPTION => BrightRed,
            LogLevel::ERROR => Red,
            LogLevel::WARNING => Yellow,
            LogLevel::INFO => Green,
            LogLevel::CUSTOM => Cyan,
            LogLevel::DEBUG => Blue,
            _ => White,
        }
    }
}

impl BitOr for LogLevel {
    type Output = LogLevel;

    fn bitor(self, rhs: LogLevel) -> LogLevel {
        self.union(rhs)
    }
}

impl BitOrAssign for LogLevel {
    fn bitor_assign(&mut self, rhs: LogLevel) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LogLevel {
    type Output = LogLevel;

    fn bitand(self, rhs: LogLevel) -> LogLevel {
        LogLevel(self.0 & rhs.0)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.to_str() {
            return f.write_str(name);
        }
        let mut first = true;
        for (level, name) in Self::NAMED.iter() {
            if self.contains(*level) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        // Bits outside the known domain are shown raw
        let unknown = self.0 & 0x80;
        if unknown != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{:#04x}", unknown)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogLevel({})", self)
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    /// Accepts a single name, a `|`-separated list of names, or a number
    /// (decimal or `0x` hexadecimal).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut level = LogLevel::NONE;
        for part in s.split('|').map(str::trim) {
            level |= match part.to_uppercase().as_str() {
                "NONE" => LogLevel::NONE,
                "EXCEPTION" => LogLevel::EXCEPTION,
                "ERROR" => LogLevel::ERROR,
                "WARNING" | "WARN" => LogLevel::WARNING,
                "INFO" => LogLevel::INFO,
                "CUSTOM" => LogLevel::CUSTOM,
                "DEBUG" => LogLevel::DEBUG,
                "ALL" => LogLevel::ALL,
                other => parse_bits(other)
                    .map(LogLevel)
                    .ok_or_else(|| LoggerError::InvalidLevel(s.to_string()))?,
            };
        }
        Ok(level)
    }
}

/// Decimal, or hexadecimal with a `0x` prefix as printed by `Display`
fn parse_bits(s: &str) -> Option<u8> {
    match s.strip_prefix("0X").or_else(|| s.strip_prefix("0x")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_string()
    }
}

/// The set of levels a logger currently writes.
///
/// Two ways in: [`ActiveLevels::activate`] applies the `ALL` preset policy,
/// [`ActiveLevels::raw`] stores the mask as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveLevels(LogLevel);

impl ActiveLevels {
    /// `EXCEPTION | ERROR`
    pub const DEFAULT: ActiveLevels = ActiveLevels(LogLevel(1 | 2));

    /// Expand `ALL` to [`LogLevel::ALL_PRESET`] (plus `DEBUG` if it was
    /// also requested); anything without the `ALL` bit is kept verbatim.
    #[must_use]
    pub const fn activate(requested: LogLevel) -> Self {
        if requested.contains(LogLevel::ALL) {
            let mut mask = LogLevel::ALL_PRESET;
            if requested.contains(LogLevel::DEBUG) {
                mask = mask.union(LogLevel::DEBUG);
            }
            ActiveLevels(mask)
        } else {
            ActiveLevels(requested)
        }
    }

    #[must_use]
    pub const fn raw(mask: LogLevel) -> Self {
        ActiveLevels(mask)
    }

    #[must_use]
    pub const fn mask(self) -> LogLevel {
        self.0
    }

    /// Whether a message tagged `level` passes the filter
    #[must_use]
    pub const fn admits(self, level: LogLevel) -> bool {
        level.intersects(self.0)
    }
}

impl Default for ActiveLevels {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<ActiveLevels> for LogLevel {
    fn from(active: ActiveLevels) -> Self {
        active.0
    }
}
