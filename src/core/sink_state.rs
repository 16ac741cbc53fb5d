//! File sink circuit breaker
//!
//! A logger starts `Normal`. The first file I/O failure moves it to
//! `Degraded`: the format is forced to console and stays there until the
//! host sets a format again.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SinkState {
    #[default]
    Normal,
    /// File output disabled after an I/O failure
    Degraded,
}

impl SinkState {
    #[must_use]
    pub const fn is_degraded(self) -> bool {
        matches!(self, SinkState::Degraded)
    }
}

impl fmt::Display for SinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkState::Normal => f.write_str("Normal"),
            SinkState::Degraded => f.write_str("Degraded (console only)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        assert_eq!(SinkState::default(), SinkState::Normal);
        assert!(!SinkState::Normal.is_degraded());
        assert!(SinkState::Degraded.is_degraded());
    }
}
