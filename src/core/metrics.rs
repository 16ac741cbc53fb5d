//! Logger metrics for observability
//!
//! Counters for the outcomes a write can have: written, filtered out,
//! dropped on lock timeout, failed with I/O, or written after recovering
//! an abandoned lock.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use mutex_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dropped();
/// metrics.record_written();
///
/// assert_eq!(metrics.dropped_count(), 1);
/// assert_eq!(metrics.lines_written(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to a sink successfully
    lines_written: AtomicU64,

    /// Messages discarded by the level filter
    filtered_count: AtomicU64,

    /// File writes dropped because the lock wait timed out
    dropped_count: AtomicU64,

    /// File writes that failed with an I/O error
    io_failures: AtomicU64,

    /// Locks found abandoned by a panicking holder
    abandoned_locks: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
            io_failures: AtomicU64::new(0),
            abandoned_locks: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn io_failures(&self) -> u64 {
        self.io_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn abandoned_locks(&self) -> u64 {
        self.abandoned_locks.load(Ordering::Relaxed)
    }

    /// Record a written line, returns the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_io_failure(&self) -> u64 {
        self.io_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_abandoned_lock(&self) -> u64 {
        self.abandoned_locks.fetch_add(1, Ordering::Relaxed)
    }

    /// Get drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been written or dropped.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.lines_written() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.filtered_count.store(0, Ordering::Relaxed);
        self.dropped_count.store(0, Ordering::Relaxed);
        self.io_failures.store(0, Ordering::Relaxed);
        self.abandoned_locks.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            filtered_count: AtomicU64::new(self.filtered_count()),
            dropped_count: AtomicU64::new(self.dropped_count()),
            io_failures: AtomicU64::new(self.io_failures()),
            abandoned_locks: AtomicU64::new(self.abandoned_locks()),
        }
    }
}
