//! File sink implementation
//!
//! One call is one open/write/flush/close cycle. Callers are expected to
//! hold the path's [`FileLock`](super::file_lock::FileLock) around it.
//! With the `file` feature the open file is also locked at the OS level,
//! so other processes using advisory locks are kept out too.

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;
#[cfg(feature = "file")]
use std::time::Instant;

/// Pause between attempts on a contended OS lock
#[cfg(feature = "file")]
const LOCK_RETRY_INTERVAL: Duration = Duration::from_millis(2);

#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink {
    _private: (),
}

impl FileSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `lines` to `path`, each followed by a newline.
    ///
    /// With `append == false` the file is truncated first. An empty `lines`
    /// still creates or truncates the file. Waits at most `lock_wait` for the
    /// OS lock and returns [`LoggerError::LockTimeout`] when it expires.
    pub fn write_lines<S: AsRef<str>>(
        &self,
        path: &Path,
        lines: &[S],
        append: bool,
        lock_wait: Duration,
    ) -> Result<()> {
        let display = path.display().to_string();

        // Truncation waits until the OS lock is held
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(false)
            .open(path)
            .map_err(|e| LoggerError::io_operation("opening", &display, e))?;

        lock_os(&file, &display, lock_wait)?;

        if !append {
            file.set_len(0)
                .map_err(|e| LoggerError::io_operation("truncating", &display, e))?;
        }

        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line.as_ref())
                .map_err(|e| LoggerError::io_operation("writing", &display, e))?;
        }

        let file = writer
            .into_inner()
            .map_err(|e| LoggerError::io_operation("flushing", &display, e.into_error()))?;

        #[cfg(feature = "file")]
        fs2::FileExt::unlock(&file)
            .map_err(|e| LoggerError::io_operation("unlocking", &display, e))?;

        drop(file);
        Ok(())
    }
}

#[cfg(feature = "file")]
fn lock_os(file: &File, display: &str, lock_wait: Duration) -> Result<()> {
    use fs2::FileExt;

    let deadline = Instant::now() + lock_wait;
    loop {
        match file.try_lock_exclusive() {
            Ok(()) => return Ok(()),
            Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => {
                let now = Instant::now();
                if now >= deadline {
                    return Err(LoggerError::lock_timeout(display, lock_wait));
                }
                std::thread::sleep(LOCK_RETRY_INTERVAL.min(deadline - now));
            }
            Err(e) => return Err(LoggerError::io_operation("locking", display, e)),
        }
    }
}

#[cfg(not(feature = "file"))]
fn lock_os(_file: &File, _display: &str, _lock_wait: Duration) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const WAIT: Duration = Duration::from_millis(100);

    #[test]
    fn test_append_and_truncate() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("sink.log");
        let sink = FileSink::new();

        sink.write_lines(&path, &["one", "two"], true, WAIT).unwrap();
        sink.write_lines(&path, &["three"], true, WAIT).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\nthree\n");

        sink.write_lines(&path, &["fresh"], false, WAIT).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_empty_write_creates_and_truncates() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("empty.log");
        let sink = FileSink::new();
        let nothing: [&str; 0] = [];

        sink.write_lines(&path, &nothing, true, WAIT).unwrap();
        assert!(path.exists());

        sink.write_lines(&path, &["content"], true, WAIT).unwrap();
        sink.write_lines(&path, &nothing, false, WAIT).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("sink.log");

        let err = FileSink::new().write_lines(&path, &["x"], true, WAIT).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.is_io());
        assert!(err.to_string().contains("opening"));
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_os_lock_wait_is_bounded() {
        use fs2::FileExt;
        use std::time::Instant;

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("held.log");
        fs::write(&path, "kept\n").unwrap();

        let other = File::open(&path).unwrap();
        other.lock_exclusive().unwrap();

        let started = Instant::now();
        let err = FileSink::new()
            .write_lines(&path, &["blocked"], false, Duration::from_millis(50))
            .unwrap_err();
        assert!(matches!(err, LoggerError::LockTimeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(2));
        // Truncation never ran without the lock
        assert_eq!(fs::read_to_string(&path).unwrap(), "kept\n");

        other.unlock().unwrap();
        FileSink::new()
            .write_lines(&path, &["after"], true, WAIT)
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "kept\nafter\n");
    }
}
