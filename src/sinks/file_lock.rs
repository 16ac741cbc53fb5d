//! Process-wide registry of per-file write locks
//!
//! Every path resolves to one [`FileLock`] shared by all loggers and threads
//! in the process. Writers to the same file are serialized; writers to
//! different files never wait on each other. Entries nobody holds are pruned
//! when a new path is registered, unless they carry an abandoned flag.

use crate::core::{LoggerError, Result};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

static REGISTRY: Lazy<Mutex<HashMap<PathBuf, Arc<FileLock>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Lock guarding writes to `path`
///
/// # Example
///
/// ```
/// use mutex_logger::sinks::file_lock;
/// use std::time::Duration;
///
/// let lock = file_lock::lock_for("app.log");
/// let guard = lock.acquire(Duration::from_millis(100)).unwrap();
/// assert!(!guard.recovered_abandoned());
/// ```
#[derive(Debug)]
pub struct FileLock {
    path: PathBuf,
    state: Mutex<LockState>,
}

#[derive(Debug, Default)]
struct LockState {
    /// Set when a holder panicked with the guard alive
    abandoned: bool,
}

/// Holds the lock until dropped
pub struct FileLockGuard<'a> {
    state: MutexGuard<'a, LockState>,
    recovered: bool,
}

/// Lock for `path`, created on first use
pub fn lock_for(path: impl AsRef<Path>) -> Arc<FileLock> {
    let key = resolve(path.as_ref());
    let mut registry = REGISTRY.lock();
    if let Some(lock) = registry.get(&key) {
        return Arc::clone(lock);
    }

    registry.retain(|_, lock| Arc::strong_count(lock) > 1 || lock.is_abandoned());
    let lock = Arc::new(FileLock::new(key.clone()));
    registry.insert(key, Arc::clone(&lock));
    lock
}

/// Absolute form of `path`, so `log.txt` and `./log.txt` share a lock.
/// Symlinks and `..` are not resolved; the file may not exist yet.
fn resolve(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

impl FileLock {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: Mutex::new(LockState::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wait up to `timeout` for the lock
    pub fn acquire(&self, timeout: Duration) -> Result<FileLockGuard<'_>> {
        let mut state = self
            .state
            .try_lock_for(timeout)
            .ok_or_else(|| LoggerError::lock_timeout(self.path.display().to_string(), timeout))?;

        let recovered = std::mem::take(&mut state.abandoned);
        Ok(FileLockGuard { state, recovered })
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// A held lock counts as abandoned until its holder is known to be gone
    fn is_abandoned(&self) -> bool {
        self.state.try_lock().map_or(true, |state| state.abandoned)
    }
}

impl FileLockGuard<'_> {
    /// True if the previous holder panicked while holding the lock
    pub fn recovered_abandoned(&self) -> bool {
        self.recovered
    }
}

impl Drop for FileLockGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.state.abandoned = true;
        }
    }
}
