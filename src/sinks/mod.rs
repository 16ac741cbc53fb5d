//! Sinks a formatted line can be written to

pub mod console;
pub mod file;
pub mod file_lock;

pub use console::{ConsoleSink, MemoryConsole, StdoutConsole};
pub use file::FileSink;
pub use file_lock::{FileLock, FileLockGuard};
