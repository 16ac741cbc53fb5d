//! Identity of the calling thread, used by DEBUG prefixes

use std::cell::RefCell;
use std::fmt;

// Thread-local cache so repeated DEBUG lines don't re-format the id
thread_local! {
    static IDENTITY_CACHE: RefCell<Option<ThreadIdentity>> = const { RefCell::new(None) };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadIdentity {
    /// Numeric part of `std::thread::ThreadId`
    pub id: String,
    /// Thread name, or `unnamed`
    pub name: String,
}

impl ThreadIdentity {
    /// Identity of the current thread, computed once per thread
    pub fn current() -> Self {
        IDENTITY_CACHE.with(|cache| {
            cache
                .borrow_mut()
                .get_or_insert_with(Self::compute)
                .clone()
        })
    }

    fn compute() -> Self {
        let thread = std::thread::current();
        // `ThreadId` only exposes Debug: "ThreadId(7)"
        let raw = format!("{:?}", thread.id());
        let id = raw
            .trim_start_matches("ThreadId(")
            .trim_end_matches(')')
            .to_string();
        let name = thread.name().unwrap_or("unnamed").to_string();
        Self { id, name }
    }
}

impl fmt::Display for ThreadIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thread {}({})", self.id, self.name)
    }
}
