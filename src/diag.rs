//! Diagnostics sink
//!
//! All converter diagnostics flow through an explicitly injected [`LogSink`]
//! capability rather than ambient global state, so independent conversions
//! can run side by side with their own sinks and tests can count exactly
//! which warnings a conversion produced.

use std::cell::RefCell;
use std::rc::Rc;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Warning,
    Error,
}

/// Receiver for converter diagnostics.
///
/// Implementations must not panic and must not block.
pub trait LogSink {
    fn write(&self, message: &str, level: LogLevel);
}

/// Shared sinks forward transparently, so a caller can hand a sink to the
/// converter and keep a handle to it for inspection.
impl<T: LogSink + ?Sized> LogSink for Rc<T> {
    fn write(&self, message: &str, level: LogLevel) {
        (**self).write(message, level);
    }
}

/// Default sink that forwards diagnostics to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLog;

impl LogSink for ConsoleLog {
    fn write(&self, message: &str, level: LogLevel) {
        match level {
            LogLevel::Warning => log::warn!("{message}"),
            LogLevel::Error => log::error!("{message}"),
        }
    }
}

/// Sink that records every message in memory.
///
/// Single-threaded by design, matching the synchronous conversion model.
#[derive(Debug, Default)]
pub struct MemoryLog {
    messages: RefCell<Vec<(String, LogLevel)>>,
}

impl MemoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded messages in emission order.
    #[must_use]
    pub fn messages(&self) -> Vec<(String, LogLevel)> {
        self.messages.borrow().clone()
    }

    /// Number of recorded messages at [`LogLevel::Warning`].
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.messages
            .borrow()
            .iter()
            .filter(|(_, level)| *level == LogLevel::Warning)
            .count()
    }
}

impl LogSink for MemoryLog {
    fn write(&self, message: &str, level: LogLevel) {
        self.messages.borrow_mut().push((message.to_string(), level));
    }
}
