//! Log callback channel.
//!
//! The core never writes to stdout or stderr. Hosts that want diagnostics
//! register a callback and receive [`LogRecord`]s at or above the configured
//! level; without a callback every `emit_log` is a cheap no-op.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

/// Severity of a log record, ordered from most to least verbose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_u8(self) -> u8 {
        match self {
            Self::Trace => 0,
            Self::Debug => 1,
            Self::Info => 2,
            Self::Warn => 3,
            Self::Error => 4,
        }
    }
}

/// A single log record handed to the host callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    /// Subsystem that produced the record (`"highlight"`, `"loader"`, ...).
    pub target: &'a str,
    pub message: &'a str,
}

type LogCallback = Arc<dyn Fn(&LogRecord<'_>) + Send + Sync + 'static>;

static MAX_LEVEL: AtomicU8 = AtomicU8::new(1);

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(&LogRecord<'_>) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Arc::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Set the least severe level that is still delivered (default: `Debug`).
pub fn set_max_log_level(level: LogLevel) {
    MAX_LEVEL.store(level.as_u8(), Ordering::Relaxed);
}

/// Check whether a record at `level` would be delivered.
#[must_use]
pub fn log_enabled(level: LogLevel) -> bool {
    level.as_u8() >= MAX_LEVEL.load(Ordering::Relaxed)
}

/// Emit a log record to the registered callback.
///
/// The callback runs after the registry lock is released, so it may log or
/// swap the callback itself.
pub fn emit_log(level: LogLevel, target: &str, message: &str) {
    if !log_enabled(level) {
        return;
    }
    let callback = match log_callback().lock() {
        Ok(guard) => guard.as_ref().map(Arc::clone),
        Err(_) => return,
    };
    if let Some(callback) = callback {
        callback(&LogRecord {
            level,
            target,
            message,
        });
    }
}
