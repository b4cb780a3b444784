//! Process-wide writer for call sites that don't carry one
//!
//! The slot starts out as `LogWriter::default()` (info, structured, stdout)
//! on first use. `init` swaps in a new writer unconditionally; call it once
//! during startup. Re-initializing while other threads are logging is safe
//! but unordered: each call sees either the old or the new writer.

use std::fmt::Display;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::config::LogConfig;
use crate::types::LogData;
use super::writer::LogWriter;

/// Global writer slot
static GLOBAL_WRITER: Lazy<RwLock<LogWriter>> = Lazy::new(|| RwLock::new(LogWriter::default()));

/// Replace the global writer with one built from `config`
pub fn init(config: LogConfig) -> LogWriter {
    install(LogWriter::new(config, None))
}

/// Replace the global writer with a prebuilt one (custom sink, capabilities)
pub fn install(writer: LogWriter) -> LogWriter {
    *GLOBAL_WRITER.write() = writer.clone();
    writer
}

/// The current global writer
pub fn current() -> LogWriter {
    GLOBAL_WRITER.read().clone()
}

/// Derive a writer carrying `trace_id` from the global writer
pub fn with_trace_id(trace_id: impl Into<String>) -> LogWriter {
    current().with_trace_id(trace_id)
}

/// Derive a writer with a fresh trace id from the global writer
pub fn new_trace_id() -> LogWriter {
    current().new_trace_id()
}

/// Log a debug message through the global writer
pub fn debug(component: &str, action: &str, message: &str, data: Option<&LogData>) {
    current().debug(component, action, message, data);
}

/// Log an info message through the global writer
pub fn info(component: &str, action: &str, message: &str, data: Option<&LogData>) {
    current().info(component, action, message, data);
}

/// Log a warning through the global writer
pub fn warn(component: &str, action: &str, message: &str, data: Option<&LogData>) {
    current().warn(component, action, message, data);
}

/// Log an error through the global writer
pub fn error(
    component: &str,
    action: &str,
    message: &str,
    error: Option<&dyn Display>,
    data: Option<&LogData>,
) {
    current().error(component, action, message, error, data);
}
