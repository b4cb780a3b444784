//! Core logging types
//!
//! Severity levels and the per-call log record.

mod level;
mod record;

pub use level::Level;
pub use record::{format_timestamp, LogData, LogRecord};
