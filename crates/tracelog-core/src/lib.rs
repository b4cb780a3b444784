//! tracelog core
//!
//! Leveled structured logging with optional trace ids and two output
//! encodings: one JSON object per line, or a colored console line.
//!
//! ## Writers
//!
//! A `LogWriter` holds a `LogConfig` (minimum level and format) and an
//! optional trace id. Create one per request to tie its lines together:
//!
//! ```rust,no_run
//! use tracelog_core::{LogConfig, LogFormat, LogWriter, Level, log_data};
//!
//! let base = LogWriter::new(LogConfig::new(Level::Debug, LogFormat::ConsoleText), None);
//! let log = base.new_trace_id();
//!
//! log.debug("cache", "get", "miss", Some(&log_data! { "key": "k1" }));
//!
//! let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout");
//! log.error("auth", "login", "failed", Some(&err), None);
//! ```
//!
//! ## Global writer
//!
//! Call sites without a writer handle can use the module-level functions,
//! which forward to a process-wide writer (info, structured by default):
//!
//! ```rust,no_run
//! use tracelog_core::{init, info, LogConfig, Level};
//!
//! init(LogConfig::default().with_level(Level::Warn));
//! info("auth", "login", "ok", None); // filtered out
//! ```

pub mod types;
pub mod config;
pub mod logging;

pub use types::{Level, LogData, LogRecord};

pub use config::{LogConfig, LogFormat, ConfigError, ConfigResult};

pub use logging::{
    LogWriter, LineSink, SharedSink, StdoutSink, MemorySink, NullSink, HostCapabilities,
    generate_trace_id,
    // Global writer
    init, install, current, with_trace_id, new_trace_id, debug, info, warn, error,
};

#[doc(hidden)]
pub use serde_json as __serde_json;
