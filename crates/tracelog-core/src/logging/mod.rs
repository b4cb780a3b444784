//! Leveled structured logging
//!
//! - `LogWriter`: filters, renders and writes log lines
//! - `LineSink` implementations: `StdoutSink`, `MemorySink`, `NullSink`
//! - Global convenience functions backed by a process-wide writer

mod traits;
mod noop;
mod memory;
mod console;
mod trace_id;
mod writer;
pub mod global;

pub use traits::{LineSink, BoxedSink, SharedSink};
pub use noop::NullSink;
pub use memory::MemorySink;
pub use console::{StdoutSink, HostCapabilities, render_console, render_console_in, render_data, level_color};
pub use trace_id::generate_trace_id;
pub use writer::LogWriter;

pub use global::{init, install, current, with_trace_id, new_trace_id, debug, info, warn, error};

/// Build a `LogData` payload from `"key": value` pairs
///
/// Values are anything `Serialize`; nested objects go through `serde_json::json!`.
///
/// ```
/// use tracelog_core::log_data;
///
/// let data = log_data! { "key": "k1", "attempt": 3 };
/// assert_eq!(data["attempt"], 3);
/// ```
#[macro_export]
macro_rules! log_data {
    () => {
        $crate::LogData::new()
    };
    ($($key:literal : $value:expr),+ $(,)?) => {{
        let mut data = $crate::LogData::new();
        $(
            data.insert(::std::string::String::from($key), $crate::__serde_json::json!($value));
        )+
        data
    }};
}
