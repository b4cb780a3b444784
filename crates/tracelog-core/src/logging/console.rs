//! Console output: stdout sink and human-readable line rendering

use std::fmt::{Display, Write as _};
use std::io::Write as _;

use chrono::{Local, TimeZone};
use serde_json::Value;

use super::traits::LineSink;
use crate::types::{Level, LogData, LogRecord};

const RESET: &str = "\x1b[0m";

/// A sink that writes each line to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{}", line);
    }
}

/// Capabilities of the host the writer runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Whether ANSI color escapes may be emitted
    pub ansi_color: bool,
}

impl HostCapabilities {
    /// Browser-like hosts (wasm targets) get no color; everything else does
    pub fn detect() -> Self {
        Self {
            ansi_color: !cfg!(target_family = "wasm"),
        }
    }

    pub fn plain() -> Self {
        Self { ansi_color: false }
    }

    pub fn colored() -> Self {
        Self { ansi_color: true }
    }
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self::detect()
    }
}

/// ANSI color escape for a level
pub fn level_color(level: Level) -> &'static str {
    match level {
        Level::Debug => "\x1b[36m",
        Level::Info => "\x1b[32m",
        Level::Warn => "\x1b[33m",
        Level::Error => "\x1b[31m",
    }
}

/// Render a record as a console line using host-local time
pub fn render_console(record: &LogRecord<'_>, ansi_color: bool) -> String {
    render_console_in(record, ansi_color, &Local)
}

/// Render a record as a console line with the clock shown in `tz`
///
/// Layout: `HH:MM:SS LEVEL [trace] component:action - message {data} Error: text`
pub fn render_console_in<Tz>(record: &LogRecord<'_>, ansi_color: bool, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let time = record.timestamp.with_timezone(tz).format("%H:%M:%S");
    let (color, reset) = if ansi_color {
        (level_color(record.level), RESET)
    } else {
        ("", "")
    };

    let mut line = format!("{} {}{}{} ", time, color, record.level.label(), reset);
    if let Some(trace_id) = record.trace_id {
        let _ = write!(line, "[{}] ", trace_id);
    }
    let _ = write!(line, "{}:{} - {}", record.component, record.action, record.message);

    if let Some(data) = record.data {
        line.push(' ');
        line.push_str(&render_data(data));
    }
    if let Some(error) = &record.error {
        let _ = write!(line, " Error: {}", error);
    }
    line
}

/// Render a payload as `{key: value, ...}`
pub fn render_data(data: &LogData) -> String {
    let mut out = String::new();
    write_object(&mut out, data);
    out
}

fn write_object(out: &mut String, map: &serde_json::Map<String, Value>) {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if is_bare_key(key) {
            out.push_str(key);
        } else {
            out.push_str(&Value::String(key.clone()).to_string());
        }
        out.push_str(": ");
        write_value(out, value);
    }
    out.push('}');
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Object(map) => write_object(out, map),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        other => out.push_str(&other.to_string()),
    }
}

fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn fixed_record<'a>(level: Level) -> LogRecord<'a> {
        LogRecord::new(level, "cache", "get", "miss")
            .at(Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 9).unwrap())
    }

    fn data(value: Value) -> LogData {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_colored_line_with_trace_and_data() {
        let payload = data(json!({"key": "k1"}));
        let record = fixed_record(Level::Debug)
            .with_trace_id(Some("abc123"))
            .with_data(Some(&payload));

        assert_eq!(
            render_console_in(&record, true, &Utc),
            "14:05:09 \x1b[36mDEBUG\x1b[0m [abc123] cache:get - miss {key: \"k1\"}"
        );
    }

    #[test]
    fn test_plain_line_has_no_escapes() {
        for level in Level::ALL {
            let line = render_console_in(&fixed_record(level), false, &Utc);
            assert!(!line.contains('\x1b'), "{}", line);
            assert!(line.contains(level.label()));
        }
    }

    #[test]
    fn test_every_level_is_colored_when_enabled() {
        for level in Level::ALL {
            let line = render_console_in(&fixed_record(level), true, &Utc);
            assert!(line.contains(level_color(level)));
            assert!(line.contains(RESET));
        }
    }

    #[test]
    fn test_absent_trace_adds_no_brackets() {
        let line = render_console_in(&fixed_record(Level::Info), false, &Utc);
        assert_eq!(line, "14:05:09 INFO cache:get - miss");
    }

    #[test]
    fn test_error_suffix() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let record = fixed_record(Level::Error).with_error(Some(&err));
        assert_eq!(
            render_console_in(&record, false, &Utc),
            "14:05:09 ERROR cache:get - miss Error: disk full"
        );
    }

    #[test]
    fn test_render_data_nested_and_quoted_keys() {
        let payload = data(json!({
            "count": 2,
            "content-type": "text/plain",
            "tags": ["a", 1, null],
            "inner": {"ok": true},
        }));
        assert_eq!(
            render_data(&payload),
            r#"{"content-type": "text/plain", count: 2, inner: {ok: true}, tags: ["a", 1, null]}"#
        );
    }

    #[test]
    fn test_detect_on_native_host_allows_color() {
        assert!(HostCapabilities::detect().ansi_color);
        assert!(!HostCapabilities::plain().ansi_color);
    }
}
