//! End-to-end output checks through explicit writers

use std::sync::Arc;

use serde_json::{json, Value};
use tracelog_core::{
    log_data, HostCapabilities, Level, LogConfig, LogFormat, LogWriter, MemorySink,
};

fn writer(config: LogConfig, capabilities: HostCapabilities) -> (LogWriter, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let writer = LogWriter::new(config, None)
        .with_capabilities(capabilities)
        .with_sink(sink.clone());
    (writer, sink)
}

#[test]
fn test_structured_line_round_trips() {
    let (log, sink) = writer(
        LogConfig::new(Level::Debug, LogFormat::Structured),
        HostCapabilities::colored(),
    );
    let log = log.with_trace_id("20261019081530-abcd1234");

    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such bucket");
    log.error(
        "storage",
        "upload",
        "upload failed",
        Some(&err),
        Some(&log_data! { "bucket": "media", "size": 1024, "meta": json!({"mime": "image/png"}) }),
    );

    let line = sink.last().unwrap();
    assert!(!line.contains('\n'));
    assert!(!line.contains('\x1b'));

    let value: Value = serde_json::from_str(&line).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["action", "component", "data", "error", "level", "message", "timestamp", "trace_id"]
    );

    assert_eq!(value["trace_id"], "20261019081530-abcd1234");
    assert_eq!(value["error"], "no such bucket");
    assert_eq!(
        value["data"],
        json!({"bucket": "media", "size": 1024, "meta": {"mime": "image/png"}})
    );

    let timestamp = value["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}

#[test]
fn test_console_line_is_deterministic_without_color() {
    let (log, sink) = writer(
        LogConfig::new(Level::Info, LogFormat::ConsoleText),
        HostCapabilities::plain(),
    );

    log.debug("cache", "get", "filtered", None);
    log.warn("cache", "get", "slow", Some(&log_data! { "ms": 250 }));
    let err = std::io::Error::new(std::io::ErrorKind::Other, "timeout");
    log.error("cache", "get", "failed", Some(&err), None);

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);

    let tails: Vec<_> = lines
        .iter()
        .map(|l| l.split_once(' ').unwrap().1.to_string())
        .collect();
    assert_eq!(tails[0], "WARN cache:get - slow {ms: 250}");
    assert_eq!(tails[1], "ERROR cache:get - failed Error: timeout");
}

#[test]
fn test_console_line_colored() {
    let (log, sink) = writer(
        LogConfig::new(Level::Debug, LogFormat::ConsoleText),
        HostCapabilities::colored(),
    );

    log.info("auth", "login", "ok", None);
    let line = sink.last().unwrap();
    assert!(line.contains("\x1b[32mINFO\x1b[0m auth:login - ok"));
}

#[test]
fn test_config_from_yaml_drives_writer() {
    let config = LogConfig::from_yaml_str("level: warn\nformat: json\n").unwrap();
    let (log, sink) = writer(config, HostCapabilities::plain());

    log.info("auth", "login", "ok", None);
    assert!(sink.is_empty());

    log.warn("auth", "login", "retry", None);
    assert_eq!(sink.len(), 1);
}
