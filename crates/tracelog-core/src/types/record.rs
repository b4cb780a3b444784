//! Log record assembled for a single emission

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use super::level::Level;

/// Free-form structured payload attached to a log call
pub type LogData = serde_json::Map<String, serde_json::Value>;

/// One log entry, built per call and dropped once rendered
///
/// Optional fields are skipped during serialization rather than written as
/// `null`, so a record without a trace id, error or payload produces only the
/// mandatory keys.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord<'a> {
    pub level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<&'a str>,
    pub component: &'a str,
    pub action: &'a str,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a LogData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl<'a> LogRecord<'a> {
    /// Create a record stamped with the current instant
    pub fn new(level: Level, component: &'a str, action: &'a str, message: &'a str) -> Self {
        Self {
            level,
            trace_id: None,
            component,
            action,
            message,
            data: None,
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach a trace id
    pub fn with_trace_id(mut self, trace_id: Option<&'a str>) -> Self {
        self.trace_id = trace_id;
        self
    }

    /// Attach a payload; empty payloads are dropped
    pub fn with_data(mut self, data: Option<&'a LogData>) -> Self {
        self.data = data.filter(|d| !d.is_empty());
        self
    }

    /// Attach an error, keeping only its display text
    pub fn with_error(mut self, error: Option<&dyn std::fmt::Display>) -> Self {
        self.error = error.map(|e| e.to_string());
        self
    }

    /// Override the timestamp
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Timestamp in the wire form used by structured output
    pub fn timestamp_iso(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// Encode as a single-line JSON object
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// RFC 3339 UTC with millisecond precision, e.g. `2026-10-19T08:15:30.123Z`
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(timestamp))
}
