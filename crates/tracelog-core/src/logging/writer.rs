//! The log writer: filter, assemble, render, write

use std::fmt::Display;
use std::sync::Arc;

use crate::config::{LogConfig, LogFormat};
use crate::types::{Level, LogData, LogRecord};
use super::console::{render_console, HostCapabilities, StdoutSink};
use super::trace_id::generate_trace_id;
use super::traits::SharedSink;

/// Leveled writer bound to one configuration and an optional trace id
///
/// Create one per request or operation to tie its lines together:
///
/// ```
/// use tracelog_core::{LogConfig, LogWriter, log_data};
///
/// let base = LogWriter::new(LogConfig::default(), None);
/// let log = base.new_trace_id();
/// log.info("auth", "login", "user signed in", Some(&log_data! { "user": "ada" }));
/// ```
///
/// Cloning is cheap; derived writers share the sink.
#[derive(Clone)]
pub struct LogWriter {
    config: LogConfig,
    trace_id: Option<String>,
    ansi_color: bool,
    sink: SharedSink,
}

impl std::fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogWriter")
            .field("config", &self.config)
            .field("trace_id", &self.trace_id)
            .field("ansi_color", &self.ansi_color)
            .finish()
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new(LogConfig::default(), None)
    }
}

impl LogWriter {
    /// Create a writer targeting stdout with host-detected color support
    pub fn new(config: LogConfig, trace_id: Option<String>) -> Self {
        Self {
            config,
            trace_id,
            ansi_color: HostCapabilities::detect().ansi_color,
            sink: Arc::new(StdoutSink::new()),
        }
    }

    /// Override the detected host capabilities
    pub fn with_capabilities(mut self, capabilities: HostCapabilities) -> Self {
        self.ansi_color = capabilities.ansi_color;
        self
    }

    /// Route lines to another sink
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> LogConfig {
        self.config
    }

    /// The bound trace id, if any
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn ansi_color(&self) -> bool {
        self.ansi_color
    }

    /// Derive a writer carrying `trace_id`; `self` is left unchanged
    pub fn with_trace_id(&self, trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: Some(trace_id.into()),
            ..self.clone()
        }
    }

    /// Derive a writer carrying a freshly generated trace id
    pub fn new_trace_id(&self) -> Self {
        self.with_trace_id(generate_trace_id())
    }

    /// Whether a call at `level` would be written
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.config.level)
    }

    pub fn debug(&self, component: &str, action: &str, message: &str, data: Option<&LogData>) {
        self.log(Level::Debug, component, action, message, None, data);
    }

    pub fn info(&self, component: &str, action: &str, message: &str, data: Option<&LogData>) {
        self.log(Level::Info, component, action, message, None, data);
    }

    pub fn warn(&self, component: &str, action: &str, message: &str, data: Option<&LogData>) {
        self.log(Level::Warn, component, action, message, None, data);
    }

    /// Log at error level; `error` is reduced to its display text
    pub fn error(
        &self,
        component: &str,
        action: &str,
        message: &str,
        error: Option<&dyn Display>,
        data: Option<&LogData>,
    ) {
        self.log(Level::Error, component, action, message, error, data);
    }

    /// Shared emission path
    ///
    /// Calls below the configured minimum return before a timestamp is taken.
    pub fn log(
        &self,
        level: Level,
        component: &str,
        action: &str,
        message: &str,
        error: Option<&dyn Display>,
        data: Option<&LogData>,
    ) {
        if !self.enabled(level) {
            return;
        }

        let record = LogRecord::new(level, component, action, message)
            .with_trace_id(self.trace_id())
            .with_error(error)
            .with_data(data);

        if let Some(line) = self.render(&record) {
            self.sink.write_line(&line);
        }
    }

    /// Render a record in this writer's format
    pub fn render(&self, record: &LogRecord<'_>) -> Option<String> {
        match self.config.format {
            // serde_json::Value payloads always encode
            LogFormat::Structured => record.to_json_line().ok(),
            LogFormat::ConsoleText => Some(render_console(record, self.ansi_color)),
        }
    }
}
