//! Line sink trait definition

use std::sync::Arc;

/// Destination for rendered log lines
///
/// Implementations:
/// - `StdoutSink`: Writes to standard output (default)
/// - `MemorySink`: Captures lines for tests
/// - `NullSink`: Discards everything
pub trait LineSink: Send + Sync {
    /// Write one complete line; the sink appends the line terminator
    fn write_line(&self, line: &str);
}

/// Type alias for a boxed sink
pub type BoxedSink = Box<dyn LineSink>;

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn LineSink>;

impl<T: LineSink + ?Sized> LineSink for Arc<T> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

impl<T: LineSink + ?Sized> LineSink for Box<T> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}
