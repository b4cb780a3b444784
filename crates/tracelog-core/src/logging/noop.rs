//! Discarding sink

use super::traits::LineSink;

/// A sink that drops every line
///
/// Useful for benchmarks or when output is not wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl LineSink for NullSink {
    fn write_line(&self, _line: &str) {}
}
