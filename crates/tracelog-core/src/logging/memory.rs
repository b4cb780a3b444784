//! In-memory sink

use parking_lot::Mutex;

use super::traits::LineSink;

/// Sink that keeps every line in memory, for tests
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Number of captured lines
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Most recent line, if any
    pub fn last(&self) -> Option<String> {
        self.lines.lock().last().cloned()
    }

    /// Drain captured lines
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_line("one");
        sink.write_line("two");
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.last().as_deref(), Some("two"));

        assert_eq!(sink.take(), vec!["one".to_string(), "two".to_string()]);
        assert!(sink.is_empty());
    }
}
