//! In-memory debug sink

use std::sync::RwLock;

use super::traits::DebugSink;

/// A sink that keeps every mirrored record in memory
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use levelog_core::logging::{DebugSink, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// sink.write_line("hello");
/// assert_eq!(sink.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RwLock<Vec<String>>,
}

impl MemorySink {
    /// Create a new empty memory sink
    pub fn new() -> Self {
        Self {
            lines: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the records received so far
    pub fn lines(&self) -> Vec<String> {
        let lines = self.lines.read().unwrap_or_else(|e| e.into_inner());
        lines.clone()
    }

    /// Number of records received
    pub fn len(&self) -> usize {
        let lines = self.lines.read().unwrap_or_else(|e| e.into_inner());
        lines.len()
    }

    /// Check if nothing has been received
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all received records
    pub fn clear(&self) {
        let mut lines = self.lines.write().unwrap_or_else(|e| e.into_inner());
        lines.clear();
    }
}

impl DebugSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn write_line(&self, line: &str) {
        let mut lines = self.lines.write().unwrap_or_else(|e| e.into_inner());
        lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_line("first");
        sink.write_line("second");
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), vec!["first".to_string(), "second".to_string()]);

        sink.clear();
        assert!(sink.is_empty());
    }
}
