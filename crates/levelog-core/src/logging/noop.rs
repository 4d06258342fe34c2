//! No-op debug sink

use super::traits::DebugSink;

/// A sink that does nothing
///
/// Useful for tests, or to keep the mirror flag on without any output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl DebugSink for NoOpSink {
    fn name(&self) -> &str {
        "noop"
    }

    fn write_line(&self, _line: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink() {
        let sink = NoOpSink::new();
        assert_eq!(sink.name(), "noop");
        sink.write_line("discarded");
    }
}
