//! Console debug sink

use std::io::Write;

use super::traits::DebugSink;

/// A sink that mirrors records to stderr
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    prefix: Option<String>,
}

impl ConsoleSink {
    /// Create a console sink that prints records unchanged
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Create a console sink that prepends a prefix to every record
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn render(&self, line: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{} {}", prefix, line),
            None => line.to_string(),
        }
    }
}

impl DebugSink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn write_line(&self, line: &str) {
        // stderr may be closed; mirroring must not take the caller down with it
        let _ = writeln!(std::io::stderr().lock(), "{}", self.render(line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_sink_creation() {
        let sink = ConsoleSink::new();
        assert_eq!(sink.render("hello"), "hello");

        let custom = ConsoleSink::with_prefix("[levelog]");
        assert_eq!(custom.render("hello"), "[levelog] hello");
        assert_eq!(custom.name(), "console");
    }

    #[test]
    fn test_console_sink_writes() {
        // Just make sure it doesn't panic
        let sink = ConsoleSink::with_prefix("[test]");
        sink.write_line("mirrored record");
        sink.write_line("");
    }
}
