//! Debug sink trait definition

use std::sync::Arc;

/// Secondary outlet that receives a raw copy of every record the logger writes
///
/// Mirroring is purely additive. A sink must never fail the file write, so
/// `write_line` has no error channel: implementations swallow their own
/// failures.
///
/// Implementations:
/// - `ConsoleSink`: Mirrors to stderr
/// - `NoOpSink`: Discards everything
/// - `MemorySink`: Collects records in memory
pub trait DebugSink: Send + Sync {
    /// Human-readable name of this sink
    fn name(&self) -> &str;

    /// Receive one record exactly as it is written to the file
    fn write_line(&self, line: &str);
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn DebugSink>;

/// Convenience macros for leveled logging with format arguments
///
/// Each expands to the matching `Logger` method and evaluates to its
/// `LogResult<()>`.
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.critical(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_massive {
    ($logger:expr, $($arg:tt)*) => {
        $logger.massive(&format!($($arg)*))
    };
}
