//! The leveled file logger and its collaborators
//!
//! - `Logger`: Writes leveled records to a file, one open/close per call
//! - `DebugSink`: Optional mirror outlet (`ConsoleSink`, `NoOpSink`, `MemorySink`)
//! - `Clock`: Local time source for timestamps

mod traits;
mod noop;
mod console;
mod memory;
mod registry;
mod clock;
pub mod format;
pub mod file_logger;

pub use traits::{DebugSink, SharedSink};
pub use noop::NoOpSink;
pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use registry::{register_debug_sink, create_debug_sink, list_debug_sinks, SinkDefinition, SinkFactory};
pub use clock::{Clock, SystemClock, FixedClock};
pub use file_logger::Logger;
