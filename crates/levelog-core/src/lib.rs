//! Levelog Core
//!
//! A leveled, file-backed logger. Callers emit messages tagged with a
//! [`Severity`]; the [`Logger`] appends a timestamped, labeled line to its
//! target file when the message passes the configured threshold.
//!
//! Every write opens the file, appends, and closes it again. There is no
//! buffering, rotation, or background delivery, and I/O failures are returned
//! to the caller.
//!
//! ```rust,no_run
//! use levelog_core::{Logger, LoggerConfig, Severity, InitMode};
//!
//! let mut logger = LoggerConfig::new("/tmp/service.log")
//!     .with_init_mode(InitMode::Overwrite)
//!     .apply_env()
//!     .open()?;
//!
//! logger.write_separator("Service started [DATE]")?;
//! logger.info("configuration loaded")?;
//! levelog_core::log_warning!(logger, "{} retries left", 2)?;
//!
//! logger.set_threshold(Severity::None);
//! logger.critical("not written: logging is disabled")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod types;
pub mod error;
pub mod logging;
pub mod config;

// Re-export commonly used types
pub use types::{Severity, InitMode};

pub use error::{LogError, LogResult, ConfigError, ConfigResult};

pub use logging::{
    Logger,
    DebugSink, SharedSink, ConsoleSink, NoOpSink, MemorySink,
    register_debug_sink, create_debug_sink, list_debug_sinks,
    Clock, SystemClock, FixedClock,
};

pub use config::{LoggerConfig, default_log_path, user_config_path};
