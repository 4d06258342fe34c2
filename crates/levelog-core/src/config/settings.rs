//! Logger settings and environment overrides

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::logging::{create_debug_sink, Logger};
use crate::types::{InitMode, Severity};

/// Environment variable overriding the threshold
pub const LEVEL_ENV_VAR: &str = "LEVELOG_LEVEL";

/// Environment variable overriding the init mode
pub const INIT_MODE_ENV_VAR: &str = "LEVELOG_INIT_MODE";

/// Everything needed to construct a [`Logger`]
///
/// Only `file_path` is required; missing fields in a config file take their
/// defaults (`info`, `append`, no debug mirror).
///
/// # Example
///
/// ```
/// use levelog_core::{LoggerConfig, Severity, InitMode};
///
/// let config = LoggerConfig::new("/var/log/app.log")
///     .with_threshold(Severity::Debug)
///     .with_init_mode(InitMode::Overwrite)
///     .with_debug_mirror("console");
/// assert_eq!(config.threshold, Severity::Debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Target log file
    pub file_path: PathBuf,

    /// Most verbose severity that still gets written
    #[serde(default)]
    pub threshold: Severity,

    /// Whether construction truncates the file
    #[serde(default)]
    pub init_mode: InitMode,

    /// Registered debug sink to mirror records to; mirroring starts enabled
    /// when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_mirror: Option<String>,
}

impl LoggerConfig {
    /// Create a configuration with default threshold and init mode
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            threshold: Severity::default(),
            init_mode: InitMode::default(),
            debug_mirror: None,
        }
    }

    /// Set the threshold
    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the init mode
    pub fn with_init_mode(mut self, init_mode: InitMode) -> Self {
        self.init_mode = init_mode;
        self
    }

    /// Mirror records to the named debug sink
    pub fn with_debug_mirror(mut self, sink: impl Into<String>) -> Self {
        self.debug_mirror = Some(sink.into());
        self
    }

    /// Apply `LEVELOG_LEVEL` and `LEVELOG_INIT_MODE` from the process environment
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// Unparseable values are ignored and the current setting is kept.
    pub fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(threshold) = lookup(LEVEL_ENV_VAR).and_then(|v| v.parse().ok()) {
            self.threshold = threshold;
        }
        if let Some(init_mode) = lookup(INIT_MODE_ENV_VAR).and_then(|v| v.parse().ok()) {
            self.init_mode = init_mode;
        }
        self
    }

    /// Build the logger, attaching the configured debug sink
    pub fn open(self) -> ConfigResult<Logger> {
        let mirror = match &self.debug_mirror {
            Some(name) => Some(
                create_debug_sink(name).ok_or_else(|| ConfigError::UnknownSink(name.clone()))?,
            ),
            None => None,
        };

        let mut logger = Logger::from_config(self)?;
        if let Some(sink) = mirror {
            logger = logger.with_mirror(sink);
            logger.enable_debug_mirror();
        }
        Ok(logger)
    }
}

/// Default location for a log file when the caller has no preference
pub fn default_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("levelog.log");
    path
}
