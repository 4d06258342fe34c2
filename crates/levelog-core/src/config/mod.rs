//! Logger configuration
//!
//! Supports multiple configuration sources:
//! - Builder: `LoggerConfig::new(path).with_threshold(..)`
//! - Environment: `LEVELOG_LEVEL`, `LEVELOG_INIT_MODE`
//! - Files: YAML or JSON, explicit or user-level (~/.config/levelog/config.yaml)

mod settings;
mod file;

pub use settings::{LoggerConfig, default_log_path, LEVEL_ENV_VAR, INIT_MODE_ENV_VAR};
pub use file::user_config_path;
