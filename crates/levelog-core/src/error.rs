//! Error types

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while writing to or truncating the log file
///
/// The logger never suppresses failures of its own medium: every one of these
/// reaches the caller of the operation that hit it.
#[derive(Error, Debug)]
pub enum LogError {
    /// Open, create, append or truncate failed on the target file
    #[error("I/O error on log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LogError {
    /// Attach the target path to an I/O failure
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Kind of the underlying I/O failure
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            LogError::Io { source, .. } => source.kind(),
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;

/// Errors that can occur while loading logger configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Unknown debug sink: {0}")]
    UnknownSink(String),

    #[error(transparent)]
    Log(#[from] LogError),
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
