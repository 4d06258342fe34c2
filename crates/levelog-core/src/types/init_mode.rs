//! What happens to an existing log file when a logger is created

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Construction-time file policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitMode {
    /// Keep existing content and append to it
    #[default]
    Append,
    /// Truncate the file (creating it if needed) unless logging is disabled
    Overwrite,
}

impl InitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InitMode::Append => "append",
            InitMode::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for InitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InitMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "append" => Ok(InitMode::Append),
            "overwrite" => Ok(InitMode::Overwrite),
            _ => Err(ConfigError::invalid_value("init_mode", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("Append".parse::<InitMode>().unwrap(), InitMode::Append);
        assert_eq!("overwrite".parse::<InitMode>().unwrap(), InitMode::Overwrite);
        assert!(matches!(
            "truncate".parse::<InitMode>(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_default() {
        assert_eq!(InitMode::default(), InitMode::Append);
        assert_eq!(InitMode::Overwrite.to_string(), "overwrite");
    }
}
