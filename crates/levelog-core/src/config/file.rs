//! File-based logger configuration (YAML or JSON)
//!
//! Supports an explicit file and a user-level file at
//! `~/.config/levelog/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use super::settings::LoggerConfig;
use crate::error::{ConfigError, ConfigResult};

/// Path of the user-level config file, if the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
    dirs::config_dir().map(|dir| dir.join("levelog").join("config.yaml"))
}

impl LoggerConfig {
    /// Load a config file, picking the format from its extension
    ///
    /// `.yaml` and `.yml` are parsed as YAML, `.json` as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            "json" => Self::from_json_str(&content),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load the user-level config file; `Ok(None)` when there is none
    pub fn user() -> ConfigResult<Option<Self>> {
        match user_config_path() {
            Some(path) if path.exists() => Self::from_file(path).map(Some),
            _ => Ok(None),
        }
    }

    /// Write this config as YAML, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InitMode, Severity};
    use tempfile::tempdir;

    #[test]
    fn test_yaml_with_defaults() {
        let config = LoggerConfig::from_yaml_str("file_path: /var/log/app.log\n").unwrap();
        assert_eq!(config, LoggerConfig::new("/var/log/app.log"));
    }

    #[test]
    fn test_yaml_full() {
        let yaml = "\
file_path: app.log
threshold: massive
init_mode: overwrite
debug_mirror: console
";
        let config = LoggerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.threshold, Severity::Massive);
        assert_eq!(config.init_mode, InitMode::Overwrite);
        assert_eq!(config.debug_mirror.as_deref(), Some("console"));
    }

    #[test]
    fn test_yaml_rejects_unknown_severity() {
        let result = LoggerConfig::from_yaml_str("file_path: app.log\nthreshold: loud\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_path() {
        assert!(LoggerConfig::from_json_str(r#"{"threshold": "debug"}"#).is_err());
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempdir().unwrap();

        let json_path = dir.path().join("logger.json");
        fs::write(&json_path, r#"{"file_path": "app.log", "threshold": "none"}"#).unwrap();
        let config = LoggerConfig::from_file(&json_path).unwrap();
        assert_eq!(config.threshold, Severity::None);

        let yml_path = dir.path().join("logger.yml");
        fs::write(&yml_path, "file_path: app.log\nthreshold: error\n").unwrap();
        assert_eq!(LoggerConfig::from_file(&yml_path).unwrap().threshold, Severity::Error);

        let toml_path = dir.path().join("logger.toml");
        fs::write(&toml_path, "file_path = 'app.log'").unwrap();
        assert!(matches!(
            LoggerConfig::from_file(&toml_path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempdir().unwrap();
        let result = LoggerConfig::from_file(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = LoggerConfig::new("app.log")
            .with_threshold(Severity::Warning)
            .with_init_mode(InitMode::Overwrite);

        config.save(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("threshold: warning"));
        assert!(!content.contains("debug_mirror"));
        assert_eq!(LoggerConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_user_config_path() {
        if let Some(path) = user_config_path() {
            assert!(path.ends_with("levelog/config.yaml"));
        }
    }
}
