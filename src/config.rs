//! Configuration for the demo binary
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration: DEBUG logging in the `source` layout, sending
//! `"foo"` then `"bar"`.

use crate::observability::logging::{try_parse_level, LogFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DemoConfig {
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub run: RunSection,
}

/// Logging section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSection {
    /// Log level (ERROR, WARN, INFO, DEBUG, TRACE)
    #[serde(default = "default_level")]
    pub level: String,
    /// Output format (source, json, pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,
    /// Emit span open/close events
    #[serde(default)]
    pub spans: bool,
}

fn default_level() -> String {
    "DEBUG".to_string()
}

fn default_format() -> String {
    "source".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            spans: false,
        }
    }
}

/// Messages sent by the `run` command when none are given on the command line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunSection {
    #[serde(default = "default_messages")]
    pub messages: Vec<String>,
}

fn default_messages() -> Vec<String> {
    vec!["foo".to_string(), "bar".to_string()]
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            messages: default_messages(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DemoConfig {
    /// Load configuration from TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if try_parse_level(&self.logging.level).is_none() {
            return Err(ConfigError::InvalidConfig(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }
        if LogFormat::try_parse(&self.logging.format).is_none() {
            return Err(ConfigError::InvalidConfig(format!(
                "unknown log format '{}'",
                self.logging.format
            )));
        }
        if self.run.messages.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "[run] messages must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();

        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.logging.level, "DEBUG");
        assert_eq!(config.logging.format, "source");
        assert!(!config.logging.spans);
        assert_eq!(config.run.messages, vec!["foo", "bar"]);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
[logging]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "DEBUG");
        assert_eq!(config.run, RunSection::default());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let err = DemoConfig::from_toml_str(
            r#"
[logging]
level = "LOUD"
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidConfig(_)));
        assert!(err.to_string().contains("LOUD"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let err = DemoConfig::from_toml_str(
            r#"
[logging]
format = "xml"
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_message_list_rejected() {
        let err = DemoConfig::from_toml_str(
            r#"
[run]
messages = []
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = DemoConfig::from_toml_str("[logging\nlevel =").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_config_serializes_back_to_toml() {
        let config = DemoConfig::default();
        let rendered = toml::to_string_pretty(&config).unwrap();

        assert!(rendered.contains("[logging]"));
        assert!(rendered.contains("[run]"));
        assert_eq!(DemoConfig::from_toml_str(&rendered).unwrap(), config);
    }
}
