//! Logger configuration
//!
//! A `LogConfig` is usually embedded as a `logger:` section of an application
//! config file, or parsed standalone:
//!
//! ```
//! use tracelog_core::config::{LogConfig, LogFormat};
//! use tracelog_core::Level;
//!
//! let config = LogConfig::from_yaml_str("level: debug\nformat: console").unwrap();
//! assert_eq!(config.level, Level::Debug);
//! assert_eq!(config.format, LogFormat::ConsoleText);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Level;
use super::error::{ConfigError, ConfigResult};

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    #[serde(rename = "structured", alias = "json")]
    Structured,
    /// Human-readable, optionally colored line
    #[serde(rename = "console-text", alias = "console")]
    ConsoleText,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Structured => "structured",
            LogFormat::ConsoleText => "console-text",
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "structured" | "json" => Ok(LogFormat::Structured),
            "console-text" | "console" => Ok(LogFormat::ConsoleText),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Writer configuration: minimum severity and output encoding
///
/// Immutable once handed to a writer; build a new writer to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum severity that gets written
    pub level: Level,
    /// Output encoding
    pub format: LogFormat,
}

impl LogConfig {
    pub fn new(level: Level, format: LogFormat) -> Self {
        Self { level, format }
    }

    /// Set the minimum level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Parse a YAML logger section; missing keys take defaults
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON logger section; missing keys take defaults
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build from loose strings, rejecting unknown values
    pub fn parse(level: &str, format: &str) -> ConfigResult<Self> {
        Ok(Self::new(level.parse()?, format.parse()?))
    }
}
