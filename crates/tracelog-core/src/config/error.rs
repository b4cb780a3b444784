//! Configuration errors

/// Errors that can occur while parsing logger configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown log level: {0} (expected debug, info, warn or error)")]
    UnknownLevel(String),

    #[error("Unknown log format: {0} (expected structured or console-text)")]
    UnknownFormat(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
