//! Configuration Helpers
//!
//! Typed readers for environment variables. Missing variables are `None`;
//! present-but-invalid values are errors so that a typo never silently
//! falls back to a default.

use std::str::FromStr;
use std::time::Duration;

/// Error raised when an environment variable is present but unusable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },

    #[error("Missing required variable: {0}")]
    Missing(String),
}

impl ConfigError {
    pub fn invalid(key: &str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Read a variable, treating empty or whitespace-only values as absent.
pub fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse a boolean flag: `1/true/yes/on` or `0/false/no/off`, case-insensitive.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    match env_string(key) {
        None => Ok(None),
        Some(raw) => parse_bool(&raw)
            .map(Some)
            .ok_or_else(|| ConfigError::invalid(key, format!("expected a boolean, got {raw:?}"))),
    }
}

pub fn env_parse<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_string(key) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::invalid(key, e.to_string())),
    }
}

/// Read a positive millisecond count as a [`Duration`].
pub fn env_duration_ms(key: &str) -> Result<Option<Duration>, ConfigError> {
    match env_parse::<u64>(key)? {
        Some(0) => Err(ConfigError::invalid(key, "must be greater than zero")),
        Some(ms) => Ok(Some(Duration::from_millis(ms))),
        None => Ok(None),
    }
}

/// Read a positive second count as a [`Duration`].
pub fn env_duration_secs(key: &str) -> Result<Option<Duration>, ConfigError> {
    match env_parse::<u64>(key)? {
        Some(0) => Err(ConfigError::invalid(key, "must be greater than zero")),
        Some(secs) => Ok(Some(Duration::from_secs(secs))),
        None => Ok(None),
    }
}
