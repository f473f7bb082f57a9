//! Logging configuration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FILTER_ENV: &str = "RUST_LOG";
pub const FORMAT_ENV: &str = "TOURMARKET_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable, for local runs.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::InvalidFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid TOURMARKET_LOG_FORMAT value '{0}' (expected 'json' or 'pretty')")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive string, e.g. `info,tourmarket_auth=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `TOURMARKET_LOG_FORMAT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests, CLI overrides).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format.parse()?;
        }

        Ok(config)
    }

    /// Like [`Self::from_lookup`], but an invalid value yields the default
    /// config together with the error so the caller can report it once
    /// logging is up.
    pub fn from_lookup_or_default(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Option<ConfigError>) {
        match Self::from_lookup(lookup) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_info_json() {
        let config = ObservabilityConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            (FILTER_ENV, "debug,tourmarket_auth=trace"),
            (FORMAT_ENV, "Pretty"),
        ]))
        .unwrap();
        assert_eq!(config.filter, "debug,tourmarket_auth=trace");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_keeps_default() {
        let config = ObservabilityConfig::from_lookup(lookup(&[(FILTER_ENV, "  ")])).unwrap();
        assert_eq!(config.filter, "info");
    }

    #[test]
    fn rejects_unknown_format() {
        let err = ObservabilityConfig::from_lookup(lookup(&[(FORMAT_ENV, "xml")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidFormat("xml".to_string()));
    }

    #[test]
    fn invalid_format_falls_back_with_error() {
        let (config, err) = ObservabilityConfig::from_lookup_or_default(lookup(&[
            (FILTER_ENV, "warn"),
            (FORMAT_ENV, "xml"),
        ]));
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(err, Some(ConfigError::InvalidFormat("xml".to_string())));

        let (config, err) = ObservabilityConfig::from_lookup_or_default(lookup(&[(FILTER_ENV, "warn")]));
        assert_eq!(config.filter, "warn");
        assert_eq!(err, None);
    }
}
