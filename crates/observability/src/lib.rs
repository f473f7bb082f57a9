//! Tracing and logging setup shared by the workspace binaries.

pub mod config;

/// Tracing subscriber initialization.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide logging from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops. An invalid
/// `TOURMARKET_LOG_FORMAT` falls back to the default config and is reported
/// once the subscriber is up.
pub fn init() {
    init_from_env(|config| config);
}

/// Like [`init`], but lets the caller adjust the environment config (for
/// example a `--debug` flag) before the subscriber is installed.
pub fn init_from_env(adjust: impl FnOnce(ObservabilityConfig) -> ObservabilityConfig) {
    let (config, error) =
        ObservabilityConfig::from_lookup_or_default(|key| std::env::var(key).ok());
    init_with(&adjust(config));
    if let Some(e) = error {
        ::tracing::warn!(error = %e, "invalid logging configuration; using defaults");
    }
}

/// Initialize process-wide logging from an explicit config.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init(config);
    ::tracing::debug!(filter = %config.filter, format = ?config.format, "logging initialized");
}
