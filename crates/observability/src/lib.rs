//! Tracing and logging setup shared by the ledgerkit binaries.

/// Logging configuration loaded from the environment.
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// Falls back to the defaults (JSON, `info`) when the environment holds an
/// invalid value, so logging is always available. Safe to call multiple times.
pub fn init() {
    let config = ObservabilityConfig::from_env().unwrap_or_else(|err| {
        eprintln!("observability: {err}; using defaults");
        ObservabilityConfig::default()
    });
    tracing::init(&config);
}

/// Initialize process-wide observability with an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init(config);
}
