//! Structured logging setup using the `tracing` crate.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            enabled: true,
            level: default_log_level(),
        }
    }
}

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` overrides the configured level. Safe to call when a
/// subscriber is already installed (the second install is a no-op).
pub fn init_logging(config: &LoggingConfig) {
    if !config.enabled {
        return;
    }
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
