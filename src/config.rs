//! Storage configuration.
//!
//! The hierarchy root is an explicit value threaded into `Roster` at
//! construction. Resolution precedence: CLI flag, `ROSTER_BASE_DIR`
//! environment variable, config file, built-in default.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_base_dir() -> PathBuf {
    PathBuf::from("data/league")
}

/// Storage configuration, loadable from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Hierarchy root directory (relative paths resolve against the
    /// current working directory).
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            base_dir: default_base_dir(),
        }
    }
}

impl StorageConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

/// Resolve the hierarchy root with precedence: CLI, env, config file, default.
pub fn resolve_base_dir(cli_dir: Option<PathBuf>, config_file: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = cli_dir {
        if !dir.as_os_str().is_empty() {
            return Ok(dir);
        }
    }
    if let Ok(env_dir) = std::env::var("ROSTER_BASE_DIR") {
        if !env_dir.is_empty() {
            return Ok(PathBuf::from(env_dir));
        }
    }
    if let Some(path) = config_file {
        return Ok(StorageConfig::load_from_file(path)?.base_dir);
    }
    Ok(StorageConfig::default().base_dir)
}
