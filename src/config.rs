//! Configuration loaded from `<config dir>/termseq/config.toml`.
//!
//! ```toml
//! [query]
//! timeout_ms = 2000      # 0 waits forever
//! poll_interval_ms = 50
//!
//! [flush]
//! reset_attributes = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::query::{QueryOptions, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub query: QueryConfig,
    pub flush: FlushConfig,
}

/// Cursor position query settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Milliseconds to wait for the terminal's report (0 = no timeout)
    pub timeout_ms: u64,
    /// Milliseconds between cancellation checks while waiting
    pub poll_interval_ms: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
        }
    }
}

/// Flush settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlushConfig {
    /// Append `CSI 0 m` after every plain flush
    pub reset_attributes: bool,
}

impl Config {
    /// Path of the user config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("termseq").join("config.toml"))
    }

    /// Load the user config, falling back to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load a config file, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse a config from TOML. Missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml_string()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Query options described by this config.
    pub fn query_options(&self) -> QueryOptions {
        let timeout = match self.query.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };
        QueryOptions::default()
            .timeout(timeout)
            .poll_interval(Duration::from_millis(self.query.poll_interval_ms))
    }
}
