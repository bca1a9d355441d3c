//! varbind configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use varbind_app::PluginConfig;
use varbind_engine::LinkStrategy;

pub const CONFIG_FILE: &str = "varbind.toml";

/// Top-level configuration (varbind.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct VarbindConfig {
    #[serde(default)]
    pub link: LinkConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Linking behavior
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct LinkConfig {
    /// `value` or `inferred`
    #[serde(default)]
    pub strategy: LinkStrategy,
    /// Toast duration
    #[serde(default = "default_timeout")]
    pub notify_timeout_ms: u64,
}

fn default_timeout() -> u64 {
    2000
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            strategy: LinkStrategy::default(),
            notify_timeout_ms: default_timeout(),
        }
    }
}

/// Logging
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl VarbindConfig {
    /// Load an explicit config file, or `varbind.toml` from the working
    /// directory when present
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a directory (looks for varbind.toml) or a file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!("No config found at {}", config_path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn plugin_config(&self) -> PluginConfig {
        PluginConfig {
            strategy: self.link.strategy,
            notify_timeout_ms: self.link.notify_timeout_ms,
        }
    }
}
