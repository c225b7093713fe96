//! Pattern and display configuration
//!
//! The directive tokens are sourced from externally managed (localized)
//! strings by the host, so they are configuration rather than constants:
//! the directive vocabulary can change without touching parsing logic.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::expression::RenderPolicy;

/// Literal tokens delimiting a timer directive inside slide text.
///
/// A directive has the shape `<prefix>MM:SS<splitter><label><suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Token opening a directive
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Token between the time limit and the label
    #[serde(default = "default_splitter")]
    pub splitter: String,

    /// Token closing a directive
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            splitter: default_splitter(),
            suffix: default_suffix(),
        }
    }
}

/// Top-level configuration for the presenter core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directive tokens
    #[serde(default)]
    pub pattern: PatternConfig,

    /// How elapsed time past the limit is presented
    #[serde(default)]
    pub policy: RenderPolicy,

    /// Display refresh period in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pattern: PatternConfig::default(),
            policy: RenderPolicy::default(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl AppConfig {
    /// Load from the platform config directory, falling back to defaults.
    pub fn load() -> Self {
        confy::load("decktimer", "config").unwrap_or_default()
    }

    /// Persist to the platform config directory.
    pub fn store(self) -> Result<(), ConfigError> {
        confy::store("decktimer", "config", self).map_err(ConfigError::Store)
    }

    /// Load from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save to an explicit TOML file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Display refresh period as a `Duration`.
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Serde Helpers
// ═══════════════════════════════════════════════════════════════════════════

fn default_prefix() -> String {
    "[[".to_string()
}

fn default_splitter() -> String {
    "|".to_string()
}

fn default_suffix() -> String {
    "]]".to_string()
}

fn default_tick_interval_ms() -> u64 {
    100
}

/// Errors during configuration load/store
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write config file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[source] toml::ser::Error),

    #[error("failed to store config")]
    Store(#[source] confy::ConfyError),
}
