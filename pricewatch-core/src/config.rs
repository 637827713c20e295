//! File locations for a run.
//!
//! All three files default to fixed spots under the synced-folder root. A
//! TOML file may override the root or any single path; alert thresholds are
//! fixed and cannot be set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::PriceWatchError;
use crate::paths;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Resolved paths used by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub root: PathBuf,
    /// Exported price-signal messages.
    pub input_file: PathBuf,
    /// Folder the alert markers are dropped into.
    pub marker_dir: PathBuf,
    /// Alert history log.
    pub history_file: PathBuf,
}

impl Config {
    /// Default layout under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            input_file: root.join("ifttt").join("price_signals.txt"),
            marker_dir: root.join("Public").join("OGE Price Signals"),
            history_file: root.join("ifttt").join("alert_log.json"),
            root,
        }
    }

    /// Default layout under the platform's synced-folder root.
    pub fn for_platform() -> Result<Self, PriceWatchError> {
        Ok(Self::from_root(paths::synced_root()?))
    }

    /// Apply overrides. A new root re-derives every path before the
    /// individual path overrides are applied.
    pub fn with_overrides(self, overrides: &ConfigOverrides) -> Self {
        let mut config = match &overrides.root {
            Some(root) => Self::from_root(root),
            None => self,
        };
        if let Some(path) = &overrides.input_file {
            config.input_file = path.clone();
        }
        if let Some(path) = &overrides.marker_dir {
            config.marker_dir = path.clone();
        }
        if let Some(path) = &overrides.history_file {
            config.history_file = path.clone();
        }
        config
    }
}

/// Optional path overrides, as read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub input_file: Option<PathBuf>,
    pub marker_dir: Option<PathBuf>,
    pub history_file: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Load overrides from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse overrides from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
