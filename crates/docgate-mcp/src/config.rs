//! Configuration for the docgate server.
//!
//! Loaded from an optional TOML file. Every field has a default, so an empty
//! or missing file yields [`DocgateConfig::default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use docgate_fetch::FetchConfig;

/// Top-level docgate configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocgateConfig {
    pub fetch: FetchConfig,
    pub search: SearchConfig,
}

/// Presentation settings for search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Most matches returned per search when the caller gives no limit; 0 disables the cap.
    pub max_matches: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_matches: 50 }
    }
}

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config from {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl DocgateConfig {
    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration, falling back to defaults when the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// The effective match cap for a request, if any.
    #[must_use]
    pub fn match_limit(&self, requested: Option<usize>) -> Option<usize> {
        match requested {
            Some(limit) => Some(limit),
            None if self.search.max_matches == 0 => None,
            None => Some(self.search.max_matches),
        }
    }
}
