//! Compliance-check configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for a convention compliance check.
///
/// Loadable from TOML; every field has a default so partial configs work.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckConfig {
    /// Convention definition files, applied in declaration order.
    pub definition_files: Vec<PathBuf>,
    /// Placeholder values substituted into definition sources at compile
    /// time, keyed by placeholder name (without the `%` delimiters).
    pub placeholders: BTreeMap<String, String>,
    /// Follow symbolic links during discovery. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl CheckConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns whether symlinks are followed, defaulting to false.
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
