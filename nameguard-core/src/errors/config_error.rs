//! Configuration loading errors.

use std::io;
use std::path::PathBuf;

use super::error_code::NameGuardErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file \"{}\" could not be read: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file \"{}\" is not valid TOML: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl NameGuardErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unreadable { .. } => "CONFIG_UNREADABLE",
            Self::Invalid { .. } => "CONFIG_INVALID",
        }
    }
}
