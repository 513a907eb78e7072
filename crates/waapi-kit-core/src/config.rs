//! Client configuration, loadable from TOML.

use crate::types::Guid;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("default_return must list at least one field")]
    EmptyReturn,
}

///
/// ClientConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Turn failed gateway calls into `Error::CallFailed` instead of
    /// `false`/default returns.
    pub raise_on_failure: bool,

    /// Identity projection requested by queries and subscriptions.
    pub default_return: Vec<String>,

    /// Platform override applied to property reads and writes.
    pub platform: Option<Guid>,
}

impl ClientConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_return.is_empty() {
            return Err(ConfigError::EmptyReturn);
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            raise_on_failure: false,
            default_return: ["id", "name", "type", "path"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            platform: None,
        }
    }
}

///
/// TESTS
///
