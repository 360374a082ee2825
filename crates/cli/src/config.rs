// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Driver configuration loaded from an optional TOML file.

use crate::output::OutputFormat;
use cmdl_syntax::DEFAULT_MAX_DEPTH;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("max_depth must be at least 1")]
    ZeroDepth,
}

/// Settings for one driver run. Every field has a default, so an empty file
/// (or no file) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Printed before each line when stdin is a terminal.
    pub prompt: String,
    /// Maximum composite nesting depth accepted by the parser.
    pub max_depth: usize,
    /// Fold ASCII case when looking commands up.
    pub case_insensitive: bool,
    /// Tracing filter used when CMDL_LOG is unset.
    pub log_level: String,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            case_insensitive: false,
            log_level: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load from `path`, or return the defaults when there is no path.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}
