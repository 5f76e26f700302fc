use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Longest debounce delay accepted from configuration.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

const APP_DIR: &str = "staffpick";
const FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// One or more settings are out of range; `message` lists all of them.
    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `<config dir>/staffpick/config.toml`, or `./staffpick/config.toml`
    /// when the platform has no config dir.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(FILE_NAME)
    }

    /// Load from [`config_path`](Self::config_path). A missing file means
    /// defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        match path.try_exists() {
            Ok(true) => Self::load_from(&path),
            _ => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Config::default())
            }
        }
    }

    /// Load and validate `path`, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = parse(path, &read(path)?)?;
        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let problems = self.problems();
        if problems.is_empty() {
            return Ok(());
        }
        Err(ConfigError::ValidationError {
            message: problems.join("; "),
        })
    }

    fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.picker.page_size == 0 {
            problems.push("picker.page_size must be at least 1".to_string());
        }
        if self.search.debounce_ms > MAX_DEBOUNCE_MS {
            problems.push(format!(
                "search.debounce_ms must be at most {} (got {})",
                MAX_DEBOUNCE_MS, self.search.debounce_ms
            ));
        }
        problems
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

fn parse(path: &Path, content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}
