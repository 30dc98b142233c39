//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::controller::Labels;
use crate::infra::{DEFAULT_CACHE_BUST_PARAM, DEFAULT_SOURCE};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default quote sheet, a file path or an http(s) URL
    pub source: Option<String>,

    /// Query parameter appended to URLs when refreshing
    pub cache_bust_param: Option<String>,

    /// Default export theme name or CSS path
    pub theme: Option<String>,

    /// Labels shown above each group
    pub labels: Labels,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/quoteboard/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quoteboard")
            .join("config.toml")
    }

    /// Resolve the quote sheet location, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--source` argument
    /// 2. Config file `source` setting
    /// 3. `assets/quotes.csv`
    pub fn source(&self, cli_source: Option<&str>) -> String {
        cli_source
            .map(str::to_string)
            .or_else(|| self.source.clone())
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string())
    }

    /// Resolve the cache-busting query parameter name.
    pub fn cache_bust_param(&self) -> &str {
        self.cache_bust_param
            .as_deref()
            .unwrap_or(DEFAULT_CACHE_BUST_PARAM)
    }

    /// Resolve the export theme, with CLI argument taking precedence.
    pub fn theme<'a>(&'a self, cli_theme: Option<&'a str>) -> Option<&'a str> {
        cli_theme.or(self.theme.as_deref())
    }
}
