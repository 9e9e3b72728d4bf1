//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Every section is optional; missing values fall back to defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::engine::notation::Notation;
use crate::storage::DEFAULT_DOCUMENT_FILE;

/// Environment variable that overrides the config file path.
pub const CONFIG_PATH_ENV: &str = "BET_POINTS_CONFIG";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub document: DocumentConfig,
    pub notation: Notation,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DocumentConfig {
    /// Prediction document to check.
    pub path: String,
    /// Report corrections without writing them back.
    pub dry_run: bool,
    /// Fail the run when any bet line could not be parsed.
    pub fail_on_skipped: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DOCUMENT_FILE.to_string(),
            dry_run: false,
            fail_on_skipped: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse configuration from TOML text and check the notation.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.notation.validate()?;
        Ok(config)
    }

    /// Load from `$BET_POINTS_CONFIG` or `config.toml`; defaults if neither exists.
    pub fn load_or_default() -> Result<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(&path),
            Err(_) if Path::new("config.toml").exists() => Self::load("config.toml"),
            Err(_) => Ok(Self::default()),
        }
    }
}
