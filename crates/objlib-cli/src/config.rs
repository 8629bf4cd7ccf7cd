//! Persistent CLI settings stored as TOML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Game installation directory; cached containers live under `cache/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_dir: Option<PathBuf>,
    /// Hash table loaded on every run unless `--hash-table` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_table: Option<PathBuf>,
}

impl Config {
    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn cache_dir(&self) -> Option<PathBuf> {
        self.game_dir.as_ref().map(|dir| dir.join("cache"))
    }
}
