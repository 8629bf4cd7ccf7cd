//! Common CLI utility functions shared across commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use objlib_core::hash::{HashRegistry, load_hash_table};
use tracing::info;

use crate::config::Config;

/// Builtin registry, extended with `override_path` or else the configured table.
pub fn load_registry(config: &Config, override_path: Option<&Path>) -> Result<HashRegistry> {
    let mut registry = HashRegistry::builtin();

    if let Some(path) = override_path.or(config.hash_table.as_deref()) {
        let table = load_hash_table(path)
            .with_context(|| format!("Failed to load hash table {}", path.display()))?;
        let before = registry.len();
        registry.extend(&table)?;
        info!(
            "Loaded {} hash entries from {}",
            registry.len() - before,
            path.display()
        );
    }

    Ok(registry)
}

pub fn read_container(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}
