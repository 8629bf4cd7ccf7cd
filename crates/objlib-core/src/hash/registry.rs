use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::hash_str;
use super::known::{KNOWN_IDENTIFIERS, KNOWN_LABELS};
use crate::error::{Error, Result};

static SHARED: LazyLock<HashRegistry> = LazyLock::new(HashRegistry::builtin);

/// Reverse lookup from identifier hash to a display string.
///
/// Unknown hashes never fail to resolve: they fall back to their lowercase
/// hexadecimal form without a `0x` prefix. When two entries share a hash the
/// last insert wins.
#[derive(Debug, Clone, Default)]
pub struct HashRegistry {
    entries: HashMap<u32, String>,
}

impl HashRegistry {
    /// Create a registry with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the known identifiers and labels.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for identifier in KNOWN_IDENTIFIERS {
            registry.insert_known(identifier);
        }
        for &(hash, label) in KNOWN_LABELS {
            registry.insert_label(hash, label);
        }
        debug!("Built hash registry with {} entries", registry.len());
        registry
    }

    /// Process-wide builtin registry, built on first access and never mutated.
    pub fn shared() -> &'static HashRegistry {
        &SHARED
    }

    /// Hash `identifier` and register it under its own name.
    pub fn insert_known(&mut self, identifier: &str) -> u32 {
        let hash = hash_str(identifier);
        self.entries.insert(hash, identifier.to_string());
        hash
    }

    /// Register a label for a hash whose source string is not known.
    pub fn insert_label(&mut self, hash: u32, label: impl Into<String>) {
        self.entries.insert(hash, label.into());
    }

    /// Registered name for `hash`, if any.
    pub fn get(&self, hash: u32) -> Option<&str> {
        self.entries.get(&hash).map(String::as_str)
    }

    pub fn contains(&self, hash: u32) -> bool {
        self.entries.contains_key(&hash)
    }

    /// Registered name for `hash`, or its lowercase hex form.
    pub fn resolve(&self, hash: u32) -> Cow<'_, str> {
        match self.entries.get(&hash) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("{:x}", hash)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add every entry of a hash-table file.
    pub fn extend(&mut self, table: &HashTableFile) -> Result<()> {
        for identifier in &table.known {
            self.insert_known(identifier);
        }
        for (key, label) in &table.unknown {
            self.insert_label(parse_hash(key)?, label.clone());
        }
        Ok(())
    }

    /// Parse a JSON hash-table document and add its entries.
    pub fn extend_from_json(&mut self, content: &str) -> Result<()> {
        let table: HashTableFile = serde_json::from_str(content)?;
        self.extend(&table)
    }
}

/// On-disk hash table: identifier strings to hash, plus explicit labels keyed
/// by hash.
///
/// `unknown` keys are always hexadecimal, with or without `0x`. There is no
/// decimal form: `"1234"` is the hash `0x1234`.
///
/// ```json
/// { "known": ["sequin_speed"], "unknown": { "0xce7e85f6": "*.leaf Objects" } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashTableFile {
    #[serde(default)]
    pub known: Vec<String>,
    #[serde(default)]
    pub unknown: BTreeMap<String, String>,
}

pub fn load_hash_table<P: AsRef<Path>>(path: P) -> Result<HashTableFile> {
    let content = fs::read_to_string(&path)?;
    let table = serde_json::from_str(&content)?;
    Ok(table)
}

/// Parse a hexadecimal hash, with or without a `0x` prefix.
///
/// All-digit input is still hexadecimal.
pub fn parse_hash(value: &str) -> Result<u32> {
    let value = value.trim();
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    u32::from_str_radix(digits, 16)
        .map_err(|e| Error::InvalidHashTable(format!("Failed to parse hash '{}': {}", value, e)))
}
