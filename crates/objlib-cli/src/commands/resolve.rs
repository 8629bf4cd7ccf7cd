//! Resolve command: registry lookup for hexadecimal hashes.

use anyhow::{Context, Result};
use objlib_core::HashRegistry;
use objlib_core::hash::parse_hash;
use owo_colors::OwoColorize;

pub fn run(hashes: &[String], registry: &HashRegistry) -> Result<()> {
    for value in hashes {
        let hash = parse_hash(value).with_context(|| format!("Invalid hash '{}'", value))?;
        match registry.get(hash) {
            Some(label) => println!("{:x}  {}", hash, label),
            None => println!("{:x}  {}", hash, "(unknown)".dimmed()),
        }
    }
    Ok(())
}
