//! Declarations command: one row per declared object.

use std::path::Path;

use anyhow::{Context, Result};
use objlib_core::{HashRegistry, ObjlibDecoder};
use owo_colors::OwoColorize;

use crate::cli_utils;

pub fn run(file: &Path, registry: &HashRegistry) -> Result<()> {
    let bytes = cli_utils::read_container(file)?;
    let level = ObjlibDecoder::new(&bytes)
        .with_registry(registry)
        .decode()
        .with_context(|| format!("Failed to decode {}", file.display()))?;

    for declaration in &level.declarations {
        let label = registry.resolve(declaration.type_hash);
        let offset = match (declaration.body_offset, declaration.kind()) {
            (Some(offset), _) => format!("{:#x}", offset),
            (None, Some(_)) => "-".yellow().to_string(),
            (None, None) => "-".dimmed().to_string(),
        };
        println!("{:<28} {:<40} {}", label, declaration.name, offset);
    }

    Ok(())
}
