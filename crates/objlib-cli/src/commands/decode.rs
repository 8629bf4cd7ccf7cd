//! Decode command: container summary or full JSON object graph.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use objlib_core::{HashRegistry, ObjectKind, ObjlibDecoder, ObjlibLevel};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

use crate::cli_utils;

pub fn run(file: &Path, json: bool, output: Option<&Path>, registry: &HashRegistry) -> Result<()> {
    let bytes = cli_utils::read_container(file)?;
    let level = ObjlibDecoder::new(&bytes)
        .with_registry(registry)
        .decode()
        .with_context(|| format!("Failed to decode {}", file.display()))?;

    let content = if json {
        serde_json::to_string_pretty(&level)?
    } else {
        format_summary(&level, registry)
    };

    if let Some(output_path) = output {
        fs::write(output_path, &content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        eprintln!("Wrote {}", output_path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

/// Multi-line summary: header tags, table sizes, per-kind counts and the
/// declarations whose bodies were not found.
pub fn format_summary(level: &ObjlibLevel, registry: &HashRegistry) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", level.origin.bold());
    let _ = writeln!(output, "  FILE TYPE    : {:#x}", level.file_type);
    let _ = writeln!(
        output,
        "  LIBRARY TYPE : {:#x} ({})",
        level.library_type,
        registry.resolve(level.library_type)
    );
    let _ = writeln!(
        output,
        "  IMPORTS      : {} libraries, {} objects",
        level.library_imports.len(),
        level.object_imports.len()
    );
    let _ = writeln!(
        output,
        "  DECLARATIONS : {} ({} without a decoder)",
        level.declarations.len(),
        level.unsupported_declarations().count()
    );

    for kind in ObjectKind::iter() {
        let declared = level.declarations_of(kind).count();
        if declared == 0 {
            continue;
        }
        let recovered = level.objects.count(kind);
        let counts = format!("{}/{}", recovered, declared);
        let counts = if recovered == declared {
            counts.green().to_string()
        } else {
            counts.yellow().to_string()
        };
        let _ = writeln!(output, "    {:<8}: {}", kind.to_string(), counts);
    }

    let unresolved: Vec<_> = level.unresolved_declarations().collect();
    if !unresolved.is_empty() {
        let _ = writeln!(output, "  {}", "UNRESOLVED".yellow().bold());
        for declaration in unresolved {
            let _ = writeln!(
                output,
                "    {} ({})",
                declaration.name,
                registry.resolve(declaration.type_hash).dimmed()
            );
        }
    }

    output
}
