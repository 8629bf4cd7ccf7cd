//! Config command: show or update the TOML config file.

use std::path::Path;

use anyhow::{Context, Result};
use objlib_core::load_hash_table;

use crate::cli::ConfigAction;
use crate::config::Config;

pub fn run(action: ConfigAction, mut config: Config, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            eprintln!("# {}", path.display());
            print!("{}", config.to_toml()?);
            return Ok(());
        }
        ConfigAction::SetGameDir { dir } => {
            if !dir.is_dir() {
                eprintln!("Warning: {} is not a directory", dir.display());
            }
            config.game_dir = Some(dir);
        }
        ConfigAction::SetHashTable { file } => {
            load_hash_table(&file)
                .with_context(|| format!("Failed to load hash table {}", file.display()))?;
            config.hash_table = Some(file);
        }
    }

    config.save(path)?;
    eprintln!("Saved {}", path.display());
    Ok(())
}
