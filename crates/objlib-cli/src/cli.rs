//! CLI argument definitions for objlib.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "objlib")]
#[command(about = "Thumper object library inspector", version)]
pub struct Args {
    /// Path to config file
    #[arg(long, env = "OBJLIB_CONFIG", default_value = "objlib.toml")]
    pub config: PathBuf,

    /// Extra hash table (JSON) merged into the builtin one
    #[arg(long, value_name = "FILE")]
    pub hash_table: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a level object library and print a summary
    Decode {
        /// Container file (.objlib or cached .pc)
        file: PathBuf,
        /// Output the whole object graph as JSON
        #[arg(long)]
        json: bool,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List declarations with their recovered body offsets
    Declarations {
        /// Container file
        file: PathBuf,
    },
    /// List every object fingerprint occurrence in a file
    Scan {
        /// Container file
        file: PathBuf,
    },
    /// Hash identifier strings
    Hash {
        #[arg(required = true)]
        strings: Vec<String>,
    },
    /// Look up labels for hashes (hex, e.g., 0xce7e85f6)
    Resolve {
        #[arg(required = true)]
        hashes: Vec<String>,
    },
    /// Print the cache file for a logical path (e.g., Alevels/demo.objlib)
    CachePath {
        logical: String,
    },
    /// Show or edit the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current config
    Show,
    /// Set the game installation directory
    SetGameDir {
        dir: PathBuf,
    },
    /// Set the default extra hash table
    SetHashTable {
        file: PathBuf,
    },
}
