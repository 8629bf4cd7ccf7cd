mod cli;
mod cli_utils;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so decoded output can be piped
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("objlib=warn,objlib_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(&args.config)?;
    let hash_table = args.hash_table.as_deref();

    match args.command {
        Command::Decode { file, json, output } => {
            let registry = cli_utils::load_registry(&config, hash_table)?;
            commands::decode::run(&file, json, output.as_deref(), &registry)
        }
        Command::Declarations { file } => {
            let registry = cli_utils::load_registry(&config, hash_table)?;
            commands::declarations::run(&file, &registry)
        }
        Command::Scan { file } => commands::scan::run(&file),
        Command::Hash { strings } => commands::hash::run(&strings),
        Command::Resolve { hashes } => {
            let registry = cli_utils::load_registry(&config, hash_table)?;
            commands::resolve::run(&hashes, &registry)
        }
        Command::CachePath { logical } => commands::cache_path::run(&logical, &config),
        Command::Config { action } => commands::config::run(action, config, &args.config),
    }
}
