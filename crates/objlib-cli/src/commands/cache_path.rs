//! Cache-path command: where the game caches a logical object library.

use anyhow::Result;
use objlib_core::cache_file_name;

use crate::config::Config;

pub fn run(logical: &str, config: &Config) -> Result<()> {
    let file_name = cache_file_name(logical);
    match config.cache_dir() {
        Some(dir) => println!("{}", dir.join(file_name).display()),
        None => {
            eprintln!("game_dir is not set; printing the file name only");
            println!("{}", file_name);
        }
    }
    Ok(())
}
