//! Scan command: list raw fingerprint occurrences without decoding.

use std::path::Path;

use anyhow::Result;
use objlib_core::scan_fingerprints;

use crate::cli_utils;

pub fn run(file: &Path) -> Result<()> {
    let bytes = cli_utils::read_container(file)?;
    let hits = scan_fingerprints(&bytes);

    for hit in &hits {
        println!("{:#010x}  {}", hit.offset, hit.kind);
    }
    eprintln!("{} fingerprint hits in {} bytes", hits.len(), bytes.len());

    Ok(())
}
