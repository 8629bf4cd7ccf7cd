//! CLI command implementations.

pub mod cache_path;
pub mod config;
pub mod declarations;
pub mod decode;
pub mod hash;
pub mod resolve;
pub mod scan;
