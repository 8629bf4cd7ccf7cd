//! 32-bit identifier hashing and hash-to-name lookup.
//!
//! Every type tag and most name references inside a container are stored as
//! the 32-bit hash of an identifier string. The hash is an FNV-1a pass over the
//! bytes followed by a fixed avalanche finisher; it must match the game's own
//! implementation bit for bit.

mod known;
mod registry;

pub use known::{KNOWN_IDENTIFIERS, KNOWN_LABELS};
pub use registry::{HashRegistry, HashTableFile, load_hash_table, parse_hash};

/// FNV-1a offset basis the hash starts from.
pub const HASH_SEED: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime.
pub const HASH_PRIME: u32 = 0x0100_0193;

/// Hash an arbitrary byte sequence.
///
/// ```
/// use objlib_core::hash::hash;
///
/// assert_eq!(hash(b"win"), 0x45e125b3);
/// assert_ne!(hash(b"ab"), hash(b"ba"));
/// ```
pub fn hash(bytes: &[u8]) -> u32 {
    let h = bytes
        .iter()
        .fold(HASH_SEED, |h, &b| (h ^ u32::from(b)).wrapping_mul(HASH_PRIME));
    finish(h)
}

/// Hash the UTF-8 bytes of a string.
pub fn hash_str(s: &str) -> u32 {
    hash(s.as_bytes())
}

/// Avalanche finisher applied after the byte loop.
pub const fn finish(mut h: u32) -> u32 {
    h = h.wrapping_mul(0x2001);
    h = (h ^ (h >> 7)).wrapping_mul(0x9);
    h = (h ^ (h >> 17)).wrapping_mul(0x21);
    h
}

/// File name of the cached, compiled copy of a logical resource path.
///
/// The logical path is hashed exactly as given, e.g. `"Alevels/demo.objlib"`.
///
/// ```
/// use objlib_core::hash::cache_file_name;
///
/// assert_eq!(cache_file_name("Alevels/demo.objlib"), "673863f9.pc");
/// ```
pub fn cache_file_name(logical_path: &str) -> String {
    format!("{:x}.pc", hash_str(logical_path))
}
