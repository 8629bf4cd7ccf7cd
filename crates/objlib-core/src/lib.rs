pub mod error;
pub mod hash;
pub mod objlib;
pub mod stream;

pub use error::{Error, Result};
pub use hash::{HashRegistry, HashTableFile, cache_file_name, hash, hash_str, load_hash_table};
pub use objlib::{
    ByteSpan, FingerprintHit, Leaf, ObjectBody, ObjectCollections, ObjectDeclaration, ObjectKind,
    ObjlibDecoder, ObjlibLevel, Samp, SequinDrawer, SequinMaster, Spn, Trait, TraitDatatype,
    TraitValue, decode, scan_fingerprints,
};
pub use stream::{ByteCursor, F32Vec3, F32Vec4, Transform, U32Vec3};
