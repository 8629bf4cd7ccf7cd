//! Binary reading primitives for object library containers.

mod cursor;
pub mod pattern;
mod types;

pub use cursor::ByteCursor;
pub use pattern::{find_first_pattern, find_pattern, words_to_pattern};
pub use types::{F32Vec3, F32Vec4, Transform, U32Vec3};
