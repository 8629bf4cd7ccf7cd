//! Level object library (`.objlib`) decoding.
//!
//! A container is read in two phases. The header and the import and
//! declaration tables are strictly sequential. Object bodies are then located
//! by fingerprint search, since the tables do not record body offsets.

mod drawer;
mod kind;
mod leaf;
mod level;
mod master;
mod recovery;
mod samp;
mod spn;
mod track;

use serde::Serialize;

use crate::error::Result;
use crate::stream::ByteCursor;

pub use drawer::{SequinDrawer, SequinDrawerOpaque};
pub use kind::{FILE_TYPE, LEVEL_LIBRARY_TYPE, ObjectKind};
pub use leaf::{Leaf, LeafOpaque};
pub use level::{
    LibraryImport, ObjectDeclaration, ObjectImport, ObjlibDecoder, ObjlibLevel,
    ObjlibLevelOpaque, decode,
};
pub use master::{
    SequinMaster, SequinMasterFooter, SequinMasterLvl, SequinMasterLvlOpaque, SequinMasterOpaque,
};
pub use recovery::{FingerprintHit, ObjectCollections, scan_fingerprints};
pub use samp::{Samp, SampOpaque};
pub use spn::{Spn, SpnOpaque};
pub use track::{Datapoint, Trait, TraitDatatype, TraitOpaque, TraitValue};

/// Half-open byte range `[begin, end)` a body occupied in the source buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ByteSpan {
    pub begin: usize,
    pub end: usize,
}

impl ByteSpan {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.begin <= offset && offset < self.end
    }

    pub fn overlaps(&self, other: &ByteSpan) -> bool {
        self.begin < other.end && other.begin < self.end
    }
}

/// A decodable object body.
///
/// `decode` starts at the body's fingerprint and leaves the cursor just past
/// the last field.
pub trait ObjectBody: Sized {
    const KIND: ObjectKind;

    fn decode(cursor: &mut ByteCursor<'_>, name: String) -> Result<Self>;

    /// Name taken from the matching declaration.
    fn name(&self) -> &str;

    fn span(&self) -> ByteSpan;
}
