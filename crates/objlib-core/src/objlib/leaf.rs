use serde::Serialize;

use super::kind::{ObjectKind, read_fingerprint};
use super::track::Trait;
use super::{ByteSpan, ObjectBody};
use crate::error::Result;
use crate::stream::{ByteCursor, U32Vec3};

/// Unidentified leaf fields, in wire order. Preserve, do not interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeafOpaque {
    pub unknown0: u32,
    pub unknown1: u32,
    pub unknown2: Vec<U32Vec3>,
    pub unknown3: u32,
    pub unknown4: u32,
    pub unknown5: u32,
}

/// Animation-track container: a list of traits keyed to a time unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaf {
    pub name: String,
    pub span: ByteSpan,
    pub header: [u32; 4],
    pub hash0: u32,
    pub hash1: u32,
    pub time_unit: String,
    pub hash2: u32,
    pub traits: Vec<Trait>,
    pub opaque: LeafOpaque,
}

impl ObjectBody for Leaf {
    const KIND: ObjectKind = ObjectKind::Leaf;

    fn decode(cursor: &mut ByteCursor<'_>, name: String) -> Result<Self> {
        let begin = cursor.offset();
        let header = read_fingerprint(cursor, Self::KIND)?;

        let hash0 = cursor.read_u32()?;
        let unknown0 = cursor.read_u32()?;
        let hash1 = cursor.read_u32()?;
        let time_unit = cursor.read_string()?;
        let hash2 = cursor.read_u32()?;
        let traits = cursor.read_counted(Trait::decode)?;

        let opaque = LeafOpaque {
            unknown0,
            unknown1: cursor.read_u32()?,
            unknown2: cursor.read_counted(ByteCursor::read_u32vec3)?,
            unknown3: cursor.read_u32()?,
            unknown4: cursor.read_u32()?,
            unknown5: cursor.read_u32()?,
        };

        Ok(Self {
            name,
            span: ByteSpan::new(begin, cursor.offset()),
            header,
            hash0,
            hash1,
            time_unit,
            hash2,
            traits,
            opaque,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn span(&self) -> ByteSpan {
        self.span
    }
}
