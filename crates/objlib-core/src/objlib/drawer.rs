use serde::Serialize;

use super::kind::{ObjectKind, read_fingerprint};
use super::{ByteSpan, ObjectBody};
use crate::error::Result;
use crate::stream::ByteCursor;

/// Unidentified drawer fields, in wire order. Preserve, do not interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SequinDrawerOpaque {
    pub unknown0: u32,
    pub unknown_bool0: u8,
    pub unknown1: u32,
}

/// Render layer descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequinDrawer {
    pub name: String,
    pub span: ByteSpan,
    pub header: [u32; 3],
    pub hash0: u32,
    pub draw_layers: String,
    pub bucket_type: String,
    pub opaque: SequinDrawerOpaque,
}

impl ObjectBody for SequinDrawer {
    const KIND: ObjectKind = ObjectKind::SequinDrawer;

    fn decode(cursor: &mut ByteCursor<'_>, name: String) -> Result<Self> {
        let begin = cursor.offset();
        let header = read_fingerprint(cursor, Self::KIND)?;

        let hash0 = cursor.read_u32()?;
        let unknown0 = cursor.read_u32()?;
        let unknown_bool0 = cursor.read_u8()?;
        let draw_layers = cursor.read_string()?;
        let bucket_type = cursor.read_string()?;
        let unknown1 = cursor.read_u32()?;

        Ok(Self {
            name,
            span: ByteSpan::new(begin, cursor.offset()),
            header,
            hash0,
            draw_layers,
            bucket_type,
            opaque: SequinDrawerOpaque {
                unknown0,
                unknown_bool0,
                unknown1,
            },
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn span(&self) -> ByteSpan {
        self.span
    }
}
