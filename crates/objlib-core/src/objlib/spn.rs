use serde::Serialize;

use super::kind::{ObjectKind, read_fingerprint};
use super::{ByteSpan, ObjectBody};
use crate::error::Result;
use crate::stream::{ByteCursor, Transform};

/// Unidentified spawn fields, in wire order. Preserve, do not interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpnOpaque {
    pub unknown0: u32,
    pub unknown1: u32,
}

/// Spawn reference: places another object library's contents under a transform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spn {
    pub name: String,
    pub span: ByteSpan,
    pub header: [u32; 3],
    /// Edit-state component hash.
    pub hash0: u32,
    /// Transform component hash.
    pub hash1: u32,
    pub xfm_name: String,
    pub constraint: String,
    pub transform: Transform,
    pub objlib_path: String,
    pub bucket_type: String,
    pub opaque: SpnOpaque,
}

impl ObjectBody for Spn {
    const KIND: ObjectKind = ObjectKind::Spn;

    fn decode(cursor: &mut ByteCursor<'_>, name: String) -> Result<Self> {
        let begin = cursor.offset();
        let header = read_fingerprint(cursor, Self::KIND)?;

        let hash0 = cursor.read_u32()?;
        let hash1 = cursor.read_u32()?;
        let unknown0 = cursor.read_u32()?;
        let xfm_name = cursor.read_string()?;
        let constraint = cursor.read_string()?;
        let transform = cursor.read_transform()?;
        let unknown1 = cursor.read_u32()?;
        let objlib_path = cursor.read_string()?;
        let bucket_type = cursor.read_string()?;

        Ok(Self {
            name,
            span: ByteSpan::new(begin, cursor.offset()),
            header,
            hash0,
            hash1,
            xfm_name,
            constraint,
            transform,
            objlib_path,
            bucket_type,
            opaque: SpnOpaque { unknown0, unknown1 },
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn span(&self) -> ByteSpan {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::F32Vec3;

    fn push_str(buf: &mut Vec<u8>, s: &str) {
        buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
        buf.extend_from_slice(s.as_bytes());
    }

    #[test]
    fn test_decode_spn() {
        let mut data = ObjectKind::Spn.fingerprint_bytes();
        for v in [0x1111u32, 0x2222, 0x3] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        push_str(&mut data, "");
        push_str(&mut data, "kConstraintParent");
        let t = Transform::IDENTITY;
        for v in [t.position, t.rot_x, t.rot_y, t.rot_z] {
            for f in [v.x, v.y, v.z] {
                data.extend_from_slice(&f.to_le_bytes());
            }
        }
        for f in [2.0f32, 2.0, 2.0] {
            data.extend_from_slice(&f.to_le_bytes());
        }
        data.extend_from_slice(&4u32.to_le_bytes());
        push_str(&mut data, "levels/demo/tunnel.objlib");
        push_str(&mut data, "kBucketParent");

        let mut cursor = ByteCursor::new(&data);
        let spn = Spn::decode(&mut cursor, "tunnel.spn".to_string()).unwrap();

        assert_eq!(spn.header, [1, 4, 2]);
        assert_eq!((spn.hash0, spn.hash1), (0x1111, 0x2222));
        assert_eq!(spn.xfm_name, "");
        assert_eq!(spn.constraint, "kConstraintParent");
        assert_eq!(spn.transform.rot_y, F32Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(spn.transform.scale, F32Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(spn.objlib_path, "levels/demo/tunnel.objlib");
        assert_eq!(spn.bucket_type, "kBucketParent");
        assert_eq!(spn.opaque, SpnOpaque { unknown0: 3, unknown1: 4 });
        assert_eq!(spn.span.len(), data.len());
        assert!(cursor.is_at_end());
    }
}
