use serde::Serialize;

use super::kind::{ObjectKind, read_fingerprint};
use super::{ByteSpan, ObjectBody};
use crate::error::{Error, Result};
use crate::stream::ByteCursor;

/// Unidentified sample fields, in wire order. Preserve, do not interpret.
///
/// `unknown1` has been seen as either a bool followed by an int or the other
/// way round; it is kept as raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SampOpaque {
    pub unknown0: u32,
    pub unknown1: [u8; 5],
}

/// Audio sample reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Samp {
    pub name: String,
    pub span: ByteSpan,
    pub header: [u32; 2],
    /// Edit-state hash. Absent when the presence word is 0.
    pub hash0: Option<u32>,
    pub sample_play_mode: String,
    pub file_path: String,
    pub volume: f32,
    pub pitch: f32,
    pub pan: f32,
    pub offset: f32,
    pub channel_group: String,
    pub opaque: SampOpaque,
}

impl ObjectBody for Samp {
    const KIND: ObjectKind = ObjectKind::Samp;

    fn decode(cursor: &mut ByteCursor<'_>, name: String) -> Result<Self> {
        let begin = cursor.offset();
        let header = read_fingerprint(cursor, Self::KIND)?;

        // Only 0 and 1 have been observed; anything else means the layout
        // assumption is wrong.
        let flag_offset = cursor.offset();
        let hash0 = match cursor.read_u32()? {
            0 => None,
            1 => Some(cursor.read_u32()?),
            value => {
                return Err(Error::UnexpectedFlag {
                    offset: flag_offset,
                    context: "samp hash-present flag",
                    value,
                });
            }
        };

        let sample_play_mode = cursor.read_string()?;
        let unknown0 = cursor.read_u32()?;
        let file_path = cursor.read_string()?;

        let mut unknown1 = [0u8; 5];
        unknown1.copy_from_slice(cursor.read_bytes(5)?);

        Ok(Self {
            name,
            header,
            hash0,
            sample_play_mode,
            file_path,
            volume: cursor.read_f32()?,
            pitch: cursor.read_f32()?,
            pan: cursor.read_f32()?,
            offset: cursor.read_f32()?,
            channel_group: cursor.read_string()?,
            opaque: SampOpaque { unknown0, unknown1 },
            span: ByteSpan::new(begin, cursor.offset()),
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
    use crate::stream::words_to_pattern;

    fn push_str(buf: &mut Vec<u8>, s: &str) {
        buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
        buf.extend_from_slice(s.as_bytes());
    }

    fn samp_bytes(flag: u32) -> Vec<u8> {
        let mut buf = ObjectKind::Samp.fingerprint_bytes();
        buf.extend_from_slice(&flag.to_le_bytes());
        if flag == 1 {
            buf.extend_from_slice(&0xDEADBEEFu32.to_le_bytes());
        }
        push_str(&mut buf, "SAMP_PLAY_ONCE");
        buf.extend_from_slice(&9u32.to_le_bytes());
        push_str(&mut buf, "samples/levels/demo/kick.wav");
        buf.extend_from_slice(&[1, 0, 0, 0, 0]);
        for v in [0.8f32, 1.0, -0.5, 0.0] {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        push_str(&mut buf, "sequin");
        buf
    }

    #[test]
    fn test_decode_samp_with_hash() {
        let data = samp_bytes(1);
        let mut cursor = ByteCursor::new(&data);
        let samp = Samp::decode(&mut cursor, "kick.samp".to_string()).unwrap();

        assert_eq!(samp.hash0, Some(0xDEADBEEF));
        assert_eq!(samp.sample_play_mode, "SAMP_PLAY_ONCE");
        assert_eq!(samp.file_path, "samples/levels/demo/kick.wav");
        assert_eq!(samp.volume, 0.8);
        assert_eq!(samp.pitch, 1.0);
        assert_eq!(samp.pan, -0.5);
        assert_eq!(samp.offset, 0.0);
        assert_eq!(samp.channel_group, "sequin");
        assert_eq!(samp.opaque.unknown0, 9);
        assert_eq!(samp.opaque.unknown1, [1, 0, 0, 0, 0]);
        assert_eq!(samp.span, ByteSpan::new(0, data.len()));
    }

    #[test]
    fn test_decode_samp_without_hash() {
        let data = samp_bytes(0);
        let mut cursor = ByteCursor::new(&data);
        let samp = Samp::decode(&mut cursor, "kick.samp".to_string()).unwrap();
        assert_eq!(samp.hash0, None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_decode_samp_rejects_unexpected_flag() {
        let data = samp_bytes(2);
        let mut cursor = ByteCursor::new(&data);
        let err = Samp::decode(&mut cursor, String::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedFlag {
                offset: 8,
                value: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_samp_wrong_magic() {
        let data = words_to_pattern(&[0x0C, 0x05, 0, 0]);
        let mut cursor = ByteCursor::new(&data);
        assert!(matches!(
            Samp::decode(&mut cursor, String::new()),
            Err(Error::MagicMismatch { index: 1, .. })
        ));
    }
}
