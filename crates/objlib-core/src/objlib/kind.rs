use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};

use crate::error::{Error, Result};
use crate::stream::{ByteCursor, words_to_pattern};

/// File-type tag every object library starts with.
pub const FILE_TYPE: u32 = 0x8;

/// Library-type tag of level object libraries (`*Level.objlib`).
pub const LEVEL_LIBRARY_TYPE: u32 = 0x0b37_4d9e;

/// Object kinds whose bodies can be recovered and decoded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, IntoStaticStr,
)]
pub enum ObjectKind {
    /// Animation-track container (`*.leaf`).
    #[strum(serialize = "leaf")]
    Leaf,
    /// Audio sample reference (`*.samp`).
    #[strum(serialize = "samp")]
    Samp,
    /// Spawn/transform reference (`*.spn`).
    #[strum(serialize = "spn")]
    Spn,
    /// Level sequence master (`*.master`).
    #[strum(serialize = "master")]
    SequinMaster,
    /// Render layer descriptor (`*.drawer`).
    #[strum(serialize = "drawer")]
    SequinDrawer,
}

impl ObjectKind {
    /// Declaration type hash identifying this kind.
    pub const fn type_hash(self) -> u32 {
        match self {
            Self::Leaf => 0xce7e_85f6,
            Self::Samp => 0x7aa8_f390,
            Self::Spn => 0xd897_d5db,
            Self::SequinMaster => 0x4907_80b9,
            Self::SequinDrawer => 0xd305_8b5d,
        }
    }

    /// Magic words every body of this kind begins with.
    pub const fn fingerprint(self) -> &'static [u32] {
        match self {
            Self::Leaf => &[0x22, 0x21, 0x04, 0x02],
            Self::Samp => &[0x0C, 0x04],
            Self::Spn => &[0x01, 0x04, 0x02],
            Self::SequinMaster => &[0x21, 0x21, 0x04, 0x02],
            Self::SequinDrawer => &[0x07, 0x04, 0x01],
        }
    }

    /// Fingerprint as the little-endian byte sequence searched for in the buffer.
    pub fn fingerprint_bytes(self) -> Vec<u8> {
        words_to_pattern(self.fingerprint())
    }

    pub fn from_type_hash(type_hash: u32) -> Option<Self> {
        match type_hash {
            0xce7e_85f6 => Some(Self::Leaf),
            0x7aa8_f390 => Some(Self::Samp),
            0xd897_d5db => Some(Self::Spn),
            0x4907_80b9 => Some(Self::SequinMaster),
            0xd305_8b5d => Some(Self::SequinDrawer),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Read `N` words and check them against `kind`'s fingerprint.
pub(crate) fn read_fingerprint<const N: usize>(
    cursor: &mut ByteCursor<'_>,
    kind: ObjectKind,
) -> Result<[u32; N]> {
    let expected = kind.fingerprint();
    debug_assert_eq!(expected.len(), N);

    let mut words = [0u32; N];
    for (index, word) in words.iter_mut().enumerate() {
        let offset = cursor.offset();
        *word = cursor.read_u32()?;
        if *word != expected[index] {
            return Err(Error::MagicMismatch {
                kind: kind.name(),
                offset,
                index,
                expected: expected[index],
                actual: *word,
            });
        }
    }
    Ok(words)
}
