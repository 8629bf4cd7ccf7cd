//! Level sequence master: the ordered list of sublevels making up a level.

use serde::Serialize;

use super::kind::{ObjectKind, read_fingerprint};
use super::{ByteSpan, ObjectBody};
use crate::error::Result;
use crate::stream::ByteCursor;

/// Unidentified sublevel fields, in wire order. Preserve, do not interpret.
///
/// `unknown0` may be a single int or four packed flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SequinMasterLvlOpaque {
    pub unknown_bool0: u8,
    pub unknown_bool1: u8,
    pub unknown0: u32,
    pub unknown_bool2: u8,
}

/// One entry of a master's sublevel list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequinMasterLvl {
    /// Empty when the slot holds a boss gate instead of a level.
    pub lvl_name: String,
    /// Empty when the slot holds a plain level.
    pub gate_name: String,
    pub is_checkpoint: u8,
    pub checkpoint_leader_lvl_name: String,
    pub rest_lvl_name: String,
    pub play_plus: u8,
    pub opaque: SequinMasterLvlOpaque,
}

impl SequinMasterLvl {
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let lvl_name = cursor.read_string()?;
        let gate_name = cursor.read_string()?;
        let is_checkpoint = cursor.read_u8()?;
        let checkpoint_leader_lvl_name = cursor.read_string()?;
        let rest_lvl_name = cursor.read_string()?;

        let opaque = SequinMasterLvlOpaque {
            unknown_bool0: cursor.read_u8()?,
            unknown_bool1: cursor.read_u8()?,
            unknown0: cursor.read_u32()?,
            unknown_bool2: cursor.read_u8()?,
        };

        Ok(Self {
            lvl_name,
            gate_name,
            is_checkpoint,
            checkpoint_leader_lvl_name,
            rest_lvl_name,
            play_plus: cursor.read_u8()?,
            opaque,
        })
    }

    pub fn is_gate(&self) -> bool {
        self.lvl_name.is_empty() && !self.gate_name.is_empty()
    }
}

/// Unidentified master header fields, in wire order. Preserve, do not interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SequinMasterOpaque {
    pub unknown0: u32,
    pub unknown1: u32,
    pub unknown2: f32,
}

/// Trailing scalars after the sublevel list, in wire order. Values commonly
/// observed: `false, true, 3, 50, 8, 15, 0.6, 0.5, 0.5`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SequinMasterFooter {
    pub footer0: u8,
    pub footer1: u8,
    pub footer2: u32,
    pub footer3: u32,
    pub footer4: u32,
    pub footer5: u32,
    pub footer6: f32,
    pub footer7: f32,
    pub footer8: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequinMaster {
    pub name: String,
    pub span: ByteSpan,
    pub header: [u32; 4],
    pub hash0: u32,
    pub hash1: u32,
    pub time_unit: String,
    /// Edit-state component hash.
    pub hash2: u32,
    pub skybox: String,
    pub intro_lvl: String,
    pub sublevels: Vec<SequinMasterLvl>,
    pub footer: SequinMasterFooter,
    pub checkpoint_lvl: String,
    /// Always `path.gameplay` in observed data.
    pub path_gameplay: String,
    pub opaque: SequinMasterOpaque,
}

impl ObjectBody for SequinMaster {
    const KIND: ObjectKind = ObjectKind::SequinMaster;

    fn decode(cursor: &mut ByteCursor<'_>, name: String) -> Result<Self> {
        let begin = cursor.offset();
        let header = read_fingerprint(cursor, Self::KIND)?;

        let hash0 = cursor.read_u32()?;
        let unknown0 = cursor.read_u32()?;
        let hash1 = cursor.read_u32()?;
        let time_unit = cursor.read_string()?;
        let hash2 = cursor.read_u32()?;
        let unknown1 = cursor.read_u32()?;
        let unknown2 = cursor.read_f32()?;
        let skybox = cursor.read_string()?;
        let intro_lvl = cursor.read_string()?;
        let sublevels = cursor.read_counted(SequinMasterLvl::decode)?;

        let footer = SequinMasterFooter {
            footer0: cursor.read_u8()?,
            footer1: cursor.read_u8()?,
            footer2: cursor.read_u32()?,
            footer3: cursor.read_u32()?,
            footer4: cursor.read_u32()?,
            footer5: cursor.read_u32()?,
            footer6: cursor.read_f32()?,
            footer7: cursor.read_f32()?,
            footer8: cursor.read_f32()?,
        };
        let checkpoint_lvl = cursor.read_string()?;
        let path_gameplay = cursor.read_string()?;

        Ok(Self {
            name,
            span: ByteSpan::new(begin, cursor.offset()),
            header,
            hash0,
            hash1,
            time_unit,
            hash2,
            skybox,
            intro_lvl,
            sublevels,
            footer,
            checkpoint_lvl,
            path_gameplay,
            opaque: SequinMasterOpaque {
                unknown0,
                unknown1,
                unknown2,
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
