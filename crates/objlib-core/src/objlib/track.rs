//! Animated parameter tracks stored inside leaf bodies.

use serde::Serialize;
use strum::{Display, FromRepr};

use crate::error::{Error, Result};
use crate::stream::{ByteCursor, F32Vec4};

/// Value type of a trait's datapoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, FromRepr)]
#[repr(u32)]
pub enum TraitDatatype {
    #[strum(serialize = "kTraitBool")]
    Bool = 1,
    #[strum(serialize = "kTraitFloat")]
    Float = 2,
    #[strum(serialize = "kTraitColor")]
    Color = 3,
    #[strum(serialize = "kTraitAction")]
    Action = 8,
}

/// Datapoint value, tagged by the owning trait's datatype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TraitValue {
    Bool(u8),
    Float(f32),
    Color(F32Vec4),
    Action(u8),
}

impl TraitValue {
    fn read(cursor: &mut ByteCursor<'_>, datatype: TraitDatatype) -> Result<Self> {
        Ok(match datatype {
            TraitDatatype::Bool => Self::Bool(cursor.read_u8()?),
            TraitDatatype::Float => Self::Float(cursor.read_f32()?),
            TraitDatatype::Color => Self::Color(cursor.read_f32vec4()?),
            TraitDatatype::Action => Self::Action(cursor.read_u8()?),
        })
    }

    pub fn datatype(&self) -> TraitDatatype {
        match self {
            Self::Bool(_) => TraitDatatype::Bool,
            Self::Float(_) => TraitDatatype::Float,
            Self::Color(_) => TraitDatatype::Color,
            Self::Action(_) => TraitDatatype::Action,
        }
    }

    /// Truth value of a `Bool` or `Action` datapoint.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) | Self::Action(v) => Some(*v != 0),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<F32Vec4> {
        match self {
            Self::Color(v) => Some(*v),
            _ => None,
        }
    }
}

/// One keyframe of a trait.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Datapoint {
    pub time: f32,
    pub value: TraitValue,
    pub interpolation: String,
    pub easing: String,
}

impl Datapoint {
    pub fn decode(cursor: &mut ByteCursor<'_>, datatype: u32) -> Result<Self> {
        let offset = cursor.offset();
        let datatype = TraitDatatype::from_repr(datatype)
            .ok_or(Error::UnsupportedDatatype { offset, datatype })?;

        Ok(Self {
            time: cursor.read_f32()?,
            value: TraitValue::read(cursor, datatype)?,
            interpolation: cursor.read_string()?,
            easing: cursor.read_string()?,
        })
    }
}

/// Fields of a trait whose meaning is not known. Preserved verbatim, in wire
/// order; do not interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TraitOpaque {
    pub unknown0: u32,
    pub unknown1: u32,
    pub unknown2: u32,
    pub unknown3: u32,
    pub unknown4: u32,
    pub unknown5: u32,
    pub unknown6: u8,
    pub unknown7: u8,
    pub unknown8: u32,
    pub unknown9: f32,
    pub unknown10: f32,
    pub unknown11: f32,
    pub unknown12: f32,
    pub unknown13: f32,
    pub unknown14: u8,
    pub unknown15: u8,
    pub unknown16: u8,
}

/// A named, time-keyed animated parameter.
///
/// Wire layout: object name, `unknown0`, selector hash, selector share index,
/// datatype, datapoints, editor datapoints, `unknown1..=5`, two intensity
/// strings, `unknown6..=16`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trait {
    pub object: String,
    pub selector: u32,
    /// Index of the shared selector; negative when the selector is not shared.
    pub selector_share_idx: i32,
    pub datatype: u32,
    pub datapoints: Vec<Datapoint>,
    /// Editor-only override intervals, stored as consecutive start/end points.
    pub editor_datapoints: Vec<Datapoint>,
    pub intensity0: String,
    pub intensity1: String,
    pub opaque: TraitOpaque,
}

impl Trait {
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let object = cursor.read_string()?;
        let unknown0 = cursor.read_u32()?;
        let selector = cursor.read_u32()?;
        let selector_share_idx = cursor.read_i32()?;
        let datatype = cursor.read_u32()?;

        let datapoints = cursor.read_counted(|c| Datapoint::decode(c, datatype))?;
        let editor_datapoints = cursor.read_counted(|c| Datapoint::decode(c, datatype))?;

        let unknown1 = cursor.read_u32()?;
        let unknown2 = cursor.read_u32()?;
        let unknown3 = cursor.read_u32()?;
        let unknown4 = cursor.read_u32()?;
        let unknown5 = cursor.read_u32()?;

        let intensity0 = cursor.read_string()?;
        let intensity1 = cursor.read_string()?;

        let opaque = TraitOpaque {
            unknown0,
            unknown1,
            unknown2,
            unknown3,
            unknown4,
            unknown5,
            unknown6: cursor.read_u8()?,
            unknown7: cursor.read_u8()?,
            unknown8: cursor.read_u32()?,
            unknown9: cursor.read_f32()?,
            unknown10: cursor.read_f32()?,
            unknown11: cursor.read_f32()?,
            unknown12: cursor.read_f32()?,
            unknown13: cursor.read_f32()?,
            unknown14: cursor.read_u8()?,
            unknown15: cursor.read_u8()?,
            unknown16: cursor.read_u8()?,
        };

        Ok(Self {
            object,
            selector,
            selector_share_idx,
            datatype,
            datapoints,
            editor_datapoints,
            intensity0,
            intensity1,
            opaque,
        })
    }

    /// Typed datatype tag, if the stored tag is one of the known values.
    pub fn data_type(&self) -> Option<TraitDatatype> {
        TraitDatatype::from_repr(self.datatype)
    }

    pub fn selector_share(&self) -> Option<u32> {
        u32::try_from(self.selector_share_idx).ok()
    }

    /// Editor datapoints grouped into `(start, end)` intervals. An unpaired
    /// trailing point is ignored.
    pub fn editor_intervals(&self) -> impl Iterator<Item = (&Datapoint, &Datapoint)> {
        self.editor_datapoints
            .chunks_exact(2)
            .map(|pair| (&pair[0], &pair[1]))
    }
}
