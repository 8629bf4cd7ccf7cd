use serde::Serialize;
use tracing::{debug, trace};

use super::drawer::SequinDrawer;
use super::kind::{FILE_TYPE, LEVEL_LIBRARY_TYPE, ObjectKind};
use super::leaf::Leaf;
use super::master::SequinMaster;
use super::recovery::{ObjectCollections, recover_bodies};
use super::samp::Samp;
use super::spn::Spn;
use crate::error::{Error, Result};
use crate::hash::HashRegistry;
use crate::stream::ByteCursor;

/// Another object library this one depends on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryImport {
    pub unknown0: u32,
    pub library: String,
}

impl LibraryImport {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        Ok(Self {
            unknown0: cursor.read_u32()?,
            library: cursor.read_string()?,
        })
    }
}

/// An object referenced from an imported library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectImport {
    pub type_hash: u32,
    pub name: String,
    pub unknown0: u32,
    pub library: String,
}

impl ObjectImport {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        Ok(Self {
            type_hash: cursor.read_u32()?,
            name: cursor.read_string()?,
            unknown0: cursor.read_u32()?,
            library: cursor.read_string()?,
        })
    }
}

/// An object defined in this library.
///
/// The container stores only the type hash and name. `body_offset` is filled
/// in by body recovery and stays `None` when no body was matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectDeclaration {
    pub type_hash: u32,
    pub name: String,
    pub body_offset: Option<usize>,
}

impl ObjectDeclaration {
    pub fn new(type_hash: u32, name: impl Into<String>) -> Self {
        Self {
            type_hash,
            name: name.into(),
            body_offset: None,
        }
    }

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let type_hash = cursor.read_u32()?;
        let name = cursor.read_string()?;
        Ok(Self::new(type_hash, name))
    }

    /// Decodable kind of this declaration, if any.
    pub fn kind(&self) -> Option<ObjectKind> {
        ObjectKind::from_type_hash(self.type_hash)
    }

    pub fn is_resolved(&self) -> bool {
        self.body_offset.is_some()
    }
}

/// Header words following the container tags. Preserve, do not interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjlibLevelOpaque {
    pub unknown0: u32,
    pub unknown1: u32,
    pub unknown2: u32,
    pub unknown3: u32,
}

/// A decoded level object library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjlibLevel {
    pub file_type: u32,
    pub library_type: u32,
    pub opaque: ObjlibLevelOpaque,
    pub library_imports: Vec<LibraryImport>,
    pub origin: String,
    pub object_imports: Vec<ObjectImport>,
    pub declarations: Vec<ObjectDeclaration>,
    pub objects: ObjectCollections,
}

impl ObjlibLevel {
    pub fn leafs(&self) -> &[Leaf] {
        &self.objects.leafs
    }

    pub fn samps(&self) -> &[Samp] {
        &self.objects.samps
    }

    pub fn spns(&self) -> &[Spn] {
        &self.objects.spns
    }

    pub fn masters(&self) -> &[SequinMaster] {
        &self.objects.masters
    }

    pub fn drawers(&self) -> &[SequinDrawer] {
        &self.objects.drawers
    }

    /// Number of declarations that were matched to a body.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Declarations of a decodable kind whose body was not found.
    pub fn unresolved_declarations(&self) -> impl Iterator<Item = &ObjectDeclaration> {
        self.declarations
            .iter()
            .filter(|d| d.kind().is_some() && !d.is_resolved())
    }

    /// Declarations whose type hash is not a decodable kind.
    pub fn unsupported_declarations(&self) -> impl Iterator<Item = &ObjectDeclaration> {
        self.declarations.iter().filter(|d| d.kind().is_none())
    }

    pub fn declarations_of(&self, kind: ObjectKind) -> impl Iterator<Item = &ObjectDeclaration> {
        self.declarations
            .iter()
            .filter(move |d| d.kind() == Some(kind))
    }
}

/// Two-phase decoder for a whole container.
///
/// Phase one reads the header and the import and declaration tables in
/// sequence. Phase two recovers object bodies; see [`super::recovery`].
pub struct ObjlibDecoder<'a> {
    cursor: ByteCursor<'a>,
    registry: &'a HashRegistry,
}

impl<'a> ObjlibDecoder<'a> {
    /// Decoder labelling diagnostics with the shared builtin registry.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(bytes),
            registry: HashRegistry::shared(),
        }
    }

    /// Use `registry` to label type hashes in log output.
    pub fn with_registry(mut self, registry: &'a HashRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn decode(mut self) -> Result<ObjlibLevel> {
        let file_type = self.read_tag("file type", FILE_TYPE)?;
        let library_type = self.read_tag("library type", LEVEL_LIBRARY_TYPE)?;

        let opaque = ObjlibLevelOpaque {
            unknown0: self.cursor.read_u32()?,
            unknown1: self.cursor.read_u32()?,
            unknown2: self.cursor.read_u32()?,
            unknown3: self.cursor.read_u32()?,
        };

        let library_imports = self.cursor.read_counted(LibraryImport::decode)?;
        for import in &library_imports {
            trace!("Library import: {}", import.library);
        }

        let origin = self.cursor.read_string()?;
        let object_imports = self.cursor.read_counted(ObjectImport::decode)?;
        for import in &object_imports {
            trace!(
                "Object import: {} ({}) from {}",
                import.name,
                self.registry.resolve(import.type_hash),
                import.library
            );
        }

        let mut declarations = self.cursor.read_counted(ObjectDeclaration::decode)?;
        debug!(
            "Read tables for '{}': {} library imports, {} object imports, {} declarations; bodies start after {:#x}",
            origin,
            library_imports.len(),
            object_imports.len(),
            declarations.len(),
            self.cursor.offset()
        );

        let objects = recover_bodies(&mut self.cursor, &mut declarations, self.registry)?;
        debug!(
            "Recovered {} of {} declared bodies",
            objects.len(),
            declarations.len()
        );

        Ok(ObjlibLevel {
            file_type,
            library_type,
            opaque,
            library_imports,
            origin,
            object_imports,
            declarations,
            objects,
        })
    }

    fn read_tag(&mut self, field: &'static str, expected: u32) -> Result<u32> {
        let offset = self.cursor.offset();
        let actual = self.cursor.read_u32()?;
        if actual != expected {
            return Err(Error::ContainerTagMismatch {
                offset,
                field,
                expected,
                actual,
            });
        }
        Ok(actual)
    }
}

/// Decode a level object library from its raw bytes.
///
/// Returns either the full object graph or the first structural error.
/// Declarations whose bodies cannot be located are not an error; they remain
/// in [`ObjlibLevel::declarations`] with no body offset.
pub fn decode(bytes: &[u8]) -> Result<ObjlibLevel> {
    ObjlibDecoder::new(bytes).decode()
}
