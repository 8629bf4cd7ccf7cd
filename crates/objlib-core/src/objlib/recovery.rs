//! Body recovery: matching declarations to object bodies by fingerprint.
//!
//! Containers do not store where a declared object's body starts. Bodies are
//! laid out in roughly declaration order, so each declaration of a known kind
//! searches forward from the end of the previously decoded body for that
//! kind's fingerprint. The cursor only ever moves forward, which keeps one
//! body from being matched to two declarations.
//!
//! This relies on the physical body order tracking declaration order. If a
//! container stores a body far out of order, an earlier declaration's search
//! can consume a later declaration's body.

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, trace};

use super::drawer::SequinDrawer;
use super::kind::ObjectKind;
use super::leaf::Leaf;
use super::level::ObjectDeclaration;
use super::master::SequinMaster;
use super::samp::Samp;
use super::spn::Spn;
use super::{ByteSpan, ObjectBody};
use crate::error::Result;
use crate::hash::HashRegistry;
use crate::stream::{ByteCursor, find_pattern};

/// Recovered bodies, one collection per kind, each in recovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectCollections {
    pub leafs: Vec<Leaf>,
    pub samps: Vec<Samp>,
    pub spns: Vec<Spn>,
    pub masters: Vec<SequinMaster>,
    pub drawers: Vec<SequinDrawer>,
}

impl ObjectCollections {
    /// Total number of recovered bodies.
    pub fn len(&self) -> usize {
        self.leafs.len()
            + self.samps.len()
            + self.spns.len()
            + self.masters.len()
            + self.drawers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, kind: ObjectKind) -> usize {
        match kind {
            ObjectKind::Leaf => self.leafs.len(),
            ObjectKind::Samp => self.samps.len(),
            ObjectKind::Spn => self.spns.len(),
            ObjectKind::SequinMaster => self.masters.len(),
            ObjectKind::SequinDrawer => self.drawers.len(),
        }
    }

    fn decode_body(
        &mut self,
        kind: ObjectKind,
        cursor: &mut ByteCursor<'_>,
        name: String,
    ) -> Result<ByteSpan> {
        match kind {
            ObjectKind::Leaf => push_body(&mut self.leafs, cursor, name),
            ObjectKind::Samp => push_body(&mut self.samps, cursor, name),
            ObjectKind::Spn => push_body(&mut self.spns, cursor, name),
            ObjectKind::SequinMaster => push_body(&mut self.masters, cursor, name),
            ObjectKind::SequinDrawer => push_body(&mut self.drawers, cursor, name),
        }
    }
}

fn push_body<T: ObjectBody>(
    items: &mut Vec<T>,
    cursor: &mut ByteCursor<'_>,
    name: String,
) -> Result<ByteSpan> {
    let body = T::decode(cursor, name)?;
    let span = body.span();
    items.push(body);
    Ok(span)
}

/// Fingerprint byte patterns for every known kind, encoded once per decode.
struct FingerprintTable {
    patterns: Vec<(ObjectKind, Vec<u8>)>,
}

impl FingerprintTable {
    fn new() -> Self {
        Self {
            patterns: ObjectKind::iter()
                .map(|kind| (kind, kind.fingerprint_bytes()))
                .collect(),
        }
    }

    fn pattern(&self, kind: ObjectKind) -> &[u8] {
        self.patterns
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, bytes)| bytes.as_slice())
            .unwrap_or_default()
    }
}

/// Walk `declarations` in table order, decoding each recognized body found
/// ahead of the cursor and recording where it started.
///
/// Declarations of unknown kinds, and declarations whose fingerprint does not
/// occur again before the end of the buffer, stay bodyless and leave the
/// cursor where it was.
pub(crate) fn recover_bodies(
    cursor: &mut ByteCursor<'_>,
    declarations: &mut [ObjectDeclaration],
    registry: &HashRegistry,
) -> Result<ObjectCollections> {
    let table = FingerprintTable::new();
    let mut objects = ObjectCollections::default();

    for declaration in declarations.iter_mut() {
        let Some(kind) = ObjectKind::from_type_hash(declaration.type_hash) else {
            trace!(
                "Skipping '{}' of unsupported type {}",
                declaration.name,
                registry.resolve(declaration.type_hash)
            );
            continue;
        };

        let Some(start) = cursor.find_forward(table.pattern(kind)) else {
            debug!(
                "No {} body for '{}' after {:#x}",
                kind,
                declaration.name,
                cursor.offset()
            );
            continue;
        };

        cursor.seek_forward(start)?;
        let span = objects.decode_body(kind, cursor, declaration.name.clone())?;
        declaration.body_offset = Some(span.begin);

        debug!(
            "Recovered {} '{}' at {:#x}..{:#x}",
            kind, declaration.name, span.begin, span.end
        );
    }

    Ok(objects)
}

/// A position where some kind's fingerprint occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FingerprintHit {
    pub kind: ObjectKind,
    pub offset: usize,
}

/// Every fingerprint occurrence in `bytes`, sorted by offset.
///
/// Diagnostic only: hits may fall inside other bodies or the tables, and no
/// body is decoded.
pub fn scan_fingerprints(bytes: &[u8]) -> Vec<FingerprintHit> {
    let mut hits: Vec<FingerprintHit> = ObjectKind::iter()
        .flat_map(|kind| {
            find_pattern(bytes, &kind.fingerprint_bytes())
                .into_iter()
                .map(move |offset| FingerprintHit { kind, offset })
        })
        .collect();
    hits.sort_by_key(|hit| (hit.offset, hit.kind.type_hash()));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::words_to_pattern;

    fn push_str(buf: &mut Vec<u8>, s: &str) {
        buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
        buf.extend_from_slice(s.as_bytes());
    }

    fn drawer(buf: &mut Vec<u8>, layers: &str) {
        buf.extend(ObjectKind::SequinDrawer.fingerprint_bytes());
        buf.extend(words_to_pattern(&[0x10, 0x20]));
        buf.push(0);
        push_str(buf, layers);
        push_str(buf, "kBucketParent");
        buf.extend(words_to_pattern(&[0x30]));
    }

    fn declaration(kind: ObjectKind, name: &str) -> ObjectDeclaration {
        ObjectDeclaration::new(kind.type_hash(), name)
    }

    #[test]
    fn test_recover_two_bodies_in_order() {
        let mut data = vec![0xEE; 3];
        drawer(&mut data, "first");
        drawer(&mut data, "second");

        let mut declarations = vec![
            declaration(ObjectKind::SequinDrawer, "a.drawer"),
            declaration(ObjectKind::SequinDrawer, "b.drawer"),
        ];
        let mut cursor = ByteCursor::new(&data);
        let objects =
            recover_bodies(&mut cursor, &mut declarations, &HashRegistry::empty()).unwrap();

        assert_eq!(objects.drawers.len(), 2);
        let (a, b) = (&objects.drawers[0], &objects.drawers[1]);
        assert_eq!(a.name, "a.drawer");
        assert_eq!(a.draw_layers, "first");
        assert_eq!(b.draw_layers, "second");
        assert_eq!(a.span.begin, 3);
        assert_eq!(b.span.begin, a.span.end);
        assert!(!a.span.overlaps(&b.span));
        assert_eq!(declarations[0].body_offset, Some(3));
        assert_eq!(declarations[1].body_offset, Some(a.span.end));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_missing_body_leaves_cursor_and_continues() {
        let mut data = Vec::new();
        drawer(&mut data, "only");

        let mut declarations = vec![
            declaration(ObjectKind::SequinDrawer, "a.drawer"),
            declaration(ObjectKind::Leaf, "missing.leaf"),
            declaration(ObjectKind::SequinDrawer, "b.drawer"),
        ];
        let mut cursor = ByteCursor::new(&data);
        let objects =
            recover_bodies(&mut cursor, &mut declarations, &HashRegistry::empty()).unwrap();

        assert_eq!(objects.drawers.len(), 1);
        assert!(objects.leafs.is_empty());
        assert_eq!(declarations[1].body_offset, None);
        assert_eq!(declarations[2].body_offset, None);
        assert_eq!(cursor.offset(), data.len());
    }

    #[test]
    fn test_unknown_kind_is_skipped() {
        let mut data = Vec::new();
        drawer(&mut data, "layers");

        let mut declarations = vec![
            ObjectDeclaration::new(0xbcd17473, "level.lvl"),
            declaration(ObjectKind::SequinDrawer, "a.drawer"),
        ];
        let mut cursor = ByteCursor::new(&data);
        let objects =
            recover_bodies(&mut cursor, &mut declarations, &HashRegistry::builtin()).unwrap();

        assert_eq!(objects.len(), 1);
        assert_eq!(declarations[0].body_offset, None);
        assert_eq!(declarations[1].body_offset, Some(0));
    }

    #[test]
    fn test_search_starts_at_cursor() {
        let mut data = Vec::new();
        drawer(&mut data, "behind");
        let mut cursor = ByteCursor::new(&data);
        cursor.advance(1).unwrap();

        let mut declarations = vec![declaration(ObjectKind::SequinDrawer, "a.drawer")];
        let objects =
            recover_bodies(&mut cursor, &mut declarations, &HashRegistry::empty()).unwrap();

        assert!(objects.is_empty());
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_truncated_body_is_an_error() {
        let mut data = Vec::new();
        drawer(&mut data, "layers");
        data.truncate(data.len() - 1);

        let mut declarations = vec![declaration(ObjectKind::SequinDrawer, "a.drawer")];
        let mut cursor = ByteCursor::new(&data);
        assert!(recover_bodies(&mut cursor, &mut declarations, &HashRegistry::empty()).is_err());
    }

    #[test]
    fn test_scan_fingerprints() {
        let mut data = vec![0u8; 2];
        drawer(&mut data, "x");
        data.extend(ObjectKind::Samp.fingerprint_bytes());

        let hits = scan_fingerprints(&data);
        assert_eq!(
            hits.first(),
            Some(&FingerprintHit {
                kind: ObjectKind::SequinDrawer,
                offset: 2
            })
        );
        assert!(hits.iter().any(|h| h.kind == ObjectKind::Samp));
        assert!(hits.windows(2).all(|w| w[0].offset <= w[1].offset));
    }

    #[test]
    fn test_collections_count() {
        let objects = ObjectCollections::default();
        for kind in ObjectKind::iter() {
            assert_eq!(objects.count(kind), 0);
        }
        assert!(objects.is_empty());
    }
}
