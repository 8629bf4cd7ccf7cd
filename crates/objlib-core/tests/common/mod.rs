//! Little-endian writer and body builders for synthetic containers.

#![allow(dead_code)]

use objlib_core::objlib::{FILE_TYPE, LEVEL_LIBRARY_TYPE};
use objlib_core::ObjectKind;

#[derive(Default)]
pub struct LeWriter {
    buf: Vec<u8>,
}

impl LeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn u32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn i32(&mut self, value: i32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn f32(&mut self, value: f32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn words(&mut self, words: &[u32]) -> &mut Self {
        for word in words {
            self.u32(*word);
        }
        self
    }

    pub fn str(&mut self, value: &str) -> &mut Self {
        self.u32(value.len() as u32);
        self.buf.extend_from_slice(value.as_bytes());
        self
    }

    pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Header and tables; bodies are appended by the caller.
pub fn container(declarations: &[(u32, &str)]) -> LeWriter {
    let mut w = LeWriter::new();
    w.words(&[FILE_TYPE, LEVEL_LIBRARY_TYPE, 0x11, 0x22, 0x33, 0x44]);
    w.u32(1).u32(0x5).str("levels/demo/common.objlib");
    w.str("levels/demo/level.objlib");
    w.u32(0);
    w.u32(declarations.len() as u32);
    for (type_hash, name) in declarations {
        w.u32(*type_hash).str(name);
    }
    w
}

/// A trait with `points` float datapoints and one editor interval.
pub fn float_trait(w: &mut LeWriter, object: &str, points: &[(f32, f32)]) {
    trait_header(w, object, 2);
    w.u32(points.len() as u32);
    for (time, value) in points {
        w.f32(*time).f32(*value).str("kTraitLinear").str("kEaseInOut");
    }
    w.u32(2);
    for time in [0.0f32, 8.0] {
        w.f32(time).f32(0.5).str("kTraitConstant").str("kEaseInOut");
    }
    trait_trailer(w);
}

/// A trait tagged with `datatype` and a single datapoint body written as a
/// float.
pub fn raw_trait(w: &mut LeWriter, datatype: u32, point_count: u32) {
    trait_header(w, "sequin_speed", datatype);
    w.u32(point_count);
    for _ in 0..point_count {
        w.f32(0.0).f32(1.0).str("kTraitLinear").str("kEaseInOut");
    }
    w.u32(0);
    trait_trailer(w);
}

fn trait_header(w: &mut LeWriter, object: &str, datatype: u32) {
    w.str(object).u32(0x9).u32(0xabcd_0001).i32(-1).u32(datatype);
}

fn trait_trailer(w: &mut LeWriter) {
    w.words(&[0x10, 0x11, 0x12, 0x13, 0x14]);
    w.str("").str("");
    w.u8(1).u8(0).u32(0x15);
    for f in [0.1f32, 0.2, 0.3, 0.4, 0.5] {
        w.f32(f);
    }
    w.u8(0).u8(1).u8(0);
}

pub fn leaf(w: &mut LeWriter, build_traits: impl FnOnce(&mut LeWriter) -> u32) {
    w.words(ObjectKind::Leaf.fingerprint());
    w.u32(0xa0).u32(0x3).u32(0xa1).str("kTimeBeats").u32(0xa2);

    let mut traits = LeWriter::new();
    let count = build_traits(&mut traits);
    w.u32(count).bytes(&traits.into_bytes());

    w.u32(0x6);
    w.u32(1).words(&[0x100, 0x200, 0x300]);
    w.words(&[0x7, 0x8, 0x9]);
}

pub fn samp(w: &mut LeWriter, file_path: &str) {
    w.words(ObjectKind::Samp.fingerprint());
    w.u32(1).u32(0xb0);
    w.str("kSampleOneOff");
    w.u32(0x3);
    w.str(file_path);
    w.bytes(&[0, 1, 0, 0, 0]);
    w.f32(0.8).f32(1.0).f32(0.0).f32(0.0);
    w.str("sequin.ch");
}

pub fn spn(w: &mut LeWriter, objlib_path: &str) {
    w.words(ObjectKind::Spn.fingerprint());
    w.u32(0xc0).u32(0xc1).u32(0x3);
    w.str("").str("kConstraintParent");
    for f in [
        1.0f32, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0,
    ] {
        w.f32(f);
    }
    w.u32(0x5);
    w.str(objlib_path).str("kBucketParent");
}

pub fn master(w: &mut LeWriter, sublevels: &[&str]) {
    w.words(ObjectKind::SequinMaster.fingerprint());
    w.u32(0xd0).u32(0x3).u32(0xd1).str("kTimeBeats").u32(0xd2);
    w.u32(0x5).f32(160.0);
    w.str("skybox_blue.objlib").str("");
    w.u32(sublevels.len() as u32);
    for lvl in sublevels {
        w.str(lvl).str("").u8(1).str("").str("");
        w.u8(1).u8(0).u32(0x0101).u8(1).u8(0);
    }
    w.u8(0).u8(1).words(&[3, 50, 8, 15]);
    w.f32(0.6).f32(0.5).f32(0.5);
    w.str("").str("path.gameplay");
}

pub fn drawer(w: &mut LeWriter, layers: &str) {
    w.words(ObjectKind::SequinDrawer.fingerprint());
    w.u32(0xe0).u32(0x3).u8(0);
    w.str(layers).str("kBucketParent");
    w.u32(0xe1);
}
