//! Fixed-width vector types stored inline in object bodies.

use serde::Serialize;

/// Three little-endian `u32` words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct U32Vec3 {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl U32Vec3 {
    pub const SIZE: usize = 12;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct F32Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl F32Vec3 {
    pub const SIZE: usize = 12;

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Four floats; used for positions with a w component and for RGBA colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct F32Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl F32Vec4 {
    pub const SIZE: usize = 16;

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn r(&self) -> f32 {
        self.x
    }

    pub fn g(&self) -> f32 {
        self.y
    }

    pub fn b(&self) -> f32 {
        self.z
    }

    pub fn a(&self) -> f32 {
        self.w
    }
}

/// Position, three rotation axes and scale, stored as five consecutive vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Transform {
    pub position: F32Vec3,
    pub rot_x: F32Vec3,
    pub rot_y: F32Vec3,
    pub rot_z: F32Vec3,
    pub scale: F32Vec3,
}

impl Transform {
    pub const SIZE: usize = F32Vec3::SIZE * 5;

    /// Identity rotation, unit scale, placed at the origin.
    pub const IDENTITY: Self = Self {
        position: F32Vec3::new(0.0, 0.0, 0.0),
        rot_x: F32Vec3::new(1.0, 0.0, 0.0),
        rot_y: F32Vec3::new(0.0, 1.0, 0.0),
        rot_z: F32Vec3::new(0.0, 0.0, 1.0),
        scale: F32Vec3::new(1.0, 1.0, 1.0),
    };
}
