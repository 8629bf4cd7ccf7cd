//! Bounds-checked little-endian reader over a container buffer.
//!
//! `ByteCursor` wraps a byte slice and keeps a forward-only read offset. Every
//! `read_*` is a `peek_*` followed by [`ByteCursor::advance`], so the bounds
//! check lives in one place and the offset can never pass the end of the data.

use tracing::trace;

use super::pattern::find_first_pattern;
use super::types::{F32Vec3, F32Vec4, Transform, U32Vec3};
use crate::error::{Error, Result};

/// Upper bound on the capacity reserved up front by [`ByteCursor::read_counted`].
const MAX_PREALLOCATED_ITEMS: usize = 1024;

/// A position-tracking reader for object library containers.
///
/// # Example
///
/// ```
/// use objlib_core::stream::ByteCursor;
///
/// let data = [0x78, 0x56, 0x34, 0x12, 0x01];
/// let mut cursor = ByteCursor::new(&data);
///
/// assert_eq!(cursor.peek_u32().unwrap(), 0x12345678);
/// assert_eq!(cursor.offset(), 0);
/// assert_eq!(cursor.read_u32().unwrap(), 0x12345678);
/// assert_eq!(cursor.offset(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current read offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes between the offset and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.offset == self.data.len()
    }

    /// Moves the offset forward by `count` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEof`] if the new offset would exceed the
    /// buffer length. The offset is left untouched in that case.
    pub fn advance(&mut self, count: usize) -> Result<()> {
        self.ensure(count)?;
        self.offset += count;
        Ok(())
    }

    /// Searches for `pattern` between the current offset and the end of the
    /// buffer and returns the absolute offset of the first match.
    ///
    /// Bytes before the current offset are never considered.
    pub fn find_forward(&self, pattern: &[u8]) -> Option<usize> {
        find_first_pattern(&self.data[self.offset..], pattern).map(|pos| self.offset + pos)
    }

    /// Moves the offset to the absolute position `target`, which must not lie
    /// behind the current offset.
    pub fn seek_forward(&mut self, target: usize) -> Result<()> {
        let delta = target.checked_sub(self.offset).ok_or(Error::SeekBackward {
            offset: self.offset,
            target,
        })?;
        trace!("Seeking from {:#x} to {:#x}", self.offset, target);
        self.advance(delta)
    }

    /// Returns the next `count` bytes without advancing.
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        self.ensure(count)?;
        Ok(&self.data[self.offset..self.offset + count])
    }

    /// Reads `count` raw bytes and advances past them.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.advance(count)?;
        Ok(bytes)
    }

    fn peek_array<const N: usize>(&self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.peek_bytes(N)?);
        Ok(out)
    }

    fn peek_array_at<const N: usize>(&self, skip: usize) -> Result<[u8; N]> {
        self.ensure(skip + N)?;
        let start = self.offset + skip;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[start..start + N]);
        Ok(out)
    }

    pub fn peek_i8(&self) -> Result<i8> {
        Ok(i8::from_le_bytes(self.peek_array()?))
    }

    pub fn peek_u8(&self) -> Result<u8> {
        Ok(u8::from_le_bytes(self.peek_array()?))
    }

    pub fn peek_i16(&self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.peek_array()?))
    }

    pub fn peek_u16(&self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.peek_array()?))
    }

    pub fn peek_i32(&self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.peek_array()?))
    }

    pub fn peek_u32(&self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.peek_array()?))
    }

    pub fn peek_f32(&self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.peek_array()?))
    }

    pub fn peek_u32vec3(&self) -> Result<U32Vec3> {
        self.ensure(U32Vec3::SIZE)?;
        Ok(U32Vec3 {
            x: u32::from_le_bytes(self.peek_array_at(0)?),
            y: u32::from_le_bytes(self.peek_array_at(4)?),
            z: u32::from_le_bytes(self.peek_array_at(8)?),
        })
    }

    pub fn peek_f32vec3(&self) -> Result<F32Vec3> {
        self.peek_f32vec3_at(0)
    }

    fn peek_f32vec3_at(&self, skip: usize) -> Result<F32Vec3> {
        self.ensure(skip + F32Vec3::SIZE)?;
        Ok(F32Vec3 {
            x: f32::from_le_bytes(self.peek_array_at(skip)?),
            y: f32::from_le_bytes(self.peek_array_at(skip + 4)?),
            z: f32::from_le_bytes(self.peek_array_at(skip + 8)?),
        })
    }

    pub fn peek_f32vec4(&self) -> Result<F32Vec4> {
        self.ensure(F32Vec4::SIZE)?;
        Ok(F32Vec4 {
            x: f32::from_le_bytes(self.peek_array_at(0)?),
            y: f32::from_le_bytes(self.peek_array_at(4)?),
            z: f32::from_le_bytes(self.peek_array_at(8)?),
            w: f32::from_le_bytes(self.peek_array_at(12)?),
        })
    }

    pub fn peek_transform(&self) -> Result<Transform> {
        self.ensure(Transform::SIZE)?;
        Ok(Transform {
            position: self.peek_f32vec3_at(0)?,
            rot_x: self.peek_f32vec3_at(F32Vec3::SIZE)?,
            rot_y: self.peek_f32vec3_at(F32Vec3::SIZE * 2)?,
            rot_z: self.peek_f32vec3_at(F32Vec3::SIZE * 3)?,
            scale: self.peek_f32vec3_at(F32Vec3::SIZE * 4)?,
        })
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        let v = self.peek_i8()?;
        self.advance(1)?;
        Ok(v)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let v = self.peek_u8()?;
        self.advance(1)?;
        Ok(v)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let v = self.peek_i16()?;
        self.advance(2)?;
        Ok(v)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let v = self.peek_u16()?;
        self.advance(2)?;
        Ok(v)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let v = self.peek_i32()?;
        self.advance(4)?;
        Ok(v)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let v = self.peek_u32()?;
        self.advance(4)?;
        Ok(v)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let v = self.peek_f32()?;
        self.advance(4)?;
        Ok(v)
    }

    pub fn read_u32vec3(&mut self) -> Result<U32Vec3> {
        let v = self.peek_u32vec3()?;
        self.advance(U32Vec3::SIZE)?;
        Ok(v)
    }

    pub fn read_f32vec3(&mut self) -> Result<F32Vec3> {
        let v = self.peek_f32vec3()?;
        self.advance(F32Vec3::SIZE)?;
        Ok(v)
    }

    pub fn read_f32vec4(&mut self) -> Result<F32Vec4> {
        let v = self.peek_f32vec4()?;
        self.advance(F32Vec4::SIZE)?;
        Ok(v)
    }

    pub fn read_transform(&mut self) -> Result<Transform> {
        let v = self.peek_transform()?;
        self.advance(Transform::SIZE)?;
        Ok(v)
    }

    /// Reads a `u32` length prefix followed by that many UTF-8 bytes.
    ///
    /// No terminator or padding follows the string body.
    pub fn read_string(&mut self) -> Result<String> {
        let start = self.offset;
        let len = self.peek_u32()? as usize;
        // Check the body before consuming the prefix so a failed read leaves
        // the offset where it was.
        self.ensure(4 + len)?;
        self.advance(4)?;
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|source| Error::InvalidString {
            offset: start,
            source,
        })
    }

    /// Reads a `u32` element count and then `count` elements with `read`.
    pub fn read_counted<T>(
        &mut self,
        mut read: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let count = self.read_u32()? as usize;
        // The count is untrusted; grow past this as elements actually decode.
        let mut items = Vec::with_capacity(count.min(MAX_PREALLOCATED_ITEMS));
        for _ in 0..count {
            items.push(read(self)?);
        }
        Ok(items)
    }

    fn ensure(&self, count: usize) -> Result<()> {
        match self.offset.checked_add(count) {
            Some(end) if end <= self.data.len() => Ok(()),
            _ => Err(Error::UnexpectedEof {
                offset: self.offset,
                need: count,
                have: self.remaining(),
            }),
        }
    }
}
