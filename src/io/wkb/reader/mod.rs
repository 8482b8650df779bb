//! Decode serialized geometries.
//!
//! The reader never trusts a length field: every count is checked against the bytes that remain
//! before anything is allocated, and every read is bounds-checked, so malformed input produces a
//! [`DecodeError`] instead of a panic or an out-of-bounds read.

mod geometry;

pub use geometry::read_geometry;

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{DecodeError, DecodeResult};
use crate::io::wkb::common::{COORD_BYTES, COUNT_BYTES, LITTLE_ENDIAN};
use crate::scalar::{Coord, GeometryType};

/// A bounds-checked cursor over a serialized geometry.
pub(crate) struct WkbReader<'a> {
    cursor: Cursor<&'a [u8]>,
    /// Current GeometryCollection nesting level
    depth: usize,
}

impl<'a> WkbReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buf),
            depth: 0,
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        let len = self.cursor.get_ref().len();
        let pos = usize::try_from(self.cursor.position()).unwrap_or(len);
        len.saturating_sub(pos)
    }

    fn ensure(&self, needed: usize) -> DecodeResult<()> {
        let remaining = self.remaining();
        if remaining < needed {
            Err(DecodeError::UnexpectedEof { needed, remaining })
        } else {
            Ok(())
        }
    }

    fn eof(&self, needed: usize) -> DecodeError {
        DecodeError::UnexpectedEof {
            needed,
            remaining: self.remaining(),
        }
    }

    fn read_u8(&mut self) -> DecodeResult<u8> {
        self.ensure(1)?;
        self.cursor.read_u8().map_err(|_| self.eof(1))
    }

    fn read_u32(&mut self) -> DecodeResult<u32> {
        self.ensure(4)?;
        self.cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| self.eof(4))
    }

    fn read_f64(&mut self) -> DecodeResult<f64> {
        self.ensure(8)?;
        self.cursor
            .read_f64::<LittleEndian>()
            .map_err(|_| self.eof(8))
    }

    /// Read a byte order marker and type tag.
    pub(crate) fn read_header(&mut self) -> DecodeResult<GeometryType> {
        let byte_order = self.read_u8()?;
        if byte_order != LITTLE_ENDIAN {
            return Err(DecodeError::UnsupportedByteOrder(byte_order));
        }
        let tag = self.read_u32()?;
        GeometryType::try_from(tag).map_err(|_| DecodeError::UnknownGeometryType(tag))
    }

    /// Read a count field, rejecting counts whose elements could not possibly fit in the rest of
    /// the buffer given that each one takes at least `min_item_bytes`.
    pub(crate) fn read_count(&mut self, min_item_bytes: usize) -> DecodeResult<usize> {
        let count = self.read_u32()?;
        let remaining = self.remaining();
        let fits = usize::try_from(count)
            .ok()
            .and_then(|n| n.checked_mul(min_item_bytes))
            .is_some_and(|needed| needed <= remaining);
        if !fits {
            return Err(DecodeError::CountTooLarge { count, remaining });
        }
        // Lossless: checked above.
        Ok(count as usize)
    }

    pub(crate) fn read_coord(&mut self) -> DecodeResult<Coord> {
        self.ensure(COORD_BYTES)?;
        let x = self.read_f64()?;
        let y = self.read_f64()?;
        Coord::try_new(x, y).map_err(|_| DecodeError::NonFiniteCoordinate)
    }

    /// numPoints followed by that many coordinates.
    pub(crate) fn read_coords(&mut self) -> DecodeResult<Vec<Coord>> {
        let num_coords = self.read_count(COORD_BYTES)?;
        let mut coords = Vec::with_capacity(num_coords);
        for _ in 0..num_coords {
            coords.push(self.read_coord()?);
        }
        Ok(coords)
    }

    /// Smallest possible encoding of a polygon ring: just its count field.
    pub(crate) const MIN_RING_BYTES: usize = COUNT_BYTES;

    pub(crate) fn enter_collection(&mut self) -> DecodeResult<()> {
        use crate::io::wkb::common::MAX_NESTING_DEPTH;

        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(DecodeError::NestingTooDeep(MAX_NESTING_DEPTH));
        }
        Ok(())
    }

    pub(crate) fn leave_collection(&mut self) {
        self.depth -= 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_past_end() {
        let mut reader = WkbReader::new(&[1, 2, 3]);
        assert_eq!(
            reader.read_u32(),
            Err(DecodeError::UnexpectedEof {
                needed: 4,
                remaining: 3
            })
        );
        // The failed read must not have moved the cursor.
        assert_eq!(reader.read_u8(), Ok(1));
    }

    #[test]
    fn count_larger_than_buffer() {
        let mut buf = u32::MAX.to_le_bytes().to_vec();
        buf.extend_from_slice(&[0; 16]);
        let mut reader = WkbReader::new(&buf);
        assert_eq!(
            reader.read_count(COORD_BYTES),
            Err(DecodeError::CountTooLarge {
                count: u32::MAX,
                remaining: 16
            })
        );
    }

    #[test]
    fn non_finite_coord() {
        let mut buf = f64::NAN.to_le_bytes().to_vec();
        buf.extend_from_slice(&1f64.to_le_bytes());
        let mut reader = WkbReader::new(&buf);
        assert_eq!(reader.read_coord(), Err(DecodeError::NonFiniteCoordinate));
    }
}
