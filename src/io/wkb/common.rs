use byteorder::WriteBytesExt;
use std::io::Write;

use crate::scalar::GeometryType;

/// Byte order marker written at the start of every geometry. Only little-endian is produced.
pub(crate) const LITTLE_ENDIAN: u8 = 1;

/// Byte order marker + u32 type tag
pub(crate) const HEADER_BYTES: usize = 1 + 4;

/// Width of a count field (number of coordinates, rings or members).
pub(crate) const COUNT_BYTES: usize = 4;

/// Two f64 per XY coordinate.
pub(crate) const COORD_BYTES: usize = 2 * 8;

/// Collections nested deeper than this are rejected on read.
pub const MAX_NESTING_DEPTH: usize = 32;

pub(crate) fn write_header<W: Write>(
    writer: &mut W,
    geometry_type: GeometryType,
) -> std::io::Result<()> {
    use byteorder::LittleEndian;

    writer.write_u8(LITTLE_ENDIAN)?;
    writer.write_u32::<LittleEndian>(geometry_type.into())
}

pub(crate) fn write_count<W: Write>(writer: &mut W, count: usize) -> std::io::Result<()> {
    use byteorder::LittleEndian;

    let count = u32::try_from(count).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{count} elements do not fit in a u32 count"),
        )
    })?;
    writer.write_u32::<LittleEndian>(count)
}
