use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

use crate::io::wkb::common::{write_header, COORD_BYTES, HEADER_BYTES};
use crate::scalar::{Coord, GeometryType, Point};

/// The byte length of an encoded Point
pub fn point_wkb_size() -> usize {
    HEADER_BYTES + COORD_BYTES
}

/// Write a Point geometry
pub fn write_point_as_wkb<W: Write>(writer: &mut W, geom: &Point) -> std::io::Result<()> {
    write_header(writer, GeometryType::Point)?;
    write_coord(writer, &geom.coord())
}

pub(crate) fn write_coord<W: Write>(writer: &mut W, coord: &Coord) -> std::io::Result<()> {
    writer.write_f64::<LittleEndian>(coord.x())?;
    writer.write_f64::<LittleEndian>(coord.y())
}
