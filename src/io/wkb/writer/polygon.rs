use std::io::Write;

use crate::io::wkb::common::{write_count, write_header, COORD_BYTES, COUNT_BYTES, HEADER_BYTES};
use crate::io::wkb::writer::linestring::write_coords;
use crate::scalar::{GeometryType, Polygon};

/// The byte length of an encoded Polygon
pub fn polygon_wkb_size(geom: &Polygon) -> usize {
    let mut sum = HEADER_BYTES + COUNT_BYTES;
    for ring in geom.rings() {
        sum += COUNT_BYTES + ring.num_coords() * COORD_BYTES;
    }
    sum
}

/// Write a Polygon geometry. Rings are written closed, shell first.
pub fn write_polygon_as_wkb<W: Write>(writer: &mut W, geom: &Polygon) -> std::io::Result<()> {
    write_header(writer, GeometryType::Polygon)?;
    write_count(writer, geom.num_rings())?;
    for ring in geom.rings() {
        write_coords(writer, ring)?;
    }
    Ok(())
}
