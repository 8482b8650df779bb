use std::io::Write;

use crate::io::wkb::common::{write_count, write_header, COUNT_BYTES, HEADER_BYTES};
use crate::io::wkb::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};
use crate::scalar::{GeometryType, MultiPolygon};

/// The byte length of an encoded MultiPolygon
pub fn multi_polygon_wkb_size(geom: &MultiPolygon) -> usize {
    let mut sum = HEADER_BYTES + COUNT_BYTES;
    for polygon in geom.polygons() {
        sum += polygon_wkb_size(polygon);
    }
    sum
}

/// Write a MultiPolygon geometry
pub fn write_multi_polygon_as_wkb<W: Write>(
    writer: &mut W,
    geom: &MultiPolygon,
) -> std::io::Result<()> {
    write_header(writer, GeometryType::MultiPolygon)?;
    write_count(writer, geom.num_polygons())?;
    for polygon in geom.polygons() {
        write_polygon_as_wkb(writer, polygon)?;
    }
    Ok(())
}
