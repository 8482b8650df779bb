use std::io::Write;

use crate::io::wkb::common::{write_count, write_header, COUNT_BYTES, HEADER_BYTES};
use crate::io::wkb::writer::point::{point_wkb_size, write_point_as_wkb};
use crate::scalar::{GeometryType, MultiPoint};

/// The byte length of an encoded MultiPoint
pub fn multi_point_wkb_size(geom: &MultiPoint) -> usize {
    HEADER_BYTES + COUNT_BYTES + geom.num_points() * point_wkb_size()
}

/// Write a MultiPoint geometry
pub fn write_multi_point_as_wkb<W: Write>(
    writer: &mut W,
    geom: &MultiPoint,
) -> std::io::Result<()> {
    write_header(writer, GeometryType::MultiPoint)?;
    write_count(writer, geom.num_points())?;
    for point in geom.points() {
        write_point_as_wkb(writer, point)?;
    }
    Ok(())
}
