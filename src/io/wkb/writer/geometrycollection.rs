use std::io::Write;

use crate::io::wkb::common::{write_count, write_header, COUNT_BYTES, HEADER_BYTES};
use crate::io::wkb::writer::geometry::{geometry_wkb_size, write_geometry_as_wkb};
use crate::scalar::{GeometryCollection, GeometryType};

/// The byte length of an encoded GeometryCollection
pub fn geometry_collection_wkb_size(geom: &GeometryCollection) -> usize {
    let mut sum = HEADER_BYTES + COUNT_BYTES;
    for inner in geom.geometries() {
        sum += geometry_wkb_size(inner);
    }
    sum
}

/// Write a GeometryCollection geometry
pub fn write_geometry_collection_as_wkb<W: Write>(
    writer: &mut W,
    geom: &GeometryCollection,
) -> std::io::Result<()> {
    write_header(writer, GeometryType::GeometryCollection)?;
    write_count(writer, geom.num_geometries())?;
    for inner in geom.geometries() {
        write_geometry_as_wkb(writer, inner)?;
    }
    Ok(())
}
