use std::io::Write;

use crate::io::wkb::common::{write_count, write_header, COUNT_BYTES, HEADER_BYTES};
use crate::io::wkb::writer::linestring::{line_string_wkb_size, write_line_string_as_wkb};
use crate::scalar::{GeometryType, MultiLineString};

/// The byte length of an encoded MultiLineString
pub fn multi_line_string_wkb_size(geom: &MultiLineString) -> usize {
    let mut sum = HEADER_BYTES + COUNT_BYTES;
    for line_string in geom.line_strings() {
        sum += line_string_wkb_size(line_string);
    }
    sum
}

/// Write a MultiLineString geometry
pub fn write_multi_line_string_as_wkb<W: Write>(
    writer: &mut W,
    geom: &MultiLineString,
) -> std::io::Result<()> {
    write_header(writer, GeometryType::MultiLineString)?;
    write_count(writer, geom.num_line_strings())?;
    for line_string in geom.line_strings() {
        write_line_string_as_wkb(writer, line_string)?;
    }
    Ok(())
}
