use std::io::Write;

use crate::io::wkb::common::{write_count, write_header, COORD_BYTES, COUNT_BYTES, HEADER_BYTES};
use crate::io::wkb::writer::point::write_coord;
use crate::scalar::{GeometryType, LineString};

/// The byte length of an encoded LineString
pub fn line_string_wkb_size(geom: &LineString) -> usize {
    HEADER_BYTES + COUNT_BYTES + geom.num_coords() * COORD_BYTES
}

/// Write a LineString geometry
pub fn write_line_string_as_wkb<W: Write>(
    writer: &mut W,
    geom: &LineString,
) -> std::io::Result<()> {
    write_header(writer, GeometryType::LineString)?;
    write_coords(writer, geom)
}

/// numPoints followed by each coordinate. Shared with polygon rings.
pub(crate) fn write_coords<W: Write>(writer: &mut W, geom: &LineString) -> std::io::Result<()> {
    write_count(writer, geom.num_coords())?;
    for coord in geom.coords() {
        write_coord(writer, coord)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::linestring::ls1;

    #[test]
    fn size_matches_output() {
        let mut buf: Vec<u8> = vec![];
        write_line_string_as_wkb(&mut buf, &ls1()).unwrap();
        assert_eq!(buf.len(), line_string_wkb_size(&ls1()));
        assert_eq!(&buf[..9], &[1, 2, 0, 0, 0, 3, 0, 0, 0]);
    }
}
