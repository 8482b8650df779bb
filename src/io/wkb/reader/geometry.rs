use crate::error::{DecodeError, DecodeResult};
use crate::io::wkb::common::{COUNT_BYTES, HEADER_BYTES};
use crate::io::wkb::reader::WkbReader;
use crate::scalar::{
    Geometry, GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Smallest possible encoded point.
const MIN_POINT_BYTES: usize = HEADER_BYTES + 16;

/// Smallest possible encoded geometry of any kind: an empty multi-geometry.
const MIN_GEOMETRY_BYTES: usize = HEADER_BYTES + COUNT_BYTES;

/// Decode one geometry from the start of `buf`, requiring that it spans the whole buffer.
pub fn read_geometry(buf: &[u8]) -> DecodeResult<Geometry> {
    let mut reader = WkbReader::new(buf);
    let geom = reader.read_geometry()?;
    match reader.remaining() {
        0 => Ok(geom),
        n => Err(DecodeError::TrailingBytes(n)),
    }
}

impl<'a> WkbReader<'a> {
    pub(crate) fn read_geometry(&mut self) -> DecodeResult<Geometry> {
        let geometry_type = self.read_header()?;
        self.read_body(geometry_type)
    }

    fn read_body(&mut self, geometry_type: GeometryType) -> DecodeResult<Geometry> {
        let geom = match geometry_type {
            GeometryType::Point => Geometry::Point(self.read_point_body()?),
            GeometryType::LineString => Geometry::LineString(self.read_line_string_body()?),
            GeometryType::Polygon => Geometry::Polygon(self.read_polygon_body()?),
            GeometryType::MultiPoint => Geometry::MultiPoint(self.read_multi_point_body()?),
            GeometryType::MultiLineString => {
                Geometry::MultiLineString(self.read_multi_line_string_body()?)
            }
            GeometryType::MultiPolygon => Geometry::MultiPolygon(self.read_multi_polygon_body()?),
            GeometryType::GeometryCollection => {
                Geometry::GeometryCollection(self.read_geometry_collection_body()?)
            }
        };
        Ok(geom)
    }

    /// Read the header of a member of a multi-geometry and check its kind.
    fn read_member_header(&mut self, expected: GeometryType) -> DecodeResult<()> {
        let found = self.read_header()?;
        if found != expected {
            return Err(DecodeError::UnexpectedGeometryType { expected, found });
        }
        Ok(())
    }

    fn read_point_body(&mut self) -> DecodeResult<Point> {
        Ok(self.read_coord()?.into())
    }

    fn read_line_string_body(&mut self) -> DecodeResult<LineString> {
        let coords = self.read_coords()?;
        if coords.len() < 2 {
            return Err(DecodeError::LineStringTooShort(coords.len()));
        }
        Ok(LineString::new_unchecked(coords))
    }

    fn read_ring(&mut self) -> DecodeResult<LineString> {
        use crate::scalar::MIN_RING_COORDS;

        let coords = self.read_coords()?;
        if coords.len() < MIN_RING_COORDS {
            return Err(DecodeError::RingTooShort(coords.len()));
        }
        if coords.first() != coords.last() {
            return Err(DecodeError::UnclosedRing);
        }
        Ok(LineString::new_unchecked(coords))
    }

    fn read_polygon_body(&mut self) -> DecodeResult<Polygon> {
        let num_rings = self.read_count(Self::MIN_RING_BYTES)?;
        if num_rings == 0 {
            return Err(DecodeError::EmptyPolygon);
        }
        let exterior = self.read_ring()?;
        let mut interiors = Vec::with_capacity(num_rings - 1);
        for _ in 1..num_rings {
            interiors.push(self.read_ring()?);
        }
        Ok(Polygon::new_unchecked(exterior, interiors))
    }

    fn read_multi_point_body(&mut self) -> DecodeResult<MultiPoint> {
        let num_points = self.read_count(MIN_POINT_BYTES)?;
        let mut points = Vec::with_capacity(num_points);
        for _ in 0..num_points {
            self.read_member_header(GeometryType::Point)?;
            points.push(self.read_point_body()?);
        }
        Ok(MultiPoint::new(points))
    }

    fn read_multi_line_string_body(&mut self) -> DecodeResult<MultiLineString> {
        let num_line_strings = self.read_count(MIN_GEOMETRY_BYTES)?;
        let mut line_strings = Vec::with_capacity(num_line_strings);
        for _ in 0..num_line_strings {
            self.read_member_header(GeometryType::LineString)?;
            line_strings.push(self.read_line_string_body()?);
        }
        Ok(MultiLineString::new(line_strings))
    }

    fn read_multi_polygon_body(&mut self) -> DecodeResult<MultiPolygon> {
        let num_polygons = self.read_count(MIN_GEOMETRY_BYTES)?;
        let mut polygons = Vec::with_capacity(num_polygons);
        for _ in 0..num_polygons {
            self.read_member_header(GeometryType::Polygon)?;
            polygons.push(self.read_polygon_body()?);
        }
        Ok(MultiPolygon::new(polygons))
    }

    fn read_geometry_collection_body(&mut self) -> DecodeResult<GeometryCollection> {
        self.enter_collection()?;
        let num_geometries = self.read_count(MIN_GEOMETRY_BYTES)?;
        let mut geometries = Vec::with_capacity(num_geometries);
        for _ in 0..num_geometries {
            geometries.push(self.read_geometry()?);
        }
        self.leave_collection();
        Ok(GeometryCollection::new_unchecked(geometries))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::common::MAX_NESTING_DEPTH;
    use crate::io::wkb::writer::write_geometry_as_wkb;
    use crate::test::geometrycollection::all_kinds;
    use crate::test::{multipoint, polygon};

    fn encode(geom: &Geometry) -> Vec<u8> {
        let mut buf: Vec<u8> = vec![];
        write_geometry_as_wkb(&mut buf, geom).unwrap();
        buf
    }

    fn header(tag: u32) -> Vec<u8> {
        let mut buf = vec![1];
        buf.extend_from_slice(&tag.to_le_bytes());
        buf
    }

    fn push_coord(buf: &mut Vec<u8>, x: f64, y: f64) {
        buf.extend_from_slice(&x.to_le_bytes());
        buf.extend_from_slice(&y.to_le_bytes());
    }

    fn polygon_with_ring(coords: &[(f64, f64)]) -> Vec<u8> {
        let mut buf = header(3);
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&(coords.len() as u32).to_le_bytes());
        for (x, y) in coords {
            push_coord(&mut buf, *x, *y);
        }
        buf
    }

    #[test]
    fn round_trip_all_kinds() {
        for geom in all_kinds() {
            assert_eq!(read_geometry(&encode(&geom)).unwrap(), geom);
        }
    }

    #[test]
    fn every_truncation_is_rejected() {
        for geom in all_kinds() {
            let buf = encode(&geom);
            for len in 0..buf.len() {
                assert!(
                    read_geometry(&buf[..len]).is_err(),
                    "{geom:?} truncated to {len} bytes decoded"
                );
            }
        }
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(
            read_geometry(&[]),
            Err(DecodeError::UnexpectedEof {
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn unknown_tag() {
        let mut buf = header(8);
        push_coord(&mut buf, 0., 0.);
        assert_eq!(read_geometry(&buf), Err(DecodeError::UnknownGeometryType(8)));

        let buf = header(0);
        assert_eq!(read_geometry(&buf), Err(DecodeError::UnknownGeometryType(0)));
    }

    #[test]
    fn big_endian_rejected() {
        let mut buf = encode(&Geometry::Point(crate::test::point::p0()));
        buf[0] = 0;
        assert_eq!(read_geometry(&buf), Err(DecodeError::UnsupportedByteOrder(0)));
    }

    #[test]
    fn ring_of_three() {
        let buf = polygon_with_ring(&[(0., 0.), (1., 1.), (0., 0.)]);
        assert_eq!(read_geometry(&buf), Err(DecodeError::RingTooShort(3)));
    }

    #[test]
    fn unclosed_ring() {
        let buf = polygon_with_ring(&[(0., 0.), (0., 1.), (1., 1.), (1., 0.)]);
        assert_eq!(read_geometry(&buf), Err(DecodeError::UnclosedRing));
    }

    #[test]
    fn closed_ring_accepted() {
        let buf = polygon_with_ring(&[(0., 0.), (0., 1.), (1., 1.), (0., 0.)]);
        assert!(read_geometry(&buf).is_ok());
    }

    #[test]
    fn polygon_without_rings() {
        let mut buf = header(3);
        buf.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(read_geometry(&buf), Err(DecodeError::EmptyPolygon));
    }

    #[test]
    fn line_string_of_one() {
        let mut buf = header(2);
        buf.extend_from_slice(&1u32.to_le_bytes());
        push_coord(&mut buf, 0., 0.);
        assert_eq!(read_geometry(&buf), Err(DecodeError::LineStringTooShort(1)));
    }

    #[test]
    fn trailing_bytes() {
        let mut buf = encode(&Geometry::Polygon(polygon::p0()));
        buf.push(0);
        assert_eq!(read_geometry(&buf), Err(DecodeError::TrailingBytes(1)));
    }

    #[test]
    fn wrong_member_kind() {
        let mut buf = header(4);
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&encode(&Geometry::LineString(crate::test::linestring::ls0())));
        assert_eq!(
            read_geometry(&buf),
            Err(DecodeError::UnexpectedGeometryType {
                expected: GeometryType::Point,
                found: GeometryType::LineString
            })
        );
    }

    #[test]
    fn huge_count_does_not_allocate() {
        let mut buf = header(2);
        buf.extend_from_slice(&u32::MAX.to_le_bytes());
        push_coord(&mut buf, 0., 0.);
        assert!(matches!(
            read_geometry(&buf),
            Err(DecodeError::CountTooLarge { .. })
        ));
    }

    #[test]
    fn nesting_limit() {
        let mut geom = Geometry::MultiPoint(multipoint::mp1());
        for _ in 0..MAX_NESTING_DEPTH {
            geom = Geometry::GeometryCollection(GeometryCollection::new_unchecked(vec![geom]));
        }
        assert!(read_geometry(&encode(&geom)).is_ok());

        let geom = Geometry::GeometryCollection(GeometryCollection::new_unchecked(vec![geom]));
        assert_eq!(
            read_geometry(&encode(&geom)),
            Err(DecodeError::NestingTooDeep(MAX_NESTING_DEPTH))
        );
    }

    #[test]
    fn nan_point_rejected() {
        let mut buf = header(1);
        push_coord(&mut buf, f64::NAN, f64::NAN);
        assert_eq!(read_geometry(&buf), Err(DecodeError::NonFiniteCoordinate));
    }
}
