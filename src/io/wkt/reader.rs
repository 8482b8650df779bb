use wkt::TryFromWkt;

use crate::error::{GeometryError, Result};
use crate::scalar::Geometry;

/// Parse a WKT string into a [`Geometry`].
///
/// Z and M values are dropped. Fails with [`GeometryError::Parse`] on malformed text, with
/// [`GeometryError::InvalidCoordinate`] on NaN or infinite coordinates and with
/// [`GeometryError::InvalidGeometry`] on rings or linestrings that are too short.
pub fn read_wkt(s: &str) -> Result<Geometry> {
    let geom = geo_types::Geometry::<f64>::try_from_wkt_str(s)
        .map_err(|err| GeometryError::Parse(err.to_string()))?;
    Geometry::try_from(geom)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scalar::{GeometryType, Point};

    #[test]
    fn point() {
        let geom = read_wkt("POINT (10 20)").unwrap();
        assert_eq!(geom, Geometry::Point(Point::try_new(10., 20.).unwrap()));
    }

    #[test]
    fn multipolygon() {
        let geom = read_wkt(
            "MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)), ((15 5, 40 10, 10 20, 5 10, 15 5)))",
        )
        .unwrap();
        assert_eq!(geom, Geometry::MultiPolygon(crate::test::multipolygon::mp0()));
    }

    #[test]
    fn polygon_with_hole() {
        let geom = read_wkt(
            "POLYGON ((-111 45, -111 41, -104 41, -104 45, -111 45), \
             (-110 44, -110 42, -105 42, -105 44, -110 44))",
        )
        .unwrap();
        assert_eq!(geom, Geometry::Polygon(crate::test::polygon::p1()));
    }

    #[test]
    fn open_ring_is_closed() {
        let geom = read_wkt("POLYGON ((0 0, 0 1, 1 1))").unwrap();
        assert_eq!(geom.num_coords(), 4);
    }

    #[test]
    fn collection() {
        let geom = read_wkt("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))").unwrap();
        assert_eq!(geom.geometry_type(), GeometryType::GeometryCollection);
        assert_eq!(geom.num_coords(), 3);
    }

    #[test]
    fn invalid() {
        assert!(matches!(read_wkt("POINT (10)"), Err(GeometryError::Parse(_))));
        assert!(matches!(read_wkt("not wkt"), Err(GeometryError::Parse(_))));
        assert!(matches!(read_wkt(""), Err(GeometryError::Parse(_))));
        assert!(read_wkt("POLYGON ((0 0, 1 1, 0 0))").is_err());
    }
}
