use crate::error::{DecodeResult, GeometryError};
use crate::io::wkb::reader::read_geometry;
use crate::io::wkb::writer::{geometry_wkb_size, write_geometry_as_wkb};
use crate::scalar::Geometry;

/// An owned, immutable serialized geometry: the content of one geometry column cell.
///
/// The bytes are opaque to everything but [`deserialize`]. A missing geometry is represented by
/// the absence of a `SerializedGeometry` (e.g. `Option<SerializedGeometry>` or a null slot in a
/// [`GeometryArray`][crate::array::GeometryArray]), never by an empty buffer.
///
/// Equality, ordering and hashing compare the raw bytes. This is not a geometric comparison:
/// two geometries covering the same area with different vertex order compare unequal, and
/// the ordering has no spatial meaning.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerializedGeometry(Vec<u8>);

impl SerializedGeometry {
    /// Wrap bytes read back from storage. They are not validated until [`Self::to_geometry`].
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_geometry(&self) -> DecodeResult<Geometry> {
        deserialize(&self.0)
    }
}

impl AsRef<[u8]> for SerializedGeometry {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&Geometry> for SerializedGeometry {
    fn from(value: &Geometry) -> Self {
        serialize(value)
    }
}

impl TryFrom<&SerializedGeometry> for Geometry {
    type Error = GeometryError;

    fn try_from(value: &SerializedGeometry) -> Result<Self, Self::Error> {
        Ok(value.to_geometry()?)
    }
}

/// Encode a geometry. The output is deterministic: equal geometries produce identical bytes.
///
/// # Panics
///
/// If any single count (coordinates in a ring, rings, or members) exceeds `u32::MAX`.
pub fn serialize(geom: &Geometry) -> SerializedGeometry {
    let mut buf = Vec::with_capacity(geometry_wkb_size(geom));
    // Writing into a Vec only fails when a count overflows u32.
    write_geometry_as_wkb(&mut buf, geom).expect("geometry element count exceeds u32::MAX");
    SerializedGeometry(buf)
}

/// Decode a geometry, validating every structural invariant.
pub fn deserialize(buf: &[u8]) -> DecodeResult<Geometry> {
    read_geometry(buf)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::DecodeError;
    use crate::scalar::GeometryType;
    use crate::test::geometrycollection::all_kinds;
    use crate::test::multipolygon::mp0;

    #[test]
    fn round_trip() {
        for geom in all_kinds() {
            let serialized = serialize(&geom);
            assert_eq!(serialized.len(), geometry_wkb_size(&geom));
            assert_eq!(serialized.to_geometry().unwrap(), geom);
        }
    }

    #[test]
    fn deterministic() {
        for geom in all_kinds() {
            assert_eq!(serialize(&geom), serialize(&geom.clone()));
        }
    }

    #[test]
    fn signed_zero_serializes_identically() {
        use crate::scalar::Point;

        let positive = Geometry::Point(Point::try_new(0.0, 1.0).unwrap());
        let negative = Geometry::Point(Point::try_new(-0.0, 1.0).unwrap());
        assert_eq!(positive, negative);
        assert_eq!(serialize(&positive), serialize(&negative));

        let mut bytes = serialize(&positive).into_bytes();
        bytes[5..13].copy_from_slice(&(-0.0f64).to_le_bytes());
        let decoded = deserialize(&bytes).unwrap();
        assert_eq!(serialize(&decoded), serialize(&positive));
    }

    #[test]
    fn zero_length_buffer() {
        let err = SerializedGeometry::from_bytes(vec![]).to_geometry().unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedEof { .. }));
    }

    #[test]
    fn multipolygon_structure_survives() {
        let geom = Geometry::MultiPolygon(mp0());
        let decoded = deserialize(serialize(&geom).as_bytes()).unwrap();
        let Geometry::MultiPolygon(multi_polygon) = &decoded else {
            panic!("expected multipolygon, got {decoded:?}")
        };
        assert_eq!(multi_polygon.num_polygons(), 2);
        for polygon in multi_polygon.polygons() {
            assert!(polygon.exterior().is_closed());
            assert!(polygon.interiors().is_empty());
        }
        assert_eq!(decoded.geometry_type(), GeometryType::MultiPolygon);
        assert_eq!(decoded, geom);
    }

    #[test]
    fn byte_ordering() {
        let a = SerializedGeometry::from_bytes(vec![1, 1, 0]);
        let b = SerializedGeometry::from_bytes(vec![1, 2]);
        assert!(a < b);
    }

    #[test]
    fn concurrent_use() {
        let geoms = all_kinds();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for geom in &geoms {
                        assert_eq!(&serialize(geom).to_geometry().unwrap(), geom);
                    }
                });
            }
        });
    }
}
