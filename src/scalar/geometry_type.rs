use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The seven kinds of [`Geometry`][crate::scalar::Geometry].
///
/// The discriminants double as the type tag of the serialized form and match the ISO WKB
/// geometry type codes for XY geometries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum GeometryType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryType {
    /// The upper-case WKT keyword, e.g. `MULTIPOLYGON`.
    pub fn wkt_keyword(&self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// The name reported by `ST_GeometryType`, e.g. `ST_MultiPolygon`.
    pub fn st_name(&self) -> &'static str {
        match self {
            Self::Point => "ST_Point",
            Self::LineString => "ST_LineString",
            Self::Polygon => "ST_Polygon",
            Self::MultiPoint => "ST_MultiPoint",
            Self::MultiLineString => "ST_MultiLineString",
            Self::MultiPolygon => "ST_MultiPolygon",
            Self::GeometryCollection => "ST_GeometryCollection",
        }
    }
}
