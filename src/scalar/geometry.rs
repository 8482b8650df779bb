use crate::error::{GeometryError, Result};
use crate::scalar::{
    GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

/// A single geometry value of any of the seven supported kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::LineString(_) => GeometryType::LineString,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
            Self::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Total number of coordinates, counting ring-closing coordinates.
    pub fn num_coords(&self) -> usize {
        match self {
            Self::Point(_) => 1,
            Self::LineString(g) => g.num_coords(),
            Self::Polygon(g) => g.num_coords(),
            Self::MultiPoint(g) => g.num_points(),
            Self::MultiLineString(g) => g.line_strings().iter().map(LineString::num_coords).sum(),
            Self::MultiPolygon(g) => g.polygons().iter().map(Polygon::num_coords).sum(),
            Self::GeometryCollection(g) => g.geometries().iter().map(Geometry::num_coords).sum(),
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}

impl From<Geometry> for geo_types::Geometry {
    fn from(value: Geometry) -> Self {
        match value {
            Geometry::Point(g) => geo_types::Geometry::Point(g.into()),
            Geometry::LineString(g) => geo_types::Geometry::LineString(g.into()),
            Geometry::Polygon(g) => geo_types::Geometry::Polygon(g.into()),
            Geometry::MultiPoint(g) => geo_types::Geometry::MultiPoint(g.into()),
            Geometry::MultiLineString(g) => geo_types::Geometry::MultiLineString(g.into()),
            Geometry::MultiPolygon(g) => geo_types::Geometry::MultiPolygon(g.into()),
            Geometry::GeometryCollection(g) => geo_types::Geometry::GeometryCollection(g.into()),
        }
    }
}

/// `Line`, `Rect` and `Triangle` have no variant of their own and are normalized to a
/// [`LineString`] or [`Polygon`].
impl TryFrom<geo_types::Geometry> for Geometry {
    type Error = GeometryError;

    fn try_from(value: geo_types::Geometry) -> Result<Self> {
        let geom = match value {
            geo_types::Geometry::Point(g) => Self::Point(g.try_into()?),
            geo_types::Geometry::Line(g) => {
                Self::LineString(geo_types::LineString::from(vec![g.start, g.end]).try_into()?)
            }
            geo_types::Geometry::LineString(g) => Self::LineString(g.try_into()?),
            geo_types::Geometry::Polygon(g) => Self::Polygon(g.try_into()?),
            geo_types::Geometry::MultiPoint(g) => Self::MultiPoint(g.try_into()?),
            geo_types::Geometry::MultiLineString(g) => Self::MultiLineString(g.try_into()?),
            geo_types::Geometry::MultiPolygon(g) => Self::MultiPolygon(g.try_into()?),
            geo_types::Geometry::GeometryCollection(g) => Self::GeometryCollection(g.try_into()?),
            geo_types::Geometry::Rect(g) => Self::Polygon(g.to_polygon().try_into()?),
            geo_types::Geometry::Triangle(g) => Self::Polygon(g.to_polygon().try_into()?),
        };
        Ok(geom)
    }
}
