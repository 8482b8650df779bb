//! Owned geometry values.
//!
//! [`Geometry`] is the in-memory form of a single geometry column cell. Every type in this
//! module is validated when it is built: coordinates are finite, linestrings hold at least two
//! coordinates, and polygon rings are closed with at least four coordinates. Values that made it
//! through a constructor can always be serialized by [`crate::io::wkb`].

mod coord;
mod geometry;
mod geometry_type;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use coord::Coord;
pub use geometry::Geometry;
pub use geometry_type::GeometryType;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub(crate) use polygon::MIN_RING_COORDS;
