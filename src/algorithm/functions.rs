//! Row-level `ST_*` operations.
//!
//! Every function takes optional inputs and returns an optional output. A missing input
//! short-circuits to `None` without running the operation. Invalid text or coordinates also
//! produce `None`, and the swallowed error is logged at `debug` level. Functions that read a
//! [`SerializedGeometry`] surface decode errors instead, since those indicate corrupt storage
//! rather than bad input.

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::io::wkb::{serialize, SerializedGeometry};
use crate::io::wkt::{read_wkt, to_wkt};
use crate::scalar::{Geometry, Point, Polygon};

/// Run `f` on a present input, mapping a failure to `None`.
///
/// `f` is never called when `input` is `None`.
pub(crate) fn nullable<A, T>(
    name: &str,
    input: Option<A>,
    f: impl FnOnce(A) -> Result<T>,
) -> Option<T> {
    let input = input?;
    match f(input) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(function = name, error = %err, "returning null");
            None
        }
    }
}

fn serialize_geometry(geom: impl Into<Geometry>) -> Result<SerializedGeometry> {
    Ok(serialize(&geom.into()))
}

/// `ST_GeomFromWKT(text)`: parse well-known text.
pub fn st_geom_from_wkt(wkt: Option<&str>) -> Option<SerializedGeometry> {
    nullable("st_geom_from_wkt", wkt, |wkt| {
        serialize_geometry(read_wkt(wkt)?)
    })
}

/// Alias of [`st_geom_from_wkt`].
pub fn st_geom_from_text(wkt: Option<&str>) -> Option<SerializedGeometry> {
    st_geom_from_wkt(wkt)
}

/// `ST_GeomFromGeoJSON(text)`: parse a GeoJSON geometry or feature.
#[cfg(feature = "geojson")]
pub fn st_geom_from_geojson(geojson: Option<&str>) -> Option<SerializedGeometry> {
    use crate::io::geojson::read_geojson;

    nullable("st_geom_from_geojson", geojson, |geojson| {
        serialize_geometry(read_geojson(geojson)?)
    })
}

/// `ST_Point(x, y)`.
pub fn st_point(x: Option<f64>, y: Option<f64>) -> Option<SerializedGeometry> {
    let xy = x.zip(y);
    nullable("st_point", xy, |(x, y)| {
        serialize_geometry(Point::try_new(x, y)?)
    })
}

/// `ST_PointFromText(text, delimiter)`: a point from text such as `"1.5,2"`.
///
/// Whitespace around each number is ignored.
pub fn st_point_from_text(text: Option<&str>, delimiter: Option<&str>) -> Option<SerializedGeometry> {
    nullable("st_point_from_text", text.zip(delimiter), |(text, delimiter)| {
        serialize_geometry(parse_point(text, delimiter)?)
    })
}

fn parse_point(text: &str, delimiter: &str) -> Result<Point> {
    if delimiter.is_empty() {
        return Err(GeometryError::Parse("Empty delimiter".to_string()));
    }
    let mut parts = text.split(delimiter);
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GeometryError::Parse(format!(
            "Expected two coordinates separated by {delimiter:?}, got {text:?}"
        )));
    };
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|err| GeometryError::Parse(format!("{s:?}: {err}")))
    };
    Point::try_new(parse(x)?, parse(y)?)
}

/// `ST_PolygonFromEnvelope(minX, minY, maxX, maxY)`: an axis-aligned rectangle.
pub fn st_polygon_from_envelope(
    min_x: Option<f64>,
    min_y: Option<f64>,
    max_x: Option<f64>,
    max_y: Option<f64>,
) -> Option<SerializedGeometry> {
    let bounds = match (min_x, min_y, max_x, max_y) {
        (Some(min_x), Some(min_y), Some(max_x), Some(max_y)) => {
            Some((min_x, min_y, max_x, max_y))
        }
        _ => None,
    };
    nullable("st_polygon_from_envelope", bounds, |(min_x, min_y, max_x, max_y)| {
        serialize_geometry(Polygon::try_from_bounds(min_x, min_y, max_x, max_y)?)
    })
}

fn decode(geom: Option<&SerializedGeometry>) -> Result<Option<Geometry>> {
    geom.map(SerializedGeometry::to_geometry)
        .transpose()
        .map_err(GeometryError::from)
}

/// `ST_AsText(geometry)`.
pub fn st_as_text(geom: Option<&SerializedGeometry>) -> Result<Option<String>> {
    Ok(decode(geom)?.map(|geom| to_wkt(&geom)))
}

/// `ST_AsGeoJSON(geometry)`.
#[cfg(feature = "geojson")]
pub fn st_as_geojson(geom: Option<&SerializedGeometry>) -> Result<Option<String>> {
    use crate::io::geojson::to_geojson;

    decode(geom)?.map(|geom| to_geojson(&geom)).transpose()
}

/// `ST_GeometryType(geometry)`, e.g. `"ST_Polygon"`.
pub fn st_geometry_type(geom: Option<&SerializedGeometry>) -> Result<Option<&'static str>> {
    Ok(decode(geom)?.map(|geom| geom.geometry_type().st_name()))
}
