use geojson::GeoJson;

use crate::error::{GeometryError, Result};
use crate::scalar::Geometry;

/// Parse a GeoJSON geometry object into a [`Geometry`].
///
/// A `Feature` is accepted and its geometry is used. A `FeatureCollection`, or a `Feature`
/// without a geometry, is a [`GeometryError::Parse`].
pub fn read_geojson(s: &str) -> Result<Geometry> {
    let geojson = s
        .parse::<GeoJson>()
        .map_err(|err| GeometryError::Parse(err.to_string()))?;
    let geometry = match geojson {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(feature) => feature.geometry.ok_or_else(|| {
            GeometryError::Parse("GeoJSON Feature has no geometry".to_string())
        })?,
        GeoJson::FeatureCollection(_) => {
            return Err(GeometryError::Parse(
                "Expected a GeoJSON geometry, found a FeatureCollection".to_string(),
            ))
        }
    };
    let geom = geo_types::Geometry::<f64>::try_from(geometry)
        .map_err(|err| GeometryError::Parse(err.to_string()))?;
    Geometry::try_from(geom)
}
