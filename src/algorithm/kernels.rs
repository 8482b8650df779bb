//! Columnar versions of the operations in [`functions`][crate::algorithm::functions].
//!
//! Each kernel applies its row-level counterpart to every row, so a null in any input produces a
//! null output row and the operation is never run for that row. Inputs of different lengths are
//! an error.

use arrow_array::builder::StringBuilder;
use arrow_array::{Array, Float64Array, StringArray};
use tracing::warn;

use crate::algorithm::functions;
use crate::array::{GeometryArray, GeometryBuilder};
use crate::error::{GeometryError, Result};
use crate::io::wkb::SerializedGeometry;
use crate::scalar::Geometry;

fn check_lengths(name: &str, lengths: &[usize]) -> Result<usize> {
    let len = lengths.first().copied().unwrap_or_default();
    if lengths.iter().any(|other| *other != len) {
        return Err(GeometryError::General(format!(
            "{name}: input arrays have different lengths {lengths:?}"
        )));
    }
    Ok(len)
}

fn collect_geometries(
    len: usize,
    values: impl Iterator<Item = Option<SerializedGeometry>>,
) -> GeometryArray {
    let mut builder = GeometryBuilder::with_capacity(len, 0);
    for value in values {
        builder.push_serialized(value.as_ref());
    }
    builder.finish()
}

/// `ST_Point` over paired x and y columns.
pub fn st_point(x: &Float64Array, y: &Float64Array) -> Result<GeometryArray> {
    let len = check_lengths("st_point", &[x.len(), y.len()])?;
    Ok(collect_geometries(
        len,
        x.iter().zip(y.iter()).map(|(x, y)| functions::st_point(x, y)),
    ))
}

/// `ST_PointFromText` over a text column, with one delimiter for every row.
pub fn st_point_from_text(text: &StringArray, delimiter: &str) -> GeometryArray {
    collect_geometries(
        text.len(),
        text.iter()
            .map(|text| functions::st_point_from_text(text, Some(delimiter))),
    )
}

/// `ST_PolygonFromEnvelope` over four bound columns.
pub fn st_polygon_from_envelope(
    min_x: &Float64Array,
    min_y: &Float64Array,
    max_x: &Float64Array,
    max_y: &Float64Array,
) -> Result<GeometryArray> {
    let len = check_lengths(
        "st_polygon_from_envelope",
        &[min_x.len(), min_y.len(), max_x.len(), max_y.len()],
    )?;
    let rows = (0..len).map(|i| {
        let value = |arr: &Float64Array| arr.is_valid(i).then(|| arr.value(i));
        functions::st_polygon_from_envelope(value(min_x), value(min_y), value(max_x), value(max_y))
    });
    Ok(collect_geometries(len, rows))
}

/// `ST_GeomFromWKT` over a text column.
pub fn st_geom_from_wkt(wkt: &StringArray) -> GeometryArray {
    collect_geometries(wkt.len(), wkt.iter().map(functions::st_geom_from_wkt))
}

/// Alias of [`st_geom_from_wkt`].
pub fn st_geom_from_text(wkt: &StringArray) -> GeometryArray {
    st_geom_from_wkt(wkt)
}

/// `ST_GeomFromGeoJSON` over a text column.
#[cfg(feature = "geojson")]
pub fn st_geom_from_geojson(geojson: &StringArray) -> GeometryArray {
    collect_geometries(
        geojson.len(),
        geojson.iter().map(functions::st_geom_from_geojson),
    )
}

/// Decode every row and render the non-null ones with `f`.
///
/// The first row that fails to decode aborts the kernel.
fn map_to_string<S: AsRef<str>>(
    name: &str,
    array: &GeometryArray,
    f: impl Fn(&Geometry) -> Result<S>,
) -> Result<StringArray> {
    let mut builder = StringBuilder::with_capacity(array.len(), 0);
    for (row, geom) in array.iter().enumerate() {
        let geom = geom.map_err(|err| {
            warn!(function = name, row, error = %err, "corrupt geometry in column");
            err
        })?;
        match geom {
            Some(geom) => builder.append_value(f(&geom)?),
            None => builder.append_null(),
        }
    }
    Ok(builder.finish())
}

/// `ST_AsText` over a geometry column.
pub fn st_as_text(array: &GeometryArray) -> Result<StringArray> {
    map_to_string("st_as_text", array, |geom| {
        Ok(crate::io::wkt::to_wkt(geom))
    })
}

/// `ST_AsGeoJSON` over a geometry column.
#[cfg(feature = "geojson")]
pub fn st_as_geojson(array: &GeometryArray) -> Result<StringArray> {
    map_to_string("st_as_geojson", array, crate::io::geojson::to_geojson)
}

/// `ST_GeometryType` over a geometry column.
pub fn st_geometry_type(array: &GeometryArray) -> Result<StringArray> {
    map_to_string("st_geometry_type", array, |geom| {
        Ok(geom.geometry_type().st_name())
    })
}
