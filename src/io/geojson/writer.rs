use crate::error::Result;
use crate::scalar::Geometry;

/// Render a geometry as a GeoJSON geometry object.
pub fn to_geojson(geom: &Geometry) -> Result<String> {
    let geo_geom: geo_types::Geometry = geom.clone().into();
    let geometry = geojson::Geometry::new(geojson::Value::from(&geo_geom));
    Ok(serde_json::to_string(&geometry)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geojson::read_geojson;
    use crate::test::geometrycollection::all_kinds;

    #[test]
    fn point() {
        let geom = Geometry::Point(crate::test::point::p1());
        let json: serde_json::Value = serde_json::from_str(&to_geojson(&geom).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "Point", "coordinates": [1.0, 2.0]})
        );
    }

    #[test]
    fn reads_back() {
        for geom in all_kinds() {
            assert_eq!(read_geojson(&to_geojson(&geom).unwrap()).unwrap(), geom);
        }
    }
}
