use crate::error::{GeometryError, Result};
use crate::scalar::Polygon;

/// A collection of polygons. May be empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    pub fn num_polygons(&self) -> usize {
        self.0.len()
    }
}

impl From<MultiPolygon> for geo_types::MultiPolygon {
    fn from(value: MultiPolygon) -> Self {
        geo_types::MultiPolygon::new(value.0.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<geo_types::MultiPolygon> for MultiPolygon {
    type Error = GeometryError;

    fn try_from(value: geo_types::MultiPolygon) -> Result<Self> {
        let polygons = value
            .0
            .into_iter()
            .map(Polygon::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(polygons))
    }
}
