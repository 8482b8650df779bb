use crate::error::{GeometryError, Result};
use crate::scalar::Point;

/// A collection of points. May be empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn num_points(&self) -> usize {
        self.0.len()
    }
}

impl From<MultiPoint> for geo_types::MultiPoint {
    fn from(value: MultiPoint) -> Self {
        geo_types::MultiPoint::new(value.0.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<geo_types::MultiPoint> for MultiPoint {
    type Error = GeometryError;

    fn try_from(value: geo_types::MultiPoint) -> Result<Self> {
        let points = value
            .0
            .into_iter()
            .map(Point::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(points))
    }
}
