use crate::error::{GeometryError, Result};
use crate::scalar::Coord;

/// An ordered sequence of at least two coordinates.
///
/// Also used for polygon rings, where [`Polygon`][crate::scalar::Polygon] adds the closure and
/// minimum length requirements.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString(Vec<Coord>);

impl LineString {
    /// Construct a linestring from at least two coordinates.
    pub fn try_new(coords: Vec<Coord>) -> Result<Self> {
        if coords.len() < 2 {
            return Err(GeometryError::InvalidGeometry(format!(
                "LineString has {} coordinates, at least 2 required",
                coords.len()
            )));
        }
        Ok(Self(coords))
    }

    /// Construct a linestring from raw XY tuples, rejecting non-finite values.
    pub fn try_from_xy(coords: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        let coords = coords
            .into_iter()
            .map(Coord::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::try_new(coords)
    }

    /// Wrap coordinates the caller has already validated.
    pub(crate) fn new_unchecked(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.0
    }

    /// Whether the first and last coordinates are equal.
    pub fn is_closed(&self) -> bool {
        self.0.first() == self.0.last()
    }
}

impl From<LineString> for geo_types::LineString {
    fn from(value: LineString) -> Self {
        geo_types::LineString::new(value.0.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<geo_types::LineString> for LineString {
    type Error = GeometryError;

    fn try_from(value: geo_types::LineString) -> Result<Self> {
        let coords = value
            .0
            .into_iter()
            .map(Coord::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::try_new(coords)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn too_short() {
        let err = LineString::try_from_xy([(0., 0.)]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidGeometry(_)));
    }

    #[test]
    fn non_finite() {
        let err = LineString::try_from_xy([(0., 0.), (f64::NAN, 1.)]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidCoordinate { .. }));
    }
}
