use crate::error::Result;
use crate::scalar::Coord;

/// A single position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Coord);

impl Point {
    /// Construct a point, rejecting NaN and infinite values.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        Ok(Self(Coord::try_new(x, y)?))
    }

    pub fn coord(&self) -> Coord {
        self.0
    }

    pub fn x(&self) -> f64 {
        self.0.x()
    }

    pub fn y(&self) -> f64 {
        self.0.y()
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self(value)
    }
}

impl From<Point> for geo_types::Point {
    fn from(value: Point) -> Self {
        geo_types::Point(value.0.into())
    }
}

impl TryFrom<geo_types::Point> for Point {
    type Error = crate::error::GeometryError;

    fn try_from(value: geo_types::Point) -> Result<Self> {
        Ok(Self(value.0.try_into()?))
    }
}
