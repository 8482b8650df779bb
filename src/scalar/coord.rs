use crate::error::{GeometryError, Result};

/// A single XY coordinate with finite components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    x: f64,
    y: f64,
}

impl Coord {
    /// Construct a coordinate, rejecting NaN and infinite values.
    ///
    /// `-0.0` is stored as `0.0`, so equal coordinates always serialize to the same bytes.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        if x.is_finite() && y.is_finite() {
            Ok(Self::new_unchecked(x, y))
        } else {
            Err(GeometryError::InvalidCoordinate { x, y })
        }
    }

    /// Construct a coordinate without checking that it is finite.
    ///
    /// Callers must have checked both components already.
    pub(crate) fn new_unchecked(x: f64, y: f64) -> Self {
        debug_assert!(x.is_finite() && y.is_finite());
        // -0.0 + 0.0 == +0.0
        Self {
            x: x + 0.0,
            y: y + 0.0,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn x_y(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl TryFrom<(f64, f64)> for Coord {
    type Error = GeometryError;

    fn try_from((x, y): (f64, f64)) -> Result<Self> {
        Self::try_new(x, y)
    }
}

impl From<Coord> for geo_types::Coord {
    fn from(value: Coord) -> Self {
        geo_types::coord! { x: value.x, y: value.y }
    }
}

impl TryFrom<geo_types::Coord> for Coord {
    type Error = GeometryError;

    fn try_from(value: geo_types::Coord) -> Result<Self> {
        Self::try_new(value.x, value.y)
    }
}
