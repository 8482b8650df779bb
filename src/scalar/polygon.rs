use crate::error::{GeometryError, Result};
use crate::scalar::{Coord, LineString};

/// Minimum number of coordinates in a closed ring, including the repeated closing coordinate.
pub(crate) const MIN_RING_COORDS: usize = 4;

/// A polygon: one shell ring followed by zero or more hole rings.
///
/// Rings are always stored closed. Constructors append the closing coordinate when it is
/// missing, so two polygons describing the same rings compare equal regardless of whether the
/// input repeated the first coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: LineString,
    interiors: Vec<LineString>,
}

impl Polygon {
    pub fn try_new(exterior: LineString, interiors: Vec<LineString>) -> Result<Self> {
        let exterior = close_ring(exterior.into_inner())?;
        let interiors = interiors
            .into_iter()
            .map(|ring| close_ring(ring.into_inner()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            exterior,
            interiors,
        })
    }

    /// Construct from a list of rings where the first one is the shell.
    pub fn try_from_rings(rings: Vec<LineString>) -> Result<Self> {
        let mut rings = rings.into_iter();
        let exterior = rings
            .next()
            .ok_or_else(|| GeometryError::InvalidGeometry("Polygon has no rings".to_string()))?;
        Self::try_new(exterior, rings.collect())
    }

    /// The axis-aligned rectangle spanning the given bounds.
    ///
    /// The shell is `(min_x min_y, min_x max_y, max_x max_y, max_x min_y, min_x min_y)`.
    /// Bounds are not reordered, so `min_x > max_x` yields a rectangle wound the other way.
    pub fn try_from_bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        let min = Coord::try_new(min_x, min_y)?;
        let max = Coord::try_new(max_x, max_y)?;
        let shell = vec![
            min,
            Coord::new_unchecked(min.x(), max.y()),
            max,
            Coord::new_unchecked(max.x(), min.y()),
            min,
        ];
        Ok(Self::new_unchecked(LineString::new_unchecked(shell), vec![]))
    }

    /// Wrap rings the caller has already checked to be closed and long enough.
    pub(crate) fn new_unchecked(exterior: LineString, interiors: Vec<LineString>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    pub fn exterior(&self) -> &LineString {
        &self.exterior
    }

    pub fn interiors(&self) -> &[LineString] {
        &self.interiors
    }

    pub fn num_rings(&self) -> usize {
        1 + self.interiors.len()
    }

    /// Iterate over all rings, shell first.
    pub fn rings(&self) -> impl Iterator<Item = &LineString> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    pub fn num_coords(&self) -> usize {
        self.rings().map(LineString::num_coords).sum()
    }
}

/// Close a ring if needed and check its length.
fn close_ring(mut coords: Vec<Coord>) -> Result<LineString> {
    if let (Some(first), Some(last)) = (coords.first(), coords.last()) {
        if first != last {
            coords.push(*first);
        }
    }
    if coords.len() < MIN_RING_COORDS {
        return Err(GeometryError::InvalidGeometry(format!(
            "Polygon ring has {} coordinates, at least {} required",
            coords.len(),
            MIN_RING_COORDS
        )));
    }
    Ok(LineString::new_unchecked(coords))
}

impl From<Polygon> for geo_types::Polygon {
    fn from(value: Polygon) -> Self {
        geo_types::Polygon::new(
            value.exterior.into(),
            value.interiors.into_iter().map(Into::into).collect(),
        )
    }
}

impl TryFrom<geo_types::Polygon> for Polygon {
    type Error = GeometryError;

    fn try_from(value: geo_types::Polygon) -> Result<Self> {
        let (exterior, interiors) = value.into_inner();
        let exterior = ring_from_geo(exterior)?;
        let interiors = interiors
            .into_iter()
            .map(ring_from_geo)
            .collect::<Result<Vec<_>>>()?;
        Self::try_new(exterior, interiors)
    }
}

/// Rings coming from geo-types may be empty, so skip the linestring length check here and let
/// [`close_ring`] report the shorter ring instead.
fn ring_from_geo(ring: geo_types::LineString) -> Result<LineString> {
    let coords = ring
        .0
        .into_iter()
        .map(Coord::try_from)
        .collect::<Result<Vec<_>>>()?;
    Ok(LineString::new_unchecked(coords))
}
