use crate::error::{GeometryError, Result};
use crate::io::wkb::MAX_NESTING_DEPTH;
use crate::scalar::Geometry;

/// A heterogeneous collection of geometries. May be empty.
///
/// Collections nest at most [`MAX_NESTING_DEPTH`] levels deep, counting this one, so that every
/// collection can be serialized and read back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
    /// Construct a collection, rejecting nesting deeper than [`MAX_NESTING_DEPTH`].
    pub fn try_new(geometries: Vec<Geometry>) -> Result<Self> {
        let collection = Self(geometries);
        let depth = collection.nesting_depth();
        if depth > MAX_NESTING_DEPTH {
            return Err(GeometryError::InvalidGeometry(format!(
                "GeometryCollection nested {depth} levels deep, at most {MAX_NESTING_DEPTH} allowed"
            )));
        }
        Ok(collection)
    }

    /// Wrap members the caller has already checked for depth.
    pub(crate) fn new_unchecked(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.0
    }

    pub fn num_geometries(&self) -> usize {
        self.0.len()
    }

    /// Number of collection levels, this one included.
    pub fn nesting_depth(&self) -> usize {
        let inner = self
            .0
            .iter()
            .filter_map(|geom| match geom {
                Geometry::GeometryCollection(g) => Some(g.nesting_depth()),
                _ => None,
            })
            .max()
            .unwrap_or_default();
        1 + inner
    }
}

impl From<GeometryCollection> for geo_types::GeometryCollection {
    fn from(value: GeometryCollection) -> Self {
        geo_types::GeometryCollection(value.0.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<geo_types::GeometryCollection> for GeometryCollection {
    type Error = GeometryError;

    fn try_from(value: geo_types::GeometryCollection) -> Result<Self> {
        let geometries = value
            .0
            .into_iter()
            .map(Geometry::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::try_new(geometries)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::p0;

    fn nested(levels: usize) -> Geometry {
        let mut geom = Geometry::Point(p0());
        for _ in 0..levels {
            geom = Geometry::GeometryCollection(GeometryCollection::new_unchecked(vec![geom]));
        }
        geom
    }

    #[test]
    fn depth() {
        assert_eq!(GeometryCollection::default().nesting_depth(), 1);
        let Geometry::GeometryCollection(gc) = nested(3) else {
            unreachable!()
        };
        assert_eq!(gc.nesting_depth(), 3);
    }

    #[test]
    fn depth_limit() {
        assert!(GeometryCollection::try_new(vec![nested(MAX_NESTING_DEPTH - 1)]).is_ok());
        assert!(matches!(
            GeometryCollection::try_new(vec![nested(MAX_NESTING_DEPTH)]),
            Err(GeometryError::InvalidGeometry(_))
        ));
    }
}
