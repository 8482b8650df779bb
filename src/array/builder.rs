use arrow_array::builder::{ArrayBuilder, BinaryBuilder};

use crate::array::GeometryArray;
use crate::error::Result;
use crate::io::wkb::writer::{geometry_wkb_size, write_geometry_as_wkb};
use crate::io::wkb::SerializedGeometry;
use crate::scalar::Geometry;

/// The Arrow equivalent to `Vec<Option<Geometry>>`.
/// Converting a [`GeometryBuilder`] into a [`GeometryArray`] is `O(1)`.
#[derive(Debug)]
pub struct GeometryBuilder {
    builder: BinaryBuilder,
    /// Reused encoding buffer
    scratch: Vec<u8>,
}

impl Default for GeometryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Pre-allocate room for `item_capacity` slots holding `data_capacity` bytes in total.
    pub fn with_capacity(item_capacity: usize, data_capacity: usize) -> Self {
        Self {
            builder: BinaryBuilder::with_capacity(item_capacity, data_capacity),
            scratch: Vec::new(),
        }
    }

    /// Build an array in one go, allocating the exact byte length up front.
    pub fn from_nullable_geometries(geoms: &[Option<Geometry>]) -> Result<Self> {
        let data_capacity = geoms.iter().flatten().map(geometry_wkb_size).sum();
        let mut builder = Self::with_capacity(geoms.len(), data_capacity);
        for geom in geoms {
            builder.push_geometry(geom.as_ref())?;
        }
        Ok(builder)
    }

    /// Serialize and append a geometry, or a null.
    #[inline]
    pub fn push_geometry(&mut self, geom: Option<&Geometry>) -> Result<()> {
        if let Some(geom) = geom {
            self.scratch.clear();
            write_geometry_as_wkb(&mut self.scratch, geom)?;
            self.builder.append_value(&self.scratch);
        } else {
            self.builder.append_null();
        }
        Ok(())
    }

    /// Append bytes that are already serialized, or a null.
    #[inline]
    pub fn push_serialized(&mut self, geom: Option<&SerializedGeometry>) {
        match geom {
            Some(geom) => self.builder.append_value(geom.as_bytes()),
            None => self.builder.append_null(),
        }
    }

    #[inline]
    pub fn push_null(&mut self) {
        self.builder.append_null();
    }

    pub fn len(&self) -> usize {
        self.builder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn finish(mut self) -> GeometryArray {
        GeometryArray::new(self.builder.finish())
    }
}

impl TryFrom<&[Option<Geometry>]> for GeometryBuilder {
    type Error = crate::error::GeometryError;

    fn try_from(value: &[Option<Geometry>]) -> Result<Self> {
        Self::from_nullable_geometries(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::serialize;
    use crate::test::{point, polygon};

    #[test]
    fn push() {
        let mut builder = GeometryBuilder::new();
        builder
            .push_geometry(Some(&Geometry::Point(point::p0())))
            .unwrap();
        builder.push_null();
        builder.push_serialized(Some(&serialize(&Geometry::Polygon(polygon::p0()))));
        builder.push_serialized(None);
        assert_eq!(builder.len(), 4);

        let array = builder.finish();
        assert_eq!(array.len(), 4);
        assert_eq!(array.null_count(), 2);
        assert_eq!(
            array.value(2).unwrap(),
            Geometry::Polygon(polygon::p0())
        );
    }

    #[test]
    fn exact_capacity() {
        let geoms = vec![
            Some(Geometry::Polygon(polygon::p1())),
            None,
            Some(Geometry::Point(point::p1())),
        ];
        let array = GeometryBuilder::from_nullable_geometries(&geoms)
            .unwrap()
            .finish();
        let total: usize = geoms.iter().flatten().map(geometry_wkb_size).sum();
        assert_eq!(array.as_binary().value_data().len(), total);
    }
}
