use std::collections::HashMap;
use std::sync::Arc;

use arrow_array::cast::AsArray;
use arrow_array::{Array, ArrayRef, BinaryArray};
use arrow_buffer::NullBuffer;
use arrow_schema::{DataType, Field};

use crate::error::{GeometryError, Result};
use crate::io::wkb::{deserialize, SerializedGeometry};
use crate::scalar::Geometry;

/// Arrow extension name attached to geometry fields.
///
/// The serialized form is a subset of ISO WKB, so the column can be tagged as a GeoArrow WKB
/// column and read by other GeoArrow implementations.
pub const GEOMETRY_EXTENSION_NAME: &str = "geoarrow.wkb";

const EXTENSION_NAME_KEY: &str = "ARROW:extension:name";

/// An immutable column of serialized geometries.
///
/// This is semantically equivalent to `Vec<Option<SerializedGeometry>>` due to the internal
/// validity bitmap. Slots are decoded on access, so every accessor that produces a [`Geometry`]
/// can fail with [`GeometryError::Decode`] when the stored bytes are corrupt.
///
/// Equality compares the underlying bytes and validity, not geometric equality.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryArray {
    array: BinaryArray,
}

impl GeometryArray {
    pub fn new(array: BinaryArray) -> Self {
        Self { array }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Returns true if the array is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nulls(&self) -> Option<&NullBuffer> {
        self.array.nulls()
    }

    pub fn null_count(&self) -> usize {
        self.array.null_count()
    }

    pub fn is_null(&self, index: usize) -> bool {
        self.array.is_null(index)
    }

    /// The raw bytes in slot `index`. A null slot has no bytes.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    pub fn value_bytes(&self, index: usize) -> &[u8] {
        self.array.value(index)
    }

    /// Decode slot `index`, ignoring validity. Decoding a null slot fails because it holds no
    /// bytes; use [`Self::get`] to handle nulls.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    pub fn value(&self, index: usize) -> Result<Geometry> {
        Ok(deserialize(self.value_bytes(index))?)
    }

    /// Decode slot `index`, returning `None` for a null slot.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<Option<Geometry>> {
        if self.is_null(index) {
            Ok(None)
        } else {
            self.value(index).map(Some)
        }
    }

    /// Copy out slot `index` without decoding it.
    pub fn serialized(&self, index: usize) -> Option<SerializedGeometry> {
        if self.is_null(index) {
            None
        } else {
            Some(SerializedGeometry::from_bytes(
                self.value_bytes(index).to_vec(),
            ))
        }
    }

    /// Decode every slot in order.
    pub fn iter(&self) -> impl Iterator<Item = Result<Option<Geometry>>> + '_ {
        self.array.iter().map(|value| {
            value
                .map(deserialize)
                .transpose()
                .map_err(GeometryError::from)
        })
    }

    /// Slices this [`GeometryArray`].
    /// # Panic
    /// This function panics iff `offset + length > self.len()`.
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        assert!(
            offset + length <= self.len(),
            "offset + length may not exceed length of array"
        );
        Self::new(self.array.slice(offset, length))
    }

    pub fn as_binary(&self) -> &BinaryArray {
        &self.array
    }

    pub fn into_inner(self) -> BinaryArray {
        self.array
    }

    pub fn into_array_ref(self) -> ArrayRef {
        Arc::new(self.array)
    }

    /// A nullable `Binary` field tagged with [`GEOMETRY_EXTENSION_NAME`].
    pub fn to_field(&self, name: impl Into<String>) -> Field {
        let metadata = HashMap::from([(
            EXTENSION_NAME_KEY.to_string(),
            GEOMETRY_EXTENSION_NAME.to_string(),
        )]);
        Field::new(name, DataType::Binary, true).with_metadata(metadata)
    }
}

impl From<BinaryArray> for GeometryArray {
    fn from(value: BinaryArray) -> Self {
        Self::new(value)
    }
}

impl From<GeometryArray> for BinaryArray {
    fn from(value: GeometryArray) -> Self {
        value.array
    }
}

impl TryFrom<&dyn Array> for GeometryArray {
    type Error = GeometryError;

    fn try_from(value: &dyn Array) -> Result<Self> {
        match value.data_type() {
            DataType::Binary => Ok(Self::new(value.as_binary::<i32>().clone())),
            _ => Err(GeometryError::IncorrectType(
                format!("Expected Binary geometry column, got {:?}", value.data_type()).into(),
            )),
        }
    }
}

impl TryFrom<(&dyn Array, &Field)> for GeometryArray {
    type Error = GeometryError;

    fn try_from((arr, field): (&dyn Array, &Field)) -> Result<Self> {
        if let Some(extension_name) = field.metadata().get(EXTENSION_NAME_KEY) {
            if extension_name != GEOMETRY_EXTENSION_NAME {
                return Err(GeometryError::IncorrectType(
                    format!("Unexpected extension type {extension_name}").into(),
                ));
            }
        }
        arr.try_into()
    }
}

impl TryFrom<&[Option<Geometry>]> for GeometryArray {
    type Error = GeometryError;

    fn try_from(value: &[Option<Geometry>]) -> Result<Self> {
        Ok(crate::array::GeometryBuilder::from_nullable_geometries(value)?.finish())
    }
}
