//! The geometry column type.
//!
//! A [`GeometryArray`] is an Arrow `Binary` array whose non-null slots each hold one
//! serialized geometry in the format described in [`crate::io::wkb`].

mod builder;
mod column;

pub use builder::GeometryBuilder;
pub use column::{GeometryArray, GEOMETRY_EXTENSION_NAME};
