//! Text and binary encodings of [`Geometry`][crate::scalar::Geometry] values.

#[cfg(feature = "geojson")]
pub mod geojson;
pub mod wkb;
pub mod wkt;
