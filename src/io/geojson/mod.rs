//! Read and write GeoJSON geometry objects through the [`geojson`] crate.

mod reader;
mod writer;

pub use reader::read_geojson;
pub use writer::to_geojson;
