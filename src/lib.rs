//! Geometry values, a compact binary geometry codec, and the `ST_*` constructors and accessors
//! built on top of it.
//!
//! - [`scalar`] holds the [`Geometry`] value type and its seven kinds.
//! - [`io::wkb`] serializes geometries to bytes and back ([`serialize`], [`deserialize`]).
//! - [`io::wkt`] and `io::geojson` parse and render text.
//! - [`algorithm::functions`] has the row-level operations, with null propagation.
//! - [`array`] and [`algorithm::kernels`] lift them over Arrow arrays.
//!
//! ```
//! use geoarrow_geometry::algorithm::functions::{st_as_text, st_polygon_from_envelope};
//!
//! let polygon = st_polygon_from_envelope(Some(0.), Some(0.), Some(10.), Some(10.));
//! assert_eq!(
//!     st_as_text(polygon.as_ref()).unwrap().as_deref(),
//!     Some("POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0))")
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod array;
pub mod error;
pub mod io;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;

pub use array::GeometryArray;
pub use io::wkb::{deserialize, serialize, SerializedGeometry};
pub use scalar::Geometry;
