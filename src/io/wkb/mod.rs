//! The binary geometry codec.
//!
//! Serialized geometries are little-endian ISO WKB restricted to XY coordinates:
//!
//! ```text
//! geometry           := byte_order:u8 (= 0x01) type:u32 body
//! Point              := x:f64 y:f64
//! LineString         := n:u32 (x:f64 y:f64){n}                      n >= 2
//! Polygon            := r:u32 (n:u32 (x:f64 y:f64){n}){r}           r >= 1, n >= 4, closed
//! MultiPoint         := k:u32 geometry{k}                            each a Point
//! MultiLineString    := k:u32 geometry{k}                            each a LineString
//! MultiPolygon       := k:u32 geometry{k}                            each a Polygon
//! GeometryCollection := k:u32 geometry{k}                            nesting <= 32
//! ```
//!
//! Type tags are the WKB codes 1 through 7 (see [`GeometryType`][crate::scalar::GeometryType]).
//! The closing coordinate of every ring is stored. A serialized geometry must span its buffer
//! exactly. Because this is a strict subset of WKB, the bytes can be handed to any WKB reader,
//! but this reader rejects big-endian, Z/M and empty-point encodings.
//!
//! The codec holds no state between calls: [`serialize`] and [`deserialize`] may be called from
//! any number of threads at once.

mod api;
mod common;
pub mod reader;
pub mod writer;

pub use api::{deserialize, serialize, SerializedGeometry};
pub use common::MAX_NESTING_DEPTH;
