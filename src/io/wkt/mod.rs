//! Read and write Well-Known Text.
//!
//! Parsing is delegated to the [`wkt`] crate. Writing is done here so that the output follows
//! the common `POINT (10 20)` layout, with a space between the keyword and the coordinates.

mod reader;
mod writer;

pub use reader::read_wkt;
pub use writer::{to_wkt, write_wkt};
