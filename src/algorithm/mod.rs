//! Geometry constructors and accessors, both per row and over Arrow arrays.

pub mod functions;
pub mod kernels;
