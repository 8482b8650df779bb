//! Defines [`GeometryError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;

use arrow_schema::ArrowError;
use thiserror::Error;

use crate::scalar::GeometryType;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeometryError {
    /// Text input was not valid WKT or GeoJSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A numeric constructor was handed a NaN or infinite coordinate.
    #[error("Invalid coordinate: ({x}, {y}) is not finite")]
    InvalidCoordinate {
        /// x value as given
        x: f64,
        /// y value as given
        y: f64,
    },

    /// The input coordinates do not form a valid geometry of the requested kind.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// [DecodeError]
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Incorrect type was passed to an operation.
    #[error("Incorrect type passed to operation: {0}")]
    IncorrectType(Cow<'static, str>),

    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// [ArrowError]
    #[error(transparent)]
    Arrow(#[from] ArrowError),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [serde_json::Error]
    #[cfg(feature = "geojson")]
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// Errors raised while decoding a serialized geometry.
///
/// Every variant is reported before any byte outside the input buffer is touched.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The buffer ended before a field could be read.
    #[error("Unexpected end of buffer: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// bytes required by the field being read
        needed: usize,
        /// bytes left in the buffer
        remaining: usize,
    },

    /// Only little-endian buffers are produced and accepted.
    #[error("Unsupported byte order marker: {0:#04x}")]
    UnsupportedByteOrder(u8),

    /// The type tag is not one of the seven known geometry kinds.
    #[error("Unknown geometry type tag: {0}")]
    UnknownGeometryType(u32),

    /// A member of a multi-geometry had the wrong kind.
    #[error("Expected {expected:?} member, found {found:?}")]
    UnexpectedGeometryType {
        /// kind required by the parent geometry
        expected: GeometryType,
        /// kind found in the buffer
        found: GeometryType,
    },

    /// A count field claims more elements than the rest of the buffer can hold.
    #[error("Count {count} does not fit in the {remaining} remaining bytes")]
    CountTooLarge {
        /// count as read from the buffer
        count: u32,
        /// bytes left in the buffer
        remaining: usize,
    },

    /// A polygon ring holds fewer than four coordinates.
    #[error("Polygon ring has {0} coordinates, at least 4 required")]
    RingTooShort(usize),

    /// A polygon ring does not end where it starts.
    #[error("Polygon ring is not closed")]
    UnclosedRing,

    /// A linestring holds fewer than two coordinates.
    #[error("LineString has {0} coordinates, at least 2 required")]
    LineStringTooShort(usize),

    /// A polygon with no shell.
    #[error("Polygon has no rings")]
    EmptyPolygon,

    /// A NaN or infinite coordinate.
    #[error("Non-finite coordinate")]
    NonFiniteCoordinate,

    /// Bytes left over after the top-level geometry.
    #[error("{0} trailing bytes after geometry")]
    TrailingBytes(usize),

    /// Geometry collections nested beyond the supported depth.
    #[error("Geometry collections nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Result type of the codec's decode path.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

impl From<GeometryError> for ArrowError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::Arrow(err) => err,
            _ => ArrowError::ExternalError(Box::new(err)),
        }
    }
}
