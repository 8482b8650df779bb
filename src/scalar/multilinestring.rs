use crate::error::{GeometryError, Result};
use crate::scalar::LineString;

/// A collection of linestrings. May be empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self(line_strings)
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.0
    }

    pub fn num_line_strings(&self) -> usize {
        self.0.len()
    }
}

impl From<MultiLineString> for geo_types::MultiLineString {
    fn from(value: MultiLineString) -> Self {
        geo_types::MultiLineString::new(value.0.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<geo_types::MultiLineString> for MultiLineString {
    type Error = GeometryError;

    fn try_from(value: geo_types::MultiLineString) -> Result<Self> {
        let line_strings = value
            .0
            .into_iter()
            .map(LineString::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(line_strings))
    }
}
