pub(crate) mod multipolygon;
pub(crate) mod point;
