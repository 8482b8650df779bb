use crate::scalar::{LineString, MultiPolygon, Polygon};

/// The two-member multipolygon from the WKT article on Wikipedia.
pub(crate) fn mp0() -> MultiPolygon {
    let first = LineString::try_from_xy([(30., 20.), (45., 40.), (10., 40.), (30., 20.)]).unwrap();
    let second = LineString::try_from_xy([
        (15., 5.),
        (40., 10.),
        (10., 20.),
        (5., 10.),
        (15., 5.),
    ])
    .unwrap();
    MultiPolygon::new(vec![
        Polygon::try_new(first, vec![]).unwrap(),
        Polygon::try_new(second, vec![]).unwrap(),
    ])
}
