use crate::scalar::Point;

pub(crate) fn p0() -> Point {
    Point::try_new(0., 1.).unwrap()
}

pub(crate) fn p1() -> Point {
    Point::try_new(1., 2.).unwrap()
}

pub(crate) fn p2() -> Point {
    Point::try_new(-71.104, 42.315).unwrap()
}
