use std::fmt::{self, Display, Write};

use crate::scalar::{Coord, Geometry, GeometryType, LineString, Point, Polygon};

/// Render a geometry as WKT, e.g. `POINT (10 20)`.
///
/// Coordinates use the shortest decimal form that reads back to the same `f64`, so integral
/// values print without a fractional part.
pub fn to_wkt(geom: &Geometry) -> String {
    geom.to_string()
}

/// Write a geometry as WKT into any [`fmt::Write`].
pub fn write_wkt<W: Write>(writer: &mut W, geom: &Geometry) -> fmt::Result {
    let keyword = geom.geometry_type().wkt_keyword();
    match geom {
        Geometry::Point(g) => {
            write!(writer, "{keyword} (")?;
            write_coord(writer, &g.coord())?;
            writer.write_char(')')
        }
        Geometry::LineString(g) => {
            write!(writer, "{keyword} ")?;
            write_coord_list(writer, g)
        }
        Geometry::Polygon(g) => {
            write!(writer, "{keyword} ")?;
            write_polygon_body(writer, g)
        }
        Geometry::MultiPoint(g) => {
            write_list(writer, keyword, g.points(), |w, point: &Point| {
                w.write_char('(')?;
                write_coord(w, &point.coord())?;
                w.write_char(')')
            })
        }
        Geometry::MultiLineString(g) => {
            write_list(writer, keyword, g.line_strings(), write_coord_list)
        }
        Geometry::MultiPolygon(g) => write_list(writer, keyword, g.polygons(), write_polygon_body),
        Geometry::GeometryCollection(g) => write_list(writer, keyword, g.geometries(), write_wkt),
    }
}

fn write_coord<W: Write>(writer: &mut W, coord: &Coord) -> fmt::Result {
    write!(writer, "{} {}", coord.x(), coord.y())
}

fn write_coord_list<W: Write>(writer: &mut W, line_string: &LineString) -> fmt::Result {
    writer.write_char('(')?;
    for (i, coord) in line_string.coords().iter().enumerate() {
        if i > 0 {
            writer.write_str(", ")?;
        }
        write_coord(writer, coord)?;
    }
    writer.write_char(')')
}

fn write_polygon_body<W: Write>(writer: &mut W, polygon: &Polygon) -> fmt::Result {
    writer.write_char('(')?;
    for (i, ring) in polygon.rings().enumerate() {
        if i > 0 {
            writer.write_str(", ")?;
        }
        write_coord_list(writer, ring)?;
    }
    writer.write_char(')')
}

/// `KEYWORD (item, item)`, or `KEYWORD EMPTY` when there are no items.
fn write_list<W: Write, T>(
    writer: &mut W,
    keyword: &str,
    items: &[T],
    write_item: impl Fn(&mut W, &T) -> fmt::Result,
) -> fmt::Result {
    if items.is_empty() {
        return write!(writer, "{keyword} EMPTY");
    }
    write!(writer, "{keyword} (")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            writer.write_str(", ")?;
        }
        write_item(writer, item)?;
    }
    writer.write_char(')')
}

impl Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_wkt(f, self)
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wkt_keyword())
    }
}
