use std::f64::consts::PI;

use geo::{Area, Coord, LineString, MultiPolygon, Polygon};

/// Arithmetic mean of a ring's listed vertices (a repeated closing vertex counts twice).
/// This approximates, but is not, the area centroid. Returns the origin for an empty ring.
pub(crate) fn vertex_centroid(coords: &[Coord<f64>]) -> Coord<f64> {
    if coords.is_empty() { return Coord { x: 0.0, y: 0.0 } }

    let n = coords.len() as f64;
    let (sum_x, sum_y) = coords.iter().fold((0.0, 0.0), |(x, y), c| (x + c.x, y + c.y));
    Coord { x: sum_x / n, y: sum_y / n }
}

/// Number of distinct vertices in a ring, not counting a closing duplicate.
#[inline]
fn distinct_vertices(ring: &LineString<f64>) -> usize {
    match ring.0.len() {
        0 => 0,
        n if ring.is_closed() => n - 1,
        n => n,
    }
}

/// Absolute shoelace area enclosed by a ring.
pub(crate) fn ring_area(ring: &LineString<f64>) -> f64 {
    Polygon::new(ring.clone(), vec![]).unsigned_area()
}

/// Sum of edge lengths around a ring, including the closing edge.
pub(crate) fn ring_perimeter(ring: &LineString<f64>) -> f64 {
    let mut closed = ring.clone();
    closed.close();
    closed.lines().map(|line| line.dx().hypot(line.dy())).sum()
}

/// Area and perimeter of the outer rings of a multipolygon. Holes are ignored and
/// rings with fewer than three distinct vertices are skipped.
pub(crate) fn outer_area_perimeter(geom: &MultiPolygon<f64>) -> (f64, f64) {
    geom.0.iter()
        .map(|polygon| polygon.exterior())
        .filter(|ring| distinct_vertices(ring) >= 3)
        .fold((0.0, 0.0), |(area, perimeter), ring| {
            (area + ring_area(ring), perimeter + ring_perimeter(ring))
        })
}

/// Polsby–Popper compactness: `4π·area / perimeter²`, or 0 for a zero perimeter.
#[inline]
pub fn polsby_popper(area: f64, perimeter: f64) -> f64 {
    if perimeter == 0.0 { return 0.0 }
    4.0 * PI * area / (perimeter * perimeter)
}
