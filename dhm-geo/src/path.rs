//! SVG path data for projected district polygons.

use std::fmt::Write;

use geo::{LineString, MultiPolygon};

use crate::projection::Mercator;

/// SVG path data for every ring of `shape` (exteriors and holes), one
/// `M...Z` subpath per ring.
pub fn multipolygon_to_path(shape: &MultiPolygon<f64>, projection: &Mercator) -> String {
    let mut d = String::new();
    for polygon in shape {
        push_ring(&mut d, polygon.exterior(), projection);
        for interior in polygon.interiors() {
            push_ring(&mut d, interior, projection);
        }
    }
    d
}

/// Append one ring. The closing vertex is left to `Z`.
fn push_ring(d: &mut String, ring: &LineString<f64>, projection: &Mercator) {
    let open = match ring.0.as_slice() {
        [] => return,
        [rest @ .., _] if ring.is_closed() && !rest.is_empty() => rest,
        all => all,
    };

    for (i, coord) in open.iter().enumerate() {
        let (x, y) = projection.project(coord);
        let command = if i == 0 { 'M' } else { 'L' };
        // Writing into a String cannot fail.
        let _ = write!(d, "{command}{x:.3},{y:.3}");
    }
    d.push('Z');
}
