//! Spherical Mercator projection.

use std::f64::consts::FRAC_PI_4;

use geo::Coord;

/// Mercator projection from lon/lat degrees to screen pixels (Y down).
///
/// `center` is placed at `translate`; `scale` is pixels per radian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    scale: f64,
    center: [f64; 2],
    translate: [f64; 2],
}

impl Mercator {
    pub fn new(scale: f64, center: [f64; 2], translate: [f64; 2]) -> Self {
        Self {
            scale,
            center,
            translate,
        }
    }

    /// Projection centered in a `width` x `height` viewport.
    pub fn for_viewport(scale: f64, center: [f64; 2], width: f64, height: f64) -> Self {
        Self::new(scale, center, [width / 2.0, height / 2.0])
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn center(&self) -> [f64; 2] {
        self.center
    }

    pub fn translate(&self) -> [f64; 2] {
        self.translate
    }

    /// Project a lon/lat coordinate (degrees) to screen space.
    pub fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let lambda = (coord.x - self.center[0]).to_radians();
        let x = self.translate[0] + self.scale * lambda;
        let y = self.translate[1] - self.scale * (mercator_y(coord.y) - mercator_y(self.center[1]));
        (x, y)
    }
}

fn mercator_y(lat_degrees: f64) -> f64 {
    (FRAC_PI_4 + lat_degrees.to_radians() / 2.0).tan().ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_center_maps_to_translate() {
        let projection = Mercator::for_viewport(5500.0, [78.0, 11.0], 800.0, 600.0);
        let (x, y) = projection.project(&Coord { x: 78.0, y: 11.0 });
        assert!(close(x, 400.0));
        assert!(close(y, 300.0));
    }

    #[test]
    fn test_longitude_is_linear() {
        let projection = Mercator::new(5500.0, [78.0, 11.0], [0.0, 0.0]);
        let (x, _) = projection.project(&Coord { x: 79.0, y: 11.0 });
        assert!(close(x, 5500.0 * 1.0_f64.to_radians()));
    }

    #[test]
    fn test_north_is_up() {
        let projection = Mercator::for_viewport(5500.0, [78.0, 11.0], 800.0, 600.0);
        let (_, north) = projection.project(&Coord { x: 78.0, y: 12.0 });
        let (_, south) = projection.project(&Coord { x: 78.0, y: 10.0 });
        assert!(north < 300.0);
        assert!(south > 300.0);
        // Mercator stretches latitude away from the equator.
        assert!(300.0 - north > south - 300.0);
    }

    #[test]
    fn test_equator_reference() {
        let projection = Mercator::new(1.0, [0.0, 0.0], [0.0, 0.0]);
        let (_, y) = projection.project(&Coord { x: 0.0, y: 45.0 });
        // ln(tan(pi/4 + pi/8)) = 0.881373...
        assert!((y + 0.881_373_587).abs() < 1e-6);
    }
}
