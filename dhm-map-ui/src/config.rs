//! Map configuration.

use dhm_data::{ColorRange, RED_VARIANTS};
use dhm_geo::Mercator;

/// Fill for districts with no matching data record.
pub const DEFAULT_COLOR: &str = "#000";
/// Fill while the pointer is over a district.
pub const HOVER_COLOR: &str = "#ccc";

/// Settings for one district map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Heading shown above the map
    pub title: String,
    /// Topology object holding the district geometries
    pub object_name: String,
    /// Mercator scale in pixels per radian
    pub projection_scale: f64,
    /// Projection center as [longitude, latitude] degrees
    pub projection_center: [f64; 2],
    pub width: f64,
    pub height: f64,
    pub palette: ColorRange,
    pub default_fill: String,
    pub hover_fill: String,
    pub hover_transition_ms: u32,
    pub stroke: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "DistrictNames and UTs".to_string(),
            object_name: "tamil".to_string(),
            projection_scale: 5500.0,
            projection_center: [78.0, 11.0],
            width: 800.0,
            height: 600.0,
            palette: RED_VARIANTS,
            default_fill: DEFAULT_COLOR.to_string(),
            hover_fill: HOVER_COLOR.to_string(),
            hover_transition_ms: 250,
            stroke: "#fff".to_string(),
        }
    }
}

impl MapConfig {
    /// Mercator projection centered in the configured viewport.
    pub fn projection(&self) -> Mercator {
        Mercator::for_viewport(
            self.projection_scale,
            self.projection_center,
            self.width,
            self.height,
        )
    }

    /// Stylesheet for the district default/hover/pressed states.
    pub fn district_css(&self) -> String {
        format!(
            ".district {{ outline: none; }} \
             .district:hover {{ fill: {}; transition: all {}ms; outline: none; }} \
             .district:active {{ outline: none; }}",
            self.hover_fill, self.hover_transition_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dhm_geo::Topology;

    #[test]
    fn test_defaults() {
        let config = MapConfig::default();
        assert_eq!(config.default_fill, "#000");
        assert_eq!(config.palette, RED_VARIANTS);
        assert_eq!(config.projection().translate(), [400.0, 300.0]);
        assert_eq!(config.projection().center(), [78.0, 11.0]);
    }

    #[test]
    fn test_default_object_matches_bundled_topology() {
        let json = include_str!("../../fixtures/tamil-nadu.topo.json");
        let topo = Topology::from_json(json).unwrap();
        assert!(topo.features(&MapConfig::default().object_name).is_ok());
    }

    #[test]
    fn test_district_css_uses_hover_fill() {
        let css = MapConfig::default().district_css();
        assert!(css.contains(".district:hover { fill: #ccc; transition: all 250ms;"));
    }
}
