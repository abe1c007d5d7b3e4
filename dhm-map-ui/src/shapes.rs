//! Draw descriptors for the district map.
//!
//! Drawing happens in two steps. `project_districts` turns boundaries into
//! SVG paths and depends only on the features and the projection, so the
//! UI memoizes it. `render_shapes` joins those paths to a dataset and is a
//! pure function of (districts, dataset, scale): the same inputs always
//! give the same fills.

use dhm_data::{Dataset, QuantileScale};
use dhm_geo::path::multipolygon_to_path;
use dhm_geo::{GeographyFeature, Mercator};

/// Tooltip value for districts without data.
pub const NO_VALUE: &str = "NA";

/// A district outline in viewport coordinates, before any data is joined.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedDistrict {
    pub key: String,
    /// Join key from the boundary data
    pub id: Option<String>,
    pub name: String,
    /// SVG path data
    pub path: String,
}

/// One district ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictShape {
    /// Render key, unique per feature
    pub key: String,
    pub id: Option<String>,
    /// Display name from the boundary data
    pub name: String,
    /// SVG path data in viewport coordinates
    pub path: String,
    pub fill: String,
    /// Display value of the joined record, if any
    pub value: Option<String>,
}

impl DistrictShape {
    pub fn tooltip(&self) -> String {
        tooltip_label(&self.name, self.value.as_deref())
    }
}

/// `"{name}: {value}"`, or `"{name}: NA"` without a value.
pub fn tooltip_label(name: &str, value: Option<&str>) -> String {
    format!("{}: {}", name, value.unwrap_or(NO_VALUE))
}

/// Project every feature once, in feature order.
pub fn project_districts(
    features: &[GeographyFeature],
    projection: &Mercator,
) -> Vec<ProjectedDistrict> {
    log::debug!("Projecting {} district outlines", features.len());
    features
        .iter()
        .map(|feature| ProjectedDistrict {
            key: feature.key.clone(),
            id: feature.id.clone(),
            name: feature.name.clone(),
            path: multipolygon_to_path(&feature.geometry, projection),
        })
        .collect()
}

/// One shape per district, in district order.
pub fn render_shapes(
    districts: &[ProjectedDistrict],
    dataset: &Dataset,
    scale: &QuantileScale,
    default_fill: &str,
) -> Vec<DistrictShape> {
    let mut unmatched = 0usize;

    let shapes: Vec<DistrictShape> = districts
        .iter()
        .map(|district| {
            let record = district.id.as_deref().and_then(|id| dataset.get(id));
            let fill = match record {
                Some(record) => scale.color(record.value).to_string(),
                None => {
                    unmatched += 1;
                    default_fill.to_string()
                }
            };
            DistrictShape {
                key: district.key.clone(),
                id: district.id.clone(),
                name: district.name.clone(),
                path: district.path.clone(),
                fill,
                value: record.map(|r| r.display.clone()),
            }
        })
        .collect();

    if unmatched > 0 {
        log::debug!("{} of {} districts have no data", unmatched, districts.len());
    }
    shapes
}
