//! District data for choropleth maps.
//!
//! This crate handles the per-district values a map is colored by:
//! parsing grouped display values, the bundled sample table and its
//! regeneration, and the quantile color scale built over a dataset.

pub mod district;
pub mod gradient;
pub mod sample;
pub mod scale;

pub use district::{format_indian, parse_grouped, Dataset, DistrictRecord};
pub use gradient::GradientDescriptor;
pub use sample::SampleDataGenerator;
pub use scale::{ColorRange, QuantileScale, RED_VARIANTS};
