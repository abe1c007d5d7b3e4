//! Boundary geometry for district maps.
//!
//! This crate provides:
//! - `topology`: TopoJSON decoding into per-district `GeographyFeature`s
//! - `projection`: spherical Mercator projection from lon/lat to screen space
//! - `path`: SVG path strings for projected polygons

pub mod path;
pub mod projection;
pub mod topology;

pub use projection::Mercator;
pub use topology::{GeographyFeature, Topology};
