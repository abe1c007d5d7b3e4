//! Reusable Dioxus RSX components for district map apps.

mod change_button;
mod district_map;
mod error_display;
mod linear_gradient;
mod loading_spinner;
mod map_header;
mod map_tooltip;

pub use change_button::ChangeButton;
pub use district_map::{DistrictMap, DistrictPath};
pub use error_display::ErrorDisplay;
pub use linear_gradient::LinearGradient;
pub use loading_spinner::LoadingSpinner;
pub use map_header::MapHeader;
pub use map_tooltip::MapTooltip;
