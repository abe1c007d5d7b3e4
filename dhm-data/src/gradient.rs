//! Gradient legend summarizing the active color scale.

use serde::Serialize;

use crate::district::{format_indian, Dataset};
use crate::scale::ColorRange;

/// Legend bar endpoints, recomputed from the current dataset on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradientDescriptor {
    pub from_color: &'static str,
    pub to_color: &'static str,
    pub min: u64,
    pub max: u64,
}

impl GradientDescriptor {
    /// An empty dataset gives a 0..0 legend.
    pub fn new(range: &ColorRange, dataset: &Dataset) -> Self {
        Self {
            from_color: range.first(),
            to_color: range.last(),
            min: dataset.min_value().unwrap_or(0),
            max: dataset.max_value().unwrap_or(0),
        }
    }

    /// CSS background for a horizontal bar.
    pub fn css_background(&self) -> String {
        format!(
            "linear-gradient(to right, {}, {})",
            self.from_color, self.to_color
        )
    }

    pub fn min_label(&self) -> String {
        format_indian(self.min)
    }

    pub fn max_label(&self) -> String {
        format_indian(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::district::DistrictRecord;
    use crate::scale::RED_VARIANTS;

    #[test]
    fn test_gradient_from_dataset() {
        let dataset = Dataset::new(vec![
            DistrictRecord::new("PR", "Perambalur", "5,65,223").unwrap(),
            DistrictRecord::new("CHE", "Chennai", "46,46,732").unwrap(),
        ])
        .unwrap();
        let gradient = GradientDescriptor::new(&RED_VARIANTS, &dataset);
        assert_eq!(gradient.from_color, "#ffedea");
        assert_eq!(gradient.to_color, "#782618");
        assert_eq!(gradient.min, 565_223);
        assert_eq!(gradient.max, 4_646_732);
        assert_eq!(gradient.min_label(), "5,65,223");
        assert_eq!(gradient.max_label(), "46,46,732");
        assert_eq!(
            gradient.css_background(),
            "linear-gradient(to right, #ffedea, #782618)"
        );
    }

    #[test]
    fn test_gradient_for_empty_dataset() {
        let gradient = GradientDescriptor::new(&RED_VARIANTS, &Dataset::default());
        assert_eq!((gradient.min, gradient.max), (0, 0));
    }
}
