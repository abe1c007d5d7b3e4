//! Application controller.
//!
//! The map has exactly three transitions: regenerate on "Change", set the
//! tooltip on hover-enter, clear it on hover-leave. `MapController` owns
//! the dataset and the first; `TooltipState` owns the hover text and the
//! other two. Components keep them in separate signals so hovering never
//! invalidates anything that reads the dataset. Nothing here depends on
//! Dioxus.

use dhm_data::{ColorRange, Dataset, GradientDescriptor, QuantileScale, SampleDataGenerator};

use crate::shapes::{render_shapes, DistrictShape, ProjectedDistrict};

/// Text of the hover tooltip; empty means hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipState {
    content: String,
}

impl TooltipState {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_visible(&self) -> bool {
        !self.content.is_empty()
    }

    /// Last hover wins.
    pub fn on_mouse_enter(&mut self, shape: &DistrictShape) {
        self.content = shape.tooltip();
    }

    pub fn on_mouse_leave(&mut self) {
        self.content.clear();
    }
}

#[derive(Debug, Clone)]
pub struct MapController {
    data: Dataset,
    generator: SampleDataGenerator,
    palette: ColorRange,
}

impl MapController {
    /// Start from the generator's unscaled baseline table.
    pub fn new(generator: SampleDataGenerator, palette: ColorRange) -> anyhow::Result<Self> {
        let data = generator.baseline_dataset()?;
        Ok(Self {
            data,
            generator,
            palette,
        })
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// Scale over the current dataset; rebuilt on every call.
    pub fn color_scale(&self) -> QuantileScale {
        QuantileScale::new(&self.data.values(), self.palette)
    }

    pub fn gradient(&self) -> GradientDescriptor {
        GradientDescriptor::new(&self.palette, &self.data)
    }

    pub fn shapes(&self, districts: &[ProjectedDistrict], default_fill: &str) -> Vec<DistrictShape> {
        render_shapes(districts, &self.data, &self.color_scale(), default_fill)
    }

    /// Replace the whole dataset with a fresh one. On failure the current
    /// dataset is kept.
    pub fn on_change_button_click(&mut self) -> anyhow::Result<()> {
        self.data = self.generator.generate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::project_districts;
    use dhm_data::{sample, DistrictRecord, RED_VARIANTS};
    use dhm_geo::{Mercator, Topology};

    fn bundled_districts() -> Vec<ProjectedDistrict> {
        let features = Topology::from_json(include_str!("../../fixtures/tamil-nadu.topo.json"))
            .unwrap()
            .features("tamil")
            .unwrap();
        let projection = Mercator::for_viewport(5500.0, [78.0, 11.0], 800.0, 600.0);
        project_districts(&features, &projection)
    }

    fn fixed_controller() -> MapController {
        MapController::new(SampleDataGenerator::fixed().unwrap(), RED_VARIANTS).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let controller = fixed_controller();
        assert_eq!(controller.data().len(), 37);
        let tooltip = TooltipState::default();
        assert_eq!(tooltip.content(), "");
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn test_seeded_controller_starts_from_bundled_table() {
        let controller =
            MapController::new(SampleDataGenerator::seeded(42).unwrap(), RED_VARIANTS).unwrap();
        assert_eq!(controller.data().records(), sample::baseline().unwrap().as_slice());
        assert_eq!(controller.data().get("AY").map(|r| r.display.as_str()), Some("754,894"));
    }

    #[test]
    fn test_hover_sets_and_clears_tooltip() {
        let controller = fixed_controller();
        let shapes = controller.shapes(&bundled_districts(), "#000");
        let chennai = shapes.iter().find(|s| s.id.as_deref() == Some("CHE")).unwrap();

        let mut tooltip = TooltipState::default();
        tooltip.on_mouse_enter(chennai);
        assert_eq!(tooltip.content(), "Chennai: 46,46,732");
        assert!(tooltip.is_visible());

        tooltip.on_mouse_leave();
        assert_eq!(tooltip.content(), "");
    }

    #[test]
    fn test_hover_unmatched_district_shows_na() {
        let controller = fixed_controller();
        let shapes = controller.shapes(&bundled_districts(), "#000");
        let unmatched = shapes.iter().find(|s| s.id.as_deref() == Some("MYD")).unwrap();
        assert_eq!(unmatched.fill, "#000");

        let mut tooltip = TooltipState::default();
        tooltip.on_mouse_enter(unmatched);
        assert_eq!(tooltip.content(), "Mayiladuthurai: NA");
    }

    #[test]
    fn test_last_hover_wins() {
        let controller = fixed_controller();
        let shapes = controller.shapes(&bundled_districts(), "#000");
        let mut tooltip = TooltipState::default();
        tooltip.on_mouse_enter(&shapes[0]);
        tooltip.on_mouse_enter(&shapes[1]);
        assert_eq!(tooltip.content(), shapes[1].tooltip());
    }

    #[test]
    fn test_every_bundled_record_joins_a_feature() {
        let controller = fixed_controller();
        let shapes = controller.shapes(&bundled_districts(), "#000");
        let matched = shapes.iter().filter(|s| s.value.is_some()).count();
        assert_eq!(matched, controller.data().len());
        let scale = controller.color_scale();
        for shape in shapes.iter().filter(|s| s.value.is_some()) {
            let record = controller.data().get(shape.id.as_deref().unwrap()).unwrap();
            assert_eq!(shape.fill, scale.color(record.value));
        }
    }

    #[test]
    fn test_change_replaces_dataset_and_legend() {
        let mut controller =
            MapController::new(SampleDataGenerator::seeded(11).unwrap(), RED_VARIANTS).unwrap();
        let before_data = controller.data().clone();
        let before_gradient = controller.gradient();
        let before_scale = controller.color_scale();

        controller.on_change_button_click().unwrap();

        assert_ne!(controller.data(), &before_data);
        assert_eq!(controller.data().len(), before_data.len());
        assert_ne!(controller.gradient(), before_gradient);
        assert_ne!(controller.color_scale(), before_scale);
        assert_eq!(controller.gradient().max, controller.data().max_value().unwrap());
    }

    #[test]
    fn test_change_recolors_same_outlines() {
        let districts = bundled_districts();
        let mut controller =
            MapController::new(SampleDataGenerator::seeded(11).unwrap(), RED_VARIANTS).unwrap();
        let before = controller.shapes(&districts, "#000");
        controller.on_change_button_click().unwrap();
        let after = controller.shapes(&districts, "#000");
        assert!(before.iter().zip(&after).all(|(a, b)| a.path == b.path));
        assert!(before.iter().zip(&after).any(|(a, b)| a.value != b.value));
    }

    #[test]
    fn test_change_with_fixed_generator_keeps_values() {
        let mut controller = fixed_controller();
        let before = controller.data().clone();
        controller.on_change_button_click().unwrap();
        assert_eq!(controller.data(), &before);
    }

    #[test]
    fn test_failed_change_keeps_current_dataset() {
        let base = vec![DistrictRecord::from_value("X", "Huge", u64::MAX / 2)];
        let generator = SampleDataGenerator::with_baseline(base, Some(1));
        let mut controller = MapController::new(generator, RED_VARIANTS).unwrap();
        let before = controller.data().clone();
        assert!(controller.on_change_button_click().is_err());
        assert_eq!(controller.data(), &before);
    }

    #[test]
    fn test_duplicate_ids_fail_construction() {
        let base = vec![
            DistrictRecord::new("THV", "Thiruvallur", "37,28,104").unwrap(),
            DistrictRecord::new("THV", "Thiruvarur", "12,64,277").unwrap(),
        ];
        let generator = SampleDataGenerator::with_baseline(base, None);
        assert!(MapController::new(generator, RED_VARIANTS).is_err());
    }
}
