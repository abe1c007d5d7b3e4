//! Quantile color scale.
//!
//! Values are split into equal-count buckets (not equal-width): with `k`
//! colors there are `k - 1` thresholds at the `i / k` quantiles of the
//! observed values, and a value takes the color of the bucket it falls in.
//!
//! # Example
//!
//! ```rust
//! use dhm_data::{QuantileScale, RED_VARIANTS};
//!
//! let scale = QuantileScale::new(&[10, 20, 30, 40, 50, 60, 70, 80, 90], RED_VARIANTS);
//! assert_eq!(scale.color(10), "#ffedea");
//! assert_eq!(scale.color(90), "#782618");
//! ```

/// Number of colors in a palette.
pub const PALETTE_SIZE: usize = 9;

/// An ordered palette, lightest (lowest bucket) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange([&'static str; PALETTE_SIZE]);

/// Red variants, light to dark.
pub const RED_VARIANTS: ColorRange = ColorRange([
    "#ffedea", "#ffcec5", "#ffad9f", "#ff8a75", "#ff5533", "#e2492d", "#be3d26", "#9a311f",
    "#782618",
]);

impl ColorRange {
    pub fn colors(&self) -> &[&'static str] {
        &self.0
    }

    pub fn first(&self) -> &'static str {
        self.0[0]
    }

    pub fn last(&self) -> &'static str {
        self.0[PALETTE_SIZE - 1]
    }
}

/// Maps numeric values to palette colors by quantile bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileScale {
    thresholds: Vec<f64>,
    range: ColorRange,
}

impl QuantileScale {
    /// Build a scale over the observed `domain` values.
    ///
    /// An empty domain has no thresholds, so every value maps to the first color.
    pub fn new(domain: &[u64], range: ColorRange) -> Self {
        let mut sorted: Vec<f64> = domain.iter().map(|&v| v as f64).collect();
        sorted.sort_by(f64::total_cmp);

        let thresholds = if sorted.is_empty() {
            Vec::new()
        } else {
            (1..PALETTE_SIZE)
                .map(|i| quantile_sorted(&sorted, i as f64 / PALETTE_SIZE as f64))
                .collect()
        };

        Self { thresholds, range }
    }

    /// The `k - 1` bucket boundaries, ascending.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn range(&self) -> &ColorRange {
        &self.range
    }

    /// Palette index of the bucket holding `value`.
    pub fn bucket(&self, value: u64) -> usize {
        let value = value as f64;
        self.thresholds.partition_point(|t| *t <= value)
    }

    pub fn color(&self, value: u64) -> &'static str {
        self.range.0[self.bucket(value)]
    }
}

/// Quantile `p` of ascending `sorted`, interpolating linearly between
/// order statistics at `h = (n - 1) * p`.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n < 2 || p <= 0.0 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }
    let h = (n - 1) as f64 * p;
    let i = h.floor() as usize;
    let lower = sorted[i];
    let upper = sorted[i + 1];
    lower + (upper - lower) * (h - i as f64)
}
