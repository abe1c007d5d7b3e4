//! Sample district values.
//!
//! The baseline table (district populations) is bundled as CSV. The
//! generator either hands back that table unchanged on every call, or
//! rescales every value by a random percentage from a seeded `ChaCha8Rng`.

use anyhow::Context;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::district::{Dataset, DistrictRecord};

/// Embedded CSV (`id,name,value`) for the Tamil Nadu districts.
pub static DISTRICTS_CSV: &str = include_str!("../../fixtures/districts.csv");

/// Inclusive percentage range applied to baseline values when randomizing.
const MIN_PERCENT: u64 = 50;
const MAX_PERCENT: u64 = 150;

#[derive(Debug, Deserialize)]
struct DistrictRow {
    id: String,
    name: String,
    value: String,
}

/// Parse a CSV string of district values into records, in file order.
///
/// Expected CSV columns: id, name, value (grouped, quoted when it contains commas)
pub fn parse_district_csv(csv_object: &str) -> anyhow::Result<Vec<DistrictRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_object.as_bytes());

    let mut records = Vec::new();
    for (line, row) in rdr.deserialize::<DistrictRow>().enumerate() {
        let row = row.with_context(|| format!("malformed district row {}", line + 1))?;
        records.push(DistrictRecord::new(row.id, row.name, row.value)?);
    }
    Ok(records)
}

/// The bundled baseline table.
pub fn baseline() -> anyhow::Result<Vec<DistrictRecord>> {
    parse_district_csv(DISTRICTS_CSV)
}

/// Produces a fresh dataset on every "Change". The first paint uses
/// [`SampleDataGenerator::baseline_dataset`].
#[derive(Debug, Clone)]
pub struct SampleDataGenerator {
    baseline: Vec<DistrictRecord>,
    rng: Option<ChaCha8Rng>,
}

impl SampleDataGenerator {
    /// Always returns the bundled table unchanged.
    pub fn fixed() -> anyhow::Result<Self> {
        Ok(Self::with_baseline(baseline()?, None))
    }

    /// Rescales the bundled table with a deterministic RNG.
    pub fn seeded(seed: u64) -> anyhow::Result<Self> {
        Ok(Self::with_baseline(baseline()?, Some(seed)))
    }

    pub fn with_baseline(baseline: Vec<DistrictRecord>, seed: Option<u64>) -> Self {
        Self {
            baseline,
            rng: seed.map(ChaCha8Rng::seed_from_u64),
        }
    }

    pub fn is_randomized(&self) -> bool {
        self.rng.is_some()
    }

    /// The bundled table as a dataset, unscaled. Used for the first paint.
    pub fn baseline_dataset(&self) -> anyhow::Result<Dataset> {
        Dataset::new(self.baseline.clone())
    }

    /// Produce a fresh dataset. Fails if the baseline repeats a district id
    /// or a rescaled value does not fit in a `u64`.
    pub fn generate(&mut self) -> anyhow::Result<Dataset> {
        let records = match self.rng.as_mut() {
            None => self.baseline.clone(),
            Some(rng) => self
                .baseline
                .iter()
                .map(|record| {
                    let percent = rng.gen_range(MIN_PERCENT..=MAX_PERCENT);
                    let value = record
                        .value
                        .checked_mul(percent)
                        .map(|scaled| scaled / 100)
                        .with_context(|| {
                            format!(
                                "value {} for district {:?} overflows when scaled by {}%",
                                record.value, record.id, percent
                            )
                        })?;
                    Ok(DistrictRecord::from_value(
                        record.id.clone(),
                        record.name.clone(),
                        value,
                    ))
                })
                .collect::<anyhow::Result<Vec<_>>>()?,
        };

        let dataset = Dataset::new(records)?;
        log::info!(
            "Generated {} district values ({}..{})",
            dataset.len(),
            dataset.min_value().unwrap_or(0),
            dataset.max_value().unwrap_or(0)
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bundled_table() {
        let records = baseline().unwrap();
        assert_eq!(records.len(), 37);
        assert_eq!(records[0].id, "AY");
        assert_eq!(records[0].name, "Ariyalur");
        assert_eq!(records[0].display, "754,894");
        assert_eq!(records[0].value, 754_894);
        let last = records.last().unwrap();
        assert_eq!(last.id, "VDN");
        assert_eq!(last.value, 1_942_288);
    }

    #[test]
    fn test_bundled_ids_are_unique() {
        assert!(Dataset::new(baseline().unwrap()).is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_value() {
        let csv_data = "id,name,value\nAY,Ariyalur,NA\n";
        assert!(parse_district_csv(csv_data).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_column() {
        let csv_data = "id,name,value\nAY,Ariyalur\n";
        assert!(parse_district_csv(csv_data).is_err());
    }

    #[test]
    fn test_parse_empty_csv() {
        let records = parse_district_csv("id,name,value\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_fixed_generator_repeats_table() {
        let mut generator = SampleDataGenerator::fixed().unwrap();
        assert!(!generator.is_randomized());
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.records(), baseline().unwrap().as_slice());
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let mut a = SampleDataGenerator::seeded(7).unwrap();
        let mut b = SampleDataGenerator::seeded(7).unwrap();
        assert_eq!(a.generate().unwrap(), b.generate().unwrap());
        assert_eq!(a.generate().unwrap(), b.generate().unwrap());
    }

    #[test]
    fn test_seeded_generator_changes_values_between_calls() {
        let mut generator = SampleDataGenerator::seeded(7).unwrap();
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();
        assert_ne!(first, second);
        let ids = |d: &Dataset| d.records().iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_seeded_values_stay_within_percent_band() {
        let base = baseline().unwrap();
        let mut generator = SampleDataGenerator::seeded(99).unwrap();
        let dataset = generator.generate().unwrap();
        for (original, scaled) in base.iter().zip(dataset.records()) {
            assert!(scaled.value >= original.value * MIN_PERCENT / 100);
            assert!(scaled.value <= original.value * MAX_PERCENT / 100);
            assert_eq!(scaled.display, crate::format_indian(scaled.value));
        }
    }

    #[test]
    fn test_scaling_overflow_is_error() {
        let base = vec![DistrictRecord::from_value("X", "Huge", u64::MAX / 2)];
        let mut generator = SampleDataGenerator::with_baseline(base, Some(1));
        let err = generator.generate().unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn test_largest_safe_value_scales() {
        let base = vec![DistrictRecord::from_value("X", "Huge", u64::MAX / MAX_PERCENT)];
        let mut generator = SampleDataGenerator::with_baseline(base, Some(1));
        assert!(generator.generate().is_ok());
    }

    #[test]
    fn test_baseline_dataset_is_unscaled() {
        let generator = SampleDataGenerator::seeded(5).unwrap();
        let dataset = generator.baseline_dataset().unwrap();
        assert_eq!(dataset.records(), baseline().unwrap().as_slice());
        assert_eq!(dataset.get("AY").map(|r| r.display.as_str()), Some("754,894"));
    }

    #[test]
    fn test_duplicate_baseline_fails_generation() {
        let base = vec![
            DistrictRecord::new("THV", "Thiruvallur", "37,28,104").unwrap(),
            DistrictRecord::new("THV", "Thiruvarur", "12,64,277").unwrap(),
        ];
        let mut generator = SampleDataGenerator::with_baseline(base, None);
        assert!(generator.generate().is_err());
    }
}
