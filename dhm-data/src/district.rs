use std::collections::HashMap;

use anyhow::{bail, Context};
use serde::Serialize;

/// One district's value, joined to the map by `id`.
///
/// `display` keeps the value as it should be shown (with digit grouping);
/// `value` is the parsed number used for scaling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistrictRecord {
    /// Join key matched against the boundary feature id (e.g. "AY")
    pub id: String,
    /// Human-readable district name
    pub name: String,
    pub value: u64,
    pub display: String,
}

impl DistrictRecord {
    /// Build a record from a grouped display value such as "25,56,244".
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        display: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let id = id.into();
        let display = display.into();
        let value = parse_grouped(&display)
            .with_context(|| format!("invalid value for district {:?}", id))?;
        Ok(Self {
            id,
            name: name.into(),
            value,
            display,
        })
    }

    /// Build a record from a number, displayed with Indian digit grouping.
    pub fn from_value(id: impl Into<String>, name: impl Into<String>, value: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
            display: format_indian(value),
        }
    }
}

/// Parse an integer written with comma digit grouping.
///
/// Any grouping is accepted ("25,56,244" as well as "1,942,288").
pub fn parse_grouped(display: &str) -> anyhow::Result<u64> {
    let trimmed = display.trim();
    if trimmed.is_empty() {
        bail!("empty value");
    }
    if trimmed.starts_with(',') || trimmed.ends_with(',') || trimmed.contains(",,") {
        bail!("misplaced separator in {:?}", display);
    }
    let digits: String = trimmed.chars().filter(|c| *c != ',').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        bail!("{:?} is not a grouped integer", display);
    }
    digits
        .parse::<u64>()
        .with_context(|| format!("{:?} does not fit in 64 bits", display))
}

/// Format an integer with Indian digit grouping: the last three digits,
/// then groups of two ("2556244" -> "25,56,244").
pub fn format_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// An ordered list of district records with unique ids.
///
/// A dataset is never edited in place; regeneration replaces it whole.
///
/// # Example
///
/// ```rust
/// use dhm_data::{Dataset, DistrictRecord};
///
/// let dataset = Dataset::new(vec![
///     DistrictRecord::new("AY", "Ariyalur", "754,894").unwrap(),
///     DistrictRecord::new("CHE", "Chennai", "46,46,732").unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(dataset.get("CHE").map(|r| r.value), Some(4_646_732));
/// assert_eq!(dataset.max_value(), Some(4_646_732));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<DistrictRecord>,
    // id -> position in `records`
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate join keys.
    pub fn new(records: Vec<DistrictRecord>) -> anyhow::Result<Self> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if let Some(previous) = index.insert(record.id.clone(), position) {
                bail!(
                    "duplicate district id {:?} ({} and {})",
                    record.id,
                    records[previous].name,
                    record.name
                );
            }
        }
        Ok(Self { records, index })
    }

    pub fn records(&self) -> &[DistrictRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record joined to a feature id.
    pub fn get(&self, id: &str) -> Option<&DistrictRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// Numeric values in dataset order.
    pub fn values(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.value).collect()
    }

    pub fn min_value(&self) -> Option<u64> {
        self.records.iter().map(|r| r.value).min()
    }

    pub fn max_value(&self) -> Option<u64> {
        self.records.iter().map(|r| r.value).max()
    }
}
