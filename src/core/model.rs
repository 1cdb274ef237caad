// LandSearch - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Land Record
// =============================================================================

/// A single land-record entry as loaded from the dataset.
///
/// Immutable once loaded. Every field is always present on the Rust value:
/// a key missing from the source JSON deserialises to an empty string (or
/// `None` for the year), which the filter engine treats as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandRecord {
    /// Administrative sub-district.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub taluka: String,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub village: String,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub holder_name: String,

    /// Layout year. Source data may carry a number or a numeric string.
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: Option<i64>,

    /// Parcel identifier; not guaranteed unique.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub survey_no: String,

    /// Land-use classification (e.g. NA type).
    #[serde(default, rename = "type", deserialize_with = "deserialize_text")]
    pub land_type: String,

    /// Reference to an externally hosted document.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub download_link: String,
}

impl LandRecord {
    /// Year as display text; empty when the record has none.
    pub fn year_label(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }

    /// Title shown on the document viewer for this record.
    pub fn document_title(&self) -> String {
        format!("{} - {}", self.holder_name, self.survey_no)
    }
}

/// Parse a year from free text the way a loosely-typed comparison would:
/// surrounding whitespace is ignored and whole-valued decimals ("2020.0")
/// are accepted. Returns `None` for empty or non-numeric text.
pub fn parse_year(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(year) = trimmed.parse::<i64>() {
        return Some(year);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Int(i64),
    Float(f64),
    Text(String),
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawYear>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawYear::Int(year)) => Ok(Some(year)),
        Some(RawYear::Float(f)) => {
            let year = parse_year(&f.to_string());
            if year.is_none() {
                tracing::warn!(year = f, "Fractional year treated as absent");
            }
            Ok(year)
        }
        Some(RawYear::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawYear::Text(s)) => {
            let year = parse_year(&s);
            if year.is_none() {
                tracing::warn!(year = %s, "Non-numeric year treated as absent");
            }
            Ok(year)
        }
    }
}

/// A `null` text field reads as empty, the same as a missing key.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Dataset document
// =============================================================================

/// Shape of the JSON data source: a top-level object whose `landRecords`
/// field holds the record array. Other top-level keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(rename = "landRecords")]
    pub land_records: Vec<LandRecord>,
}

// =============================================================================
// Statistics
// =============================================================================

/// Header statistics over the loaded record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub total_records: usize,
    pub talukas: usize,
    pub villages: usize,
    /// Earliest year present; `None` when no record carries a year.
    pub start_year: Option<i64>,
}

impl DatasetStats {
    pub fn compute(records: &[LandRecord]) -> Self {
        let talukas: HashSet<&str> = records.iter().map(|r| r.taluka.as_str()).collect();
        let villages: HashSet<&str> = records.iter().map(|r| r.village.as_str()).collect();
        Self {
            total_records: records.len(),
            talukas: talukas.len(),
            villages: villages.len(),
            start_year: records.iter().filter_map(|r| r.year).min(),
        }
    }
}

// =============================================================================
// Filter options (selection control contents)
// =============================================================================

/// Distinct values offered by the search form's selection controls.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Distinct talukas in first-seen order.
    pub talukas: Vec<String>,
    /// Distinct villages in first-seen order.
    pub villages: Vec<String>,
    /// Distinct years, newest first.
    pub years: Vec<i64>,
    /// Distinct classification types in first-seen order.
    pub types: Vec<String>,
    /// (taluka, village) pairs in first-seen order, for the dependent list.
    taluka_villages: Vec<(String, String)>,
}

impl FilterOptions {
    pub fn from_records(records: &[LandRecord]) -> Self {
        let mut years: Vec<i64> = records
            .iter()
            .filter_map(|r| r.year)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        years.sort_unstable_by(|a, b| b.cmp(a));

        let mut seen_pairs = HashSet::new();
        let taluka_villages = records
            .iter()
            .filter(|r| seen_pairs.insert((r.taluka.as_str(), r.village.as_str())))
            .map(|r| (r.taluka.clone(), r.village.clone()))
            .collect();

        Self {
            talukas: distinct(records.iter().map(|r| r.taluka.as_str())),
            villages: distinct(records.iter().map(|r| r.village.as_str())),
            years,
            types: distinct(records.iter().map(|r| r.land_type.as_str())),
            taluka_villages,
        }
    }

    /// Villages belonging to `taluka`, or every village when `taluka` is empty.
    pub fn villages_for(&self, taluka: &str) -> Vec<String> {
        if taluka.is_empty() {
            return self.villages.clone();
        }
        distinct(
            self.taluka_villages
                .iter()
                .filter(|(t, _)| t == taluka)
                .map(|(_, v)| v.as_str()),
        )
    }
}

/// Distinct non-empty values in first-seen order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_string)
        .collect()
}
