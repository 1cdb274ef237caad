// LandSearch - core/filter.rs
//
// Filter engine for land records.
// All specified criteria are AND-combined; empty fields impose no constraint.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{parse_year, LandRecord};

/// Search criteria built from the form each time a search runs.
///
/// An empty field means "no constraint on this field".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Exact match.
    pub taluka: String,

    /// Exact match.
    pub village: String,

    /// Case-insensitive substring match.
    pub holder_name: String,

    /// Case-insensitive substring match.
    pub survey_no: String,

    /// Exact match, compared numerically against the stored year.
    pub year: String,

    /// Exact match.
    pub land_type: String,
}

impl Criteria {
    /// Returns true if no field constrains the search.
    pub fn is_empty(&self) -> bool {
        self.taluka.is_empty()
            && self.village.is_empty()
            && self.holder_name.is_empty()
            && self.survey_no.is_empty()
            && self.year.trim().is_empty()
            && self.land_type.is_empty()
    }

    /// Check a single record against these criteria.
    pub fn matches(&self, record: &LandRecord) -> bool {
        Prepared::new(self).matches(record)
    }
}

/// Criteria with the case folding and year parsing done once per search
/// rather than once per record.
struct Prepared<'c> {
    criteria: &'c Criteria,
    holder_lower: String,
    survey_lower: String,
    year: YearConstraint,
}

enum YearConstraint {
    Any,
    Exactly(i64),
    /// Non-empty text that is not a number can never equal a stored year.
    Never,
}

impl<'c> Prepared<'c> {
    fn new(criteria: &'c Criteria) -> Self {
        let year = if criteria.year.trim().is_empty() {
            YearConstraint::Any
        } else {
            match parse_year(&criteria.year) {
                Some(y) => YearConstraint::Exactly(y),
                None => YearConstraint::Never,
            }
        };
        Self {
            criteria,
            holder_lower: criteria.holder_name.to_lowercase(),
            survey_lower: criteria.survey_no.to_lowercase(),
            year,
        }
    }

    fn matches(&self, record: &LandRecord) -> bool {
        let c = self.criteria;

        if !c.taluka.is_empty() && record.taluka != c.taluka {
            return false;
        }
        if !c.village.is_empty() && record.village != c.village {
            return false;
        }
        if !self.holder_lower.is_empty()
            && !record.holder_name.to_lowercase().contains(&self.holder_lower)
        {
            return false;
        }
        if !self.survey_lower.is_empty()
            && !record.survey_no.to_lowercase().contains(&self.survey_lower)
        {
            return false;
        }
        match self.year {
            YearConstraint::Any => {}
            YearConstraint::Exactly(y) if record.year == Some(y) => {}
            _ => return false,
        }
        if !c.land_type.is_empty() && record.land_type != c.land_type {
            return false;
        }

        true
    }
}

/// Apply criteria to a slice of records, returning indices of matching records.
///
/// Indices are in ascending order, so the relative order of `records` is
/// preserved. Returning indices avoids copying records out of the store.
pub fn apply_filters(records: &[LandRecord], criteria: &Criteria) -> Vec<usize> {
    if criteria.is_empty() {
        return (0..records.len()).collect();
    }

    let prepared = Prepared::new(criteria);

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| prepared.matches(record))
        .map(|(idx, _)| idx)
        .collect()
}

/// Like [`apply_filters`] but yields borrowed records instead of indices.
pub fn filter_records<'a>(records: &'a [LandRecord], criteria: &Criteria) -> Vec<&'a LandRecord> {
    apply_filters(records, criteria)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(
        taluka: &str,
        village: &str,
        holder: &str,
        year: i64,
        survey: &str,
        land_type: &str,
    ) -> LandRecord {
        LandRecord {
            taluka: taluka.to_string(),
            village: village.to_string(),
            holder_name: holder.to_string(),
            year: Some(year),
            survey_no: survey.to_string(),
            land_type: land_type.to_string(),
            download_link: format!("docs/{survey}.pdf"),
        }
    }

    fn sample() -> Vec<LandRecord> {
        vec![
            make_record("A", "X", "Ram", 2020, "12/1", "NA"),
            make_record("B", "Y", "Shyam", 2021, "5", "Residential"),
        ]
    }

    fn varied() -> Vec<LandRecord> {
        vec![
            make_record("Haveli", "Wagholi", "Ramesh Patil", 2020, "12/1A", "NA"),
            make_record("Haveli", "Lohegaon", "Suresh More", 2021, "45", "Residential"),
            make_record("Mulshi", "Paud", "Ramdas Jadhav", 2020, "112/3", "NA"),
            make_record("Haveli", "Wagholi", "Anita Kale", 2019, "7", "Commercial"),
            make_record("Mulshi", "Pirangut", "RAMA Shinde", 2021, "12/2", "NA"),
        ]
    }

    #[test]
    fn test_empty_criteria_returns_all() {
        let records = varied();
        let result = apply_filters(&records, &Criteria::default());
        assert_eq!(result, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_records_returns_empty() {
        let criteria = Criteria {
            taluka: "A".to_string(),
            ..Default::default()
        };
        assert!(apply_filters(&[], &criteria).is_empty());
        assert!(apply_filters(&[], &Criteria::default()).is_empty());
    }

    #[test]
    fn test_taluka_exact_match() {
        let records = sample();
        let criteria = Criteria {
            taluka: "A".to_string(),
            ..Default::default()
        };
        let result = filter_records(&records, &criteria);
        assert_eq!(result, vec![&records[0]]);
    }

    #[test]
    fn test_taluka_is_not_substring_matched() {
        let records = varied();
        let criteria = Criteria {
            taluka: "Have".to_string(),
            ..Default::default()
        };
        assert!(apply_filters(&records, &criteria).is_empty());
    }

    #[test]
    fn test_holder_name_case_insensitive_substring() {
        let records = varied();
        let criteria = Criteria {
            holder_name: "ram".to_string(),
            ..Default::default()
        };
        // Ramesh, Ramdas, RAMA
        assert_eq!(apply_filters(&records, &criteria), vec![0, 2, 4]);
    }

    #[test]
    fn test_survey_no_substring() {
        let records = varied();
        let criteria = Criteria {
            survey_no: "12/".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&records, &criteria), vec![0, 2, 4]);

        let criteria = Criteria {
            survey_no: "1a".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&records, &criteria), vec![0]);
    }

    #[test]
    fn test_year_loose_equality() {
        let records = varied();
        for text in ["2020", " 2020", "2020.0"] {
            let criteria = Criteria {
                year: text.to_string(),
                ..Default::default()
            };
            assert_eq!(apply_filters(&records, &criteria), vec![0, 2], "year {text:?}");
        }
    }

    #[test]
    fn test_non_numeric_year_matches_nothing() {
        let records = varied();
        let criteria = Criteria {
            year: "twenty".to_string(),
            ..Default::default()
        };
        assert!(apply_filters(&records, &criteria).is_empty());
    }

    #[test]
    fn test_record_without_year_fails_year_constraint() {
        let mut records = varied();
        records[0].year = None;
        let criteria = Criteria {
            year: "2020".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&records, &criteria), vec![2]);
    }

    #[test]
    fn test_combined_filters() {
        let records = varied();
        let criteria = Criteria {
            taluka: "Haveli".to_string(),
            village: "Wagholi".to_string(),
            land_type: "NA".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&records, &criteria), vec![0]);
    }

    #[test]
    fn test_result_is_order_preserving_subsequence() {
        let records = varied();
        let criteria = Criteria {
            land_type: "NA".to_string(),
            ..Default::default()
        };
        let result = apply_filters(&records, &criteria);
        assert!(result.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_partition_matches_and_violations() {
        let records = varied();
        let criteria = Criteria {
            taluka: "Haveli".to_string(),
            holder_name: "a".to_string(),
            year: "2020".to_string(),
            ..Default::default()
        };
        let matched = apply_filters(&records, &criteria);
        for (idx, record) in records.iter().enumerate() {
            let satisfies = record.taluka == criteria.taluka
                && record.holder_name.to_lowercase().contains("a")
                && record.year == Some(2020);
            assert_eq!(matched.contains(&idx), satisfies, "record {idx}");
            assert_eq!(criteria.matches(record), satisfies, "record {idx}");
        }
    }

    #[test]
    fn test_is_empty_ignores_whitespace_year() {
        let criteria = Criteria {
            year: "  ".to_string(),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        let criteria = Criteria {
            holder_name: "r".to_string(),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
    }
}
