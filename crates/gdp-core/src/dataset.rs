//! Quarterly GDP dataset types

use crate::{BillionsFormatter, DataError, DataResult, ValueFormatter};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Date format used throughout the source document
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// RAW DOCUMENT
// ============================================================================

/// One `[date, value]` pair as it appears in the source JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpEntry(pub String, pub f64);

impl GdpEntry {
    pub fn new(date: impl Into<String>, gdp: f64) -> Self {
        Self(date.into(), gdp)
    }

    pub fn date(&self) -> &str {
        &self.0
    }

    pub fn gdp(&self) -> f64 {
        self.1
    }
}

/// Fetched GDP document. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Chart title
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source_name: String,
    pub from_date: String,
    pub to_date: String,
    /// Chronologically ordered entries
    pub data: Vec<GdpEntry>,
}

impl Dataset {
    /// Parse dates, check values, and freeze into a chartable dataset
    pub fn validate(self) -> DataResult<ValidDataset> {
        if self.data.is_empty() {
            return Err(DataError::Empty);
        }

        let from = parse_date("from_date", &self.from_date)?;
        let to = parse_date("to_date", &self.to_date)?;
        if from > to {
            return Err(DataError::InvertedRange {
                from: self.from_date,
                to: self.to_date,
            });
        }

        let mut points = Vec::with_capacity(self.data.len());
        for (index, GdpEntry(date, gdp)) in self.data.into_iter().enumerate() {
            if !gdp.is_finite() || gdp < 0.0 {
                return Err(DataError::InvalidValue { index, value: gdp });
            }
            let parsed = parse_date(&format!("data[{}]", index), &date)?;
            points.push(QuarterlyPoint {
                index,
                date,
                parsed,
                gdp,
            });
        }

        let max_gdp = points.iter().map(|p| p.gdp).fold(0.0_f64, f64::max);

        Ok(ValidDataset {
            name: self.name,
            description: self.description,
            source_name: self.source_name,
            from,
            to,
            points,
            max_gdp,
        })
    }
}

fn parse_date(field: &str, value: &str) -> DataResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DataError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Midnight UTC of `date` in Unix milliseconds
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

// ============================================================================
// VALIDATED DATASET
// ============================================================================

/// Single bar's worth of data
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterlyPoint {
    /// Position in the source sequence (0-based)
    pub index: usize,
    /// Source date string, kept verbatim for labels and `data-date`
    pub date: String,
    pub parsed: NaiveDate,
    /// GDP in billions of dollars
    pub gdp: f64,
}

impl QuarterlyPoint {
    pub fn timestamp(&self) -> i64 {
        date_to_millis(self.parsed)
    }

    /// `"<Year> Q<n>"`
    pub fn quarter_label(&self) -> String {
        quarter_label(&self.date)
    }

    /// `"$<value> B"`
    pub fn value_label(&self) -> String {
        self.value_label_with(&BillionsFormatter)
    }

    pub fn value_label_with<F: ValueFormatter>(&self, formatter: &F) -> String {
        formatter.format(self.gdp)
    }
}

/// Non-empty, fully parsed dataset ready for charting
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDataset {
    pub name: String,
    pub description: String,
    pub source_name: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub points: Vec<QuarterlyPoint>,
    max_gdp: f64,
}

impl ValidDataset {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest GDP value (upper bound of the value domain)
    pub fn max_gdp(&self) -> f64 {
        self.max_gdp
    }

    /// Declared time range in Unix milliseconds
    pub fn time_range(&self) -> (i64, i64) {
        (date_to_millis(self.from), date_to_millis(self.to))
    }

    pub fn source_label(&self) -> String {
        format!("SOURCE: {}", self.source_name)
    }
}

// ============================================================================
// QUARTER LABELS
// ============================================================================

/// Label a quarterly date string as `"<Year> Q<n>"`.
///
/// Only quarter-start months are recognised; every other month maps to Q4,
/// which holds because the source data is strictly quarterly.
pub fn quarter_label(date: &str) -> String {
    let year = date.get(0..4).unwrap_or(date);
    let quarter = match date.get(5..7) {
        Some("01") => 1,
        Some("04") => 2,
        Some("07") => 3,
        _ => 4,
    };
    format!("{} Q{}", year, quarter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset {
            name: "Gross Domestic Product".into(),
            description: "Units: Billions of Dollars".into(),
            source_name: "Federal Reserve Economic Data".into(),
            from_date: "2015-01-01".into(),
            to_date: "2015-10-01".into(),
            data: vec![
                GdpEntry::new("2015-01-01", 100.0),
                GdpEntry::new("2015-04-01", 200.0),
                GdpEntry::new("2015-07-01", 150.0),
                GdpEntry::new("2015-10-01", 300.0),
            ],
        }
    }

    #[test]
    fn test_quarter_labels() {
        assert_eq!(quarter_label("2015-01-01"), "2015 Q1");
        assert_eq!(quarter_label("2015-04-01"), "2015 Q2");
        assert_eq!(quarter_label("2015-07-01"), "2015 Q3");
        assert_eq!(quarter_label("2015-10-01"), "2015 Q4");
        assert_eq!(quarter_label("2015-12-01"), "2015 Q4");
    }

    #[test]
    fn test_validate_sample() {
        let valid = sample().validate().unwrap();
        assert_eq!(valid.len(), 4);
        assert_eq!(valid.max_gdp(), 300.0);
        assert_eq!(valid.points[2].index, 2);
        assert_eq!(valid.points[2].date, "2015-07-01");
        assert_eq!(valid.source_label(), "SOURCE: Federal Reserve Economic Data");

        let (from, to) = valid.time_range();
        assert_eq!(from, 1_420_070_400_000);
        assert!(to > from);
    }

    #[test]
    fn test_point_labels() {
        let valid = sample().validate().unwrap();
        let point = &valid.points[1];
        assert_eq!(point.quarter_label(), "2015 Q2");
        assert_eq!(point.value_label(), "$200 B");
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let mut ds = sample();
        ds.data.clear();
        assert_eq!(ds.validate(), Err(DataError::Empty));
    }

    #[test]
    fn test_bad_dates_rejected() {
        let mut ds = sample();
        ds.data[1] = GdpEntry::new("2015/04/01", 200.0);
        assert!(matches!(
            ds.validate(),
            Err(DataError::InvalidDate { field, .. }) if field == "data[1]"
        ));

        let mut ds = sample();
        ds.from_date = "2016-01-01".into();
        assert!(matches!(ds.validate(), Err(DataError::InvertedRange { .. })));
    }

    #[test]
    fn test_bad_values_rejected() {
        let mut ds = sample();
        ds.data[3] = GdpEntry::new("2015-10-01", f64::NAN);
        assert!(matches!(
            ds.validate(),
            Err(DataError::InvalidValue { index: 3, .. })
        ));

        let mut ds = sample();
        ds.data[0] = GdpEntry::new("2015-01-01", -1.0);
        assert!(matches!(
            ds.validate(),
            Err(DataError::InvalidValue { index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_source_document() {
        let json = r#"{
            "errors": {},
            "id": 120140,
            "source_name": "Federal Reserve Economic Data",
            "source_code": "FRED",
            "code": "GDP",
            "name": "Gross Domestic Product, 1st Quarter of 1947 through 4th Quarter of 2015",
            "frequency": "quarterly",
            "description": "Units: Billions of Dollars",
            "from_date": "1947-01-01",
            "to_date": "2015-07-01",
            "data": [["1947-01-01", 243.1], ["1947-04-01", 246.3], ["2015-07-01", 18064.7]]
        }"#;

        let ds: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(ds.data.len(), 3);
        assert_eq!(ds.data[0].date(), "1947-01-01");
        assert_eq!(ds.data[2].gdp(), 18064.7);

        let valid = ds.validate().unwrap();
        assert_eq!(valid.max_gdp(), 18064.7);
        assert_eq!(valid.points[0].quarter_label(), "1947 Q1");
    }
}
