//! # gdp-fetch
//!
//! Loads the GDP dataset over HTTP, validates it, and publishes the result
//! into application state. One request per page load: no retries, no
//! cancellation.

pub mod client;

pub use client::*;

use gdp_core::{DataError, Dataset, ValidDataset};
use thiserror::Error;

/// Default dataset URL
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

/// Query parameter that overrides the dataset URL
pub const DATA_URL_PARAM: &str = "data";

// ============================================================================
// ERRORS
// ============================================================================

/// Why the dataset could not be loaded
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded {code} {text}")]
    Status { code: u16, text: String },

    #[error("malformed dataset: {0}")]
    Parse(String),

    #[error("unusable dataset: {0}")]
    Data(#[from] DataError),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        Self::Request(e.to_string())
    }
}

/// Parse and validate a response body
pub fn parse_dataset(body: &str) -> Result<ValidDataset, FetchError> {
    let dataset: Dataset = serde_json::from_str(body)?;
    Ok(dataset.validate()?)
}

// ============================================================================
// FETCH CONFIGURATION
// ============================================================================

/// Dataset loader configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Replace the URL when an override is present and non-blank
    pub fn with_override(self, url: Option<String>) -> Self {
        match url {
            Some(u) if !u.trim().is_empty() => self.url(u.trim()),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "name": "Gross Domestic Product",
        "description": "Units: Billions of Dollars",
        "source_name": "Federal Reserve Economic Data",
        "from_date": "1947-01-01",
        "to_date": "1947-10-01",
        "data": [["1947-01-01", 243.1], ["1947-04-01", 246.3], ["1947-07-01", 250.1], ["1947-10-01", 260.3]]
    }"#;

    #[test]
    fn test_parse_dataset() {
        let dataset = parse_dataset(BODY).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.max_gdp(), 260.3);
        assert_eq!(dataset.name, "Gross Domestic Product");
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(parse_dataset("<html>"), Err(FetchError::Parse(_))));
        assert!(matches!(
            parse_dataset(r#"{"name": "GDP", "data": []}"#),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_data() {
        let body = r#"{"name": "GDP", "from_date": "1947-01-01", "to_date": "1947-01-01", "data": []}"#;
        assert!(matches!(
            parse_dataset(body),
            Err(FetchError::Data(DataError::Empty))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = FetchError::Status { code: 404, text: "Not Found".into() };
        assert_eq!(err.to_string(), "server responded 404 Not Found");

        let err = FetchError::from(DataError::Empty);
        assert_eq!(err.to_string(), "unusable dataset: dataset contains no entries");
    }

    #[test]
    fn test_fetch_config() {
        assert_eq!(FetchConfig::default().url, DEFAULT_DATA_URL);

        let config = FetchConfig::default().with_override(Some(" http://localhost:8080/gdp.json ".into()));
        assert_eq!(config.url, "http://localhost:8080/gdp.json");

        let config = FetchConfig::default().with_override(Some("   ".into()));
        assert_eq!(config.url, DEFAULT_DATA_URL);

        let config = FetchConfig::new("a").url("b").with_override(None);
        assert_eq!(config.url, "b");
    }
}
