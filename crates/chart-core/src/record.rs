// File: crates/chart-core/src/record.rs
// Summary: Race record model and dataset parsing.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::DataLoadError;

/// One ascent: who rode it, when, how fast, and any doping allegation.
///
/// Field names follow the published dataset (`Year`, `Seconds`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Seconds")]
    pub seconds: f64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    /// Pre-formatted race time, `mm:ss`.
    #[serde(rename = "Time")]
    pub time: String,
    /// Allegation text; empty when there is none.
    #[serde(rename = "Doping", default)]
    pub doping: String,
    #[serde(rename = "Place", default, skip_serializing_if = "Option::is_none")]
    pub place: Option<u32>,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Record {
    pub fn new(year: i32, seconds: f64, name: impl Into<String>, nationality: impl Into<String>) -> Self {
        let seconds_i = seconds.max(0.0) as u64;
        Self {
            year,
            seconds,
            name: name.into(),
            nationality: nationality.into(),
            time: format!("{}:{:02}", seconds_i / 60, seconds_i % 60),
            doping: String::new(),
            place: None,
            url: None,
        }
    }

    pub fn with_doping(mut self, allegation: impl Into<String>) -> Self {
        self.doping = allegation.into();
        self
    }

    pub fn has_allegation(&self) -> bool {
        !self.doping.is_empty()
    }

    /// The allegation text, if any.
    pub fn allegation(&self) -> Option<&str> {
        if self.has_allegation() { Some(self.doping.as_str()) } else { None }
    }

    /// Race time as a clock reading on the reference date 1899-12-31.
    pub fn time_of_day(&self) -> Option<NaiveDateTime> {
        let base = NaiveDate::from_ymd_opt(1899, 12, 31)?.and_hms_opt(0, 0, 0)?;
        let millis = (self.seconds * 1000.0).round();
        if !millis.is_finite() { return None; }
        base.checked_add_signed(Duration::milliseconds(millis as i64))
    }
}

/// Parse the dataset JSON array.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>, DataLoadError> {
    let records: Vec<Record> = serde_json::from_slice(bytes)?;
    if records.is_empty() {
        return Err(DataLoadError::Empty);
    }
    tracing::debug!(count = records.len(), "parsed records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_empty_doping_text_is_an_allegation() {
        let clean = Record::new(1995, 2200.0, "A", "ITA");
        assert!(!clean.has_allegation());
        assert!(clean.clone().with_doping("  ").has_allegation());
        assert_eq!(clean.with_doping("EPO").allegation(), Some("EPO"));
    }

    #[test]
    fn time_of_day_adds_seconds_to_reference_date() {
        let r = Record::new(1995, 2210.0, "A", "ITA");
        let t = r.time_of_day().map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string());
        assert_eq!(t.as_deref(), Some("1899-12-31T00:36:50"));
    }

    #[test]
    fn derived_time_string() {
        assert_eq!(Record::new(2000, 2249.0, "A", "B").time, "37:29");
    }
}
