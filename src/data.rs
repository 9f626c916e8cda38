//! Sales observation handling: raw record types, date parsing and series
//! normalization

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Datelike, Days, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimum number of distinct observation dates required to forecast
pub const MIN_OBSERVATIONS: usize = 3;

/// Spreadsheet serial dates count days from this epoch, so serial 2 lands on
/// 1900-01-01. Exported templates rely on the historical off-by-one.
const SERIAL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Observations dated this year or earlier are template artifacts and are
/// dropped during normalization.
pub const LEGACY_YEAR_CUTOFF: i32 = 2000;

/// A date value as it arrives from the host: already parsed, free-form text,
/// or a spreadsheet serial number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// A calendar date the host already parsed
    Date(NaiveDate),
    /// A spreadsheet serial day number
    Serial(f64),
    /// Free-form text (ISO dates, "March 1st, 2024", numeric strings)
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<f64> for DateInput {
    fn from(serial: f64) -> Self {
        DateInput::Serial(serial)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

/// A single raw sales observation supplied by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Date of the sale, in whatever shape the host has it
    pub date: DateInput,
    /// Units sold on that date
    pub quantity: f64,
}

impl SalesRecord {
    /// Create a new record from any supported date representation
    pub fn new(date: impl Into<DateInput>, quantity: f64) -> Self {
        Self {
            date: date.into(),
            quantity,
        }
    }
}

/// Cleaned, date-sorted sales history with one summed value per distinct date
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
    dropped: usize,
}

impl SalesSeries {
    /// Create a series from parallel date/value vectors.
    ///
    /// Dates must be strictly ascending and at least [`MIN_OBSERVATIONS`]
    /// long; values must match the dates in length.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ForecastError::ValidationError(format!(
                "Dates length ({}) doesn't match values length ({})",
                dates.len(),
                values.len()
            )));
        }
        if dates.len() < MIN_OBSERVATIONS {
            return Err(ForecastError::InsufficientData(format!(
                "Need at least {} observations, got {}",
                MIN_OBSERVATIONS,
                dates.len()
            )));
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ForecastError::ValidationError(
                "Dates must be strictly ascending".to_string(),
            ));
        }

        Ok(Self {
            dates,
            values,
            dropped: 0,
        })
    }

    /// Build a series from raw host records.
    ///
    /// Rows with unparseable dates, non-finite or negative quantities, or
    /// years at or before [`LEGACY_YEAR_CUTOFF`] are dropped and counted;
    /// quantities landing on the same date are summed. Fails with
    /// [`ForecastError::InsufficientData`] when fewer than
    /// [`MIN_OBSERVATIONS`] distinct dates survive.
    pub fn from_records(records: &[SalesRecord]) -> Result<Self> {
        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        let mut dropped = 0usize;

        for record in records {
            let date = match parse_date(&record.date) {
                Some(d) if d.year() > LEGACY_YEAR_CUTOFF => d,
                _ => {
                    dropped += 1;
                    continue;
                }
            };
            if !record.quantity.is_finite() || record.quantity < 0.0 {
                dropped += 1;
                continue;
            }
            *by_date.entry(date).or_insert(0.0) += record.quantity;
        }

        if dropped > 0 {
            debug!("dropped {} of {} raw sales rows", dropped, records.len());
        }

        if by_date.len() < MIN_OBSERVATIONS {
            return Err(ForecastError::InsufficientData(format!(
                "Need at least {} distinct observation dates, got {} after cleaning",
                MIN_OBSERVATIONS,
                by_date.len()
            )));
        }

        let (dates, values) = by_date.into_iter().unzip();
        Ok(Self {
            dates,
            values,
            dropped,
        })
    }

    /// Observation dates, ascending
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Observation values, aligned with `dates`
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of raw rows discarded while building this series
    pub fn dropped_rows(&self) -> usize {
        self.dropped
    }

    /// Date of the most recent observation
    pub fn last_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    /// Number of observations in the series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean of the observation values
    pub fn mean(&self) -> f64 {
        crate::stats::mean(&self.values)
    }

    /// Population standard deviation of the observation values
    pub fn std_dev(&self) -> f64 {
        crate::stats::std_dev(&self.values)
    }
}

/// Parse a raw date value into a calendar date.
///
/// Attempts, in order: an already-parsed date, ISO-like text, text with
/// ordinal day suffixes ("March 1st, 2024"), and spreadsheet serial numbers
/// (numeric values or numeric text). Returns `None` when nothing matches.
pub fn parse_date(input: &DateInput) -> Option<NaiveDate> {
    match input {
        DateInput::Date(date) => Some(*date),
        DateInput::Serial(serial) => parse_serial(*serial),
        DateInput::Text(text) => parse_text(text),
    }
}

fn parse_text(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    const ISO_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
    for format in ISO_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }

    // "March 1st, 2024" and friends: drop the ordinal suffix, retry with
    // month-name formats
    let stripped = strip_ordinal_suffixes(trimmed);
    const NAMED_FORMATS: [&str; 6] = [
        "%B %d, %Y",
        "%B %d %Y",
        "%b %d, %Y",
        "%b %d %Y",
        "%d %B %Y",
        "%d %b %Y",
    ];
    for format in NAMED_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&stripped, format) {
            return Some(date);
        }
    }

    // Numeric text is a spreadsheet serial
    trimmed.parse::<f64>().ok().and_then(parse_serial)
}

fn parse_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let (y, m, d) = SERIAL_EPOCH;
    NaiveDate::from_ymd_opt(y, m, d)?.checked_add_days(Days::new(serial as u64))
}

/// Remove `st`/`nd`/`rd`/`th` suffixes that directly follow a digit
fn strip_ordinal_suffixes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if i > 0 && i + 1 < chars.len() && chars[i - 1].is_ascii_digit() {
            let pair: String = chars[i..=i + 1].iter().collect::<String>().to_lowercase();
            let at_boundary = i + 2 >= chars.len() || !chars[i + 2].is_alphanumeric();
            if at_boundary && matches!(pair.as_str(), "st" | "nd" | "rd" | "th") {
                i += 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}
