//! Publish date parsing and display formatting
//!
//! Content dates are authored as ISO `YYYY-MM-DD` strings. Display uses a
//! single English-style format for both locales.

use chrono::NaiveDate;

use crate::{Error, Result};

/// chrono format string for card dates ("Jan 06, 2025")
const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Parse an authored ISO date, ignoring surrounding whitespace.
///
/// # Examples
///
/// ```
/// use folio_common::dates::parse_iso_date;
///
/// let date = parse_iso_date("2025-01-06 ").unwrap();
/// assert_eq!(date.to_string(), "2025-01-06");
/// assert!(parse_iso_date("06/01/2025").is_err());
/// ```
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| Error::Content(format!("invalid date '{}': {}", raw, e)))
}

/// Format a publish date for display.
///
/// The same format is used regardless of the active locale.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use folio_common::dates::format_display_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert_eq!(format_display_date(date), "Jan 06, 2025");
/// ```
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// serde adapter for ISO dates that tolerates surrounding whitespace
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw).map_err(serde::de::Error::custom)
    }
}
