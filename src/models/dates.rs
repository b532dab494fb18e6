//! Lenient date handling for backend payloads
//!
//! The backend stores dates as full ISO timestamps (`2025-01-10T00:00:00.000Z`)
//! but accepts plain `YYYY-MM-DD` on input. Only the calendar date matters to
//! the client.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Parse the calendar-date prefix of an ISO date or timestamp
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Deserialize an optional date; `null`, `""` and unparseable values become `None`
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_iso_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(parse_iso_date("2025-01-10"), Some(expected));
        assert_eq!(parse_iso_date("2025-01-10T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("soon"), None);
    }
}
