use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

use crate::errors::RankingError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `created-at` value into its calendar date.
///
/// The cache stores plain `YYYY-MM-DD`; full timestamps are accepted too.
pub fn parse_date(value: &str) -> Result<NaiveDate, RankingError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }

    Err(RankingError::InvalidDate {
        value: value.to_string(),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter for `created-at` fields.
pub mod flexible {
    use super::*;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_date("2024-01-08").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    }

    #[test]
    fn test_parse_timestamps_keep_local_calendar_date() {
        let expected = NaiveDate::from_ymd_opt(2016, 3, 1).unwrap();
        assert_eq!(parse_date("2016-03-01T18:22:11.123-05:00").unwrap(), expected);
        assert_eq!(parse_date("2016-03-01T18:22:11").unwrap(), expected);
        assert_eq!(parse_date("2016-03-01T18:22:11.5").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_date("yesterday"),
            Err(RankingError::InvalidDate {
                value: "yesterday".to_string()
            })
        );
    }
}
