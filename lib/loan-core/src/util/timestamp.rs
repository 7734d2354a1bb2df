//! Server timestamps come in several shapes: full RFC 3339, naive date-times without an
//! offset and plain calendar dates (e.g. loan due dates). Naive values are taken as UTC.

use serde::{Deserialize, Deserializer};
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const NAIVE_DATE_TIME: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const NAIVE_DATE_TIME_FRACTION: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
const DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn parse_lenient(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();

    if let Ok(parsed) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(parsed);
    }

    [NAIVE_DATE_TIME_FRACTION, NAIVE_DATE_TIME]
        .into_iter()
        .find_map(|format| PrimitiveDateTime::parse(value, format).ok())
        .map(PrimitiveDateTime::assume_utc)
        .or_else(|| {
            Date::parse(value, DATE)
                .ok()
                .map(|date| date.midnight().assume_utc())
        })
}

/// Deserializes an optional timestamp, unparseable values are treated as absent.
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(|value| {
        let parsed = parse_lenient(value);
        if parsed.is_none() {
            tracing::warn!(%value, "Ignoring unparseable timestamp");
        }
        parsed
    }))
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(
            parse_lenient("2024-05-01T10:20:30Z"),
            Some(datetime!(2024-05-01 10:20:30 UTC))
        );
        assert_eq!(
            parse_lenient("2024-05-01T10:20:30+02:00"),
            Some(datetime!(2024-05-01 08:20:30 UTC))
        );
    }

    #[test]
    fn test_parse_naive_date_time_as_utc() {
        assert_eq!(
            parse_lenient("2024-05-01T10:20:30"),
            Some(datetime!(2024-05-01 10:20:30 UTC))
        );
        assert_eq!(
            parse_lenient("2024-05-01T10:20:30.5"),
            Some(datetime!(2024-05-01 10:20:30.5 UTC))
        );
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(
            parse_lenient("2025-01-01"),
            Some(datetime!(2025-01-01 00:00 UTC))
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_lenient("tomorrow"), None);
    }
}
