//! Date normalization and relative-time formatting.
//!
//! The backend is inconsistent about timestamps: Firestore-style objects
//! (`{ "_seconds": .. }`), ISO strings, epoch milliseconds, or nothing at
//! all. Everything is funnelled through [`normalize_date`], which never fails.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Best-effort conversion of a raw wire value into a UTC instant.
///
/// Returns `None` for missing, zero, empty or unparseable values.
pub fn normalize_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Object(map) => {
            let seconds = ["_seconds", "seconds"]
                .iter()
                .filter_map(|key| map.get(*key).and_then(Value::as_f64))
                .find(|secs| *secs != 0.0)?;
            from_epoch_millis(seconds * 1000.0)
        },
        Value::String(text) => parse_date_text(text),
        Value::Number(number) => number
            .as_f64()
            .filter(|ms| *ms != 0.0)
            .and_then(from_epoch_millis),
        _ => None,
    }
}

fn from_epoch_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(ms as i64)
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Short "time ago" label relative to `now`.
///
/// Anything a week old or older falls back to a calendar date.
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - date).num_seconds().max(0);
    match elapsed {
        s if s < MINUTE => format!("{s}s ago"),
        s if s < HOUR => format!("{}m ago", s / MINUTE),
        s if s < DAY => format!("{}h ago", s / HOUR),
        s if s < WEEK => format!("{}d ago", s / DAY),
        _ => format_date(date),
    }
}

/// Calendar date, `YYYY-MM-DD`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Current instant from epoch milliseconds, as reported by `Date.now()` in
/// the browser.
pub fn now_from_millis(ms: f64) -> DateTime<Utc> {
    from_epoch_millis(ms).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// A wire timestamp in any of the supported shapes.
///
/// Decoding never fails; unrecognized values become an empty timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamp(pub Option<DateTime<Utc>>);

impl Timestamp {
    /// Normalized instant, if any.
    pub fn get(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Relative label, empty when the timestamp is missing.
    pub fn relative(&self, now: DateTime<Utc>) -> String {
        self.0.map(|date| relative_time(date, now)).unwrap_or_default()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(date: DateTime<Utc>) -> Self {
        Timestamp(Some(date))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Timestamp(normalize_date(&raw)))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(date) => serializer.serialize_str(&date.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn firestore_seconds_object() {
        let parsed = normalize_date(&json!({ "_seconds": 1_700_000_000, "_nanoseconds": 5 }));
        assert_eq!(parsed, DateTime::from_timestamp(1_700_000_000, 0));

        let parsed = normalize_date(&json!({ "seconds": 1_700_000_000 }));
        assert_eq!(parsed, DateTime::from_timestamp(1_700_000_000, 0));
    }

    #[test]
    fn iso_strings() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        assert_eq!(normalize_date(&json!("2024-05-01T08:30:00Z")), Some(expected));
        assert_eq!(normalize_date(&json!("2024-05-01T10:30:00+02:00")), Some(expected));
        assert_eq!(normalize_date(&json!("2024-05-01T08:30:00.000")), Some(expected));
        assert_eq!(
            normalize_date(&json!("2024-05-01")),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn epoch_millis_number() {
        assert_eq!(
            normalize_date(&json!(1_700_000_000_000_i64)),
            DateTime::from_timestamp(1_700_000_000, 0)
        );
    }

    #[test]
    fn invalid_values_are_none() {
        for raw in [
            json!(null),
            json!(""),
            json!("   "),
            json!("not a date"),
            json!(0),
            json!(true),
            json!([1, 2]),
            json!({}),
            json!({ "_seconds": 0 }),
            json!({ "_seconds": "soon" }),
            json!(1e300),
            json!({ "seconds": -1e300 }),
        ] {
            assert_eq!(normalize_date(&raw), None, "{raw}");
        }
    }

    #[test]
    fn relative_time_buckets() {
        let now = fixed_now();
        let ago = |secs: i64| relative_time(now - Duration::seconds(secs), now);

        assert_eq!(ago(0), "0s ago");
        assert_eq!(ago(59), "59s ago");
        assert_eq!(ago(60), "1m ago");
        assert_eq!(ago(61), "1m ago");
        assert_eq!(ago(3599), "59m ago");
        assert_eq!(ago(3600), "1h ago");
        assert_eq!(ago(86_399), "23h ago");
        assert_eq!(ago(86_400), "1d ago");
        assert_eq!(ago(604_799), "6d ago");
        assert_eq!(ago(604_800), "2025-03-03");
    }

    #[test]
    fn future_dates_clamp_to_zero() {
        let now = fixed_now();
        assert_eq!(relative_time(now + Duration::seconds(30), now), "0s ago");
    }

    #[test]
    fn timestamp_field_never_fails_to_decode() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(default)]
            created_at: Timestamp,
        }

        let row: Row = serde_json::from_value(json!({ "created_at": { "weird": 1 } })).unwrap();
        assert_eq!(row.created_at.get(), None);
        assert_eq!(row.created_at.relative(fixed_now()), "");

        let row: Row = serde_json::from_value(json!({})).unwrap();
        assert_eq!(row.created_at, Timestamp::default());
    }
}
