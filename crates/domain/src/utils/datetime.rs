//! Meeting date/time normalization.
//!
//! Turns the loosely formatted `(eventDate, eventTime)` pair produced by email
//! extraction into a single UTC instant. The grammar is deliberately small:
//! `YYYY-MM-DD` dates and `HH:MM` times with an optional `AM`/`PM` suffix.
//! Every malformed input yields `None`; callers treat that as "cannot
//! schedule" and never as a hard error.

use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, TimeZone, Utc};

use crate::constants::{DEFAULT_EVENT_DURATION_MINUTES, MAX_EVENT_YEAR, MIN_EVENT_YEAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Where the end of an event came from after [`resolve_end_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndTimeSource {
    /// The extracted end time was usable as-is.
    Supplied,
    /// No end time (or an unparseable one); start + default duration.
    Defaulted,
    /// The extracted end was at or before the start and was replaced.
    Corrected,
}

/// Normalize a `YYYY-MM-DD` date and a 12h/24h time into a UTC instant.
///
/// Returns `None` when any field is missing, non-numeric or out of range.
#[must_use]
pub fn normalize_date_time(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let date = parse_event_date(date)?;
    let (hour, minute) = parse_time_of_day(time)?;
    let naive = date.and_hms_opt(hour, minute, 0)?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Same as [`normalize_date_time`] but rendered as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn normalize_to_iso(date: &str, time: &str) -> Option<String> {
    normalize_date_time(date, time).map(format_iso_millis)
}

/// Render an instant with millisecond precision and a `Z` suffix.
#[must_use]
pub fn format_iso_millis(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Shape check for a full timestamp: a `T` separator and a UTC marker.
#[must_use]
pub fn looks_like_absolute_timestamp(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.contains('T') && (trimmed.ends_with('Z') || trimmed.ends_with("+00:00"))
}

/// Parse a full UTC timestamp such as `2024-09-15T11:00:00.000Z`.
#[must_use]
pub fn parse_absolute_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if !looks_like_absolute_timestamp(value) {
        return None;
    }
    DateTime::parse_from_rfc3339(value.trim()).ok().map(|dt| dt.with_timezone(&Utc))
}

/// Work out the end of an event that starts at `start` on `event_date`.
///
/// `end_time` may be a full timestamp or a time of day on the same date. The
/// result is always strictly after `start`.
#[must_use]
pub fn resolve_end_time(
    start: DateTime<Utc>,
    event_date: &str,
    end_time: Option<&str>,
) -> (DateTime<Utc>, EndTimeSource) {
    let default_end = start + Duration::minutes(DEFAULT_EVENT_DURATION_MINUTES);

    let candidate = end_time.map(str::trim).filter(|raw| !raw.is_empty()).and_then(|raw| {
        if looks_like_absolute_timestamp(raw) {
            parse_absolute_timestamp(raw)
        } else {
            normalize_date_time(event_date, raw)
        }
    });

    match candidate {
        Some(end) if end > start => (end, EndTimeSource::Supplied),
        Some(_) => (default_end, EndTimeSource::Corrected),
        None => (default_end, EndTimeSource::Defaulted),
    }
}

fn parse_event_date(input: &str) -> Option<NaiveDate> {
    let mut parts = input.trim().split('-');
    let year: i32 = parse_digits(parts.next()?)?;
    let month: u32 = parse_digits(parts.next()?)?;
    let day: u32 = parse_digits(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    if !(MIN_EVENT_YEAR..=MAX_EVENT_YEAR).contains(&year)
        || !(1..=12).contains(&month)
        || !(1..=31).contains(&day)
    {
        return None;
    }

    // Rejects Feb 30 and friends.
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_time_of_day(input: &str) -> Option<(u32, u32)> {
    let (clock, meridiem) = split_meridiem(input.trim());
    let (hour_str, minute_str) = clock.trim().split_once(':')?;
    if hour_str.len() > 2 || minute_str.len() != 2 {
        return None;
    }

    let hour: u32 = parse_digits(hour_str)?;
    let minute: u32 = parse_digits(minute_str)?;
    if minute > 59 {
        return None;
    }

    let hour = match meridiem {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            match (meridiem, hour) {
                (Meridiem::Pm, 1..=11) => hour + 12,
                (Meridiem::Am, 12) => 0,
                _ => hour,
            }
        }
        None if hour <= 23 => hour,
        None => return None,
    };

    Some((hour, minute))
}

fn split_meridiem(input: &str) -> (&str, Option<Meridiem>) {
    let Some(split_at) = input.len().checked_sub(2) else {
        return (input, None);
    };
    if !input.is_char_boundary(split_at) {
        return (input, None);
    }

    let (head, tail) = input.split_at(split_at);
    if tail.eq_ignore_ascii_case("am") {
        (head, Some(Meridiem::Am))
    } else if tail.eq_ignore_ascii_case("pm") {
        (head, Some(Meridiem::Pm))
    } else {
        (input, None)
    }
}

fn parse_digits<T: FromStr>(field: &str) -> Option<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Serde adapter that writes instants as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Write `dt` as a millisecond UTC string.
    ///
    /// # Errors
    /// Propagates the serializer's error.
    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_iso_millis(*dt))
    }

    /// Read any RFC 3339 timestamp and convert it to UTC.
    ///
    /// # Errors
    /// Fails when the value is not a string or not RFC 3339.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
