//! Timestamp decoding for the encodings seen in the wild.

use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Parses `text` with each supported encoding in priority order and returns
/// the first success:
///
/// 1. `2012-04-23T18:25:43.511Z` (millisecond precision, UTC)
/// 2. `2012-04-23T18:25:43-0700`
/// 3. `2012-04-23T18:25:43` (read as UTC)
/// 4. `2012-04-23` (midnight UTC)
/// 5. `1335205543` (Unix epoch seconds)
pub fn parse_timestamp(text: &str) -> Option<OffsetDateTime> {
    parse_iso_millis_utc(text)
        .or_else(|| parse_iso_with_offset(text))
        .or_else(|| parse_iso_local(text))
        .or_else(|| parse_date(text))
        .or_else(|| parse_epoch_text(text))
}

/// Builds a UTC timestamp from a numeric epoch-seconds value, truncating
/// any fraction. The epoch itself and out-of-range values are rejected.
pub fn from_epoch_seconds(seconds: f64) -> Option<OffsetDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    let seconds = seconds as i64;
    if seconds == 0 {
        return None;
    }
    OffsetDateTime::from_unix_timestamp(seconds).ok()
}

fn parse_iso_millis_utc(text: &str) -> Option<OffsetDateTime> {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    PrimitiveDateTime::parse(text, format)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

fn parse_iso_with_offset(text: &str) -> Option<OffsetDateTime> {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
    );
    OffsetDateTime::parse(text, format).ok()
}

fn parse_iso_local(text: &str) -> Option<OffsetDateTime> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(text, format)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

fn parse_date(text: &str) -> Option<OffsetDateTime> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(text, format)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

fn parse_epoch_text(text: &str) -> Option<OffsetDateTime> {
    let seconds = text.parse::<i64>().ok()?;
    OffsetDateTime::from_unix_timestamp(seconds).ok()
}
