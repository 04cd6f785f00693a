use super::from_string;
use crate::decode::Decodable;
use crate::error::DecodeError;
use crate::json_value::JsonValue;
use chrono::{DateTime, FixedOffset, Utc};

/// The single accepted date layout, `yyyy-MM-dd'T'HH:mm:ss.SSSZ`, e.g.
/// `2015-09-01T01:02:03.000+0000`.
///
/// Other ISO-8601 layouts are rejected.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

impl Decodable for DateTime<FixedOffset> {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        from_string(value, "DateTime", |s| {
            if !has_millis_and_offset(s) {
                return Err("expected yyyy-MM-dd'T'HH:mm:ss.SSSZ".to_string());
            }
            DateTime::parse_from_str(s, DATE_FORMAT).map_err(|e| e.to_string())
        })
    }
}

// chrono treats the fraction as optional when parsing; the layout does not
fn has_millis_and_offset(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.get(19) == Some(&b'.')
        && bytes
            .get(20..23)
            .is_some_and(|digits| digits.iter().all(u8::is_ascii_digit))
        && matches!(bytes.get(23), Some(b'+' | b'-'))
}

impl Decodable for DateTime<Utc> {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        DateTime::<FixedOffset>::decode(value).map(|dt| dt.with_timezone(&Utc))
    }
}
