use super::from_string;
use crate::decode::Decodable;
use crate::error::DecodeError;
use crate::json_value::JsonValue;
use jiff::tz::TimeZone;

/// Resolves an IANA timezone name (`"America/Los_Angeles"`) against the
/// bundled timezone database. Offsets and abbreviations are not accepted.
impl Decodable for TimeZone {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        from_string(value, "TimeZone", TimeZone::get)
    }
}
